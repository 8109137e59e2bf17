//! # BOM Core
//!
//! 物料目錄、生產計劃與採購參數的核心資料模型

pub mod catalog;
pub mod config;
pub mod inventory;
pub mod plan;

// Re-export 主要類型
pub use catalog::{BundleType, Category, ComponentDefinition, ComponentId, RatioTable};
pub use config::{ComponentSetting, ComponentSettings, MoqPolicy, PlannerConfig, SettingField};
pub use inventory::Leftover;
pub use plan::{PlanField, ProductionPlan};

use rust_decimal::Decimal;

/// BOM 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("未知的物料: {0}")]
    UnknownComponent(String),

    #[error("無效的數值: {0}")]
    InvalidNumber(String),

    #[error("物料 {id} 的 {field} 不可為負數: {value}")]
    NegativeSetting {
        id: ComponentId,
        field: SettingField,
        value: Decimal,
    },

    #[error("無效的覆寫參數: {0}")]
    InvalidOverride(String),
}

pub type Result<T> = std::result::Result<T, BomError>;
