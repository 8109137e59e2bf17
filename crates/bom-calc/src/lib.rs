//! # BOM Calculation Engine
//!
//! 由生產計劃與採購參數計算物料需求、MOQ 採購量、剩餘庫存與成本

pub mod calculator;
pub mod lot_sizing;
pub mod row;
pub mod summary;

// Re-export 主要類型
pub use calculator::BomCalculator;
pub use row::ComputedRow;
pub use summary::BomSummary;

use bom_core::{ComponentDefinition, ComponentId, ComponentSettings, ProductionPlan};
use serde::Serialize;

/// BOM 計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomResult {
    /// 各物料計算列（目錄順序）
    pub rows: Vec<ComputedRow>,

    /// 彙總
    pub summary: BomSummary,

    /// 警告信息
    pub warnings: Vec<BomWarning>,
}

impl BomResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: BomWarning) {
        self.warnings.push(warning);
    }

    /// 依物料查找計算列
    pub fn row(&self, id: ComponentId) -> Option<&ComputedRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// BOM 警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BomWarning {
    pub component_id: ComponentId,
    pub message: String,
    pub severity: WarningSeverity,
}

impl BomWarning {
    pub fn new(component_id: ComponentId, message: String, severity: WarningSeverity) -> Self {
        Self {
            component_id,
            message,
            severity,
        }
    }

    pub fn info(component_id: ComponentId, message: String) -> Self {
        Self::new(component_id, message, WarningSeverity::Info)
    }

    pub fn warning(component_id: ComponentId, message: String) -> Self {
        Self::new(component_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}

/// 以預設配置計算單一物料
pub fn compute_row(
    component: &ComponentDefinition,
    plan: &ProductionPlan,
    settings: &ComponentSettings,
) -> ComputedRow {
    BomCalculator::default().compute_row(component, plan, settings)
}

/// 以預設配置計算全部物料（目錄順序）
pub fn compute_rows(plan: &ProductionPlan, settings: &ComponentSettings) -> Vec<ComputedRow> {
    BomCalculator::default().compute_rows(plan, settings)
}

/// 以預設配置計算彙總
pub fn compute_summary(plan: &ProductionPlan, settings: &ComponentSettings) -> BomSummary {
    BomCalculator::default().compute_summary(plan, settings)
}
