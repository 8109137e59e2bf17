//! 採購參數與計算配置

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{catalog, ComponentId};
use crate::BomError;

/// 單一物料的採購參數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSetting {
    /// 最小訂購量（訂購量必須為其整數倍）
    pub moq: Decimal,

    /// 單價
    pub cost: Decimal,
}

impl ComponentSetting {
    pub fn new(moq: Decimal, cost: Decimal) -> Self {
        Self { moq, cost }
    }

    /// 建構器模式：設置最小訂購量
    pub fn with_moq(mut self, moq: Decimal) -> Self {
        self.moq = moq;
        self
    }

    /// 建構器模式：設置單價
    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = cost;
        self
    }

    pub fn get(&self, field: SettingField) -> Decimal {
        match field {
            SettingField::Moq => self.moq,
            SettingField::Cost => self.cost,
        }
    }
}

/// 可編輯的採購參數欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingField {
    Moq,
    Cost,
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingField::Moq => f.write_str("moq"),
            SettingField::Cost => f.write_str("cost"),
        }
    }
}

impl FromStr for SettingField {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "moq" => Ok(SettingField::Moq),
            "cost" => Ok(SettingField::Cost),
            other => Err(BomError::InvalidOverride(format!("未知的參數欄位: {}", other))),
        }
    }
}

/// 全部物料的採購參數
///
/// 每個目錄物料恰好一筆，初始值取自目錄預設。更新只替換單一物料的單一欄位，
/// 其他物料的參數保持不變。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSettings {
    entries: BTreeMap<ComponentId, ComponentSetting>,
}

impl ComponentSettings {
    /// 以目錄預設值初始化
    pub fn from_catalog() -> Self {
        let entries = catalog()
            .iter()
            .map(|def| (def.id, def.default_setting()))
            .collect();
        Self { entries }
    }

    /// 取得物料參數（缺少時回退到目錄預設）
    pub fn get(&self, id: ComponentId) -> ComponentSetting {
        self.entries
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.definition().default_setting())
    }

    /// 替換單一物料的單一欄位
    pub fn update(&mut self, id: ComponentId, field: SettingField, value: Decimal) {
        let current = self.get(id);
        let updated = match field {
            SettingField::Moq => current.with_moq(value),
            SettingField::Cost => current.with_cost(value),
        };
        self.entries.insert(id, updated);
    }

    /// 回傳只修改了單一欄位的新副本
    pub fn with_field(&self, id: ComponentId, field: SettingField, value: Decimal) -> Self {
        let mut next = self.clone();
        next.update(id, field, value);
        next
    }

    /// 依目錄順序列出
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, ComponentSetting)> + '_ {
        self.entries.iter().map(|(id, setting)| (*id, *setting))
    }
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self::from_catalog()
    }
}

/// 最小訂購量不為正數時的處理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoqPolicy {
    /// 不做批量取整，按實際需求訂購（剩餘為 0）
    #[default]
    LotForLot,

    /// 舊版行為：視為 1 批，訂購量等於 MOQ 本身，剩餘可能為負
    SingleBatch,
}

/// 計算配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// MOQ ≤ 0 時的處理策略
    pub non_positive_moq: MoqPolicy,

    /// 剩餘量超過 MOQ 的此比例時標記為囤貨過多
    pub overstock_ratio: Decimal,
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self {
            non_positive_moq: MoqPolicy::LotForLot,
            overstock_ratio: dec!(0.5),
        }
    }

    /// 建構器模式：設置 MOQ 策略
    pub fn with_non_positive_moq(mut self, policy: MoqPolicy) -> Self {
        self.non_positive_moq = policy;
        self
    }

    /// 建構器模式：設置囤貨比例門檻
    pub fn with_overstock_ratio(mut self, ratio: Decimal) -> Self {
        self.overstock_ratio = ratio;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
