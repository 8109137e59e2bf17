//! 生產計劃模型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::BundleType;
use crate::BomError;

/// 生產計劃欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanField {
    /// 8片裝禮盒數量
    Set8,
    /// 2片裝小折盒數量
    Set2,
}

impl PlanField {
    /// 對應的成品類型
    pub fn bundle(&self) -> BundleType {
        match self {
            PlanField::Set8 => BundleType::Set8,
            PlanField::Set2 => BundleType::Set2,
        }
    }
}

impl fmt::Display for PlanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanField::Set8 => f.write_str("set8"),
            PlanField::Set2 => f.write_str("set2"),
        }
    }
}

impl FromStr for PlanField {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "set8" => Ok(PlanField::Set8),
            "set2" => Ok(PlanField::Set2),
            other => Err(BomError::InvalidOverride(format!("未知的計劃欄位: {}", other))),
        }
    }
}

/// 生產計劃（兩種成品的計劃數量）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 8片裝禮盒（A 型）計劃數量
    pub set8: u64,

    /// 2片裝小折盒（B 型）計劃數量
    pub set2: u64,
}

impl ProductionPlan {
    /// 創建新的生產計劃
    pub fn new(set8: u64, set2: u64) -> Self {
        Self { set8, set2 }
    }

    /// 建構器模式：設置 8片裝數量
    pub fn with_set8(mut self, set8: u64) -> Self {
        self.set8 = set8;
        self
    }

    /// 建構器模式：設置 2片裝數量
    pub fn with_set2(mut self, set2: u64) -> Self {
        self.set2 = set2;
        self
    }

    /// 讀取單一欄位
    pub fn get(&self, field: PlanField) -> u64 {
        match field {
            PlanField::Set8 => self.set8,
            PlanField::Set2 => self.set2,
        }
    }

    /// 更新單一欄位
    pub fn set(&mut self, field: PlanField, value: u64) {
        match field {
            PlanField::Set8 => self.set8 = value,
            PlanField::Set2 => self.set2 = value,
        }
    }

    /// 某成品類型的計劃數量
    pub fn quantity_of(&self, bundle: BundleType) -> u64 {
        match bundle {
            BundleType::Set8 => self.set8,
            BundleType::Set2 => self.set2,
        }
    }

    /// 是否沒有任何生產
    pub fn is_empty(&self) -> bool {
        self.set8 == 0 && self.set2 == 0
    }
}
