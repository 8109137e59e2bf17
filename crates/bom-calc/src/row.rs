//! 單一物料的計算結果

use bom_core::{Category, ComponentId, Leftover};
use rust_decimal::Decimal;
use serde::Serialize;

/// BOM 計算列（每次重新計算，不保存）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedRow {
    pub id: ComponentId,
    pub name: &'static str,
    pub category: Category,

    /// 每套 8片裝用量
    pub qty_per_a: u32,

    /// 每套 2片裝用量
    pub qty_per_b: u32,

    /// 組裝總需求量
    pub total_needed: Decimal,

    /// 生效的最小訂購量
    pub moq: Decimal,

    /// 生效的單價
    pub cost: Decimal,

    /// 建議採購量
    pub order_qty: Decimal,

    /// 剩餘庫存
    pub leftover: Decimal,

    /// 採購成本
    pub total_cost: Decimal,

    /// 剩餘庫存價值
    pub wasted_cost: Decimal,

    /// 有數值超出 `Decimal` 範圍，已取飽和值
    pub overflowed: bool,
}

impl ComputedRow {
    /// 剩餘庫存記錄
    pub fn leftover_stock(&self) -> Leftover {
        Leftover::new(self.id, self.order_qty, self.total_needed, self.cost)
    }

    /// 剩餘量是否超過 MOQ 的指定比例
    pub fn is_overstocked(&self, ratio: Decimal) -> bool {
        self.leftover_stock().is_overstock(self.moq, ratio)
    }
}
