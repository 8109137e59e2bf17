//! 成本彙總

use rust_decimal::Decimal;
use serde::Serialize;

use crate::row::ComputedRow;

/// 全部物料的彙總
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BomSummary {
    /// 採購總資金投入
    pub total_cost: Decimal,

    /// 剩餘庫存價值（沉澱資金）
    pub inventory_value: Decimal,

    /// 採購物料總件數
    pub total_items: Decimal,
}

impl BomSummary {
    /// 由計算列彙總（超出範圍時取飽和值）
    pub fn from_rows(rows: &[ComputedRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            total_cost: acc.total_cost.saturating_add(row.total_cost),
            inventory_value: acc.inventory_value.saturating_add(row.wasted_cost),
            total_items: acc.total_items.saturating_add(row.order_qty),
        })
    }

    /// 本次生產實際消耗的物料成本
    pub fn effective_cost(&self) -> Decimal {
        self.total_cost.saturating_sub(self.inventory_value)
    }

    /// 剩餘庫存佔總投入的百分比（總投入為 0 時為 0）
    pub fn inventory_percentage(&self) -> Decimal {
        if self.total_cost <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        self.inventory_value
            .checked_div(self.total_cost)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(if self.inventory_value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}
