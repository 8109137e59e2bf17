//! 剩餘庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ComponentId;

/// 因 MOQ 取整而多訂、本次生產用不到的物料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leftover {
    /// 物料ID
    pub component_id: ComponentId,

    /// 剩餘數量（訂購量 - 需求量）
    pub quantity: Decimal,

    /// 單價
    pub unit_cost: Decimal,
}

impl Leftover {
    pub fn new(component_id: ComponentId, order_qty: Decimal, needed: Decimal, unit_cost: Decimal) -> Self {
        Self {
            component_id,
            quantity: order_qty.saturating_sub(needed),
            unit_cost,
        }
    }

    /// 沉澱資金（剩餘數量 × 單價），超出範圍時取飽和值
    pub fn value(&self) -> Decimal {
        self.quantity.saturating_mul(self.unit_cost)
    }

    /// 剩餘量是否超過 MOQ 的指定比例
    pub fn is_overstock(&self, moq: Decimal, ratio: Decimal) -> bool {
        self.quantity > Decimal::ZERO && self.quantity > moq.saturating_mul(ratio)
    }
}
