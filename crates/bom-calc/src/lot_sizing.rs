//! MOQ 批量取整

use bom_core::MoqPolicy;
use rust_decimal::Decimal;

/// 批量取整結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotSize {
    /// 批數
    pub batches: Decimal,
    /// 訂購量
    pub order_qty: Decimal,
    /// 批數或訂購量超出 `Decimal` 範圍而取飽和值
    pub overflowed: bool,
}

impl LotSize {
    fn none() -> Self {
        Self::single(Decimal::ZERO, Decimal::ZERO)
    }

    fn single(batches: Decimal, order_qty: Decimal) -> Self {
        Self {
            batches,
            order_qty,
            overflowed: false,
        }
    }
}

/// 批量規則計算器
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 依 MOQ 將需求量向上取整為整數批
    ///
    /// 需求為 0 時不下單。MOQ ≤ 0 時依 `policy` 處理。
    pub fn apply(total_needed: Decimal, moq: Decimal, policy: MoqPolicy) -> LotSize {
        if total_needed <= Decimal::ZERO {
            return LotSize::none();
        }

        if moq > Decimal::ZERO {
            return Self::round_up_to_multiple(total_needed, moq);
        }

        match policy {
            MoqPolicy::LotForLot => LotSize::single(Decimal::ONE, total_needed),
            MoqPolicy::SingleBatch => LotSize::single(Decimal::ONE, moq),
        }
    }

    /// 調整到 MOQ 的倍數（整除時不變）
    ///
    /// 極小的 MOQ 可能讓餘數或批數無法表示：訂購量退回實際需求，
    /// 批數取 `Decimal::MAX`，並標記 `overflowed`。
    fn round_up_to_multiple(quantity: Decimal, moq: Decimal) -> LotSize {
        let order_qty = match quantity.checked_rem(moq) {
            Some(remainder) if remainder > Decimal::ZERO => (quantity - remainder).checked_add(moq),
            Some(_) => Some(quantity),
            None => None,
        };

        match order_qty.and_then(|order_qty| Some((order_qty, order_qty.checked_div(moq)?))) {
            Some((order_qty, batches)) => LotSize::single(batches.normalize(), order_qty),
            None => LotSize {
                batches: Decimal::MAX,
                order_qty: order_qty.unwrap_or(quantity),
                overflowed: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(1000), dec!(1000), dec!(1))]
    #[case(dec!(1001), dec!(1000), dec!(2000), dec!(2))]
    #[case(dec!(24000), dec!(5000), dec!(25000), dec!(5))]
    #[case(dec!(1), dec!(500), dec!(500), dec!(1))]
    fn test_round_up_to_moq(
        #[case] needed: Decimal,
        #[case] moq: Decimal,
        #[case] order_qty: Decimal,
        #[case] batches: Decimal,
    ) {
        let lot = LotSizingCalculator::apply(needed, moq, MoqPolicy::LotForLot);

        assert_eq!(lot.order_qty, order_qty);
        assert_eq!(lot.batches, batches);
    }

    #[test]
    fn test_fractional_moq() {
        // 0.3 × 4 = 1.2 ≥ 1
        let lot = LotSizingCalculator::apply(dec!(1), dec!(0.3), MoqPolicy::LotForLot);

        assert_eq!(lot.order_qty, dec!(1.2));
        assert_eq!(lot.batches, dec!(4));
    }

    #[rstest]
    #[case(MoqPolicy::LotForLot)]
    #[case(MoqPolicy::SingleBatch)]
    fn test_zero_need_orders_nothing(#[case] policy: MoqPolicy) {
        for moq in [dec!(0), dec!(-5), dec!(1000)] {
            let lot = LotSizingCalculator::apply(Decimal::ZERO, moq, policy);
            assert_eq!(lot.order_qty, Decimal::ZERO);
            assert_eq!(lot.batches, Decimal::ZERO);
        }
    }

    #[test]
    fn test_non_positive_moq_lot_for_lot() {
        let lot = LotSizingCalculator::apply(dec!(1234), Decimal::ZERO, MoqPolicy::LotForLot);

        assert_eq!(lot.order_qty, dec!(1234));
        assert_eq!(lot.batches, Decimal::ONE);
    }

    #[test]
    fn test_non_positive_moq_single_batch() {
        let lot = LotSizingCalculator::apply(dec!(1234), dec!(-10), MoqPolicy::SingleBatch);

        // 舊版行為：訂購量即為 MOQ 本身
        assert_eq!(lot.order_qty, dec!(-10));
        assert_eq!(lot.batches, Decimal::ONE);
    }

    #[test]
    fn test_tiny_moq_saturates_batches() {
        // 24000 / 1e-25 超出 Decimal 範圍
        let lot = LotSizingCalculator::apply(
            dec!(24000),
            dec!(0.0000000000000000000000001),
            MoqPolicy::LotForLot,
        );

        assert!(lot.overflowed);
        assert_eq!(lot.batches, Decimal::MAX);
        assert_eq!(lot.order_qty, dec!(24000));
    }

    #[test]
    fn test_normal_moq_is_not_flagged() {
        let lot = LotSizingCalculator::apply(dec!(24000), dec!(5000), MoqPolicy::LotForLot);

        assert!(!lot.overflowed);
    }
}
