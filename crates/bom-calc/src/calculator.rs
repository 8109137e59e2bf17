//! BOM 主計算器

use bom_core::catalog::{catalog, ratio};
use bom_core::{
    BundleType, ComponentDefinition, ComponentSettings, MoqPolicy, PlannerConfig, ProductionPlan,
};
use rust_decimal::Decimal;

use crate::lot_sizing::LotSizingCalculator;
use crate::{BomResult, BomSummary, BomWarning, ComputedRow};

/// BOM 計算器
///
/// 不持有任何計劃狀態，每次呼叫都從輸入完整重算。
#[derive(Debug, Clone, Default)]
pub struct BomCalculator {
    config: PlannerConfig,
}

impl BomCalculator {
    /// 創建新的 BOM 計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 獲取計算配置
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 單物料計算
    pub fn compute_row(
        &self,
        component: &ComponentDefinition,
        plan: &ProductionPlan,
        settings: &ComponentSettings,
    ) -> ComputedRow {
        let qty_per_a = ratio(BundleType::Set8, component.id);
        let qty_per_b = ratio(BundleType::Set2, component.id);

        // u64 × u32 的兩項和遠小於 Decimal::MAX
        let total_needed = Decimal::from(plan.set8) * Decimal::from(qty_per_a)
            + Decimal::from(plan.set2) * Decimal::from(qty_per_b);

        let setting = settings.get(component.id);
        let lot = LotSizingCalculator::apply(total_needed, setting.moq, self.config.non_positive_moq);

        let order_qty = lot.order_qty;
        let (leftover, leftover_overflow) =
            saturating(order_qty.checked_sub(total_needed), || order_qty.saturating_sub(total_needed));
        let (total_cost, cost_overflow) =
            saturating(order_qty.checked_mul(setting.cost), || order_qty.saturating_mul(setting.cost));
        let (wasted_cost, wasted_overflow) =
            saturating(leftover.checked_mul(setting.cost), || leftover.saturating_mul(setting.cost));
        let overflowed = lot.overflowed || leftover_overflow || cost_overflow || wasted_overflow;

        if overflowed {
            tracing::warn!(
                "物料 {} 數值超出範圍：MOQ {}，單價 {}",
                component.id,
                setting.moq,
                setting.cost
            );
        }

        tracing::debug!(
            "物料 {}: 需求 {}, MOQ {}, 批數 {}, 採購 {}, 剩餘 {}",
            component.id,
            total_needed,
            setting.moq,
            lot.batches,
            order_qty,
            leftover
        );

        ComputedRow {
            id: component.id,
            name: component.name,
            category: component.category,
            qty_per_a,
            qty_per_b,
            total_needed,
            moq: setting.moq,
            cost: setting.cost,
            order_qty,
            leftover,
            total_cost,
            wasted_cost,
            overflowed,
        }
    }

    /// 全部物料計算（目錄順序）
    pub fn compute_rows(
        &self,
        plan: &ProductionPlan,
        settings: &ComponentSettings,
    ) -> Vec<ComputedRow> {
        catalog()
            .iter()
            .map(|component| self.compute_row(component, plan, settings))
            .collect()
    }

    /// 彙總計算
    pub fn compute_summary(
        &self,
        plan: &ProductionPlan,
        settings: &ComponentSettings,
    ) -> BomSummary {
        BomSummary::from_rows(&self.compute_rows(plan, settings))
    }

    /// 主計算入口：計算列、彙總與警告
    pub fn calculate(&self, plan: &ProductionPlan, settings: &ComponentSettings) -> BomResult {
        tracing::info!("開始 BOM 計算：8片裝 {} 套，2片裝 {} 套", plan.set8, plan.set2);

        let rows = self.compute_rows(plan, settings);
        let summary = BomSummary::from_rows(&rows);

        let mut result = BomResult {
            rows,
            summary,
            warnings: Vec::new(),
        };

        for warning in self.collect_warnings(&result.rows) {
            result.add_warning(warning);
        }

        tracing::info!(
            "BOM 計算完成：總投入 {}，剩餘庫存價值 {}，警告 {} 筆",
            result.summary.total_cost,
            result.summary.inventory_value,
            result.warnings.len()
        );

        result
    }

    fn collect_warnings(&self, rows: &[ComputedRow]) -> Vec<BomWarning> {
        let mut warnings = Vec::new();

        for row in rows {
            if row.overflowed {
                warnings.push(BomWarning::warning(
                    row.id,
                    format!("MOQ {} 或單價 {} 使結果超出可計算範圍，已取上限", row.moq, row.cost),
                ));
            }

            if row.total_needed > Decimal::ZERO && row.moq <= Decimal::ZERO {
                let handling = match self.config.non_positive_moq {
                    MoqPolicy::LotForLot => "按實際需求訂購",
                    MoqPolicy::SingleBatch => "訂購量等於 MOQ",
                };
                warnings.push(BomWarning::warning(
                    row.id,
                    format!("MOQ 為 {}，不做批量取整（{}）", row.moq, handling),
                ));
            }

            if row.is_overstocked(self.config.overstock_ratio) {
                warnings.push(BomWarning::info(
                    row.id,
                    format!("囤貨多：剩餘 {}，超過 MOQ {} 的比例門檻", row.leftover, row.moq),
                ));
            }
        }

        warnings
    }
}

/// 取檢查運算的結果，溢出時改用飽和值並回報
fn saturating(checked: Option<Decimal>, fallback: impl FnOnce() -> Decimal) -> (Decimal, bool) {
    match checked {
        Some(value) => (value, false),
        None => (fallback(), true),
    }
}
