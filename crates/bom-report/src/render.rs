//! 純文字報表：成本概覽卡片與物料需求清單

use std::fmt;

use bom_calc::{BomResult, BomSummary, ComputedRow};
use rust_decimal::Decimal;

use crate::format::{format_currency, format_currency_whole, format_number, format_percentage};

/// 囤貨過多的標記
pub const OVERSTOCK_BADGE: &str = "囤货多";

/// 成本概覽（三張卡片）
pub fn render_summary(summary: &BomSummary) -> String {
    SummaryCards(summary).to_string()
}

/// 物料需求清單
pub fn render_table(rows: &[ComputedRow], overstock_ratio: Decimal) -> String {
    BomTable { rows, overstock_ratio }.to_string()
}

/// 完整報表：概覽、清單與警告
pub fn render_report(result: &BomResult, overstock_ratio: Decimal) -> String {
    Report { result, overstock_ratio }.to_string()
}

struct SummaryCards<'a>(&'a BomSummary);

impl fmt::Display for SummaryCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "采购总资金投入      {}", format_currency_whole(summary.total_cost))?;
        writeln!(f, "  采购物料总数: {} 件", format_number(summary.total_items))?;
        writeln!(f, "剩余库存价值        {}", format_currency_whole(summary.inventory_value))?;
        writeln!(f, "  占总投入的 {}", format_percentage(summary.inventory_percentage()))?;
        writeln!(f, "本次生产实际物料消耗 {}", format_currency_whole(summary.effective_cost()))
    }
}

struct BomTable<'a> {
    rows: &'a [ComputedRow],
    overstock_ratio: Decimal,
}

impl fmt::Display for BomTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} {:>5} {:>5} {:>12} {:>10} {:>8} {:>12} {:>10} {:>16}",
            "部件", "8片装", "2片装", "总需求量", "MOQ", "单价", "建议采购量", "剩余库存", "采购成本"
        )?;

        for row in self.rows {
            let badge = if row.is_overstocked(self.overstock_ratio) {
                format!(" [{}]", OVERSTOCK_BADGE)
            } else {
                String::new()
            };

            writeln!(
                f,
                "{:<16} {:>5} {:>5} {:>12} {:>10} {:>8} {:>12} {:>10} {:>16}{}",
                row.id.as_str(),
                row.qty_per_a,
                row.qty_per_b,
                format_number(row.total_needed),
                format_number(row.moq),
                format_currency(row.cost),
                format_number(row.order_qty),
                format_number(row.leftover),
                format_currency(row.total_cost),
                badge
            )?;

            if row.leftover > Decimal::ZERO {
                writeln!(f, "{:<16} 价值: {}", "", format_currency(row.wasted_cost))?;
            }
        }

        let total = self
            .rows
            .iter()
            .fold(Decimal::ZERO, |acc, row| acc.saturating_add(row.total_cost));
        writeln!(f, "总计预计成本: {}", format_currency(total))
    }
}

struct Report<'a> {
    result: &'a BomResult,
    overstock_ratio: Decimal,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== 成本概览 ==")?;
        write!(f, "{}", SummaryCards(&self.result.summary))?;
        writeln!(f, "\n== 物料需求清单 (BOM) ==")?;
        write!(
            f,
            "{}",
            BomTable {
                rows: &self.result.rows,
                overstock_ratio: self.overstock_ratio,
            }
        )?;

        if !self.result.warnings.is_empty() {
            writeln!(f, "\n== 提示 ==")?;
            for warning in &self.result.warnings {
                writeln!(
                    f,
                    "[{:?}] {}: {}",
                    warning.severity, warning.component_id, warning.message
                )?;
            }
        }

        Ok(())
    }
}
