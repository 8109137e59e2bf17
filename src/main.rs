//! BOM 物料換算命令列工具
//!
//! 輸入兩種成品的計劃數量，輸出物料需求、MOQ 採購量、剩餘庫存與成本。

use anyhow::{bail, Context, Result};
use bom_core::{BomError, ComponentId, MoqPolicy, PlanField, PlannerConfig, SettingField};
use bom_state::PlanningState;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bom-planner", version, about = "供应链物料换算系统 (BOM & Cost Calculator)")]
struct Cli {
    /// 8片装礼盒计划生产数量
    #[arg(long, default_value = "1000")]
    set8: String,

    /// 2片装小折盒计划生产数量
    #[arg(long, default_value = "2000")]
    set2: String,

    /// 覆写物料起订量，例如 --moq foil_bag=8000
    #[arg(long = "moq", value_name = "ID=VALUE")]
    moq: Vec<String>,

    /// 覆写物料单价，例如 --cost essence_liquid=3.8
    #[arg(long = "cost", value_name = "ID=VALUE")]
    cost: Vec<String>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// MOQ ≤ 0 时沿用旧版行为（视为一批，订购量等于 MOQ）
    #[arg(long)]
    legacy_moq: bool,

    /// 剩余量超过 MOQ 的此比例时标记囤货多
    #[arg(long, default_value = "0.5")]
    overstock_ratio: Decimal,
}

/// 初始化日誌系統（RUST_LOG 控制級別，預設 info，輸出到 stderr）
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 解析 `ID=VALUE` 形式的覆寫參數
fn parse_override(raw: &str) -> bom_core::Result<(ComponentId, &str)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| BomError::InvalidOverride(raw.to_string()))?;
    Ok((id.parse()?, value))
}

fn apply_overrides(state: &mut PlanningState, field: SettingField, overrides: &[String]) -> Result<()> {
    for raw in overrides {
        let (id, text) = parse_override(raw).with_context(|| format!("無法解析 --{} {}", field, raw))?;
        if state.apply_setting_text(id, field, text)?.is_none() {
            bail!(BomError::InvalidNumber(text.to_string()));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let policy = if cli.legacy_moq {
        MoqPolicy::SingleBatch
    } else {
        MoqPolicy::LotForLot
    };
    let config = PlannerConfig::default()
        .with_non_positive_moq(policy)
        .with_overstock_ratio(cli.overstock_ratio);

    let mut state = PlanningState::default().with_config(config);
    state.apply_plan_text(PlanField::Set8, &cli.set8);
    state.apply_plan_text(PlanField::Set2, &cli.set2);
    apply_overrides(&mut state, SettingField::Moq, &cli.moq)?;
    apply_overrides(&mut state, SettingField::Cost, &cli.cost)?;

    tracing::debug!("生產計劃: {:?}", state.plan());
    let result = state.calculate();

    match cli.format {
        OutputFormat::Table => {
            print!("{}", bom_report::render_report(&result, config.overstock_ratio));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "plan": state.plan(),
                "rows": result.rows,
                "summary": result.summary,
                "effective_cost": result.summary.effective_cost(),
                "inventory_percentage": result.summary.inventory_percentage(),
                "warnings": result.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
