//! 集成測試

use bom_calc::{BomCalculator, WarningSeverity};
use bom_core::{
    ComponentId, ComponentSettings, MoqPolicy, PlanField, PlannerConfig, ProductionPlan,
    SettingField,
};
use bom_report::render_report;
use bom_state::PlanningState;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;

fn d(value: i64) -> Decimal {
    Decimal::from(value)
}

#[test]
fn test_demo_plan_full_bom() {
    // 場景：8片裝 1000 套，2片裝 2000 套，目錄預設參數
    let state = PlanningState::new(ProductionPlan::new(1000, 2000));
    let result = state.calculate();

    // (id, 總需求, 採購量, 剩餘, 採購成本)
    let expected = [
        (ComponentId::GiftBox8, 1000, 1000, 0, d(15000)),
        (ComponentId::FoldingBox2, 2000, 2000, 0, d(7000)),
        (ComponentId::FoilBag, 12000, 20000, 8000, d(10000)),
        (ComponentId::BlisterTray, 12000, 15000, 3000, d(12000)),
        (ComponentId::DolphinPatch, 12000, 12000, 0, d(24000)),
        (ComponentId::EssenceLiquid, 24000, 25000, 1000, d(100000)),
        (ComponentId::EssenceBottle, 24000, 25000, 1000, d(30000)),
        (ComponentId::WaistSeal, 1000, 1000, 0, d(300)),
        (ComponentId::ExpCard, 3000, 3000, 0, d(600)),
        (ComponentId::StickerRound, 3000, 5000, 2000, d(500)),
    ];

    assert_eq!(result.rows.len(), expected.len());
    for (row, (id, needed, order, leftover, cost)) in result.rows.iter().zip(expected) {
        assert_eq!(row.id, id);
        assert_eq!(row.total_needed, d(needed), "{} 總需求", id);
        assert_eq!(row.order_qty, d(order), "{} 採購量", id);
        assert_eq!(row.leftover, d(leftover), "{} 剩餘", id);
        assert_eq!(row.total_cost, cost, "{} 成本", id);
    }

    assert_eq!(result.summary.total_cost, d(199400));
    assert_eq!(result.summary.inventory_value, d(11800));
    assert_eq!(result.summary.total_items, d(109000));
    assert_eq!(result.summary.effective_cost(), d(187600));

    // foil_bag 與 blister_tray 剩餘超過 MOQ 的一半
    let overstocked: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.severity == WarningSeverity::Info)
        .map(|w| w.component_id)
        .collect();
    assert_eq!(overstocked, vec![ComponentId::FoilBag, ComponentId::BlisterTray]);
}

#[test]
fn test_essence_liquid_row() {
    let state = PlanningState::new(ProductionPlan::new(1000, 2000));
    let rows = state.rows();
    let row = rows
        .iter()
        .find(|r| r.id == ComponentId::EssenceLiquid)
        .unwrap();

    assert_eq!(row.moq, d(5000));
    assert_eq!(row.cost, d(4));
    assert_eq!(row.total_needed, d(24000));
    assert_eq!(row.order_qty, d(25000));
    assert_eq!(row.leftover, d(1000));
    assert_eq!(row.total_cost, d(100000));
    assert_eq!(row.wasted_cost, d(4000));
}

#[test]
fn test_zero_plan_totals() {
    let state = PlanningState::default();
    let summary = state.summary();

    assert!(state.rows().iter().all(|r| r.order_qty.is_zero() && r.total_cost.is_zero()));
    assert_eq!(summary.total_cost, Decimal::ZERO);
    assert_eq!(summary.inventory_value, Decimal::ZERO);
    assert_eq!(summary.inventory_percentage(), Decimal::ZERO);
}

#[rstest]
#[case(ComponentId::FoilBag, SettingField::Moq, d(8000))]
#[case(ComponentId::EssenceBottle, SettingField::Cost, d(2))]
#[case(ComponentId::WaistSeal, SettingField::Moq, d(300))]
fn test_single_setting_change_is_isolated(
    #[case] id: ComponentId,
    #[case] field: SettingField,
    #[case] value: Decimal,
) {
    let mut state = PlanningState::new(ProductionPlan::new(1000, 2000));
    let before = state.rows();

    state.set_component_field(id, field, value).unwrap();
    let after = state.rows();

    for (a, b) in before.iter().zip(&after) {
        if a.id == id {
            assert_ne!(a, b);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_edit_session_end_to_end() {
    let mut state = PlanningState::default();

    state.apply_plan_text(PlanField::Set8, "500");
    state.apply_plan_text(PlanField::Set2, "oops");
    assert_eq!(state.plan(), &ProductionPlan::new(500, 0));

    // gift_box_8 需求 500，MOQ 改為 300 → 採購 600
    assert_eq!(
        state
            .apply_setting_text(ComponentId::GiftBox8, SettingField::Moq, "300")
            .unwrap(),
        Some(d(300))
    );
    let row = state.calculate().row(ComponentId::GiftBox8).cloned().unwrap();
    assert_eq!(row.order_qty, d(600));
    assert_eq!(row.leftover, d(100));

    assert!(state
        .apply_setting_text(ComponentId::GiftBox8, SettingField::Cost, "-3")
        .is_err());
    assert_eq!(state.settings().get(ComponentId::GiftBox8).cost, d(15));
}

#[test]
fn test_legacy_policy_via_state() {
    let mut state = PlanningState::new(ProductionPlan::new(10, 0))
        .with_config(PlannerConfig::default().with_non_positive_moq(MoqPolicy::SingleBatch));
    state
        .set_component_field(ComponentId::GiftBox8, SettingField::Moq, Decimal::ZERO)
        .unwrap();

    let row = state.calculate().row(ComponentId::GiftBox8).cloned().unwrap();
    assert_eq!(row.order_qty, Decimal::ZERO);
    assert_eq!(row.leftover, d(-10));
}

#[test]
fn test_report_renders_demo() {
    let state = PlanningState::new(ProductionPlan::new(1000, 2000));
    let text = render_report(&state.calculate(), state.config().overstock_ratio);

    assert!(text.contains("¥199,400"));
    assert!(text.contains("¥11,800"));
    assert!(text.contains("¥187,600"));
    assert!(text.contains("5.9%"));
    assert!(text.contains("109,000 件"));
}

proptest! {
    #[test]
    fn prop_state_and_engine_agree(set8 in 0u64..100_000, set2 in 0u64..100_000) {
        let plan = ProductionPlan::new(set8, set2);
        let state = PlanningState::new(plan);
        let direct = BomCalculator::default().calculate(&plan, &ComponentSettings::from_catalog());

        prop_assert_eq!(state.calculate(), direct);
        prop_assert_eq!(state.summary(), bom_calc::compute_summary(&plan, state.settings()));
    }
}
