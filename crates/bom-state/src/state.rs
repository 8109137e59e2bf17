//! 計劃狀態容器

use bom_calc::{BomCalculator, BomResult, BomSummary, ComputedRow};
use bom_core::{
    BomError, ComponentId, ComponentSettings, PlanField, PlannerConfig, ProductionPlan,
    SettingField,
};
use rust_decimal::Decimal;

use crate::input::{parse_plan_quantity, parse_setting_text};

/// 計劃狀態
///
/// 唯一持有生產計劃與採購參數的地方。讀取一律透過借用快照，
/// 修改只能經由單一欄位的更新操作；每次讀取計算結果都完整重算。
#[derive(Debug, Clone)]
pub struct PlanningState {
    plan: ProductionPlan,
    settings: ComponentSettings,
    calculator: BomCalculator,
}

impl PlanningState {
    /// 以指定生產計劃與目錄預設參數創建
    pub fn new(plan: ProductionPlan) -> Self {
        Self {
            plan,
            settings: ComponentSettings::from_catalog(),
            calculator: BomCalculator::default(),
        }
    }

    /// 建構器模式：設置計算配置
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.calculator = BomCalculator::new(config);
        self
    }

    /// 建構器模式：設置初始採購參數
    pub fn with_settings(mut self, settings: ComponentSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn plan(&self) -> &ProductionPlan {
        &self.plan
    }

    pub fn settings(&self) -> &ComponentSettings {
        &self.settings
    }

    pub fn config(&self) -> &PlannerConfig {
        self.calculator.config()
    }

    /// 更新生產計劃的單一欄位
    pub fn set_plan_field(&mut self, field: PlanField, value: u64) {
        tracing::debug!("更新生產計劃 {}: {} → {}", field, self.plan.get(field), value);
        self.plan.set(field, value);
    }

    /// 更新單一物料的單一採購參數
    ///
    /// 負數會被拒絕，狀態保持不變。
    pub fn set_component_field(
        &mut self,
        id: ComponentId,
        field: SettingField,
        value: Decimal,
    ) -> bom_core::Result<()> {
        if value < Decimal::ZERO {
            tracing::warn!("拒絕物料 {} 的 {} 負數輸入: {}", id, field, value);
            return Err(BomError::NegativeSetting { id, field, value });
        }

        tracing::debug!(
            "更新物料 {} 的 {}: {} → {}",
            id,
            field,
            self.settings.get(id).get(field),
            value
        );
        self.settings.update(id, field, value);
        Ok(())
    }

    /// 恢復目錄預設參數
    pub fn reset_settings(&mut self) {
        tracing::debug!("恢復目錄預設採購參數");
        self.settings = ComponentSettings::from_catalog();
    }

    /// 以輸入文字更新生產計劃，回傳實際寫入的數量
    pub fn apply_plan_text(&mut self, field: PlanField, text: &str) -> u64 {
        let value = parse_plan_quantity(text);
        self.set_plan_field(field, value);
        value
    }

    /// 以輸入文字更新採購參數
    ///
    /// 無法解析時不修改狀態並回傳 `Ok(None)`。
    pub fn apply_setting_text(
        &mut self,
        id: ComponentId,
        field: SettingField,
        text: &str,
    ) -> bom_core::Result<Option<Decimal>> {
        match parse_setting_text(text) {
            Some(value) => {
                self.set_component_field(id, field, value)?;
                Ok(Some(value))
            }
            None => {
                tracing::debug!("物料 {} 的 {} 輸入無法解析，暫不提交: {:?}", id, field, text);
                Ok(None)
            }
        }
    }

    /// 目前狀態的全部計算列
    pub fn rows(&self) -> Vec<ComputedRow> {
        self.calculator.compute_rows(&self.plan, &self.settings)
    }

    /// 目前狀態的彙總
    pub fn summary(&self) -> BomSummary {
        self.calculator.compute_summary(&self.plan, &self.settings)
    }

    /// 目前狀態的完整計算結果
    pub fn calculate(&self) -> BomResult {
        self.calculator.calculate(&self.plan, &self.settings)
    }
}

impl Default for PlanningState {
    fn default() -> Self {
        Self::new(ProductionPlan::default())
    }
}
