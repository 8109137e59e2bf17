//! # BOM State
//!
//! 計劃狀態容器與輸入邊界

pub mod input;
pub mod state;

// Re-export 主要類型
pub use input::{parse_plan_quantity, parse_setting_text, NumericInput};
pub use state::PlanningState;
