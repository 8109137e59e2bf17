//! # BOM Report
//!
//! 數值格式化與純文字報表

pub mod format;
pub mod render;

// Re-export 主要函式
pub use format::{format_currency, format_currency_whole, format_number, format_percentage};
pub use render::{render_report, render_summary, render_table};
