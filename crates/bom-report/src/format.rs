//! 數值格式化（zh-CN，人民幣）

use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "¥";

/// 金額，兩位小數：`¥1,234.50`
pub fn format_currency(value: Decimal) -> String {
    currency(value, 2)
}

/// 金額，不含小數（彙總卡片用）：`¥1,235`
pub fn format_currency_whole(value: Decimal) -> String {
    currency(value, 0)
}

/// 數量，千分位分組，最多三位小數並去除尾端零
pub fn format_number(value: Decimal) -> String {
    let rounded = round(value, 3).normalize();
    let (negative, body) = split_sign(rounded);
    format!("{}{}", if negative { "-" } else { "" }, group_digits(&body))
}

/// 百分比，一位小數：`4.8%`
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.1}%", round(value, 1))
}

fn currency(value: Decimal, fraction_digits: u32) -> String {
    let rounded = round(value, fraction_digits);
    let (negative, body) = split_sign(rounded);
    let body = pad_fraction(&body, fraction_digits);
    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        CURRENCY_SYMBOL,
        group_digits(&body)
    )
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn split_sign(value: Decimal) -> (bool, String) {
    let negative = value < Decimal::ZERO;
    (negative, value.abs().to_string())
}

fn pad_fraction(body: &str, fraction_digits: u32) -> String {
    let width = fraction_digits as usize;
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if width == 0 {
        return int_part.to_string();
    }
    format!("{}.{:0<width$}", int_part, frac_part, width = width)
}

fn group_digits(body: &str) -> String {
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
