//! 輸入邊界：將使用者輸入的文字轉為數值

use std::str::FromStr;

use rust_decimal::Decimal;

/// 解析生產計劃數量
///
/// 取開頭的整數部分（`"12abc"` → 12，`"3.7"` → 3）；無法解析或為負時為 0。
pub fn parse_plan_quantity(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &rest[..leading_digits(rest)];
    if digits.is_empty() || negative {
        return 0;
    }

    digits
        .bytes()
        .try_fold(0u64, |acc, b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')))
        .unwrap_or(u64::MAX)
}

/// 解析數值前綴（`"0."` → 0，`"1.5kg"` → 1.5，`".5"` → 0.5，`"2e3"` → 2000）
pub fn parse_decimal_prefix(text: &str) -> Option<Decimal> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let int_len = leading_digits(rest);
    let int_part = &rest[..int_len];
    let mut frac_part = "";
    let mut consumed = int_len;

    if rest[consumed..].starts_with('.') {
        let frac_len = leading_digits(&rest[consumed + 1..]);
        frac_part = &rest[consumed + 1..consumed + 1 + frac_len];
        consumed += 1 + frac_len;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = "";
    let tail = &rest[consumed..];
    if let Some(after_e) = tail.strip_prefix(['e', 'E']) {
        let signed = after_e.strip_prefix(['+', '-']).map_or(0, |_| 1);
        let exp_len = leading_digits(&after_e[signed..]);
        if exp_len > 0 {
            exponent = &after_e[..signed + exp_len];
        }
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let mantissa = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };

    if exponent.is_empty() {
        Decimal::from_str(&mantissa).ok()
    } else {
        Decimal::from_scientific(&format!("{}e{}", mantissa, exponent)).ok()
    }
}

/// 解析採購參數輸入：可解析的前綴即提交，空字串視為 0，其他情況不提交
pub fn parse_setting_text(text: &str) -> Option<Decimal> {
    if text.trim().is_empty() {
        return Some(Decimal::ZERO);
    }
    parse_decimal_prefix(text)
}

/// 數值的標準字串形式（去除多餘的小數零）
pub fn canonical_text(value: Decimal) -> String {
    value.normalize().to_string()
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// 單一參數欄位的編輯暫存
///
/// 原始文字保留在本地（例如輸入中的 `"0."`），只有解析成功的數值才提交到狀態；
/// 失去焦點時，文字重新同步為已提交數值的標準形式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericInput {
    text: String,
}

impl NumericInput {
    pub fn new(value: Decimal) -> Self {
        Self {
            text: canonical_text(value),
        }
    }

    /// 目前顯示的文字
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 記錄輸入文字，回傳應提交的數值
    pub fn edit(&mut self, raw: &str) -> Option<Decimal> {
        self.text = raw.to_string();
        parse_setting_text(raw)
    }

    /// 外部數值變更時同步顯示文字
    ///
    /// 若暫存文字已解析為相同數值（例如 `"0.50"` 與 0.5），保留使用者的輸入格式。
    pub fn sync(&mut self, external: Decimal) {
        if self.text.is_empty() && external.is_zero() {
            return;
        }
        if parse_decimal_prefix(&self.text) == Some(external) {
            return;
        }
        self.text = canonical_text(external);
    }

    /// 失去焦點：顯示文字改為已提交數值的標準形式
    pub fn blur(&mut self, committed: Decimal) {
        self.text = canonical_text(committed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1000", 1000)]
    #[case("  42", 42)]
    #[case("12abc", 12)]
    #[case("3.7", 3)]
    #[case("-5", 0)]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("+7", 7)]
    #[case("99999999999999999999999", u64::MAX)]
    fn test_parse_plan_quantity(#[case] text: &str, #[case] expected: u64) {
        assert_eq!(parse_plan_quantity(text), expected);
    }

    #[rstest]
    #[case("0.", Some(dec!(0)))]
    #[case("0.50", Some(dec!(0.5)))]
    #[case(".5", Some(dec!(0.5)))]
    #[case("-1.25", Some(dec!(-1.25)))]
    #[case("1.5kg", Some(dec!(1.5)))]
    #[case("2e3", Some(dec!(2000)))]
    #[case("2e", Some(dec!(2)))]
    #[case("-", None)]
    #[case(".", None)]
    #[case("abc", None)]
    fn test_parse_decimal_prefix(#[case] text: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal_prefix(text), expected);
    }

    #[test]
    fn test_empty_setting_text_commits_zero() {
        assert_eq!(parse_setting_text(""), Some(Decimal::ZERO));
        assert_eq!(parse_setting_text("x"), None);
    }

    #[test]
    fn test_numeric_input_keeps_partial_decimal() {
        let mut input = NumericInput::new(dec!(15.0));
        assert_eq!(input.text(), "15");

        assert_eq!(input.edit("0."), Some(Decimal::ZERO));
        input.sync(Decimal::ZERO);
        assert_eq!(input.text(), "0.");

        assert_eq!(input.edit("0.50"), Some(dec!(0.5)));
        input.sync(dec!(0.5));
        assert_eq!(input.text(), "0.50");

        input.blur(dec!(0.5));
        assert_eq!(input.text(), "0.5");
    }

    #[test]
    fn test_numeric_input_resyncs_on_external_change() {
        let mut input = NumericInput::new(dec!(500));
        input.sync(dec!(1000));
        assert_eq!(input.text(), "1000");

        // 清空欄位時保留空白，方便重新輸入
        assert_eq!(input.edit(""), Some(Decimal::ZERO));
        input.sync(Decimal::ZERO);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_numeric_input_rejects_garbage() {
        let mut input = NumericInput::new(dec!(3.5));

        assert_eq!(input.edit("abc"), None);
        assert_eq!(input.text(), "abc");

        input.blur(dec!(3.5));
        assert_eq!(input.text(), "3.5");
    }
}
