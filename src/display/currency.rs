//! Currency formatting
//!
//! Renders whole-unit amounts the way `ja-JP` renders yen: symbol prefix,
//! thousands grouping, no decimals. The format is configurable through
//! settings but that is the default.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Locale-bound currency rendering rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// BCP 47 language tag, informational
    #[serde(default = "default_locale")]
    pub locale: String,

    /// ISO 4217 code
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Zero digits shown after the decimal separator when non-zero
    #[serde(default)]
    pub fraction_digits: u8,

    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_locale() -> String {
    "ja-JP".to_string()
}

fn default_currency_code() -> String {
    "JPY".to_string()
}

fn default_symbol() -> String {
    "￥".to_string()
}

fn default_grouping_separator() -> char {
    ','
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency_code: default_currency_code(),
            symbol: default_symbol(),
            fraction_digits: 0,
            grouping_separator: default_grouping_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl CurrencyFormat {
    /// Format an amount, e.g. `￥300,000` or `-￥500`
    pub fn format(&self, amount: Money) -> String {
        let units = amount.units();
        let digits = units.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }

        if self.fraction_digits > 0 {
            grouped.push(self.decimal_separator);
            grouped.extend(std::iter::repeat('0').take(usize::from(self.fraction_digits)));
        }

        let sign = if units < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol, grouped)
    }
}

/// Format an amount with the default yen format
///
/// # Examples
/// ```
/// use kakeibo_plan::display::format_currency;
/// assert_eq!(format_currency(1_234_567), "￥1,234,567");
/// ```
pub fn format_currency(amount: impl Into<Money>) -> String {
    CurrencyFormat::default().format(amount.into())
}
