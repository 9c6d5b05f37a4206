//! Supported display currencies, locale-style formatting, and static
//! exchange rates.
//!
//! DESIGN
//! ======
//! Formatting mirrors what a browser's number formatter produces for the
//! locale each currency is shown in (INR in Indian digit grouping, EUR in
//! German style, GBP in British style, everything else in US style) with at
//! most two fraction digits. It is implemented directly so SSR, the CLI and
//! tests all render identical strings.
//!
//! Exchange rates are a fixed USD-based table. They are illustrative and
//! never fetched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ToolError, non_negative};

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Currency codes the preference selector offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
    Aud,
    Cad,
    Aed,
    Jpy,
    Sgd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberStyle {
    Indian,
    German,
    British,
    American,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 9] = [
        Self::Inr,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Aud,
        Self::Cad,
        Self::Aed,
        Self::Jpy,
        Self::Sgd,
    ];

    /// ISO 4217 code, e.g. `"INR"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Aed => "AED",
            Self::Jpy => "JPY",
            Self::Sgd => "SGD",
        }
    }

    /// Units of this currency per one US dollar.
    #[must_use]
    pub fn usd_rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.92,
            Self::Gbp => 0.79,
            Self::Inr => 83.5,
            Self::Jpy => 150.2,
            Self::Aud => 1.52,
            Self::Cad => 1.35,
            Self::Aed => 3.67,
            Self::Sgd => 1.34,
        }
    }

    fn style(self) -> NumberStyle {
        match self {
            Self::Inr => NumberStyle::Indian,
            Self::Eur => NumberStyle::German,
            Self::Gbp => NumberStyle::British,
            _ => NumberStyle::American,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Aud => "A$",
            Self::Cad => "CA$",
            Self::Jpy => "¥",
            Self::Aed => "AED\u{a0}",
            Self::Sgd => "SGD\u{a0}",
        }
    }

    /// Format `amount` the way this currency's locale shows money.
    #[must_use]
    pub fn format_amount(self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{} {amount}", self.code());
        }
        let rounded = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        // Up to two fraction digits, trailing zeros dropped: 100 -> "100".
        let frac = frac_part.trim_end_matches('0');

        let style = self.style();
        let (group_sep, decimal_sep) = match style {
            NumberStyle::German => ('.', ','),
            _ => (',', '.'),
        };
        let mut number = group_digits(int_part, group_sep, style == NumberStyle::Indian);
        if !frac.is_empty() {
            number.push(decimal_sep);
            number.push_str(frac);
        }

        let sign = if amount < 0.0 && (int_part != "0" || frac.chars().any(|c| c != '0')) {
            "-"
        } else {
            ""
        };
        match style {
            NumberStyle::German => format!("{sign}{number}\u{a0}{}", self.symbol()),
            _ => format!("{sign}{}{number}", self.symbol()),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == upper)
            .ok_or_else(|| ToolError::Invalid(format!("unsupported currency: {s}")))
    }
}

fn group_digits(digits: &str, sep: char, indian: bool) -> String {
    let bytes: Vec<char> = digits.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = bytes.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(bytes[start..end].iter().collect());
        end = start;
        if indian {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(&sep.to_string())
}

/// Convert between two currencies via the static USD table.
///
/// # Errors
///
/// Returns [`ToolError`] when `amount` is negative or not finite.
pub fn convert_currency(amount: f64, from: CurrencyCode, to: CurrencyCode) -> Result<f64, ToolError> {
    let amount = non_negative("Amount", amount)?;
    Ok(amount / from.usd_rate() * to.usd_rate())
}
