//! Everyday calculators: dates, age, percentages, BMI, bill splitting.
//!
//! Calendar math uses `time::Date`, so every result is a whole number of
//! days with no time-zone drift.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::util::days_in_year_month;
use time::{Date, Month};

use crate::error::{ToolError, finite, in_range, non_negative, positive};

#[cfg(test)]
#[path = "daily_test.rs"]
mod daily_test;

// =============================================================================
// DATES
// =============================================================================

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse the `YYYY-MM-DD` value produced by a date input.
///
/// # Errors
///
/// Returns [`ToolError::Missing`] for blank input and
/// [`ToolError::InvalidDate`] when the text is not a calendar date.
pub fn parse_iso_date(field: &'static str, raw: &str) -> Result<Date, ToolError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ToolError::Missing { field });
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|e| ToolError::InvalidDate(format!("{field}: {e}")))
}

/// Absolute number of days between two dates.
#[must_use]
pub fn days_between(start: Date, end: Date) -> i64 {
    (end - start).whole_days().abs()
}

/// Elapsed years, months, and days since a birth date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Exact calendar age on `today`.
///
/// Months are borrowed first when the birthday has not yet come around this
/// year; a negative day count then borrows the length of the month before
/// `today`'s month.
///
/// # Errors
///
/// Returns [`ToolError::InvalidDate`] when `birth` is after `today`.
pub fn age_on(birth: Date, today: Date) -> Result<Age, ToolError> {
    if birth > today {
        return Err(ToolError::InvalidDate("date of birth is in the future".to_owned()));
    }
    let mut years = today.year() - birth.year();
    let mut months = i32::from(u8::from(today.month())) - i32::from(u8::from(birth.month()));
    let mut days = i32::from(today.day()) - i32::from(birth.day());

    if months < 0 || (months == 0 && days < 0) {
        years -= 1;
        months += 12;
    }
    if days < 0 {
        let (prev_year, prev_month) = previous_month(today.year(), today.month());
        days += i32::from(days_in_year_month(prev_year, prev_month));
        months -= 1;
    }
    Ok(Age { years, months, days })
}

fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        other => (year, other.previous()),
    }
}

/// Share of an expected lifespan already lived, clamped to `0..=100`.
///
/// # Errors
///
/// Returns [`ToolError`] for a non-positive life expectancy.
#[allow(clippy::cast_precision_loss)]
pub fn life_progress(birth: Date, expectancy_years: u16, today: Date) -> Result<f64, ToolError> {
    if expectancy_years == 0 {
        return Err(ToolError::NotPositive { field: "Life Expectancy" });
    }
    let end_year = birth.year() + i32::from(expectancy_years);
    let end = Date::from_calendar_date(end_year, birth.month(), birth.day())
        .or_else(|_| Date::from_calendar_date(end_year, birth.month(), days_in_year_month(end_year, birth.month())))
        .map_err(|e| ToolError::InvalidDate(e.to_string()))?;
    let lived = (today - birth).whole_days() as f64;
    let span = (end - birth).whole_days() as f64;
    Ok((lived / span * 100.0).clamp(0.0, 100.0))
}

/// Completed months of the current year as a percentage.
#[must_use]
pub fn year_progress(today: Date) -> f64 {
    f64::from(u8::from(today.month()) - 1) / 12.0 * 100.0
}

// =============================================================================
// PERCENTAGES
// =============================================================================

/// `x% of y`.
///
/// # Errors
///
/// Returns [`ToolError::NotFinite`] for non-finite inputs.
pub fn percent_of(percent: f64, value: f64) -> Result<f64, ToolError> {
    Ok(finite("Percent", percent)? / 100.0 * finite("Value", value)?)
}

/// `x` as a percentage of `y`.
///
/// # Errors
///
/// Returns [`ToolError`] when `whole` is zero.
pub fn percent_ratio(part: f64, whole: f64) -> Result<f64, ToolError> {
    let part = finite("Value", part)?;
    let whole = finite("Total", whole)?;
    if whole.abs() < f64::EPSILON {
        return Err(ToolError::Invalid("Total cannot be zero".to_owned()));
    }
    Ok(part / whole * 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub final_price: f64,
    pub saved: f64,
}

/// Sale price after a percentage discount.
///
/// # Errors
///
/// Returns [`ToolError`] for a negative price or a discount outside `0..=100`.
pub fn discount(price: f64, discount_pct: f64) -> Result<Discount, ToolError> {
    let price = non_negative("Original Price", price)?;
    let pct = in_range("Discount (%)", discount_pct, 0.0, 100.0)?;
    let saved = price * pct / 100.0;
    Ok(Discount { final_price: price - saved, saved })
}

// =============================================================================
// HEALTH
// =============================================================================

/// WHO adult BMI bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// Marker position on a 0..40 gauge, as a percentage.
    #[must_use]
    pub fn gauge_percent(&self) -> f64 {
        (self.bmi / 40.0 * 100.0).clamp(0.0, 100.0)
    }
}

/// `weight / (height/100)^2`.
///
/// # Errors
///
/// Returns [`ToolError`] unless both inputs are strictly positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReading, ToolError> {
    let weight = positive("Weight (kg)", weight_kg)?;
    let height_m = positive("Height (cm)", height_cm)? / 100.0;
    let bmi = weight / (height_m * height_m);
    Ok(BmiReading { bmi, category: BmiCategory::classify(bmi) })
}

// =============================================================================
// MONEY BETWEEN FRIENDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillSplit {
    pub total: f64,
    pub per_person: f64,
}

/// Add a tip and divide the bill evenly.
///
/// # Errors
///
/// Returns [`ToolError`] for negative amounts or zero people.
pub fn split_bill(amount: f64, people: u32, tip_pct: f64) -> Result<BillSplit, ToolError> {
    let amount = non_negative("Total Amount", amount)?;
    let tip = non_negative("Tip %", tip_pct)?;
    if people == 0 {
        return Err(ToolError::NotPositive { field: "People" });
    }
    let total = amount + amount * tip / 100.0;
    Ok(BillSplit { total, per_person: total / f64::from(people) })
}
