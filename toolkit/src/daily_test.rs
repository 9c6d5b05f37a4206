use time::macros::date;

use super::*;

// =============================================================================
// DATES
// =============================================================================

#[test]
fn parse_iso_date_round_trips_with_iso_date() {
    let d = parse_iso_date("Start Date", "2024-02-29").unwrap();
    assert_eq!(d, date!(2024 - 02 - 29));
    assert_eq!(iso_date(d), "2024-02-29");
}

#[test]
fn parse_iso_date_rejects_blank_and_impossible_dates() {
    assert_eq!(parse_iso_date("Start Date", " "), Err(ToolError::Missing { field: "Start Date" }));
    assert!(matches!(parse_iso_date("Start Date", "2023-02-29"), Err(ToolError::InvalidDate(_))));
}

#[test]
fn days_between_is_symmetric() {
    let a = date!(2024 - 01 - 01);
    let b = date!(2024 - 03 - 01);
    assert_eq!(days_between(a, b), 60);
    assert_eq!(days_between(b, a), 60);
    assert_eq!(days_between(a, a), 0);
}

#[test]
fn age_borrows_months_and_previous_month_length() {
    let age = age_on(date!(2000 - 05 - 20), date!(2024 - 03 - 10)).unwrap();
    assert_eq!(age, Age { years: 23, months: 9, days: 19 });
}

#[test]
fn age_on_birthday_is_whole_years() {
    let age = age_on(date!(2000 - 03 - 10), date!(2024 - 03 - 10)).unwrap();
    assert_eq!(age, Age { years: 24, months: 0, days: 0 });
}

#[test]
fn age_day_before_birthday() {
    let age = age_on(date!(2000 - 03 - 11), date!(2024 - 03 - 10)).unwrap();
    assert_eq!(age, Age { years: 23, months: 11, days: 28 });
}

#[test]
fn age_in_january_borrows_from_previous_december() {
    let age = age_on(date!(2000 - 12 - 25), date!(2024 - 01 - 05)).unwrap();
    assert_eq!(age, Age { years: 23, months: 0, days: 11 });
}

#[test]
fn age_borrows_length_of_month_just_before_today() {
    // February 2025 has 28 days: 5 - 31 + 28.
    let age = age_on(date!(2000 - 01 - 31), date!(2025 - 03 - 05)).unwrap();
    assert_eq!(age, Age { years: 25, months: 1, days: 2 });
}

#[test]
fn age_rejects_future_birth_dates() {
    assert!(age_on(date!(2030 - 01 - 01), date!(2024 - 01 - 01)).is_err());
}

#[test]
fn life_progress_is_clamped() {
    let birth = date!(2000 - 01 - 01);
    let half = life_progress(birth, 80, date!(2040 - 01 - 01)).unwrap();
    assert!((half - 50.0).abs() < 1e-9);
    assert!((life_progress(birth, 10, date!(2040 - 01 - 01)).unwrap() - 100.0).abs() < 1e-9);
    assert!(life_progress(birth, 80, date!(1999 - 01 - 01)).unwrap().abs() < 1e-9);
    assert!(life_progress(birth, 0, date!(2040 - 01 - 01)).is_err());
}

#[test]
fn year_progress_counts_completed_months() {
    assert!(year_progress(date!(2024 - 01 - 15)).abs() < 1e-9);
    assert!((year_progress(date!(2024 - 07 - 01)) - 50.0).abs() < 1e-9);
}

// =============================================================================
// PERCENTAGES AND PRICES
// =============================================================================

#[test]
fn percentages_in_both_directions() {
    assert!((percent_of(50.0, 100.0).unwrap() - 50.0).abs() < 1e-12);
    assert!((percent_ratio(50.0, 200.0).unwrap() - 25.0).abs() < 1e-12);
    assert!(percent_ratio(1.0, 0.0).is_err());
}

#[test]
fn discount_reports_final_price_and_savings() {
    let d = discount(1000.0, 20.0).unwrap();
    assert!((d.final_price - 800.0).abs() < 1e-9);
    assert!((d.saved - 200.0).abs() < 1e-9);
    assert!(discount(1000.0, 120.0).is_err());
}

// =============================================================================
// HEALTH AND BILLS
// =============================================================================

#[test]
fn bmi_reference_reading_is_normal() {
    let r = bmi(70.0, 170.0).unwrap();
    assert!((r.bmi - 24.22).abs() < 0.01, "bmi = {}", r.bmi);
    assert_eq!(r.category, BmiCategory::Normal);
    assert_eq!(r.category.label(), "Normal");
}

#[test]
fn bmi_band_edges() {
    assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
}

#[test]
fn bmi_rejects_zero_height() {
    assert_eq!(bmi(70.0, 0.0), Err(ToolError::NotPositive { field: "Height (cm)" }));
}

#[test]
fn bmi_gauge_is_clamped() {
    let heavy = BmiReading { bmi: 55.0, category: BmiCategory::Obese };
    assert!((heavy.gauge_percent() - 100.0).abs() < 1e-12);
}

#[test]
fn split_bill_adds_tip_before_dividing() {
    let s = split_bill(100.0, 2, 10.0).unwrap();
    assert!((s.total - 110.0).abs() < 1e-9);
    assert!((s.per_person - 55.0).abs() < 1e-9);
    assert!(split_bill(100.0, 0, 10.0).is_err());
}
