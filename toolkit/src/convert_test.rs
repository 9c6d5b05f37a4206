use super::*;

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

#[test]
fn kilometres_to_metres() {
    assert!(close(convert(1.5, Unit::Kilometer, Unit::Meter).unwrap(), 1500.0));
}

#[test]
fn pounds_to_kilograms() {
    assert!(close(convert(2.204_62, Unit::Pound, Unit::Kilogram).unwrap(), 1.0));
}

#[test]
fn ratio_categories_round_trip_every_pair() {
    for category in [Category::Length, Category::Weight, Category::Speed, Category::Pressure] {
        for &a in category.units() {
            for &b in category.units() {
                let there = convert(123.456, a, b).unwrap();
                let back = convert(there, b, a).unwrap();
                assert!(close(back, 123.456), "{a} -> {b} -> {a} gave {back}");
            }
        }
    }
}

#[test]
fn temperature_uses_affine_formulas() {
    assert!(close(convert(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 212.0));
    assert!(close(convert(32.0, Unit::Fahrenheit, Unit::Celsius).unwrap(), 0.0));
    assert!(close(convert(0.0, Unit::Celsius, Unit::Kelvin).unwrap(), 273.15));
    assert!(close(convert(212.0, Unit::Fahrenheit, Unit::Kelvin).unwrap(), 373.15));
    assert!(close(convert(373.15, Unit::Kelvin, Unit::Fahrenheit).unwrap(), 212.0));
}

#[test]
fn temperature_round_trips_every_pair() {
    let units = Category::Temperature.units();
    for &a in units {
        for &b in units {
            let there = convert(310.0, a, b).unwrap();
            let back = convert(there, b, a).unwrap();
            assert!(close(back, 310.0), "{a} -> {b} -> {a} gave {back}");
        }
    }
}

#[test]
fn below_absolute_zero_is_rejected() {
    assert_eq!(convert(-1.0, Unit::Kelvin, Unit::Celsius), Err(ConvertError::BelowAbsoluteZero));
    assert_eq!(convert(-300.0, Unit::Celsius, Unit::Kelvin), Err(ConvertError::BelowAbsoluteZero));
}

#[test]
fn mixed_categories_are_rejected() {
    assert_eq!(
        convert(1.0, Unit::Meter, Unit::Kilogram),
        Err(ConvertError::CategoryMismatch { from: Unit::Meter, to: Unit::Kilogram })
    );
    assert_eq!(convert(f64::NAN, Unit::Meter, Unit::Foot), Err(ConvertError::NotFinite));
}

#[test]
fn units_parse_from_symbols_and_letter_aliases() {
    assert_eq!("km/h".parse::<Unit>().unwrap(), Unit::KilometerPerHour);
    assert_eq!("F".parse::<Unit>().unwrap(), Unit::Fahrenheit);
    assert_eq!("k".parse::<Unit>().unwrap(), Unit::Kelvin);
    assert!("furlong".parse::<Unit>().is_err());
}

#[test]
fn every_unit_belongs_to_its_listed_category() {
    for category in Category::ALL {
        for unit in category.units() {
            assert_eq!(unit.category(), category);
        }
    }
}

#[test]
fn formatted_result_has_four_decimals() {
    assert_eq!(format_converted(3.280_84), "3.2808");
    assert_eq!(format_converted(1.0), "1.0000");
}
