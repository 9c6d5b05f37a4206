//! Unit conversion across length, weight, speed, pressure, and temperature.
//!
//! DESIGN
//! ======
//! Ratio categories store "units per base unit" (metre, kilogram, metre per
//! second, pascal) and convert with `value / rate[from] * rate[to]`.
//! Temperature is affine, so it goes through Celsius with dedicated linear
//! formulas instead of the ratio table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot convert {from} to {to}: different quantities")]
    CategoryMismatch { from: Unit, to: Unit },
    #[error("value must be a finite number")]
    NotFinite,
    #[error("temperature is below absolute zero")]
    BelowAbsoluteZero,
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

/// Physical quantity a unit measures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Length,
    Weight,
    Speed,
    Pressure,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 5] = [Self::Length, Self::Weight, Self::Speed, Self::Pressure, Self::Temperature];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Speed => "Speed",
            Self::Pressure => "Pressure",
            Self::Temperature => "Temperature",
        }
    }

    /// Units offered for this quantity, in selector order.
    #[must_use]
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => &[
                Unit::Meter,
                Unit::Kilometer,
                Unit::Centimeter,
                Unit::Millimeter,
                Unit::Foot,
                Unit::Inch,
                Unit::Mile,
            ],
            Self::Weight => &[Unit::Kilogram, Unit::Gram, Unit::Pound, Unit::Ounce],
            Self::Speed => &[Unit::MeterPerSecond, Unit::KilometerPerHour, Unit::MilePerHour, Unit::Knot],
            Self::Pressure => &[Unit::Pascal, Unit::Bar, Unit::Psi, Unit::Atmosphere],
            Self::Temperature => &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
        }
    }

    /// First two units, used as the default from/to pair.
    #[must_use]
    pub fn default_pair(self) -> (Unit, Unit) {
        let units = self.units();
        (units[0], units[1])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Foot,
    Inch,
    Mile,
    Kilogram,
    Gram,
    Pound,
    Ounce,
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    Pascal,
    Bar,
    Psi,
    Atmosphere,
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Meter | Self::Kilometer | Self::Centimeter | Self::Millimeter | Self::Foot | Self::Inch | Self::Mile => {
                Category::Length
            }
            Self::Kilogram | Self::Gram | Self::Pound | Self::Ounce => Category::Weight,
            Self::MeterPerSecond | Self::KilometerPerHour | Self::MilePerHour | Self::Knot => Category::Speed,
            Self::Pascal | Self::Bar | Self::Psi | Self::Atmosphere => Category::Pressure,
            Self::Celsius | Self::Fahrenheit | Self::Kelvin => Category::Temperature,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Foot => "ft",
            Self::Inch => "in",
            Self::Mile => "mi",
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Pound => "lb",
            Self::Ounce => "oz",
            Self::MeterPerSecond => "m/s",
            Self::KilometerPerHour => "km/h",
            Self::MilePerHour => "mph",
            Self::Knot => "kt",
            Self::Pascal => "Pa",
            Self::Bar => "bar",
            Self::Psi => "psi",
            Self::Atmosphere => "atm",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Units per base unit; `None` for temperature scales.
    fn rate(self) -> Option<f64> {
        Some(match self {
            Self::Meter | Self::Kilogram | Self::MeterPerSecond | Self::Pascal => 1.0,
            Self::Kilometer => 0.001,
            Self::Centimeter => 100.0,
            Self::Millimeter => 1000.0,
            Self::Foot => 3.280_84,
            Self::Inch => 39.370_1,
            Self::Mile => 0.000_621_371,
            Self::Gram => 1000.0,
            Self::Pound => 2.204_62,
            Self::Ounce => 35.274,
            Self::KilometerPerHour => 3.6,
            Self::MilePerHour => 2.236_94,
            Self::Knot => 1.943_84,
            Self::Bar => 0.000_01,
            Self::Psi => 0.000_145_038,
            Self::Atmosphere => 0.000_009_869_2,
            Self::Celsius | Self::Fahrenheit | Self::Kelvin => return None,
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let aliases: &[(&str, Unit)] = &[("c", Unit::Celsius), ("f", Unit::Fahrenheit), ("k", Unit::Kelvin)];
        Category::ALL
            .iter()
            .flat_map(|c| c.units().iter().copied())
            .find(|u| u.symbol() == wanted)
            .or_else(|| {
                aliases
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
                    .map(|(_, u)| *u)
            })
            .ok_or_else(|| ConvertError::UnknownUnit(wanted.to_owned()))
    }
}

const ABSOLUTE_ZERO_C: f64 = -273.15;

fn to_celsius(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value + ABSOLUTE_ZERO_C,
        _ => value,
    }
}

fn from_celsius(celsius: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Unit::Kelvin => celsius - ABSOLUTE_ZERO_C,
        _ => celsius,
    }
}

/// Convert `value` between two units of the same quantity.
///
/// # Errors
///
/// Returns [`ConvertError::CategoryMismatch`] for units of different
/// quantities, [`ConvertError::NotFinite`] for `NaN`/infinite input, and
/// [`ConvertError::BelowAbsoluteZero`] for impossible temperatures.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NotFinite);
    }
    if from.category() != to.category() {
        return Err(ConvertError::CategoryMismatch { from, to });
    }
    match (from.rate(), to.rate()) {
        (Some(from_rate), Some(to_rate)) => Ok(value / from_rate * to_rate),
        _ => {
            let celsius = to_celsius(value, from);
            if celsius < ABSOLUTE_ZERO_C - 1e-9 {
                return Err(ConvertError::BelowAbsoluteZero);
            }
            Ok(from_celsius(celsius, to))
        }
    }
}

/// Render a converted value the way the converter card shows it.
#[must_use]
pub fn format_converted(value: f64) -> String {
    format!("{value:.4}")
}
