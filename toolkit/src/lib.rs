//! Pure tool formulas and record types for the WiseTools hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every calculator, converter, and tracker in the UI delegates its math and
//! its record shapes to this crate. Nothing here touches storage, the DOM, or
//! the network, so the same functions back the Leptos client, the CLI, and
//! the test suite.
//!
//! ERROR HANDLING
//! ==============
//! Calculators validate their inputs and return [`ToolError`] instead of
//! producing `NaN`, infinities, or silent zeroes. Codec helpers (Base64,
//! JSON/CSV, regex) return [`CodecError`]. Callers at the UI boundary turn
//! either into an inline message.

pub mod ai;
pub mod convert;
pub mod currency;
pub mod daily;
pub mod developer;
pub mod error;
pub mod finance;
pub mod personal;
pub mod productivity;
pub mod report;
pub mod student;

pub use error::{CodecError, ToolError, parse_number};

/// Round to `places` decimal places using half-away-from-zero.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}
