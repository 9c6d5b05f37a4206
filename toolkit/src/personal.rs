//! Household cost estimators.

use serde::{Deserialize, Serialize};

use crate::error::{ToolError, non_negative, positive};

#[cfg(test)]
#[path = "personal_test.rs"]
mod personal_test;

/// Fuel cost for a trip: `distance / mileage * price`.
///
/// # Errors
///
/// Returns [`ToolError`] for negative distance or price, or non-positive
/// mileage.
pub fn fuel_cost(distance_km: f64, mileage_kmpl: f64, price_per_litre: f64) -> Result<f64, ToolError> {
    let distance = non_negative("Distance (km)", distance_km)?;
    let mileage = positive("Mileage (km/l)", mileage_kmpl)?;
    let price = non_negative("Fuel Price", price_per_litre)?;
    Ok(distance / mileage * price)
}

/// Units billed at zero before the flat rate kicks in.
pub const FREE_UNITS: f64 = 100.0;
/// Rate per unit above [`FREE_UNITS`].
pub const RATE_PER_UNIT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectricityBill {
    pub units: f64,
    pub billable_units: f64,
    pub amount: f64,
}

/// Flat-slab electricity estimate: the first 100 units are free and the rest
/// cost 5 each.
///
/// # Errors
///
/// Returns [`ToolError::Negative`] for negative consumption.
pub fn electricity_bill(units: f64) -> Result<ElectricityBill, ToolError> {
    let units = non_negative("Units Consumed", units)?;
    let billable_units = (units - FREE_UNITS).max(0.0);
    Ok(ElectricityBill { units, billable_units, amount: billable_units * RATE_PER_UNIT })
}
