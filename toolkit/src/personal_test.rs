use super::*;

#[test]
fn fuel_cost_scales_with_distance() {
    let cost = fuel_cost(150.0, 15.0, 100.0).unwrap();
    assert!((cost - 1000.0).abs() < 1e-9);
}

#[test]
fn fuel_cost_rejects_zero_mileage() {
    assert_eq!(fuel_cost(100.0, 0.0, 100.0), Err(ToolError::NotPositive { field: "Mileage (km/l)" }));
    assert!(fuel_cost(-1.0, 15.0, 100.0).is_err());
}

#[test]
fn electricity_first_hundred_units_are_free() {
    assert!(electricity_bill(80.0).unwrap().amount.abs() < 1e-12);
    assert!(electricity_bill(100.0).unwrap().amount.abs() < 1e-12);
    let bill = electricity_bill(250.0).unwrap();
    assert!((bill.billable_units - 150.0).abs() < 1e-12);
    assert!((bill.amount - 750.0).abs() < 1e-12);
}

#[test]
fn electricity_rejects_negative_units() {
    assert!(electricity_bill(-5.0).is_err());
}
