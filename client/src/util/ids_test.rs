#![cfg(not(feature = "hydrate"))]

use rand::Rng;

use super::*;

#[test]
fn ids_are_unique_uuids() {
    let a = new_id();
    let b = new_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn seeded_generators_differ() {
    let x: u64 = seeded_rng().random();
    let y: u64 = seeded_rng().random();
    assert_ne!(x, y);
}

#[test]
fn clock_reads_a_plausible_date() {
    assert!(today().year() >= 2024);
}
