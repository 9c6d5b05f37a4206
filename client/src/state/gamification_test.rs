use super::*;

#[test]
fn award_points_per_action() {
    assert_eq!(XpAward::ResultGenerated.points(), 10);
    assert_eq!(XpAward::Shared.points(), 5);
    assert_eq!(XpAward::Exported.points(), 15);
}

#[test]
fn level_steps_at_perfect_squares_of_tens() {
    assert_eq!(level_for_xp(0), 1);
    assert_eq!(level_for_xp(99), 1);
    assert_eq!(level_for_xp(100), 2);
    assert_eq!(level_for_xp(399), 2);
    assert_eq!(level_for_xp(400), 3);
    assert_eq!(level_for_xp(10_000), 11);
}

#[test]
fn progress_uses_sqrt_remainder() {
    assert!(level_progress_percent(0).abs() < 1e-12);
    assert!((level_progress_percent(25) - 50.0).abs() < 1e-9);
    assert!(level_progress_percent(100).abs() < 1e-9);
    assert!((level_progress_percent(144) - 20.0).abs() < 1e-9);
}
