use super::*;

#[test]
fn test_wpm_over_default_window() {
    // 25 words over 10 seconds = 150 WPM
    assert_eq!(words_per_minute(25, 10.0), 150.0);
    assert_eq!(words_per_minute(0, 10.0), 0.0);
}

#[test]
fn test_zero_window_does_not_divide() {
    assert_eq!(words_per_minute(25, 0.0), 0.0);
    assert_eq!(words_per_minute(25, -1.0), 0.0);
}

#[test]
fn test_band_boundaries_are_inclusive() {
    assert_eq!(pace_band(119.9), PaceBand::Slow);
    assert_eq!(pace_band(120.0), PaceBand::Optimal);
    assert_eq!(pace_band(150.0), PaceBand::Optimal);
    assert_eq!(pace_band(180.0), PaceBand::Optimal);
    assert_eq!(pace_band(180.1), PaceBand::Fast);
}
