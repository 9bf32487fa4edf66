use super::*;

#[test]
fn check_bounds_clamps_ints_and_floats() {
    assert_eq!(check_bounds(5, 0, 10), 5);
    assert_eq!(check_bounds(-3, 0, 10), 0);
    assert_eq!(check_bounds(42, 0, 10), 10);
    assert_eq!(check_bounds(1.5, 0.0, 1.0), 1.0);
    assert_eq!(check_bounds(-0.25, 0.0, 1.0), 0.0);
}

#[test]
fn check_bounds_prefers_min_when_range_inverted() {
    assert_eq!(check_bounds(5, 8, 2), 8);
}

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u32(255, 255), 255);
    assert_eq!(mul_div255_u32(0, 255), 0);
    assert_eq!(mul_div255_u32(128, 255), 128);
}

#[test]
fn div_round_handles_zero_denominator() {
    assert_eq!(div_round(10, 0), 0);
    assert_eq!(div_round(10, 4), 3);
    assert_eq!(div_round(9, 3), 3);
}
