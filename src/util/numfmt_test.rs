use super::*;

#[test]
fn groups_thousands_with_dots_and_comma_decimal() {
    assert_eq!(latam(8837.24, 2), "8.837,24");
}

#[test]
fn zero_decimals_drops_the_fraction() {
    assert_eq!(latam(705_000.0, 0), "705.000");
}

#[test]
fn small_magnitudes_have_no_grouping() {
    assert_eq!(latam(0.5, 2), "0,50");
    assert_eq!(latam(999.0, 0), "999");
}

#[test]
fn rounds_to_requested_decimals() {
    assert_eq!(latam(1234.567, 2), "1.234,57");
}

#[test]
fn negative_values_keep_the_sign_ahead_of_grouping() {
    assert_eq!(latam(-8837.24, 2), "-8.837,24");
    assert_eq!(latam(-12.0, 0), "-12");
}

#[test]
fn exact_thousand_boundaries_group_cleanly() {
    assert_eq!(latam(1_000.0, 0), "1.000");
    assert_eq!(latam(1_000_000.0, 0), "1.000.000");
}

#[test]
fn zero_formats_plainly() {
    assert_eq!(latam(0.0, 0), "0");
    assert_eq!(latam(0.0, 2), "0,00");
}
