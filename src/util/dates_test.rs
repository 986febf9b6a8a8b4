use super::*;

#[test]
fn renders_utc_z_timestamps_in_portal_time() {
    assert_eq!(utc_to_local_display(Some("2025-11-06T12:34:56Z")), "2025-11-06 09:34");
}

#[test]
fn renders_explicit_offset_timestamps() {
    assert_eq!(
        utc_to_local_display(Some("2025-11-06T12:34:56+00:00")),
        "2025-11-06 09:34"
    );
    assert_eq!(
        utc_to_local_display(Some("2025-11-06T10:34:56-02:00")),
        "2025-11-06 09:34"
    );
}

#[test]
fn accepts_space_separated_naive_timestamps_as_utc() {
    assert_eq!(utc_to_local_display(Some("2025-11-06 12:34:56")), "2025-11-06 09:34");
}

#[test]
fn accepts_t_separated_naive_timestamps_as_utc() {
    assert_eq!(utc_to_local_display(Some("2025-11-06T12:34:56")), "2025-11-06 09:34");
}

#[test]
fn crosses_midnight_into_the_previous_day() {
    assert_eq!(utc_to_local_display(Some("2025-11-06T01:10:00Z")), "2025-11-05 22:10");
}

#[test]
fn absent_or_blank_input_renders_a_dash() {
    assert_eq!(utc_to_local_display(None), "-");
    assert_eq!(utc_to_local_display(Some("")), "-");
    assert_eq!(utc_to_local_display(Some("   ")), "-");
}

#[test]
fn unparseable_input_renders_a_dash() {
    assert_eq!(utc_to_local_display(Some("yesterday")), "-");
    assert_eq!(utc_to_local_display(Some("2025-13-40T99:99:99Z")), "-");
}
