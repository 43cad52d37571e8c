use super::*;

#[test]
fn parse_base_url_defaults_when_missing_or_blank() {
    assert_eq!(parse_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(parse_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn parse_base_url_strips_trailing_slashes() {
    assert_eq!(parse_base_url(Some("https://api.example.test/")), "https://api.example.test");
    assert_eq!(parse_base_url(Some(" https://api.example.test/v1// ")), "https://api.example.test/v1");
}

#[test]
fn parse_lifetime_minutes_reads_numeric_value() {
    assert_eq!(parse_lifetime_minutes(Some("30")), 30);
    assert_eq!(parse_lifetime_minutes(Some(" 1440 ")), 1440);
}

#[test]
fn parse_lifetime_minutes_falls_back_on_invalid_input() {
    assert_eq!(parse_lifetime_minutes(None), DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES);
    assert_eq!(parse_lifetime_minutes(Some("soon")), DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES);
    assert_eq!(parse_lifetime_minutes(Some("-5")), DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES);
    assert_eq!(parse_lifetime_minutes(Some("0")), DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES);
}

#[test]
fn copy_feedback_window_is_one_second() {
    assert_eq!(COPY_FEEDBACK_MS, 1000);
}
