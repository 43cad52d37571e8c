use super::*;

#[test]
fn expiry_adds_lifetime_in_minutes() {
    let now = 1_700_000_000_000.0;
    assert!((expiry_millis(now, 60) - (now + 3_600_000.0)).abs() < f64::EPSILON);
    assert!((expiry_millis(now, 1) - (now + 60_000.0)).abs() < f64::EPSILON);
}

#[test]
fn set_cookie_string_carries_secure_cross_site_attributes() {
    let cookie = set_cookie_string("token", "abc.def.ghi", "Tue, 14 Nov 2023 22:13:20 GMT");
    assert_eq!(
        cookie,
        "token=abc.def.ghi; expires=Tue, 14 Nov 2023 22:13:20 GMT; path=/; secure; samesite=none"
    );
}

#[test]
fn removal_cookie_expires_in_the_past() {
    let cookie = removal_cookie_string("token");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    assert!(cookie.contains("path=/"));
}

#[test]
fn find_cookie_picks_named_entry() {
    let header = "theme=dark; token=abc.def; other=1";
    assert_eq!(find_cookie(header, "token"), Some("abc.def".to_owned()));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[test]
fn find_cookie_does_not_match_prefixes() {
    assert_eq!(find_cookie("refresh_token=zzz", "token"), None);
}

#[test]
fn find_cookie_treats_empty_value_as_absent() {
    assert_eq!(find_cookie("token=", "token"), None);
}

#[test]
fn find_cookie_returns_value_still_encoded() {
    assert_eq!(find_cookie("token=a%20b%3Bc", "token"), Some("a%20b%3Bc".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_is_empty_outside_the_browser() {
    assert_eq!(set("abc", 60), Ok(()));
    assert_eq!(read(), None);
    assert_eq!(remove(), Ok(()));
}
