use keycheck::validation::{is_valid_email, is_valid_price, parse_price};
use serde_json::json;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("user.name@example.com"));
    assert!(is_valid_email("first+tag@sub.domain.org"));
    // leading/trailing whitespace is trimmed before matching
    assert!(is_valid_email("  padded@mail.com "));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("missing-domain@"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("no-tld@example"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("two words@example.com"));
    assert!(!is_valid_email("double@@example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn price_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_price(&json!(24)), Some(24));
    assert_eq!(parse_price(&json!("24")), Some(24));
    assert_eq!(parse_price(&json!(" 24 ")), Some(24));
    // fractions truncate toward zero
    assert_eq!(parse_price(&json!(24.9)), Some(24));
    assert_eq!(parse_price(&json!("19.5")), Some(19));
}

#[test]
fn price_rejects_non_numeric_input() {
    assert_eq!(parse_price(&json!("abc")), None);
    assert_eq!(parse_price(&json!("")), None);
    assert_eq!(parse_price(&json!(null)), None);
    assert_eq!(parse_price(&json!(true)), None);
    assert_eq!(parse_price(&json!([24])), None);
}

#[test]
fn price_must_be_positive() {
    assert!(is_valid_price(1));
    assert!(is_valid_price(24));
    assert!(!is_valid_price(0));
    assert!(!is_valid_price(-5));
}
