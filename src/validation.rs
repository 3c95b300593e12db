use regex::Regex;
use serde_json::Value;

/// Deliberately permissive "something@something.something" check, not RFC 5322.
/// Anything the pattern lets through is accepted behavior.
pub fn is_valid_email(s: &str) -> bool {
    let s = s.trim();
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(s)
}

/// Coerces a JSON value to an integer price. Numbers and numeric strings are
/// accepted (fractions truncate toward zero); everything else is rejected.
pub fn parse_price(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

pub fn is_valid_price(price: i64) -> bool {
    price > 0
}
