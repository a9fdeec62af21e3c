use crate::state::{FieldValue, UnixTimestamp};
use crate::SECONDS_PER_MINUTE;

use std::time::{SystemTime, UNIX_EPOCH};

/// Parses the integer prefix of `raw`.
///
/// Leading whitespace and a single sign are accepted, and a `0x`/`0X` prefix
/// switches to hexadecimal. Parsing stops at the first character that is not
/// a digit of the radix. Input without leading digits, or a value outside the
/// `i64` range, yields [`FieldValue::NotANumber`].
pub fn parse_int(raw: &str) -> FieldValue {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, body) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };
    let digits_len = body
        .bytes()
        .take_while(|byte| (*byte as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return FieldValue::NotANumber;
    }

    let digits = &body[..digits_len];
    let parsed = if negative {
        i64::from_str_radix(&format!("-{}", digits), radix)
    } else {
        i64::from_str_radix(digits, radix)
    };
    match parsed {
        Ok(value) => FieldValue::Int(value),
        Err(_) => FieldValue::NotANumber,
    }
}

pub fn minutes_to_seconds(minutes: u64) -> Option<i64> {
    i64::try_from(minutes).ok()?.checked_mul(SECONDS_PER_MINUTE)
}

pub fn unix_now() -> UnixTimestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as UnixTimestamp)
        .unwrap_or_default()
}

#[test]
fn parse_int_test() {
    assert_eq!(parse_int("100"), FieldValue::Int(100));
    assert_eq!(parse_int("  42"), FieldValue::Int(42));
    assert_eq!(parse_int("-5"), FieldValue::Int(-5));
    assert_eq!(parse_int("+8"), FieldValue::Int(8));
    assert_eq!(parse_int("3.7"), FieldValue::Int(3));
    assert_eq!(parse_int("12abc"), FieldValue::Int(12));
    assert_eq!(parse_int("abc"), FieldValue::NotANumber);
    assert_eq!(parse_int(""), FieldValue::NotANumber);
    assert_eq!(parse_int("-"), FieldValue::NotANumber);
    assert_eq!(parse_int("- 3"), FieldValue::NotANumber);
    assert_eq!(parse_int("99999999999999999999"), FieldValue::NotANumber);
    assert_eq!(parse_int("-9223372036854775808"), FieldValue::Int(i64::MIN));
    assert_eq!(parse_int("0x1f"), FieldValue::Int(31));
    assert_eq!(parse_int("0XFFz"), FieldValue::Int(255));
    assert_eq!(parse_int("-0x10"), FieldValue::Int(-16));
    assert_eq!(parse_int("0x"), FieldValue::NotANumber);
    assert_eq!(parse_int("0xg"), FieldValue::NotANumber);
    assert_eq!(parse_int("0b101"), FieldValue::Int(0));
}

#[test]
fn minutes_to_seconds_test() {
    assert_eq!(minutes_to_seconds(0), Some(0));
    assert_eq!(minutes_to_seconds(90), Some(5400));
    assert_eq!(minutes_to_seconds(u64::MAX), None);
}
