use chrono::{Duration, FixedOffset, TimeZone, Utc};
use pg_sanitize::{PgValue, Result, SanitizeError, quote_bytes, quote_string, sanitize_sql};

fn render_one(value: PgValue<'_>) -> Result<String> {
    sanitize_sql("$1", &[value])
}

#[test]
fn test_null_renders_bare() {
    assert_eq!(render_one(PgValue::Null).unwrap(), "null");
    assert_eq!(render_one(PgValue::from(None::<i64>)).unwrap(), "null");
}

#[test]
fn test_integers_render_in_decimal() {
    assert_eq!(render_one(PgValue::from(0i64)).unwrap(), "0");
    assert_eq!(render_one(PgValue::from(-42i64)).unwrap(), "-42");
    assert_eq!(
        render_one(PgValue::from(i64::MIN)).unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(render_one(PgValue::from(7i32)).unwrap(), "7");
    assert_eq!(render_one(PgValue::from(-3i16)).unwrap(), "-3");
}

#[test]
fn test_floats_render_shortest_roundtrip() {
    assert_eq!(render_one(PgValue::from(1.5f64)).unwrap(), "1.5");
    assert_eq!(render_one(PgValue::from(-0.5f64)).unwrap(), "-0.5");
    assert_eq!(render_one(PgValue::from(3.0f64)).unwrap(), "3");
    assert_eq!(render_one(PgValue::from(0.25f32)).unwrap(), "0.25");
}

#[test]
fn test_booleans() {
    assert_eq!(render_one(PgValue::from(true)).unwrap(), "true");
    assert_eq!(render_one(PgValue::from(false)).unwrap(), "false");
}

#[test]
fn test_bytes_render_as_lowercase_hex() {
    assert_eq!(
        render_one(PgValue::from(vec![0x00, 0xFF])).unwrap(),
        r"'\x00ff'"
    );
    assert_eq!(render_one(PgValue::from(&b""[..])).unwrap(), r"'\x'");
}

#[test]
fn test_text_quoting() {
    assert_eq!(render_one(PgValue::from("plain")).unwrap(), "'plain'");
    assert_eq!(render_one(PgValue::from("it's")).unwrap(), "'it''s'");
    assert_eq!(render_one(PgValue::from("'';--")).unwrap(), "''''';--'");
    assert_eq!(render_one(PgValue::from("")).unwrap(), "''");
}

#[test]
fn test_utc_timestamp_renders_with_z() {
    let ts = Utc.with_ymd_and_hms(2020, 3, 1, 12, 30, 45).unwrap();
    assert_eq!(
        render_one(PgValue::from(ts)).unwrap(),
        "'2020-03-01 12:30:45Z'"
    );
}

#[test]
fn test_timestamp_fraction_trims_trailing_zeros() {
    let ts = Utc.with_ymd_and_hms(2020, 3, 1, 12, 30, 45).unwrap()
        + Duration::microseconds(120_000);
    assert_eq!(
        render_one(PgValue::from(ts)).unwrap(),
        "'2020-03-01 12:30:45.12Z'"
    );
}

#[test]
fn test_timestamp_truncates_below_microseconds() {
    let ts = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap() + Duration::nanoseconds(1_500);
    assert_eq!(
        render_one(PgValue::from(ts)).unwrap(),
        "'2020-03-01 00:00:00.000001Z'"
    );
}

#[test]
fn test_timestamp_with_positive_offset() {
    let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let ts = tz.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(
        render_one(PgValue::from(ts)).unwrap(),
        "'2021-12-31 23:59:59+05:30:00'"
    );
}

#[test]
fn test_timestamp_with_negative_offset() {
    let tz = FixedOffset::west_opt(3 * 3600).unwrap();
    let ts = tz.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        render_one(PgValue::from(ts)).unwrap(),
        "'2021-01-01 00:00:00-03:00:00'"
    );
}

#[test]
fn test_interval_has_no_literal_form() {
    let err = render_one(PgValue::from(Duration::seconds(5))).unwrap_err();
    assert_eq!(err, SanitizeError::UnsupportedType("interval"));
}

#[cfg(feature = "uuid")]
#[test]
fn test_uuid_has_no_literal_form() {
    let err = render_one(PgValue::Uuid(uuid::Uuid::nil())).unwrap_err();
    assert_eq!(err, SanitizeError::UnsupportedType("uuid"));
}

#[test]
fn test_kind_names() {
    assert_eq!(PgValue::Null.kind(), "null");
    assert_eq!(PgValue::from(1i64).kind(), "bigint");
    assert_eq!(PgValue::from(1.0f64).kind(), "double precision");
    assert_eq!(PgValue::from("x").kind(), "text");
    assert_eq!(PgValue::from(Duration::zero()).kind(), "interval");
}

#[test]
fn test_is_null() {
    assert!(PgValue::Null.is_null());
    assert!(PgValue::from(None::<bool>).is_null());
    assert!(!PgValue::from(false).is_null());
}

#[test]
fn test_quote_helpers() {
    assert_eq!(quote_string("O'Brien"), "'O''Brien'");
    assert_eq!(quote_string(""), "''");
    assert_eq!(quote_bytes(&[0xDE, 0xAD]), r"'\xdead'");
    assert_eq!(quote_bytes(&[]), r"'\x'");
}
