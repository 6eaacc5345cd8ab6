//! PostgreSQL argument values and their literal renderings.

use core::fmt::Write;
use std::borrow::Cow;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Utc};

#[cfg(feature = "uuid")]
use uuid::Uuid;

use crate::error::{Result, SanitizeError};

/// A positional argument value for one render call.
///
/// The scalar kinds `Null`, `Boolean`, `Bigint`, `DoublePrecision`, `Text`,
/// `Bytea`, and `TimestampTz` have a canonical literal rendering. The
/// remaining kinds can be carried by the model but have no defined literal
/// form; [`Query::render`] rejects them with
/// [`SanitizeError::UnsupportedType`].
///
/// [`Query::render`]: crate::Query::render
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PgValue<'a> {
    /// NULL
    #[default]
    Null,
    /// BOOLEAN
    Boolean(bool),
    /// BIGINT (narrower integer types widen into this on conversion)
    Bigint(i64),
    /// DOUBLE PRECISION
    DoublePrecision(f64),
    /// TEXT, VARCHAR, CHAR
    Text(Cow<'a, str>),
    /// BYTEA
    Bytea(Cow<'a, [u8]>),
    /// TIMESTAMPTZ
    TimestampTz(DateTime<FixedOffset>),
    /// INTERVAL (no literal form defined here)
    Interval(Duration),
    /// UUID (no literal form defined here)
    #[cfg(feature = "uuid")]
    Uuid(Uuid),
}

impl PgValue<'_> {
    /// Returns the PostgreSQL kind name, as carried by
    /// [`SanitizeError::UnsupportedType`].
    pub fn kind(&self) -> &'static str {
        match self {
            PgValue::Null => "null",
            PgValue::Boolean(_) => "boolean",
            PgValue::Bigint(_) => "bigint",
            PgValue::DoublePrecision(_) => "double precision",
            PgValue::Text(_) => "text",
            PgValue::Bytea(_) => "bytea",
            PgValue::TimestampTz(_) => "timestamptz",
            PgValue::Interval(_) => "interval",
            #[cfg(feature = "uuid")]
            PgValue::Uuid(_) => "uuid",
        }
    }

    /// Returns true if this is a NULL value.
    pub fn is_null(&self) -> bool {
        matches!(self, PgValue::Null)
    }

    /// Writes this value's literal rendering into `buf`.
    ///
    /// Never partially renders: kinds without a literal form fail before
    /// touching the buffer.
    pub(crate) fn write_literal(&self, buf: &mut String) -> Result<()> {
        match self {
            PgValue::Null => buf.push_str("null"),
            PgValue::Boolean(b) => {
                let _ = write!(buf, "{b}");
            }
            PgValue::Bigint(v) => {
                let _ = write!(buf, "{v}");
            }
            PgValue::DoublePrecision(v) => {
                let _ = write!(buf, "{v}");
            }
            PgValue::Text(s) => write_text_literal(buf, s),
            PgValue::Bytea(bytes) => write_bytea_literal(buf, bytes),
            PgValue::TimestampTz(ts) => write_timestamp_literal(buf, ts),
            other => return Err(SanitizeError::UnsupportedType(other.kind())),
        }
        Ok(())
    }
}

/// Quotes `s` as a SQL string literal, doubling embedded quotes:
/// `O'Brien` → `'O''Brien'`.
pub fn quote_string(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 2);
    write_text_literal(&mut buf, s);
    buf
}

/// Quotes `bytes` as a hex bytea literal: `[0x00, 0xFF]` → `'\x00ff'`.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut buf = String::with_capacity(bytes.len() * 2 + 4);
    write_bytea_literal(&mut buf, bytes);
    buf
}

fn write_text_literal(buf: &mut String, s: &str) {
    buf.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            buf.push('\'');
        }
        buf.push(ch);
    }
    buf.push('\'');
}

fn write_bytea_literal(buf: &mut String, bytes: &[u8]) {
    buf.push_str("'\\x");
    for b in bytes {
        let _ = write!(buf, "{b:02x}");
    }
    buf.push('\'');
}

/// `'YYYY-MM-DD HH:MM:SS[.ffffff]Z'`, or `±hh:mm:ss` in place of `Z` for a
/// non-UTC offset. Sub-microsecond digits are truncated; trailing fraction
/// zeros are trimmed.
fn write_timestamp_literal(buf: &mut String, ts: &DateTime<FixedOffset>) {
    buf.push('\'');
    let _ = write!(
        buf,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    );

    let micros = ts.nanosecond() / 1_000;
    if micros > 0 {
        let mut frac = micros;
        let mut width = 6;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        let _ = write!(buf, ".{frac:0width$}");
    }

    let offset = ts.offset().local_minus_utc();
    if offset == 0 {
        buf.push('Z');
    } else {
        let (sign, off) = if offset < 0 { ('-', -offset) } else { ('+', offset) };
        let _ = write!(
            buf,
            "{sign}{:02}:{:02}:{:02}",
            off / 3600,
            off % 3600 / 60,
            off % 60
        );
    }
    buf.push('\'');
}

// --- Conversions ---

impl From<bool> for PgValue<'_> {
    fn from(value: bool) -> Self {
        PgValue::Boolean(value)
    }
}

impl From<i16> for PgValue<'_> {
    fn from(value: i16) -> Self {
        PgValue::Bigint(value.into())
    }
}

impl From<i32> for PgValue<'_> {
    fn from(value: i32) -> Self {
        PgValue::Bigint(value.into())
    }
}

impl From<i64> for PgValue<'_> {
    fn from(value: i64) -> Self {
        PgValue::Bigint(value)
    }
}

impl From<f32> for PgValue<'_> {
    fn from(value: f32) -> Self {
        PgValue::DoublePrecision(value.into())
    }
}

impl From<f64> for PgValue<'_> {
    fn from(value: f64) -> Self {
        PgValue::DoublePrecision(value)
    }
}

impl<'a> From<&'a str> for PgValue<'a> {
    fn from(value: &'a str) -> Self {
        PgValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for PgValue<'_> {
    fn from(value: String) -> Self {
        PgValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for PgValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        PgValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for PgValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        PgValue::Bytea(Cow::Borrowed(value))
    }
}

impl From<Vec<u8>> for PgValue<'_> {
    fn from(value: Vec<u8>) -> Self {
        PgValue::Bytea(Cow::Owned(value))
    }
}

impl From<DateTime<FixedOffset>> for PgValue<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PgValue::TimestampTz(value)
    }
}

impl From<DateTime<Utc>> for PgValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        PgValue::TimestampTz(value.fixed_offset())
    }
}

impl From<Duration> for PgValue<'_> {
    fn from(value: Duration) -> Self {
        PgValue::Interval(value)
    }
}

#[cfg(feature = "uuid")]
impl From<Uuid> for PgValue<'_> {
    fn from(value: Uuid) -> Self {
        PgValue::Uuid(value)
    }
}

impl<'a, T: Into<PgValue<'a>>> From<Option<T>> for PgValue<'a> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => PgValue::Null,
        }
    }
}
