//! Built-in kinds (`ObjectId`, `NumericValue`, `ReactNode`) and string
//! formats (`date-time`, `date`).

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use super::types::TypeCheck;
use crate::schema::UnsafeSchema;
use crate::value::{HostObject, Value};

/// Host capability: can this host object be rendered?
pub type RenderableCheck = Arc<dyn Fn(&HostObject) -> bool + Send + Sync>;

// ------------------------------------------------------------------
// Kinds

/// Valid for a 24-hex-character identifier string.
pub fn object_id(_: &UnsafeSchema, value: &Value) -> bool {
    value.as_str().is_some_and(is_object_id)
}

pub fn is_object_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Valid when [`to_number`] yields a number.
pub fn numeric_value(_: &UnsafeSchema, value: &Value) -> bool {
    to_number(value).is_some()
}

/// Builds the `ReactNode` check: null, number, string, callable, or a host
/// object accepted by `renderable`.
pub fn react_node(renderable: RenderableCheck) -> TypeCheck {
    Arc::new(move |_: &UnsafeSchema, value: &Value| match value {
        Value::Null | Value::Number(_) | Value::String(_) | Value::Function(_) => true,
        Value::Host(h) => renderable(h),
        _ => false,
    })
}

/// Permissive numeric coercion.
///
/// Numbers pass through unless NaN. Strings parse their longest numeric
/// prefix, so `"42px"` yields 42 and `"abc"` yields nothing.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_nan() => None,
        Value::Number(n) => Some(*n),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    let literal = s[..i].trim_end_matches('.');
    literal.parse::<f64>().ok()
}

// ------------------------------------------------------------------
// Formats

/// Valid when the string parses as an ISO-8601 date or date-time.
pub fn date_time(value: &str) -> bool {
    parse_iso8601(value).is_some()
}

/// Valid when the string is a real calendar date in strict `YYYY-MM-DD`
/// form. A full date-time is rejected with a warning pointing at
/// `date-time`.
pub fn date(value: &str) -> bool {
    if parse_iso8601(value).is_none() {
        return false;
    }
    if !date_only_regex().is_match(value) {
        tracing::warn!(
            value,
            "\"{value}\" is a valid `date-time` but not `date`, did you mean to use `date-time`?"
        );
        return false;
    }
    true
}

fn date_only_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
}

fn iso8601_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(
            r"^(\d{4})(?:-(\d{2})(?:-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:[.,](\d{1,9}))?)?(Z|[+-]\d{2}(?::?\d{2})?)?)?)?)?$",
        )
        .unwrap()
    })
}

/// Parses the ISO-8601 calendar forms `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
/// `YYYY-MM-DD[T ]HH:MM[:SS[.fff]][Z|±HH[:MM]]`.
///
/// Calendar and clock fields are range-checked, so `2024-02-30` fails.
/// A time without zone is read as UTC.
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    let caps = iso8601_regex().captures(value)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = num(2).unwrap_or(1);
    let day = num(3).unwrap_or(1);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let nanos = match caps.get(7) {
        Some(m) => {
            let digits = m.as_str();
            let scaled = format!("{digits:0<9}");
            scaled.parse::<u32>().ok()?
        }
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(
        num(4).unwrap_or(0),
        num(5).unwrap_or(0),
        num(6).unwrap_or(0),
        nanos,
    )?;
    let naive = date.and_time(time);

    let offset = match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") => FixedOffset::east_opt(0)?,
        Some(zone) => parse_offset(zone)?,
    };
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_offset(zone: &str) -> Option<FixedOffset> {
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..4) {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
