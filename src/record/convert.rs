//! Field text conversions

use chrono::NaiveDateTime;
use std::time::Duration;

use crate::error::{DecodeError, Result};
use crate::metadata::Field;

/// Parse the recording timestamp, e.g. `1/02/2024 03:04:05 PM`
///
/// The text must be exactly what `format` renders for the parsed value:
/// chrono accepts unpadded numbers and any AM/PM case, the scanner writes
/// neither.
pub fn parse_timestamp(text: &str, format: &str) -> Result<NaiveDateTime> {
    let name = Field::DateAndTime.name();
    let ts = NaiveDateTime::parse_from_str(text, format)
        .map_err(|e| DecodeError::field_parse(name, text, e))?;

    if ts.format(format).to_string() != text {
        return Err(DecodeError::field_parse(
            name,
            text,
            format!("does not match the layout {:?} exactly", format),
        ));
    }
    Ok(ts)
}

/// Parse an `hours:minutes:seconds` elapsed time
///
/// Seconds may carry a decimal fraction. Parts after the third are ignored.
pub fn parse_elapsed(text: &str) -> Result<Duration> {
    let name = Field::Duration.name();
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() < 3 {
        return Err(DecodeError::field_parse(
            name,
            text,
            format!("expected hours:minutes:seconds, found {} part(s)", parts.len()),
        ));
    }

    let hours = parse_digits(parts[0])
        .ok_or_else(|| DecodeError::field_parse(name, text, "hours: invalid number"))?;
    let minutes = parse_digits(parts[1])
        .ok_or_else(|| DecodeError::field_parse(name, text, "minutes: invalid number"))?;
    let seconds = parse_seconds(parts[2])
        .ok_or_else(|| DecodeError::field_parse(name, text, "seconds: invalid number"))?;

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|s| Duration::from_secs(s).checked_add(seconds))
        .ok_or_else(|| DecodeError::field_parse(name, text, "elapsed time overflows"))
}

/// One or more ASCII digits; no sign, no whitespace
fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// `SS` or `SS.fffffffff`, exact to the nanosecond
fn parse_seconds(text: &str) -> Option<Duration> {
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    let secs = parse_digits(whole)?;
    if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut nanos = 0u32;
    for i in 0..9 {
        let digit = frac.as_bytes().get(i).map_or(0, |b| u32::from(b - b'0'));
        nanos = nanos * 10 + digit;
    }

    Some(Duration::new(secs, nanos))
}

/// Parse a floating point field; blank text is zero
pub fn parse_float(field: Field, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|e| DecodeError::field_parse(field.name(), text, e))?;
    if !value.is_finite() {
        return Err(DecodeError::field_parse(field.name(), text, "not a finite number"));
    }
    Ok(value)
}

/// Parse a signed integer field; blank text is zero
pub fn parse_int(field: Field, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    trimmed
        .parse()
        .map_err(|e| DecodeError::field_parse(field.name(), text, e))
}
