//! Phase 2: Literal decoding.
//!
//! The decoders turn spans the scanner classified into owned values:
//! - String spans become UTF-16 code unit sequences (escapes resolved,
//!   everything else carried over verbatim), then validated into `String`
//! - Number spans become `Integer` when conversion to `i32` is exact,
//!   `Float` otherwise
//!
//! Decoding trusts the scanner for shape but still rejects content it
//! cannot represent: `\x` escapes, unpaired surrogates, and numbers that
//! overflow to infinity.

use crate::error::{ParseError, Result};
use crate::unit::{ascii_at, CodeUnit};
use crate::value::Value;

/// Decode a string token body (the span between the quotes) into a
/// `String`. Code units outside escapes are widened verbatim, so a raw
/// 8-bit 0xE9 decodes as U+00E9 and a raw 16-bit unit keeps its value.
/// Unit validation happens once, on the finished sequence.
pub(crate) fn decode_string<C: CodeUnit>(span: &[C]) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(span.len());
    let mut pos = 0;
    while pos < span.len() {
        if ascii_at(span, pos) != Some(b'\\') {
            units.push(span[pos].widen());
            pos += 1;
            continue;
        }
        let escaped = ascii_at(span, pos + 1).ok_or(ParseError)?;
        pos += 2;
        match escaped {
            b'"' => units.push(u16::from(b'"')),
            b'/' => units.push(u16::from(b'/')),
            b'\\' => units.push(u16::from(b'\\')),
            b'b' => units.push(0x08),
            b'f' => units.push(0x0C),
            b'n' => units.push(u16::from(b'\n')),
            b'r' => units.push(u16::from(b'\r')),
            b't' => units.push(u16::from(b'\t')),
            b'v' => units.push(0x0B),
            b'u' => {
                // The escaped code unit is taken verbatim; surrogate
                // halves are not paired up here.
                let unit = decode_hex4(span, pos)?;
                units.push(unit);
                pos += 4;
            }
            // \x scans as a legal token shape but has no decoding.
            b'x' => return Err(ParseError),
            _ => return Err(ParseError),
        }
    }
    String::from_utf16(&units).map_err(|_| ParseError)
}

/// Read four hex digits as one 16-bit code unit.
fn decode_hex4<C: CodeUnit>(span: &[C], pos: usize) -> Result<u16> {
    let mut unit: u16 = 0;
    for i in pos..pos + 4 {
        let digit = match ascii_at(span, i) {
            Some(b @ b'0'..=b'9') => b - b'0',
            Some(b @ b'a'..=b'f') => b - b'a' + 10,
            Some(b @ b'A'..=b'F') => b - b'A' + 10,
            _ => return Err(ParseError),
        };
        unit = (unit << 4) | u16::from(digit);
    }
    Ok(unit)
}

/// Decode a number token span. The value is read as a double; when
/// truncating it to `i32` and back loses nothing, the integer form wins.
/// Numbers whose magnitude overflows the double range are rejected.
pub(crate) fn decode_number<C: CodeUnit>(span: &[C]) -> Result<Value> {
    let mut text = String::with_capacity(span.len());
    for pos in 0..span.len() {
        text.push(char::from(ascii_at(span, pos).ok_or(ParseError)?));
    }
    let number: f64 = text.parse().map_err(|_| ParseError)?;
    if !number.is_finite() {
        return Err(ParseError);
    }
    let truncated = number as i32;
    if f64::from(truncated) == number {
        Ok(Value::Integer(truncated))
    } else {
        Ok(Value::Float(number))
    }
}
