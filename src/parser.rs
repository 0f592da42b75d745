//! Phase 3: Value builder.
//!
//! Recursive descent directly over the input units, scanning one token at
//! a time. Each level is a function of `(input, position, depth)` that
//! writes the value it builds through a caller-provided slot and returns
//! the position after it, so the parser carries no mutable cursor and is
//! trivially reentrant. With values kept out of the return path, the
//! frames on the recursion chain stay small enough that a document nested
//! to the bound parses inside a default thread stack, debug builds
//! included.
//!
//! Nesting is bounded by [`MAX_DEPTH`]. The check runs at value entry,
//! before any token is consumed, so a run of opening brackets fails the
//! moment the bound is crossed.

use indexmap::IndexMap;
use log::trace;

use crate::decode::{decode_number, decode_string};
use crate::error::{ParseError, Result};
use crate::scanner::{next_token, skip_whitespace_and_comments, Token, TokenType};
use crate::unit::CodeUnit;
use crate::value::Value;

/// Deepest allowed nesting of arrays and objects. Exceeding it is an
/// ordinary parse failure rather than call-stack exhaustion.
const MAX_DEPTH: u32 = 1000;

/// Parse one complete document: a single value, then only whitespace and
/// comments to the end of input.
pub(crate) fn parse_document<C: CodeUnit>(input: &[C]) -> Result<Value> {
    trace!("parsing document of {} code units", input.len());
    let mut value = Value::Null;
    let end = parse_value(input, 0, 0, &mut value)?;
    let end = skip_whitespace_and_comments(input, end)?;
    if end != input.len() {
        trace!("unconsumed content at unit {}", end);
        return Err(ParseError);
    }
    Ok(value)
}

/// Build the value starting at `pos` into `out`, returning the position
/// after it. `depth` counts the arrays and objects already open around
/// the value.
///
/// This function and the two container parsers recur into each other
/// once per nesting level, so their frames hold little beyond a token
/// and a cursor. Scalar decoding and trace formatting live in their own
/// functions, off the chain.
fn parse_value<C: CodeUnit>(
    input: &[C],
    pos: usize,
    depth: u32,
    out: &mut Value,
) -> Result<usize> {
    if depth > MAX_DEPTH {
        return Err(depth_exceeded(depth));
    }
    let token = next_token(input, pos)?;
    match token.typ {
        TokenType::ArrayOpen => parse_array(input, token.end, depth, out),
        TokenType::ObjectOpen => parse_object(input, token.end, depth, out),
        _ => parse_scalar(input, token, out),
    }
}

/// Decode a token that must stand alone as a complete value.
fn parse_scalar<C: CodeUnit>(input: &[C], token: Token, out: &mut Value) -> Result<usize> {
    *out = match token.typ {
        TokenType::Null => Value::Null,
        TokenType::True => Value::Bool(true),
        TokenType::False => Value::Bool(false),
        TokenType::Number => decode_number(&input[token.start..token.end])?,
        TokenType::StringLiteral => {
            Value::String(decode_string(string_contents(input, token))?)
        }
        // A separator or closer where a value belongs.
        _ => return Err(ParseError),
    };
    Ok(token.end)
}

fn parse_array<C: CodeUnit>(
    input: &[C],
    mut pos: usize,
    depth: u32,
    out: &mut Value,
) -> Result<usize> {
    let mut items = Vec::new();
    if let Some(end) = peek_close(input, pos, TokenType::ArrayClose) {
        *out = Value::Array(items);
        return Ok(end);
    }
    loop {
        let mut item = Value::Null;
        pos = parse_value(input, pos, depth + 1, &mut item)?;
        items.push(item);
        let token = next_token(input, pos)?;
        match token.typ {
            TokenType::ArrayClose => {
                *out = Value::Array(items);
                return Ok(token.end);
            }
            TokenType::Comma => {
                pos = token.end;
                // A close directly after the comma is a trailing comma.
                if peek_close(input, pos, TokenType::ArrayClose).is_some() {
                    return Err(ParseError);
                }
            }
            _ => return Err(ParseError),
        }
    }
}

fn parse_object<C: CodeUnit>(
    input: &[C],
    mut pos: usize,
    depth: u32,
    out: &mut Value,
) -> Result<usize> {
    let mut entries = IndexMap::new();
    if let Some(end) = peek_close(input, pos, TokenType::ObjectClose) {
        *out = Value::Object(entries);
        return Ok(end);
    }
    loop {
        let key_token = next_token(input, pos)?;
        if key_token.typ != TokenType::StringLiteral {
            return Err(ParseError);
        }
        let key = decode_string(string_contents(input, key_token))?;
        let colon = next_token(input, key_token.end)?;
        if colon.typ != TokenType::Colon {
            return Err(ParseError);
        }
        let mut item = Value::Null;
        pos = parse_value(input, colon.end, depth + 1, &mut item)?;
        // A repeated key overwrites the earlier value but keeps the slot
        // of the first occurrence.
        entries.insert(key, item);
        let token = next_token(input, pos)?;
        match token.typ {
            TokenType::ObjectClose => {
                *out = Value::Object(entries);
                return Ok(token.end);
            }
            TokenType::Comma => {
                pos = token.end;
                if peek_close(input, pos, TokenType::ObjectClose).is_some() {
                    return Err(ParseError);
                }
            }
            _ => return Err(ParseError),
        }
    }
}

/// Peek for a specific closing token at `pos`. A scan failure is not an
/// error here; the caller proceeds and the failure surfaces on the next
/// committed scan, after the depth check has had its turn.
fn peek_close<C: CodeUnit>(input: &[C], pos: usize, typ: TokenType) -> Option<usize> {
    match next_token(input, pos) {
        Ok(token) if token.typ == typ => Some(token.end),
        _ => None,
    }
}

/// The span of a string token without its surrounding quotes.
fn string_contents<C: CodeUnit>(input: &[C], token: Token) -> &[C] {
    &input[token.start + 1..token.end - 1]
}

/// Report a crossing of the nesting bound. Separate from [`parse_value`]
/// so the trace formatting state stays out of the recursion frames.
fn depth_exceeded(depth: u32) -> ParseError {
    trace!("nesting depth {} exceeds {}", depth, MAX_DEPTH);
    ParseError
}
