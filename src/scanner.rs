//! Phase 1: Token scanner.
//!
//! The scanner classifies one lexical unit at a time, reporting its exact
//! span in code units. It performs:
//! - Whitespace and comment skipping (`//` line and `/* */` block styles)
//! - Structural punctuation classification
//! - Literal keyword matching (null, true, false) with no backtracking
//! - Number shape validation (sign, integer, fraction, exponent)
//! - String token bounding, validating escape shapes without decoding them
//!
//! The scanner never interprets literal contents; string and number spans
//! are handed to the decoders once classified.

use crate::error::{ParseError, Result};
use crate::unit::{ascii_at, CodeUnit};

/// Token type produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenType {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `null` keyword.
    Null,
    /// `true` keyword.
    True,
    /// `false` keyword.
    False,
    /// Number literal, shape-checked but not yet converted.
    Number,
    /// Quoted string literal, escapes validated but not yet decoded.
    StringLiteral,
}

/// A classified token and its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub typ: TokenType,
    /// Offset of the first code unit of the token.
    pub start: usize,
    /// Offset one past the last code unit of the token. String spans
    /// include both quotes.
    pub end: usize,
}

impl Token {
    fn new(typ: TokenType, start: usize, end: usize) -> Self {
        Self { typ, start, end }
    }
}

/// Advance past whitespace and comments starting at `pos`.
///
/// Whitespace is ASCII space, tab, line feed, and carriage return. A line
/// comment ends at a newline or at end of input; running out of input mid
/// line comment is not an error. A block comment with no closing `*/` is a
/// hard failure.
pub(crate) fn skip_whitespace_and_comments<C: CodeUnit>(
    input: &[C],
    mut pos: usize,
) -> Result<usize> {
    loop {
        match ascii_at(input, pos) {
            Some(b' ' | b'\t' | b'\n' | b'\r') => pos += 1,
            Some(b'/') => match ascii_at(input, pos + 1) {
                Some(b'/') => {
                    pos += 2;
                    while pos < input.len()
                        && !matches!(ascii_at(input, pos), Some(b'\n' | b'\r'))
                    {
                        pos += 1;
                    }
                }
                Some(b'*') => pos = skip_block_comment(input, pos + 2)?,
                // A lone slash is not whitespace; classification rejects it.
                _ => return Ok(pos),
            },
            _ => return Ok(pos),
        }
    }
}

/// Scan past a block comment body to just after the first `*/`.
fn skip_block_comment<C: CodeUnit>(input: &[C], mut pos: usize) -> Result<usize> {
    while pos + 1 < input.len() {
        if ascii_at(input, pos) == Some(b'*') && ascii_at(input, pos + 1) == Some(b'/') {
            return Ok(pos + 2);
        }
        pos += 1;
    }
    Err(ParseError)
}

/// Classify exactly one token at the first non-skipped position at or
/// after `pos`. Running out of input, or any character that starts no
/// token, is a failure.
pub(crate) fn next_token<C: CodeUnit>(input: &[C], pos: usize) -> Result<Token> {
    let start = skip_whitespace_and_comments(input, pos)?;
    match ascii_at(input, start).ok_or(ParseError)? {
        b'{' => Ok(Token::new(TokenType::ObjectOpen, start, start + 1)),
        b'}' => Ok(Token::new(TokenType::ObjectClose, start, start + 1)),
        b'[' => Ok(Token::new(TokenType::ArrayOpen, start, start + 1)),
        b']' => Ok(Token::new(TokenType::ArrayClose, start, start + 1)),
        b',' => Ok(Token::new(TokenType::Comma, start, start + 1)),
        b':' => Ok(Token::new(TokenType::Colon, start, start + 1)),
        b'n' => {
            let end = scan_keyword(input, start, "null")?;
            Ok(Token::new(TokenType::Null, start, end))
        }
        b't' => {
            let end = scan_keyword(input, start, "true")?;
            Ok(Token::new(TokenType::True, start, end))
        }
        b'f' => {
            let end = scan_keyword(input, start, "false")?;
            Ok(Token::new(TokenType::False, start, end))
        }
        b'"' => {
            let end = scan_string(input, start + 1)?;
            Ok(Token::new(TokenType::StringLiteral, start, end))
        }
        b'-' | b'0'..=b'9' => {
            let end = scan_number(input, start)?;
            Ok(Token::new(TokenType::Number, start, end))
        }
        _ => Err(ParseError),
    }
}

/// Match a keyword literally, character by character. A prefix that fails
/// partway is a failure; there is no fallback to a shorter match.
fn scan_keyword<C: CodeUnit>(input: &[C], pos: usize, word: &str) -> Result<usize> {
    for (i, b) in word.bytes().enumerate() {
        if ascii_at(input, pos + i) != Some(b) {
            return Err(ParseError);
        }
    }
    Ok(pos + word.len())
}

/// Scan a string token body. `pos` is the unit after the opening quote;
/// the returned end is one past the closing quote. Escape shapes are
/// validated (including the hex digit counts of `\x` and `\u`) but not
/// interpreted. No closing quote before end of input is a failure.
fn scan_string<C: CodeUnit>(input: &[C], mut pos: usize) -> Result<usize> {
    while pos < input.len() {
        match ascii_at(input, pos) {
            Some(b'\\') => {
                pos += 1;
                match ascii_at(input, pos).ok_or(ParseError)? {
                    b'"' | b'/' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' => pos += 1,
                    b'x' => pos = scan_hex_digits(input, pos + 1, 2)?,
                    b'u' => pos = scan_hex_digits(input, pos + 1, 4)?,
                    _ => return Err(ParseError),
                }
            }
            Some(b'"') => return Ok(pos + 1),
            // Everything else, ASCII or not, is string content.
            _ => pos += 1,
        }
    }
    Err(ParseError)
}

/// Require exactly `count` hex digits starting at `pos`.
fn scan_hex_digits<C: CodeUnit>(input: &[C], pos: usize, count: usize) -> Result<usize> {
    let end = pos + count;
    if end > input.len() {
        return Err(ParseError);
    }
    for i in pos..end {
        match ascii_at(input, i) {
            Some(b) if b.is_ascii_hexdigit() => {}
            _ => return Err(ParseError),
        }
    }
    Ok(end)
}

/// Validate the lexical shape of a number starting at `pos` and return its
/// end. Shape: optional minus, then a lone zero or a nonzero digit run,
/// then an optional fraction (digits required after the dot), then an
/// optional exponent (optional sign, digits required). A leading zero
/// followed by more digits ends the token after the zero; the leftover
/// digits are the next token's problem.
fn scan_number<C: CodeUnit>(input: &[C], mut pos: usize) -> Result<usize> {
    if ascii_at(input, pos) == Some(b'-') {
        pos += 1;
    }
    match ascii_at(input, pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = skip_digits(input, pos + 1),
        _ => return Err(ParseError),
    }
    if ascii_at(input, pos) == Some(b'.') {
        pos = require_digits(input, pos + 1)?;
    }
    if let Some(b'e' | b'E') = ascii_at(input, pos) {
        pos += 1;
        if let Some(b'+' | b'-') = ascii_at(input, pos) {
            pos += 1;
        }
        pos = require_digits(input, pos)?;
    }
    Ok(pos)
}

/// Advance past a run of decimal digits.
fn skip_digits<C: CodeUnit>(input: &[C], mut pos: usize) -> usize {
    while let Some(b'0'..=b'9') = ascii_at(input, pos) {
        pos += 1;
    }
    pos
}

/// Advance past a run of decimal digits, requiring at least one.
fn require_digits<C: CodeUnit>(input: &[C], pos: usize) -> Result<usize> {
    let end = skip_digits(input, pos);
    if end == pos {
        return Err(ParseError);
    }
    Ok(end)
}
