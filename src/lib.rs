//! A strict parser for JSON with comments.
//!
//! The dialect is JSON extended with `//` line comments and `/* */` block
//! comments, parsed into an owned [`Value`] tree. Everything else stays
//! strict: no trailing commas, no unquoted keys, exactly one document per
//! input. Parsing runs in three phases:
//!
//! - **Scan**: classify one token at a time, skipping whitespace and
//!   comments and validating literal shapes without interpreting them
//! - **Decode**: turn string spans into UTF-16 code unit sequences and
//!   number spans into integers or doubles
//! - **Build**: recursive descent over the tokens, assembling arrays and
//!   objects under a fixed nesting bound
//!
//! Input is a sequence of code units, either narrow bytes with Latin-1
//! semantics ([`parse_latin1`]) or wide UTF-16 units ([`parse_utf16`]).
//! [`parse`] picks the path for a Rust string: ASCII text scans as bytes,
//! anything else is widened to UTF-16 first, so supplementary characters
//! arrive as surrogate pairs and come back out intact.
//!
//! Object entries keep their insertion order; a repeated key overwrites
//! the earlier value in place. Failures carry no detail beyond
//! [`ParseError`] itself.
//!
//! ```
//! use jsonc::Value;
//!
//! let value = jsonc::parse(
//!     r#"
//!     {
//!         "name": "hauler", // display name
//!         "size": [4, 2],
//!         /* tuning */
//!         "mass": 12.5
//!     }
//!     "#,
//! )
//! .unwrap();
//!
//! let object = value.as_object().unwrap();
//! assert_eq!(object["name"], Value::String("hauler".into()));
//! assert_eq!(object["size"], Value::Array(vec![Value::Integer(4), Value::Integer(2)]));
//! assert_eq!(object["mass"], Value::Float(12.5));
//! ```

mod decode;
mod error;
mod parser;
mod scanner;
mod unit;
mod value;

pub use error::{ParseError, Result};
pub use indexmap::IndexMap;
pub use value::Value;

/// Parse a document from a string.
///
/// ASCII input takes the narrow scanning path directly; input with any
/// other character is widened to UTF-16 code units first.
///
/// ```
/// let value = jsonc::parse("[1, 2, 3] // counts").unwrap();
/// assert_eq!(value.as_array().unwrap().len(), 3);
///
/// let value = jsonc::parse("\"snow \u{2603}\"").unwrap();
/// assert_eq!(value.as_str(), Some("snow ☃"));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    if input.is_ascii() {
        parser::parse_document(input.as_bytes())
    } else {
        let wide: Vec<u16> = input.encode_utf16().collect();
        parser::parse_document(&wide)
    }
}

/// Parse a document from narrow 8-bit code units.
///
/// Each byte is one code unit with Latin-1 semantics, so bytes in
/// 0x80..=0xFF decode to the matching U+0080..=U+00FF characters. This is
/// not a UTF-8 entry point.
///
/// ```
/// let value = jsonc::parse_latin1(b"\"caf\xE9\"").unwrap();
/// assert_eq!(value.as_str(), Some("café"));
/// ```
pub fn parse_latin1(input: &[u8]) -> Result<Value> {
    parser::parse_document(input)
}

/// Parse a document from wide 16-bit code units (UTF-16, native order).
///
/// ```
/// let wide: Vec<u16> = "{\"ok\": true}".encode_utf16().collect();
/// let value = jsonc::parse_utf16(&wide).unwrap();
/// assert_eq!(value.as_object().unwrap()["ok"], jsonc::Value::Bool(true));
/// ```
pub fn parse_utf16(input: &[u16]) -> Result<Value> {
    parser::parse_document(input)
}
