//! Error type for JSONC parsing.

use thiserror::Error;

/// Result type for JSONC parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for JSONC parsing.
///
/// Parsing has exactly one failure outcome. The error is deliberately
/// opaque: it carries no position, no error code, and no payload, so a
/// rejected document reveals nothing about where or why it was rejected.
/// Callers that need diagnostics must track positions themselves.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("invalid JSONC document")]
pub struct ParseError;
