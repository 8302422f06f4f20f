//! Error types for form parsing.

use thiserror::Error;

/// Errors raised while turning XML text into a form model.
///
/// Parsing is deliberately permissive: missing optional elements,
/// unknown field kinds, and empty option lists all fall back to
/// documented defaults instead of failing. The only failure mode is
/// input that is not well-formed XML.
#[derive(Debug, Error)]
pub enum ParseError {
	/// The input could not be parsed as XML at all.
	#[error("malformed XML input: {0}")]
	MalformedInput(String),
}

/// Result alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
