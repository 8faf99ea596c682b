//! Errors raised while reading typed records.
//!
//! Every variant carries the context needed to render an actionable diagnostic: the 1-based
//! line number and, for column-level failures, the 1-based column, the offending raw text and
//! the declared target type.

use std::io;
use thiserror::Error;

/// Boxed error returned by [`FromField`](crate::FromField) implementations.
pub type FieldError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = CsvError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CsvError {
	/// The input stream could not be read when the parser was constructed.
	#[error("Impossible to read from input stream: {0}")]
	StreamUnreadable(#[source] io::Error),

	/// Reading from the stream failed after the parser was constructed.
	#[error("Error reading line {line} from input stream: {source}")]
	Io {
		line: usize,
		#[source]
		source: io::Error,
	},

	#[error("Error decoding line {line}: stream content is not valid UTF-8")]
	InvalidUtf8 { line: usize },

	/// The line ended while an escaped section opened at `opened_at` was still open.
	#[error(
		"Error parsing at line {line} and column {column}. Line interrupted inside escaped section opened at column {opened_at}"
	)]
	MalformedEscape { line: usize, column: usize, opened_at: usize },

	#[error(
		"Error parsing at line {line} and column {column}. Expected to find {expected} entries in the line but extracted {actual}."
	)]
	ColumnCountMismatch {
		line: usize,
		column: usize,
		expected: usize,
		actual: usize,
	},

	#[error(
		"Failed to convert data on the line {line} and column (of the CSV table) {column}, failed to convert extracted string '{raw}' to {type_name}: {source}"
	)]
	FieldConversion {
		line: usize,
		column: usize,
		raw: String,
		type_name: &'static str,
		#[source]
		source: FieldError,
	},

	/// A record was requested from a cursor that has no current record.
	#[error("cursor is exhausted and holds no record")]
	Exhausted,
}

impl CsvError {
	/// Returns the line this error refers to, if it refers to one.
	pub fn line(&self) -> Option<usize> {
		match self {
			CsvError::Io { line, .. }
			| CsvError::InvalidUtf8 { line }
			| CsvError::MalformedEscape { line, .. }
			| CsvError::ColumnCountMismatch { line, .. }
			| CsvError::FieldConversion { line, .. } => Some(*line),
			CsvError::StreamUnreadable(_) | CsvError::Exhausted => None,
		}
	}
}
