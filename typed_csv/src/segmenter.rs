//! Splits one logical line into raw string fields.
//!
//! The dialect is deliberately minimal: the escape symbol toggles an escaped section in which the
//! column delimiter (and, at the stream level, the line delimiter) is taken literally. There is no
//! doubled-escape convention as in RFC 4180, so `"a""b"` reads as `ab`.

use crate::{CsvError, CsvOptions, Result};

/// Scanner that turns a line into its raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
	column_delimiter: char,
	escape_symbol: char,
}

impl Segmenter {
	/// When both symbols are equal, the column delimiter takes precedence.
	pub fn new(column_delimiter: char, escape_symbol: char) -> Self {
		Segmenter {
			column_delimiter,
			escape_symbol,
		}
	}

	pub fn from_options(options: &CsvOptions) -> Self {
		Segmenter::new(options.column_delimiter, options.escape_symbol)
	}

	/// Splits `line` into raw fields, removing escape symbols.
	///
	/// A trailing column delimiter denotes an explicit empty last field, so `1,2,3,` yields four
	/// fields. An empty line yields no fields at all.
	///
	/// # Arguments
	/// * `line` — The line content without its line delimiter.
	/// * `line_number` — 1-based line number used in diagnostics.
	///
	/// # Errors
	/// Returns [`CsvError::MalformedEscape`] if the line ends inside an escaped section.
	pub fn split(&self, line: &str, line_number: usize) -> Result<Vec<String>> {
		let mut fields = Vec::new();
		let mut value = String::new();
		let mut escape_opened_at: Option<usize> = None;
		let mut last_symbol = None;
		let mut column = 1;

		for symbol in line.chars() {
			if escape_opened_at.is_some() {
				if symbol == self.escape_symbol {
					escape_opened_at = None;
				} else {
					value.push(symbol);
				}
			} else if symbol == self.column_delimiter {
				fields.push(std::mem::take(&mut value));
			} else if symbol == self.escape_symbol {
				escape_opened_at = Some(column);
			} else {
				value.push(symbol);
			}
			last_symbol = Some(symbol);
			column += 1;
		}

		if let Some(opened_at) = escape_opened_at {
			return Err(CsvError::MalformedEscape {
				line: line_number,
				column,
				opened_at,
			});
		}

		if !value.is_empty() || last_symbol == Some(self.column_delimiter) {
			fields.push(value);
		}

		Ok(fields)
	}

	/// Like [`split`](Self::split), but also requires exactly `arity` fields.
	///
	/// # Errors
	/// Returns [`CsvError::ColumnCountMismatch`] when the field count differs from `arity`.
	pub fn split_exact(&self, line: &str, line_number: usize, arity: usize) -> Result<Vec<String>> {
		let fields = self.split(line, line_number)?;
		if fields.len() != arity {
			return Err(CsvError::ColumnCountMismatch {
				line: line_number,
				column: line.chars().count() + 1,
				expected: arity,
				actual: fields.len(),
			});
		}
		Ok(fields)
	}
}

impl Default for Segmenter {
	fn default() -> Self {
		Segmenter::from_options(&CsvOptions::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn split(line: &str) -> Vec<String> {
		Segmenter::default().split(line, 1).unwrap()
	}

	#[rstest]
	#[case("1,2,3", &["1", "2", "3"])]
	#[case("1,2,3,", &["1", "2", "3", ""])]
	#[case(",2", &["", "2"])]
	#[case("1,,3", &["1", "", "3"])]
	#[case(",", &["", ""])]
	#[case("", &[])]
	#[case("single", &["single"])]
	#[case(" padded , kept ", &[" padded ", " kept "])]
	fn test_split_plain(#[case] line: &str, #[case] expected: &[&str]) {
		assert_eq!(split(line), expected);
	}

	#[rstest]
	#[case("\"a,b\",c", &["a,b", "c"])]
	#[case("x,\"line\nbreak\"", &["x", "line\nbreak"])]
	#[case("pre\"mid,dle\"post,z", &["premid,dlepost", "z"])]
	#[case("\"a\"\"b\"", &["ab"])]
	#[case("\"\",x", &["", "x"])]
	#[case("\"quoted\"", &["quoted"])]
	fn test_split_escaped(#[case] line: &str, #[case] expected: &[&str]) {
		assert_eq!(split(line), expected);
	}

	#[test]
	fn test_split_empty_escaped_last_field_is_dropped() {
		// Nothing accumulated and the last symbol is not a delimiter.
		assert_eq!(split("a,\"\""), vec!["a"]);
	}

	#[rstest]
	#[case(&["alpha"])]
	#[case(&["alpha", "beta"])]
	#[case(&["alpha", "", "gamma delta", "42", "-1.5e3"])]
	#[case(&["", "x"])]
	#[case(&["x", ""])]
	#[case(&["", "", ""])]
	#[case(&[" ", "  ", "\t"])]
	fn test_split_round_trip(#[case] values: &[&str]) {
		assert_eq!(split(&values.join(",")), values);
	}

	#[test]
	fn test_split_custom_symbols() {
		let segmenter = Segmenter::new(':', '\'');
		assert_eq!(segmenter.split("x:'a:b'", 1).unwrap(), vec!["x", "a:b"]);
		assert_eq!(segmenter.split("y:c", 2).unwrap(), vec!["y", "c"]);
		assert_eq!(segmenter.split("a,b:\"c\"", 3).unwrap(), vec!["a,b", "\"c\""]);
	}

	#[test]
	fn test_split_unterminated_escape() {
		let err = Segmenter::default().split("ok,\"open", 4).unwrap_err();
		match err {
			CsvError::MalformedEscape { line, column, opened_at } => {
				assert_eq!(line, 4);
				assert_eq!(column, 9);
				assert_eq!(opened_at, 4);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_delimiter_wins_over_equal_escape() {
		let segmenter = Segmenter::new(',', ',');
		assert_eq!(segmenter.split("a,b", 1).unwrap(), vec!["a", "b"]);
	}

	#[rstest]
	#[case("1,2,3", 3, None)]
	#[case("1,2,3,", 4, None)]
	#[case("1,2,3", 2, Some(3))]
	#[case("1,2,3", 4, Some(3))]
	#[case("", 1, Some(0))]
	#[case("", 0, None)]
	fn test_split_exact(#[case] line: &str, #[case] arity: usize, #[case] mismatch: Option<usize>) {
		let result = Segmenter::default().split_exact(line, 7, arity);
		match (result, mismatch) {
			(Ok(fields), None) => assert_eq!(fields.len(), arity),
			(
				Err(CsvError::ColumnCountMismatch {
					line: 7,
					column,
					expected,
					actual,
				}),
				Some(count),
			) => {
				assert_eq!(column, line.chars().count() + 1);
				assert_eq!(expected, arity);
				assert_eq!(actual, count);
			}
			(other, _) => panic!("unexpected result: {other:?}"),
		}
	}
}
