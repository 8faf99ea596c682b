//! Stream configuration shared by a parser and every cursor it produces.

/// Delimiters, escape symbol and header handling for one input stream.
///
/// The defaults read plain comma separated lines:
///
/// ```
/// use typed_csv::CsvOptions;
///
/// let options = CsvOptions::default().with_lines_to_skip(1).with_column_delimiter(';');
/// assert_eq!(options.line_delimiter, '\n');
/// assert_eq!(options.column_delimiter, ';');
/// assert_eq!(options.escape_symbol, '"');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
	/// Number of lines consumed when the parser is constructed, e.g. a header.
	pub lines_to_skip: usize,
	pub line_delimiter: char,
	pub column_delimiter: char,
	/// Toggles an escaped section in which both delimiters are taken literally.
	pub escape_symbol: char,
	/// Remove a single `'\r'` at the end of every line before it is split.
	pub strip_carriage_return: bool,
}

impl CsvOptions {
	/// Create options from the positional constructor arguments.
	pub fn new(lines_to_skip: usize, line_delimiter: char, column_delimiter: char, escape_symbol: char) -> Self {
		CsvOptions {
			lines_to_skip,
			line_delimiter,
			column_delimiter,
			escape_symbol,
			strip_carriage_return: false,
		}
	}

	pub fn with_lines_to_skip(mut self, lines_to_skip: usize) -> Self {
		self.lines_to_skip = lines_to_skip;
		self
	}

	pub fn with_line_delimiter(mut self, line_delimiter: char) -> Self {
		self.line_delimiter = line_delimiter;
		self
	}

	pub fn with_column_delimiter(mut self, column_delimiter: char) -> Self {
		self.column_delimiter = column_delimiter;
		self
	}

	pub fn with_escape_symbol(mut self, escape_symbol: char) -> Self {
		self.escape_symbol = escape_symbol;
		self
	}

	pub fn with_strip_carriage_return(mut self, strip_carriage_return: bool) -> Self {
		self.strip_carriage_return = strip_carriage_return;
		self
	}
}

impl Default for CsvOptions {
	fn default() -> Self {
		CsvOptions::new(0, '\n', ',', '"')
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let options = CsvOptions::default();
		assert_eq!(options.lines_to_skip, 0);
		assert_eq!(options.line_delimiter, '\n');
		assert_eq!(options.column_delimiter, ',');
		assert_eq!(options.escape_symbol, '"');
		assert!(!options.strip_carriage_return);
	}

	#[test]
	fn test_builder_matches_positional_constructor() {
		let built = CsvOptions::default()
			.with_lines_to_skip(2)
			.with_line_delimiter('|')
			.with_column_delimiter(':')
			.with_escape_symbol('\'');
		assert_eq!(built, CsvOptions::new(2, '|', ':', '\''));
		assert!(built.with_strip_carriage_return(true).strip_carriage_return);
	}
}
