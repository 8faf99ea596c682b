//! The parser factory: owns the stream configuration and hands out cursors.

use crate::{
	CsvError, CsvOptions, Record, RecordCursor, Records, Result, line_reader::LineReader, reader::RecordReader,
};
use std::{io::BufRead, marker::PhantomData};

/// Streaming reader of records of type `T` from the stream `R`.
///
/// Pass `&mut reader` to keep ownership of the stream; the parser only ever reads it forward.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use typed_csv::{CsvOptions, CsvParser};
/// # fn main() -> typed_csv::Result<()> {
/// let input = "name,age\n\"Doe, Jane\",29\nJohn,30\n";
/// let options = CsvOptions::default().with_lines_to_skip(1);
/// let mut parser = CsvParser::<_, (String, u8)>::with_options(Cursor::new(input), options)?;
/// assert_eq!(parser.start_line(), 2);
///
/// let people = parser.records().collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(people, vec![("Doe, Jane".to_string(), 29), ("John".to_string(), 30)]);
/// # Ok(()) }
/// ```
pub struct CsvParser<R, T> {
	reader: R,
	options: CsvOptions,
	start_line: usize,
	record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: Record> CsvParser<R, T> {
	/// Creates a parser with the default options.
	pub fn new(reader: R) -> Result<Self> {
		Self::with_options(reader, CsvOptions::default())
	}

	/// Creates a parser from the positional arguments
	/// `lines_to_skip`, `line_delimiter`, `column_delimiter` and `escape_symbol`.
	pub fn with_config(
		reader: R,
		lines_to_skip: usize,
		line_delimiter: char,
		column_delimiter: char,
		escape_symbol: char,
	) -> Result<Self> {
		Self::with_options(
			reader,
			CsvOptions::new(lines_to_skip, line_delimiter, column_delimiter, escape_symbol),
		)
	}

	/// Creates a parser and skips `options.lines_to_skip` lines.
	///
	/// Skipping stops silently at the end of input. Records are numbered from the first line
	/// after the skipped ones.
	///
	/// # Errors
	/// Returns [`CsvError::StreamUnreadable`] if the stream cannot be read at all.
	pub fn with_options(mut reader: R, options: CsvOptions) -> Result<Self> {
		reader.fill_buf().map_err(CsvError::StreamUnreadable)?;

		let skipped = LineReader::new(&mut reader, &options).skip_lines(options.lines_to_skip)?;
		if skipped < options.lines_to_skip {
			log::debug!(
				"input ended after {skipped} of {} lines to skip",
				options.lines_to_skip
			);
		}

		let start_line = 1 + skipped;
		log::debug!("created csv parser with {options:?}, records start at line {start_line}");

		Ok(CsvParser {
			reader,
			options,
			start_line,
			record: PhantomData,
		})
	}

	/// A cursor at the current stream position holding the first record, or an exhausted cursor
	/// if the stream has no more input.
	pub fn begin(&mut self) -> Result<RecordCursor<'_, R, T>> {
		RecordCursor::open(self.record_reader())
	}

	/// The exhausted cursor that [`begin`](Self::begin) is compared against.
	///
	/// It does not borrow the parser, so it can be obtained before calling `begin`.
	pub fn end<'c>(&self) -> RecordCursor<'c, R, T>
	where
		R: 'c,
	{
		RecordCursor::exhausted()
	}

	/// A lazy iterator over the remaining records.
	pub fn records(&mut self) -> Records<'_, R, T> {
		Records::new(self.record_reader())
	}

	fn record_reader(&mut self) -> RecordReader<'_, R> {
		RecordReader::new(&mut self.reader, &self.options, self.start_line)
	}
}

impl<R, T> CsvParser<R, T> {
	/// 1-based number of the first line after the skipped ones.
	pub fn start_line(&self) -> usize {
		self.start_line
	}

	pub fn options(&self) -> &CsvOptions {
		&self.options
	}

	pub fn get_ref(&self) -> &R {
		&self.reader
	}

	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<'a, R: BufRead, T: Record> IntoIterator for &'a mut CsvParser<R, T> {
	type Item = Result<T>;
	type IntoIter = Records<'a, R, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.records()
	}
}
