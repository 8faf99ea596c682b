//! Pulls logical lines out of a buffered byte stream.
//!
//! The `LineReader` borrows any [`BufRead`] source and splits it on the configured line delimiter.
//! The delimiter may be any `char`: its UTF-8 encoding is matched as a whole, so multi-byte
//! delimiters work even when their final byte also occurs inside other characters.

use crate::{CsvError, CsvOptions, Result};
use std::io::BufRead;

/// Reads one logical line at a time from a borrowed stream.
///
/// # Fields
///
/// * `reader` - The borrowed source. It is only ever read forward.
/// * `delimiter` - UTF-8 encoding of the line delimiter, `delimiter_len` bytes long.
/// * `strip_carriage_return` - Drop a single trailing `'\r'` from every line.
/// * `buffer` - Bytes of the most recently read line, without the delimiter.
pub(crate) struct LineReader<'a, R> {
	reader: &'a mut R,
	delimiter: [u8; 4],
	delimiter_len: usize,
	strip_carriage_return: bool,
	buffer: Vec<u8>,
}

impl<'a, R: BufRead> LineReader<'a, R> {
	/// Creates a new `LineReader` over `reader`.
	///
	/// # Arguments
	///
	/// * `reader` - The source to read lines from.
	/// * `options` - Supplies the line delimiter and carriage return handling.
	pub fn new(reader: &'a mut R, options: &CsvOptions) -> Self {
		let mut delimiter = [0u8; 4];
		let delimiter_len = options.line_delimiter.encode_utf8(&mut delimiter).len();
		LineReader {
			reader,
			delimiter,
			delimiter_len,
			strip_carriage_return: options.strip_carriage_return,
			buffer: Vec::with_capacity(256),
		}
	}

	/// Reads the next line into the internal buffer.
	///
	/// # Returns
	///
	/// `false` if the stream was already at its end, i.e. not a single byte could be read.
	fn fill_line(&mut self, line: usize) -> Result<bool> {
		self.buffer.clear();
		let delimiter = &self.delimiter[..self.delimiter_len];
		let last_byte = delimiter[self.delimiter_len - 1];

		loop {
			let read = self
				.reader
				.read_until(last_byte, &mut self.buffer)
				.map_err(|source| CsvError::Io { line, source })?;
			if read == 0 {
				if self.buffer.is_empty() {
					return Ok(false);
				}
				break;
			}
			if self.buffer.ends_with(delimiter) {
				self.buffer.truncate(self.buffer.len() - self.delimiter_len);
				break;
			}
		}

		if self.strip_carriage_return && self.buffer.last() == Some(&b'\r') {
			self.buffer.pop();
		}
		log::trace!("read line {line} ({} bytes)", self.buffer.len());
		Ok(true)
	}

	/// Reads the next line and decodes it as UTF-8.
	///
	/// # Arguments
	///
	/// * `line` - 1-based number of the line about to be read, used for diagnostics.
	///
	/// # Returns
	///
	/// `None` at end of input, otherwise the line without its delimiter.
	///
	/// # Errors
	///
	/// Fails with [`CsvError::Io`] if the stream reports an error and with
	/// [`CsvError::InvalidUtf8`] if the line is not valid UTF-8.
	pub fn read_line(&mut self, line: usize) -> Result<Option<&str>> {
		if !self.fill_line(line)? {
			return Ok(None);
		}
		std::str::from_utf8(&self.buffer)
			.map(Some)
			.map_err(|_| CsvError::InvalidUtf8 { line })
	}

	/// Asks the stream for more bytes without consuming any.
	pub fn check_readable(&mut self) -> std::io::Result<()> {
		self.reader.fill_buf().map(|_| ())
	}

	/// Consumes up to `count` lines without decoding them.
	///
	/// Stops early, without an error, when the stream ends first.
	///
	/// # Returns
	///
	/// The number of lines actually skipped.
	pub fn skip_lines(&mut self, count: usize) -> Result<usize> {
		for skipped in 0..count {
			if !self.fill_line(skipped + 1)? {
				return Ok(skipped);
			}
		}
		Ok(count)
	}
}

impl<R> LineReader<'_, R> {
	/// Whether `other` reads from the very same stream object.
	pub fn same_stream(&self, other: &LineReader<'_, R>) -> bool {
		std::ptr::eq::<R>(&*self.reader, &*other.reader)
	}
}
