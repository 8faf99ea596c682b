use crate::{CsvOptions, Record, Result, Segmenter, line_reader::LineReader};
use std::io::BufRead;

/// Reads, splits and converts one line per call, keeping track of the line number.
pub(crate) struct RecordReader<'a, R> {
	lines: LineReader<'a, R>,
	segmenter: Segmenter,
	next_line: usize,
}

impl<'a, R: BufRead> RecordReader<'a, R> {
	pub fn new(reader: &'a mut R, options: &CsvOptions, start_line: usize) -> Self {
		RecordReader {
			lines: LineReader::new(reader, options),
			segmenter: Segmenter::from_options(options),
			next_line: start_line,
		}
	}

	pub fn check_readable(&mut self) -> std::io::Result<()> {
		self.lines.check_readable()
	}

	/// Returns the next record with its line number, or `None` at end of input.
	pub fn read_next<T: Record>(&mut self) -> Result<Option<(usize, T)>> {
		let line = self.next_line;
		let Some(text) = self.lines.read_line(line)? else {
			log::debug!("end of input reached before line {line}");
			return Ok(None);
		};
		let fields = self.segmenter.split_exact(text, line, T::ARITY)?;
		let record = T::from_fields(fields, line)?;
		self.next_line += 1;
		Ok(Some((line, record)))
	}
}

impl<R> RecordReader<'_, R> {
	pub fn same_stream(&self, other: &RecordReader<'_, R>) -> bool {
		self.lines.same_stream(&other.lines)
	}
}
