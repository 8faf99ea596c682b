//! Begin/end cursor over typed records.
//!
//! A [`RecordCursor`] is either *live*, holding the stream, the current record and its line
//! number, or *exhausted*. A freshly opened cursor has already loaded its first record. Advancing
//! an exhausted cursor is a no-op, so the end of input can be passed any number of times.

use crate::{CsvError, Record, Result, reader::RecordReader};
use std::{fmt, io::BufRead, iter::FusedIterator};

enum CursorState<'a, R, T> {
	Live {
		reader: RecordReader<'a, R>,
		line: usize,
		record: T,
	},
	Exhausted,
}

/// Position in a stream of typed records, see [`CsvParser::begin`](crate::CsvParser::begin).
///
/// ```
/// use std::io::Cursor;
/// use typed_csv::CsvParser;
///
/// let mut parser = CsvParser::<_, (String, i32)>::new(Cursor::new("a,1\nb,2\n")).unwrap();
/// let end = parser.end();
/// let mut cursor = parser.begin().unwrap();
/// let mut seen = Vec::new();
/// while cursor != end {
/// 	seen.push(cursor.current().unwrap().clone());
/// 	cursor.advance().unwrap();
/// }
/// assert_eq!(seen, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
/// ```
pub struct RecordCursor<'a, R, T> {
	state: CursorState<'a, R, T>,
	pending: Option<CsvError>,
}

impl<'a, R, T> RecordCursor<'a, R, T> {
	/// An exhausted cursor, equal to every other exhausted cursor.
	pub fn exhausted() -> Self {
		RecordCursor {
			state: CursorState::Exhausted,
			pending: None,
		}
	}

	pub fn is_exhausted(&self) -> bool {
		matches!(self.state, CursorState::Exhausted)
	}

	/// 1-based line number of the current record.
	pub fn line_number(&self) -> Option<usize> {
		match &self.state {
			CursorState::Live { line, .. } => Some(*line),
			CursorState::Exhausted => None,
		}
	}

	/// The current record.
	///
	/// # Errors
	/// Returns [`CsvError::Exhausted`] if the cursor holds no record.
	pub fn current(&self) -> Result<&T> {
		match &self.state {
			CursorState::Live { record, .. } => Ok(record),
			CursorState::Exhausted => Err(CsvError::Exhausted),
		}
	}
}

impl<'a, R: BufRead, T: Record> RecordCursor<'a, R, T> {
	/// Opens a cursor and loads the first record.
	///
	/// A stream that cannot be read at this point yields an exhausted cursor.
	pub(crate) fn open(mut reader: RecordReader<'a, R>) -> Result<Self> {
		let mut cursor = RecordCursor::exhausted();
		if let Err(err) = reader.check_readable() {
			log::warn!("stream is not readable, cursor starts exhausted: {err}");
			return Ok(cursor);
		}
		cursor.load(reader)?;
		Ok(cursor)
	}

	/// Reads the next record into the cursor.
	///
	/// On end of input or on error the reader is dropped and the cursor stays exhausted.
	fn load(&mut self, mut reader: RecordReader<'a, R>) -> Result<()> {
		if let Some((line, record)) = reader.read_next::<T>()? {
			self.state = CursorState::Live { reader, line, record };
		} else {
			log::debug!("cursor exhausted");
		}
		Ok(())
	}

	/// Moves to the next record.
	///
	/// Does nothing on an exhausted cursor. After an error the cursor is exhausted.
	pub fn advance(&mut self) -> Result<()> {
		match std::mem::replace(&mut self.state, CursorState::Exhausted) {
			CursorState::Live { reader, .. } => self.load(reader),
			CursorState::Exhausted => Ok(()),
		}
	}

	/// Moves to the next record and returns the one that was current before.
	pub fn advance_post(&mut self) -> Result<Option<T>> {
		match std::mem::replace(&mut self.state, CursorState::Exhausted) {
			CursorState::Live { reader, record, .. } => {
				self.load(reader)?;
				Ok(Some(record))
			}
			CursorState::Exhausted => Ok(None),
		}
	}
}

/// Yields the cached record, then advances. An advance error is yielded on the following call.
impl<R: BufRead, T: Record> Iterator for RecordCursor<'_, R, T> {
	type Item = Result<T>;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(err) = self.pending.take() {
			return Some(Err(err));
		}
		match std::mem::replace(&mut self.state, CursorState::Exhausted) {
			CursorState::Live { reader, record, .. } => {
				if let Err(err) = self.load(reader) {
					self.pending = Some(err);
				}
				Some(Ok(record))
			}
			CursorState::Exhausted => None,
		}
	}
}

impl<R: BufRead, T: Record> FusedIterator for RecordCursor<'_, R, T> {}

impl<R, T> PartialEq for RecordCursor<'_, R, T> {
	fn eq(&self, other: &Self) -> bool {
		match (&self.state, &other.state) {
			(CursorState::Exhausted, CursorState::Exhausted) => true,
			(
				CursorState::Live { reader, line, .. },
				CursorState::Live {
					reader: other_reader,
					line: other_line,
					..
				},
			) => line == other_line && reader.same_stream(other_reader),
			_ => false,
		}
	}
}

impl<R, T> fmt::Debug for RecordCursor<'_, R, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.state {
			CursorState::Live { line, .. } => f
				.debug_struct("RecordCursor")
				.field("line", line)
				.finish_non_exhaustive(),
			CursorState::Exhausted => f.write_str("RecordCursor(Exhausted)"),
		}
	}
}
