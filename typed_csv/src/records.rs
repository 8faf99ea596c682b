use crate::{Record, Result, reader::RecordReader};
use std::{io::BufRead, iter::FusedIterator, marker::PhantomData};

/// Lazy iterator over the records of a [`CsvParser`](crate::CsvParser).
///
/// Reads one line per call to `next`. After the first error it yields `None`.
pub struct Records<'a, R, T> {
	reader: Option<RecordReader<'a, R>>,
	record: PhantomData<fn() -> T>,
}

impl<'a, R: BufRead, T: Record> Records<'a, R, T> {
	pub(crate) fn new(reader: RecordReader<'a, R>) -> Self {
		Records {
			reader: Some(reader),
			record: PhantomData,
		}
	}
}

impl<R: BufRead, T: Record> Iterator for Records<'_, R, T> {
	type Item = Result<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let reader = self.reader.as_mut()?;
		match reader.read_next::<T>() {
			Ok(Some((_, record))) => Some(Ok(record)),
			Ok(None) => {
				self.reader = None;
				None
			}
			Err(err) => {
				self.reader = None;
				Some(Err(err))
			}
		}
	}
}

impl<R: BufRead, T: Record> FusedIterator for Records<'_, R, T> {}
