//! Typed records: a fixed, ordered list of column types.
//!
//! [`Record`] is implemented for tuples of up to sixteen [`FromField`] members, for arrays
//! `[T; N]` and, via `#[derive(Record)]`, for structs.

use crate::{CsvError, FromField, Result};

/// A record shape with a fixed number of typed columns.
///
/// Conversion runs left to right and stops at the first column that fails, so a record is
/// either produced completely or not at all.
pub trait Record: Sized {
	/// Number of declared columns.
	const ARITY: usize;

	/// Converts the raw fields of line `line` into a record.
	fn from_fields(fields: Vec<String>, line: usize) -> Result<Self>;
}

/// Hands out raw fields one column at a time and converts them.
///
/// Used by the tuple and array implementations and by code generated with `#[derive(Record)]`.
#[doc(hidden)]
pub struct FieldCursor {
	fields: std::vec::IntoIter<String>,
	line: usize,
	column: usize,
	expected: usize,
	actual: usize,
}

impl FieldCursor {
	pub fn new(fields: Vec<String>, line: usize, expected: usize) -> Self {
		FieldCursor {
			actual: fields.len(),
			fields: fields.into_iter(),
			line,
			column: 0,
			expected,
		}
	}

	fn mismatch(&self) -> CsvError {
		CsvError::ColumnCountMismatch {
			line: self.line,
			column: self.column,
			expected: self.expected,
			actual: self.actual,
		}
	}

	/// Converts the next column into `F`.
	pub fn convert<F: FromField>(&mut self) -> Result<F> {
		self.column += 1;
		let raw = self.fields.next().ok_or_else(|| self.mismatch())?;
		F::from_field(&raw).map_err(|source| CsvError::FieldConversion {
			line: self.line,
			column: self.column,
			raw,
			type_name: F::type_name(),
			source,
		})
	}

	/// Fails if fields are left over.
	pub fn finish(self) -> Result<()> {
		if self.fields.as_slice().is_empty() {
			Ok(())
		} else {
			Err(self.mismatch())
		}
	}
}

impl Record for () {
	const ARITY: usize = 0;

	fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
		FieldCursor::new(fields, line, 0).finish()
	}
}

macro_rules! impl_record_for_tuple {
	($($name:ident),+) => {
		impl<$($name: FromField),+> Record for ($($name,)+) {
			const ARITY: usize = [$(stringify!($name)),+].len();

			fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
				let mut cursor = FieldCursor::new(fields, line, Self::ARITY);
				let record = ($(cursor.convert::<$name>()?,)+);
				cursor.finish()?;
				Ok(record)
			}
		}
	};
}

impl_record_for_tuple!(A);
impl_record_for_tuple!(A, B);
impl_record_for_tuple!(A, B, C);
impl_record_for_tuple!(A, B, C, D);
impl_record_for_tuple!(A, B, C, D, E);
impl_record_for_tuple!(A, B, C, D, E, F);
impl_record_for_tuple!(A, B, C, D, E, F, G);
impl_record_for_tuple!(A, B, C, D, E, F, G, H);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

impl<T: FromField, const N: usize> Record for [T; N] {
	const ARITY: usize = N;

	fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
		let mut cursor = FieldCursor::new(fields, line, N);
		let mut values = Vec::with_capacity(N);
		for _ in 0..N {
			values.push(cursor.convert::<T>()?);
		}
		cursor.finish()?;
		match <[T; N]>::try_from(values) {
			Ok(record) => Ok(record),
			// exactly N values were pushed above
			Err(_) => unreachable!("array record holds {N} values"),
		}
	}
}
