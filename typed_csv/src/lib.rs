//! Streaming CSV reader producing statically typed records.
//!
//! The column types are declared once, as a tuple, an array or a struct deriving [`Record`].
//! Every line is split into raw fields, checked against the declared column count and converted
//! column by column. The first malformed line aborts iteration with a [`CsvError`] describing the
//! line, column, raw text and expected type.
//!
//! ```
//! use std::io::Cursor;
//! use typed_csv::{CsvParser, Record};
//!
//! #[derive(Record, Debug, PartialEq)]
//! struct Reading {
//! 	sensor: String,
//! 	value: f64,
//! }
//!
//! # fn main() -> typed_csv::Result<()> {
//! let mut parser = CsvParser::<_, Reading>::new(Cursor::new("north,1.5\n\"south, east\",-2\n"))?;
//! let readings = parser.records().collect::<typed_csv::Result<Vec<_>>>()?;
//! assert_eq!(readings[1], Reading { sensor: "south, east".to_string(), value: -2.0 });
//! # Ok(()) }
//! ```

mod cursor;
mod error;
mod field;
mod line_reader;
mod options;
mod parser;
mod reader;
mod record;
mod records;
mod segmenter;

pub use cursor::RecordCursor;
pub use error::{CsvError, FieldError, Result};
pub use field::FromField;
pub use options::CsvOptions;
pub use parser::CsvParser;
pub use record::Record;
pub use records::Records;
pub use segmenter::Segmenter;
pub use typed_csv_derive::Record;

#[doc(hidden)]
pub mod __private {
	pub use crate::record::FieldCursor;
}
