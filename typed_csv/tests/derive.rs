use anyhow::Result;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use typed_csv::{CsvError, CsvOptions, CsvParser, FieldError, FromField, Record};

#[derive(Record, Debug, PartialEq)]
struct Measurement {
	station: String,
	temperature: f32,
	note: Option<String>,
}

#[derive(Record, Debug, PartialEq)]
struct Pair(u8, char);

#[derive(Record, Debug, PartialEq)]
struct Nothing;

#[derive(Record, Debug, PartialEq)]
struct Range<T> {
	from: T,
	to: T,
}

#[derive(Debug, PartialEq)]
struct Celsius(f64);

impl FromField for Celsius {
	fn from_field(raw: &str) -> Result<Self, FieldError> {
		let value = raw.strip_suffix("°C").ok_or("missing unit '°C'")?;
		Ok(Celsius(value.parse()?))
	}

	fn type_name() -> &'static str {
		"Celsius"
	}
}

#[derive(Record, Debug, PartialEq)]
struct Forecast {
	day: u8,
	high: Celsius,
}

fn read_all<T: Record>(input: &str) -> typed_csv::Result<Vec<T>> {
	CsvParser::<_, T>::new(Cursor::new(input))?.records().collect()
}

#[test]
fn test_named_struct() -> Result<()> {
	let input = "station,temperature,note\nBerlin,21.5,\nOslo,-3,\"snow, light\"\n";
	let mut parser = CsvParser::<_, Measurement>::with_options(Cursor::new(input), CsvOptions::default().with_lines_to_skip(1))?;
	let records = parser.records().collect::<typed_csv::Result<Vec<_>>>()?;
	assert_eq!(
		records,
		vec![
			Measurement {
				station: "Berlin".to_string(),
				temperature: 21.5,
				note: None,
			},
			Measurement {
				station: "Oslo".to_string(),
				temperature: -3.0,
				note: Some("snow, light".to_string()),
			},
		]
	);
	Ok(())
}

#[test]
fn test_arity() {
	assert_eq!(Measurement::ARITY, 3);
	assert_eq!(Pair::ARITY, 2);
	assert_eq!(Nothing::ARITY, 0);
	assert_eq!(Range::<i32>::ARITY, 2);
}

#[test]
fn test_tuple_and_unit_structs() -> Result<()> {
	assert_eq!(read_all::<Pair>("1,a\n2,b")?, vec![Pair(1, 'a'), Pair(2, 'b')]);
	assert_eq!(read_all::<Nothing>("\n")?, vec![Nothing]);
	Ok(())
}

#[test]
fn test_generic_struct() -> Result<()> {
	assert_eq!(read_all::<Range<i64>>("-5,5\n")?, vec![Range { from: -5, to: 5 }]);
	assert_eq!(
		read_all::<Range<String>>("a,z\n")?,
		vec![Range {
			from: "a".to_string(),
			to: "z".to_string()
		}]
	);
	Ok(())
}

#[test]
fn test_custom_field_type() -> Result<()> {
	assert_eq!(
		read_all::<Forecast>("1,25.5°C\n")?,
		vec![Forecast {
			day: 1,
			high: Celsius(25.5)
		}]
	);

	let err = read_all::<Forecast>("1,25.5°C\n2,30F\n").unwrap_err();
	match err {
		CsvError::FieldConversion {
			line,
			column,
			raw,
			type_name,
			source,
		} => {
			assert_eq!((line, column), (2, 2));
			assert_eq!(raw, "30F");
			assert_eq!(type_name, "Celsius");
			assert_eq!(source.to_string(), "missing unit '°C'");
		}
		other => panic!("unexpected error: {other}"),
	}
	Ok(())
}

#[test]
fn test_derived_struct_reports_first_failing_column() {
	let err = read_all::<Measurement>("Rome,warm,x\n").unwrap_err();
	assert!(matches!(
		err,
		CsvError::FieldConversion {
			line: 1,
			column: 2,
			..
		}
	));
}
