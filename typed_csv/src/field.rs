//! Conversion of a single raw field into its declared type.

use crate::FieldError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A type a CSV column can be declared as.
///
/// Implementations receive the raw field with escape symbols already removed. They should use
/// the type's canonical textual form and reject leading or trailing content that is not part of
/// a valid value.
///
/// ```
/// use typed_csv::{FieldError, FromField};
///
/// struct Percent(u8);
///
/// impl FromField for Percent {
/// 	fn from_field(raw: &str) -> Result<Self, FieldError> {
/// 		let digits = raw.strip_suffix('%').ok_or("missing '%'")?;
/// 		Ok(Percent(digits.parse()?))
/// 	}
/// }
///
/// assert_eq!(Percent::from_field("42%").unwrap().0, 42);
/// assert!(Percent::from_field("42").is_err());
/// ```
pub trait FromField: Sized {
	fn from_field(raw: &str) -> Result<Self, FieldError>;

	/// Name of the declared type, used in conversion diagnostics.
	fn type_name() -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl FromField for String {
	fn from_field(raw: &str) -> Result<Self, FieldError> {
		Ok(raw.to_owned())
	}
}

impl FromField for Box<str> {
	fn from_field(raw: &str) -> Result<Self, FieldError> {
		Ok(Box::from(raw))
	}
}

/// An empty field reads as `None`, anything else must convert to `T`.
impl<T: FromField> FromField for Option<T> {
	fn from_field(raw: &str) -> Result<Self, FieldError> {
		if raw.is_empty() {
			Ok(None)
		} else {
			T::from_field(raw).map(Some)
		}
	}
}

macro_rules! impl_from_field_via_from_str {
	($($ty:ty),+ $(,)?) => {
		$(
			impl FromField for $ty {
				#[inline]
				fn from_field(raw: &str) -> Result<Self, FieldError> {
					raw.parse::<$ty>().map_err(FieldError::from)
				}
			}
		)+
	};
}

impl_from_field_via_from_str!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, IpAddr, Ipv4Addr,
	Ipv6Addr,
);
