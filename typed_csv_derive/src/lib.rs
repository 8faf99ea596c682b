mod decode_record;

use crate::decode_record::expand_record;
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Implements `typed_csv::Record` for a struct.
///
/// Fields become columns in declaration order and each field type must implement
/// `typed_csv::FromField`. Named, tuple and unit structs are supported.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as syn::DeriveInput);

	expand_record(input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}
