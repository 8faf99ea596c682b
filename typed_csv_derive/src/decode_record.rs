use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type, parse_quote};

/// Generate the `Record` implementation for a struct.
///
/// Returns `Err(syn::Error)` for enums and unions.
pub fn expand_record(input: DeriveInput) -> Result<TokenStream, syn::Error> {
	let name = &input.ident;
	let data_struct = match &input.data {
		Data::Struct(data_struct) => data_struct,
		Data::Enum(_) | Data::Union(_) => {
			return Err(syn::Error::new_spanned(
				name,
				"Record can only be derived for structs",
			));
		}
	};

	let fields = Ident::new("fields", Span::mixed_site());
	let line = Ident::new("line", Span::mixed_site());
	let cursor = Ident::new("cursor", Span::mixed_site());
	let record = Ident::new("record", Span::mixed_site());

	let field_types: Vec<&Type> = data_struct.fields.iter().map(|field| &field.ty).collect();
	let arity = field_types.len();
	let conversions = field_types
		.iter()
		.map(|ty| quote! { #cursor.convert::<#ty>()? });

	let construct = match &data_struct.fields {
		Fields::Named(named) => {
			let names = named.named.iter().map(|field| &field.ident);
			quote! { Self { #(#names: #conversions),* } }
		}
		Fields::Unnamed(_) => quote! { Self(#(#conversions),*) },
		Fields::Unit => quote! { Self },
	};

	// Generic field types need to be convertible themselves.
	let mut generics = input.generics.clone();
	if !generics.params.is_empty() {
		let where_clause = generics.make_where_clause();
		for ty in &field_types {
			where_clause
				.predicates
				.push(parse_quote!(#ty: ::typed_csv::FromField));
		}
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	Ok(quote! {
		impl #impl_generics ::typed_csv::Record for #name #ty_generics #where_clause {
			const ARITY: usize = #arity;

			fn from_fields(
				#fields: ::std::vec::Vec<::std::string::String>,
				#line: usize,
			) -> ::typed_csv::Result<Self> {
				#[allow(unused_mut)]
				let mut #cursor = ::typed_csv::__private::FieldCursor::new(#fields, #line, #arity);
				let #record = #construct;
				#cursor.finish()?;
				::core::result::Result::Ok(#record)
			}
		}
	})
}
