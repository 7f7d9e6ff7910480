use proc_macro2::TokenStream as TokenStream2;
use syn::parse::{self, Parse, ParseStream};

/// The arguments of `#[context(...)]`: a format string followed by its format arguments.
#[derive(Debug)]
pub struct ContextArgs(pub TokenStream2);

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		if input.is_empty() {
			return Err(input.error("expected a context message, e.g. #[context(\"while parsing {}\", name)]"));
		}
		Ok(Self(input.parse()?))
	}
}
