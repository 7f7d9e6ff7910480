//! Procedural macros shared by the geoform crates.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps every error returned by the annotated function in an `anyhow` context.
///
/// The arguments are passed to `format!`, so they may reference the function's parameters:
///
/// ```ignore
/// #[context("while parsing tag '{}'", tag)]
/// pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> { ... }
/// ```
///
/// The function must return `anyhow::Result<_>`. The message is only formatted on the error path.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs(format_args) = parse_macro_input!(args);
	let mut function = parse_macro_input!(input as syn::ItemFn);

	if function.sig.asyncness.is_some() {
		return syn::Error::new_spanned(function.sig.fn_token, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}

	let return_type = match &function.sig.output {
		syn::ReturnType::Default => {
			return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
				.to_compile_error()
				.into();
		}
		syn::ReturnType::Type(_, ty) => ty.clone(),
	};

	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());

	// The body runs inside a closure so that `?` and `return` keep their meaning.
	// Dropping a non-Copy value inside forces the closure to be FnOnce, so the body
	// may still move out of parameters.
	let new_body = quote! {
		let #once = ::core::iter::empty::<()>();
		(|| -> #return_type {
			::core::mem::drop(#once);
			#body
		})()
		.map_err(|#err| #err.context(format!(#format_args)))
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	function.into_token_stream().into()
}
