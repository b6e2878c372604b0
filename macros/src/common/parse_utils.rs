//! Common parsing utilities
//!
//! Argument parsing for `#[typeclass(...)]`.

use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume an identifier if it matches the keyword
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<Option<Ident>> {
    if peek_keyword(input, keyword) {
        Ok(Some(input.parse()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// #[typeclass(...)] Arguments
// =============================================================================

/// Arguments of `#[typeclass]`.
///
/// - `auto`: blanket-implement the trait for every type that implements
///   all of its supertraits.
#[derive(Default)]
pub struct TypeclassArgs {
    pub auto: Option<Ident>,
}

impl Parse for TypeclassArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = TypeclassArgs::default();

        while !input.is_empty() {
            if let Some(kw) = try_parse_keyword(input, "auto")? {
                if args.auto.is_some() {
                    return Err(syn::Error::new_spanned(kw, "duplicate `auto` argument"));
                }
                args.auto = Some(kw);
            } else {
                return Err(input.error("unknown typeclass argument, expected `auto`"));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}
