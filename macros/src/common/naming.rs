//! Naming conventions for generated items.
//!
//! | Input | Generated |
//! |-------|-----------|
//! | trait `Show` | table struct `ShowTable` |
//! | supertrait `fmt::Show` | table type `fmt::ShowTable` |
//! | supertrait `ShowEnum` | table field `show_enum_table` |

use proc_macro2::Span;
use quote::format_ident;
use syn::{Ident, Path};

/// `Show` -> `ShowTable`
pub fn table_ident(trait_ident: &Ident) -> Ident {
    format_ident!("{}Table", trait_ident)
}

/// `a::b::Show` -> `a::b::ShowTable`
pub fn table_path(trait_path: &Path) -> Path {
    let mut path = trait_path.clone();
    if let Some(last) = path.segments.last_mut() {
        last.ident = table_ident(&last.ident);
    }
    path
}

/// Field holding a supertrait's table: `a::b::ShowEnum` -> `show_enum_table`
pub fn super_field_ident(trait_path: &Path) -> Ident {
    let name = simple_name(trait_path);
    Ident::new(&format!("{}_table", snake_case(&name)), Span::call_site())
}

/// Last segment of a path as a string.
pub fn simple_name(path: &Path) -> String {
    path.segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_default()
}

/// `ShowEnum` -> `show_enum`, `HTTPServer` -> `http_server`
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.trim_start_matches("r#").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                Some(_) => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Show"), "show");
        assert_eq!(snake_case("ShowEnum"), "show_enum");
        assert_eq!(snake_case("HTTPServer"), "http_server");
        assert_eq!(snake_case("Utf8Text"), "utf8_text");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_table_names() {
        let path: Path = syn::parse_quote!(fmt::ShowEnum);
        assert_eq!(super_field_ident(&path).to_string(), "show_enum_table");
        let table = table_path(&path);
        assert_eq!(quote::quote!(#table).to_string(), "fmt :: ShowEnumTable");
    }
}
