//! `#[typeclass]` expansion.
//!
//! Input:
//!
//! ```ignore
//! #[typeclass]
//! pub trait ShowEnum: Show + Enum {
//!     fn label(&self) -> String;
//! }
//! ```
//!
//! Output (paths shortened):
//!
//! ```ignore
//! pub trait ShowEnum: Show + Enum { fn label(&self) -> String; }
//!
//! #[derive(Clone, Copy)]
//! pub struct ShowEnumTable {
//!     pub show_table: &'static ShowTable,
//!     pub enum_table: &'static EnumTable,
//!     pub label: fn(Erased<'_>) -> String,
//! }
//!
//! impl Capability for dyn ShowEnum { type Table = ShowEnumTable; const NAME = "ShowEnum"; const COMPOUND = true; }
//! const _: () = assert!(!<dyn Show as Capability>::COMPOUND, "..."); // and for Enum
//! impl Includes<dyn ShowEnum> for dyn ShowEnum { /* identity */ }
//! impl Includes<dyn Show> for dyn ShowEnum { /* table.show_table */ }
//! impl Includes<dyn Enum> for dyn ShowEnum { /* table.enum_table */ }
//! impl<T: ShowEnum + Any + Sync> DeriveTable<T> for dyn ShowEnum { /* registry + wrappers */ }
//! impl<C: Includes<dyn ShowEnum>> ShowEnum for Handle<'_, C>
//! where Handle<'_, C>: Show + Enum { /* dispatch through table */ }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{
    FnArg, Ident, ItemTrait, Path, ReturnType, TraitItem, TraitItemFn, Type, TypeParamBound,
    WherePredicate,
};

use crate::common::{simple_name, super_field_ident, table_ident, table_path, TypeclassArgs};

/// One dispatchable operation: `fn name(&self) -> Output`.
struct Operation {
    name: Ident,
    output: ReturnType,
}

impl Operation {
    /// Result type as a type, `()` for a missing return type.
    fn result_type(&self) -> TokenStream2 {
        match &self.output {
            ReturnType::Default => quote! { () },
            ReturnType::Type(_, ty) => quote! { #ty },
        }
    }
}

/// A supertrait, which must itself be a typeclass.
struct Supertrait {
    path: Path,
    field: Ident,
}

/// Validated view of the trait.
struct TypeclassModel {
    operations: Vec<Operation>,
    supertraits: Vec<Supertrait>,
}

pub fn expand_typeclass(args: TypeclassArgs, item: ItemTrait) -> TokenStream2 {
    match analyze(&args, &item) {
        Ok(model) => generate(&args, &item, &model),
        Err(err) => {
            let err = err.to_compile_error();
            // Keep the trait so follow-up errors stay about the real problem.
            quote! { #item #err }
        }
    }
}

// =============================================================================
// Analysis
// =============================================================================

fn analyze(args: &TypeclassArgs, item: &ItemTrait) -> syn::Result<TypeclassModel> {
    if let Some(unsafety) = &item.unsafety {
        return Err(syn::Error::new_spanned(
            unsafety,
            "typeclasses cannot be `unsafe` traits",
        ));
    }
    if let Some(auto) = &item.auto_token {
        return Err(syn::Error::new_spanned(auto, "typeclasses cannot be auto traits"));
    }
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "typeclasses cannot be generic: one dispatch table per concrete type needs a fixed table shape",
        ));
    }

    let supertraits = analyze_supertraits(item)?;

    let mut operations = Vec::new();
    for trait_item in &item.items {
        match trait_item {
            TraitItem::Fn(method) => {
                if let Some(op) = analyze_method(method)? {
                    operations.push(op);
                }
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "typeclasses may only contain methods",
                ));
            }
        }
    }

    if let Some(auto) = &args.auto {
        if supertraits.is_empty() {
            return Err(syn::Error::new_spanned(
                auto,
                "`auto` needs supertraits to blanket-implement over",
            ));
        }
        if let Some(required) = item
            .items
            .iter()
            .find(|i| matches!(i, TraitItem::Fn(m) if m.default.is_none()))
        {
            return Err(syn::Error::new_spanned(
                required,
                "`auto` typeclasses cannot have required methods",
            ));
        }
    }

    Ok(TypeclassModel {
        operations,
        supertraits,
    })
}

fn analyze_supertraits(item: &ItemTrait) -> syn::Result<Vec<Supertrait>> {
    let mut supertraits: Vec<Supertrait> = Vec::new();

    for bound in &item.supertraits {
        match bound {
            TypeParamBound::Lifetime(_) => {}
            TypeParamBound::Trait(tb) => {
                if !matches!(tb.modifier, syn::TraitBoundModifier::None) || tb.lifetimes.is_some()
                {
                    return Err(syn::Error::new_spanned(
                        tb,
                        "typeclass supertraits must be plain typeclass paths",
                    ));
                }
                if tb
                    .path
                    .segments
                    .iter()
                    .any(|s| !matches!(s.arguments, syn::PathArguments::None))
                {
                    return Err(syn::Error::new_spanned(
                        &tb.path,
                        "typeclass supertraits cannot take generic arguments",
                    ));
                }

                let field = super_field_ident(&tb.path);
                if supertraits.iter().any(|s| s.field == field) {
                    return Err(syn::Error::new_spanned(
                        &tb.path,
                        format!("supertrait table field `{}` is already taken", field),
                    ));
                }
                supertraits.push(Supertrait {
                    path: tb.path.clone(),
                    field,
                });
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "unsupported supertrait bound",
                ));
            }
        }
    }

    Ok(supertraits)
}

/// `Ok(None)` for methods that stay out of the table (`where Self: Sized`).
fn analyze_method(method: &TraitItemFn) -> syn::Result<Option<Operation>> {
    let sig = &method.sig;

    if requires_sized_self(method) {
        if method.default.is_none() {
            return Err(syn::Error::new_spanned(
                sig,
                "methods bounded by `Self: Sized` are not dispatched and need a default body",
            ));
        }
        return Ok(None);
    }

    if sig.constness.is_some()
        || sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || sig.abi.is_some()
        || sig.variadic.is_some()
    {
        return Err(syn::Error::new_spanned(
            sig,
            "typeclass operations must be plain `fn`s",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "typeclass operations cannot be generic",
        ));
    }

    let shared_self = match sig.inputs.first() {
        Some(FnArg::Receiver(r)) => {
            r.reference.is_some() && r.mutability.is_none() && r.colon_token.is_none()
        }
        _ => false,
    };
    if !shared_self || sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "typeclass operations take exactly `&self`",
        ));
    }

    Ok(Some(Operation {
        name: sig.ident.clone(),
        output: sig.output.clone(),
    }))
}

fn requires_sized_self(method: &TraitItemFn) -> bool {
    let Some(where_clause) = &method.sig.generics.where_clause else {
        return false;
    };
    where_clause.predicates.iter().any(|pred| {
        let WherePredicate::Type(pt) = pred else {
            return false;
        };
        let is_self = matches!(&pt.bounded_ty, Type::Path(tp) if tp.qself.is_none() && tp.path.is_ident("Self"));
        is_self
            && pt.bounds.iter().any(|b| {
                matches!(b, TypeParamBound::Trait(tb) if tb.path.is_ident("Sized"))
            })
    })
}

// =============================================================================
// Generation
// =============================================================================

fn generate(args: &TypeclassArgs, item: &ItemTrait, model: &TypeclassModel) -> TokenStream2 {
    let vis = &item.vis;
    let name = &item.ident;
    let name_str = name.to_string();
    let table = table_ident(name);
    let table_doc = format!("Dispatch table of the [`{}`] capability.", name_str);

    let op_names: Vec<_> = model.operations.iter().map(|op| &op.name).collect();
    let op_types: Vec<_> = model.operations.iter().map(Operation::result_type).collect();
    let op_outputs: Vec<_> = model.operations.iter().map(|op| &op.output).collect();

    let super_paths: Vec<_> = model.supertraits.iter().map(|s| &s.path).collect();
    let super_fields: Vec<_> = model.supertraits.iter().map(|s| &s.field).collect();
    let super_tables: Vec<_> = super_paths.iter().map(|p| table_path(p)).collect();
    let compound = !model.supertraits.is_empty();

    // Includes only reaches direct supertraits, so those must be simple.
    let simple_supers = super_paths.iter().map(|path| {
        let msg = format!(
            "`{}` is a compound typeclass and cannot be a supertrait; list its supertraits directly",
            simple_name(path)
        );
        quote_spanned! {path.span()=>
            const _: () = ::core::assert!(
                !<dyn #path as ::tola_typeclass::Capability>::COMPOUND,
                #msg
            );
        }
    });

    let table_struct = quote! {
        #[doc = #table_doc]
        #[derive(Clone, Copy)]
        #vis struct #table {
            #( #vis #super_fields: &'static #super_tables, )*
            #( #vis #op_names: fn(::tola_typeclass::Erased<'_>) -> #op_types, )*
        }
    };

    let capability = quote! {
        impl ::tola_typeclass::Capability for dyn #name {
            type Table = #table;
            const NAME: &'static str = #name_str;
            const COMPOUND: bool = #compound;
        }

        #( #simple_supers )*

        impl ::tola_typeclass::Includes<dyn #name> for dyn #name {
            #[inline]
            fn project(table: &'static #table) -> &'static #table {
                table
            }
        }

        #(
            impl ::tola_typeclass::Includes<dyn #super_paths> for dyn #name {
                #[inline]
                fn project(table: &'static #table) -> &'static #super_tables {
                    table.#super_fields
                }
            }
        )*
    };

    let derive = quote! {
        impl<__T> ::tola_typeclass::DeriveTable<__T> for dyn #name
        where
            __T: #name + ::core::any::Any + ::core::marker::Sync,
        {
            fn derive_table() -> #table {
                #table {
                    #( #super_fields: ::tola_typeclass::registry::table::<dyn #super_paths, __T>(), )*
                    #( #op_names: |this| <__T as #name>::#op_names(this.downcast::<__T>()), )*
                }
            }
        }
    };

    let dispatch = if args.auto.is_some() {
        // The blanket impl below already covers handles.
        quote! {
            impl<__T: ?Sized #( + #super_paths )*> #name for __T {}
        }
    } else {
        quote! {
            impl<'__a, __C> #name for ::tola_typeclass::Handle<'__a, __C>
            where
                __C: ?Sized + ::tola_typeclass::Includes<dyn #name>,
                #( ::tola_typeclass::Handle<'__a, __C>: #super_paths, )*
            {
                #(
                    #[inline]
                    fn #op_names(&self) #op_outputs {
                        let table = <__C as ::tola_typeclass::Includes<dyn #name>>::project(self.table());
                        (table.#op_names)(self.data())
                    }
                )*
            }
        }
    };

    quote! {
        #item
        #table_struct
        #capability
        #derive
        #dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(args: &str, item: &str) -> syn::Result<TypeclassModel> {
        let args: TypeclassArgs = syn::parse_str(args)?;
        let item: ItemTrait = syn::parse_str(item)?;
        analyze(&args, &item)
    }

    #[test]
    fn test_collects_operations_and_supertraits() {
        let model = expand(
            "",
            "trait ShowEnum: Show + fmt::Enum + 'static {
                fn label(&self) -> String;
                fn tag(&self) -> &str { \"x\" }
                fn into_parts(self) -> u8 where Self: Sized { 0 }
            }",
        )
        .unwrap();

        let ops: Vec<_> = model.operations.iter().map(|o| o.name.to_string()).collect();
        assert_eq!(ops, ["label", "tag"]);
        let fields: Vec<_> = model.supertraits.iter().map(|s| s.field.to_string()).collect();
        assert_eq!(fields, ["show_table", "enum_table"]);
    }

    #[test]
    fn test_rejects_non_dispatchable_operations() {
        assert!(expand("", "trait A { fn f(&self, x: u8) -> u8; }").is_err());
        assert!(expand("", "trait A { fn f(&mut self); }").is_err());
        assert!(expand("", "trait A { fn f(self: &Self); }").is_err());
        assert!(expand("", "trait A { fn f<T>(&self); }").is_err());
        assert!(expand("", "trait A { async fn f(&self); }").is_err());
        assert!(expand("", "trait A { fn new() -> u8; }").is_err());
        assert!(expand("", "trait A { type Out; }").is_err());
        assert!(expand("", "trait A<T> { fn f(&self); }").is_err());
        assert!(expand("", "unsafe trait A { fn f(&self); }").is_err());
        assert!(expand("", "trait A { fn f(self) where Self: Sized; }").is_err());
    }

    #[test]
    fn test_auto_requirements() {
        assert!(expand("auto", "trait A: B + C {}").is_ok());
        assert!(expand("auto", "trait A {}").is_err());
        assert!(expand("auto", "trait A: B { fn f(&self); }").is_err());
    }

    #[test]
    fn test_rejects_colliding_supertrait_fields() {
        assert!(expand("", "trait A: x::Show + y::Show {}").is_err());
        assert!(expand("", "trait A: Show<u8> {}").is_err());
    }

    #[test]
    fn test_generated_items() {
        let item: ItemTrait = syn::parse_str("pub trait Show { fn show(&self) -> String; }").unwrap();
        let out = expand_typeclass(TypeclassArgs::default(), item).to_string();
        assert!(out.contains("pub struct ShowTable"));
        assert!(out.contains("impl :: tola_typeclass :: Capability for dyn Show"));
        assert!(out.contains("DeriveTable < __T > for dyn Show"));
        assert!(out.contains("Show for :: tola_typeclass :: Handle < '__a , __C >"));
        assert!(out.contains("const COMPOUND : bool = false"));
        assert!(!out.contains("assert !"));
    }

    #[test]
    fn test_supertraits_must_be_simple() {
        let item: ItemTrait =
            syn::parse_str("pub trait Labelled: ShowEnum { fn label(&self) -> String; }").unwrap();
        let out = expand_typeclass(TypeclassArgs::default(), item).to_string();
        assert!(out.contains("const COMPOUND : bool = true"));
        assert!(out.contains("< dyn ShowEnum as :: tola_typeclass :: Capability > :: COMPOUND"));
        assert!(out.contains("`ShowEnum` is a compound typeclass"));
    }
}
