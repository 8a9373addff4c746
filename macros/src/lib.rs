//! Derive macros for the task list reducer architecture
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates a stable type tag for each action variant
//!
//! # Example
//!
//! ```ignore
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TaskAction {
//!     Create(Task),
//!     #[action(rename = "FLIP")]
//!     Toggle(TaskId),
//! }
//!
//! // Generated methods:
//! assert_eq!(TaskAction::Create(task).action_type(), "CREATE");
//! assert_eq!(TaskAction::ACTION_TYPES, &["CREATE", "FLIP"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Generates on the enum:
/// - `action_type(&self) -> &'static str` - the variant's tag
/// - `ACTION_TYPES: &'static [&'static str]` - every tag, in declaration order
///
/// The tag is the variant name in `SCREAMING_SNAKE_CASE` (`RemoveAll` becomes
/// `REMOVE_ALL`) unless overridden with `#[action(rename = "...")]`.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants end up with the same tag
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags: Vec<String> = Vec::new();
    let mut arms = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let tag = match rename_of(&variant.attrs) {
            Ok(Some(tag)) => tag,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(err) => return err.to_compile_error().into(),
        };

        if tags.contains(&tag) {
            return syn::Error::new_spanned(
                variant,
                format!("duplicate action type \"{tag}\""),
            )
            .to_compile_error()
            .into();
        }

        arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
            Fields::Unit => quote! { Self::#variant_name => #tag, },
        });
        tags.push(tag);
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Every action type tag, in declaration order
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#tags),*];

            /// Returns the type tag of this action
            #[must_use]
            pub const fn action_type(&self) -> &'static str {
                match *self {
                    #(#arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(rename = "...")]`, if present
fn rename_of(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `rename`"))
            }
        })?;
    }
    Ok(rename)
}

/// `RemoveAll` → `REMOVE_ALL`
fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;
    for ch in ident.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_uppercase());
    }
    out
}
