//! # casegen-macros
//!
//! Procedural macros that synthesize enum boilerplate and self-describing
//! expressions.
//!
//! # Usage
//!
//! ```ignore
//! use casegen::prelude::*;
//!
//! #[nullable_enum]
//! #[derive(Debug, PartialEq)]
//! pub enum Status { Visitor, Pr }
//!
//! assert_eq!(Status::with_name("Pr"), Status::Pr);
//! assert_eq!(Status::with_name("nope"), Status::Unknown);
//! ```
//!
//! The attribute macros read an optional `casegen.toml` next to the
//! invoking crate's `Cargo.toml`:
//!
//! ```toml
//! [codegen]
//! fallback_case = "Unknown"
//! serde_path = "serde"
//! ```

use proc_macro::TokenStream;

fn finish(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    match result {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Pairs an expression with its source text.
///
/// `stringified!(a + b)` expands to `(a + b, "a + b")`. The text is the
/// compiler's rendering of the tokens, so spacing may differ from what was
/// typed while literals keep their exact spelling.
#[proc_macro]
pub fn stringified(input: TokenStream) -> TokenStream {
    finish(casegen_rust::stringify(input.into()))
}

/// Adds a fallback case and a lenient name lookup to a unit-only enum.
///
/// Generates:
/// - a trailing `Unknown` variant (name configurable via `casegen.toml`)
/// - `pub fn with_name(value: &str) -> Self`, which matches the exact variant
///   name and yields the fallback for anything else
///
/// The attribute takes no arguments.
#[proc_macro_attribute]
pub fn nullable_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    finish(casegen_rust::load_config().and_then(|config| {
        casegen_rust::nullable_enum(attr.into(), item.into(), &config)
    }))
}

/// Makes a string-backed enum round-trip through serde with a fallback.
///
/// # Arguments
///
/// The raw-value type, which must be a string type: `#[codable_enum(String)]`.
/// Variants may carry a string discriminant (`Pr = "pull_request"`) to
/// override their raw value; it is removed from the emitted enum.
///
/// Generates:
/// - a trailing `Unknown` variant
/// - `pub fn raw_value(&self) -> &'static str`
/// - `pub fn from_raw_value(value: &str) -> Self`
/// - `serde::Deserialize`, which matches the variant *name* and yields the
///   fallback otherwise
/// - `serde::Serialize`, which writes the variant name
#[proc_macro_attribute]
pub fn codable_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    finish(casegen_rust::load_config().and_then(|config| {
        casegen_rust::codable_enum(attr.into(), item.into(), &config)
    }))
}
