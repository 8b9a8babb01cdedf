use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{Ident, Path, Type};

use casegen_core::syntax::TypeRef;

/// Parses the raw-value type from attribute arguments, e.g. `String` in
/// `#[codable_enum(String)]`. Empty arguments mean no raw type.
pub fn parse_raw_type(args: TokenStream) -> syn::Result<Option<Type>> {
    if args.is_empty() {
        return Ok(None);
    }
    syn::parse2::<Type>(args).map(Some)
}

pub fn type_ref(ty: &Type) -> TypeRef {
    TypeRef::new(ty.to_token_stream().to_string())
}

pub fn parse_type(ty: &TypeRef) -> syn::Result<Type> {
    syn::parse_str(&ty.name)
        .map_err(|e| syn::Error::new(Span::call_site(), format!("invalid type `{}`: {}", ty, e)))
}

pub fn parse_path(path: &str) -> syn::Result<Path> {
    syn::parse_str(path)
        .map_err(|e| syn::Error::new(Span::call_site(), format!("invalid path `{}`: {}", path, e)))
}

/// Keywords `r#` cannot escape.
const NON_RAW_KEYWORDS: [&str; 5] = ["_", "self", "Self", "super", "crate"];

/// Identifier for a case name, falling back to a raw identifier for
/// keywords such as `type`.
pub fn case_ident(name: &str) -> syn::Result<Ident> {
    if let Ok(ident) = syn::parse_str::<Ident>(name) {
        return Ok(ident);
    }

    let mut chars = name.chars();
    let well_formed = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_');
    if !well_formed || NON_RAW_KEYWORDS.contains(&name) {
        return Err(syn::Error::new(
            Span::call_site(),
            format!("`{}` cannot be used as a case name", name),
        ));
    }
    Ok(Ident::new_raw(name, Span::call_site()))
}
