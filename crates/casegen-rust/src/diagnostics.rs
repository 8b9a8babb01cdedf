//! Turns core errors into spanned `syn` errors.

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::Item;

use casegen_core::{ExpansionError, MatchError};

/// Reports `err` on the variant it concerns when there is one, otherwise on
/// the item's name.
pub fn to_syn_error(err: &ExpansionError, item: &Item) -> syn::Error {
    let case = match err {
        ExpansionError::InvalidRawValue { case, .. }
        | ExpansionError::FallbackCollision { case }
        | ExpansionError::DuplicateRawValue { case, .. }
        | ExpansionError::Structural {
            source: MatchError::CaseWithPayload { case } | MatchError::DuplicateCase { case },
            ..
        } => Some(case.as_str()),
        _ => None,
    };

    if let (Some(case), Item::Enum(item)) = (case, item) {
        let variants = item.variants.iter();
        // Duplicates point at the later declaration.
        if let Some(variant) = variants.filter(|v| v.ident.unraw() == case).last() {
            return syn::Error::new_spanned(variant, err);
        }
    }

    match item_ident(item) {
        Some(ident) => syn::Error::new_spanned(ident, err),
        None => syn::Error::new_spanned(item, err),
    }
}

fn item_ident(item: &Item) -> Option<&dyn ToTokens> {
    Some(match item {
        Item::Enum(item) => &item.ident,
        Item::Struct(item) => &item.ident,
        Item::Union(item) => &item.ident,
        Item::Trait(item) => &item.ident,
        Item::Fn(item) => &item.sig.ident,
        Item::Const(item) => &item.ident,
        Item::Static(item) => &item.ident,
        Item::Type(item) => &item.ident,
        _ => return None,
    })
}
