//! Renders casegen-core output nodes as Rust tokens.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::{Expr, ExprLit, ItemEnum, Lit, LitStr, Path, Variant};

use casegen_core::rules::codable;
use casegen_core::syntax::{
    Accessor, Branch, Conformance, Declaration, Expression, Extension, Initializer, Pattern,
    Subject, Switch,
};
use casegen_core::ExpansionConfig;

use crate::types;

/// Local the decode impl reads its single string into.
const DECODED: &str = "value";

pub fn render_expression(expr: &Expression, embedded: &dyn ToTokens) -> TokenStream {
    match expr {
        Expression::Tuple { elements } => {
            let elements = elements.iter().map(|e| render_expression(e, embedded));
            quote! { ( #(#elements),* ) }
        }
        Expression::Embedded(_) => embedded.to_token_stream(),
        Expression::StringLiteral { value } => str_lit(value).into_token_stream(),
    }
}

/// Re-emits `item` with synthesized cases appended, followed by one inherent
/// impl for synthesized methods and one impl per synthesized conformance.
pub fn render_enum(
    item: &ItemEnum,
    decls: &[Declaration],
    config: &ExpansionConfig,
) -> syn::Result<TokenStream> {
    let serde = types::parse_path(&config.codegen.serde_path)?;

    let mut item = item.clone();
    item.variants = item.variants.into_iter().map(strip_string_discriminant).collect();

    let mut methods = Vec::new();
    let mut impls = Vec::new();

    for decl in decls {
        match decl {
            Declaration::Case(case) => {
                let ident = types::case_ident(&case.name)?;
                item.variants.push(syn::parse_quote!(#ident));
            }
            Declaration::Initializer(init) => methods.push(render_initializer(init)?),
            Declaration::Accessor(accessor) => methods.push(render_accessor(accessor)?),
            Declaration::Extension(extension) => impls.push(render_extension(extension, &serde)?),
        }
    }

    let inherent = if methods.is_empty() {
        TokenStream::new()
    } else {
        let ident = &item.ident;
        quote! {
            impl #ident {
                #(#methods)*
            }
        }
    };

    Ok(quote! {
        #item
        #inherent
        #(#impls)*
    })
}

fn strip_string_discriminant(mut variant: Variant) -> Variant {
    if let Some((
        _,
        Expr::Lit(ExprLit {
            lit: Lit::Str(_), ..
        }),
    )) = &variant.discriminant
    {
        variant.discriminant = None;
    }
    variant
}

pub fn render_initializer(init: &Initializer) -> syn::Result<TokenStream> {
    let name = format_ident!("{}", init.name);
    let param = format_ident!("{}", init.parameter);
    let body = render_switch(&init.body)?;

    Ok(quote! {
        pub fn #name(#param: &str) -> Self {
            #body
        }
    })
}

/// Raw values are always string literals, so the accessor hands out
/// `&'static str` whatever string type the enum declared.
pub fn render_accessor(accessor: &Accessor) -> syn::Result<TokenStream> {
    let name = format_ident!("{}", accessor.name);
    let body = render_switch(&accessor.body)?;

    Ok(quote! {
        pub fn #name(&self) -> &'static str {
            #body
        }
    })
}

pub fn render_extension(extension: &Extension, serde: &Path) -> syn::Result<TokenStream> {
    let target = types::parse_type(&extension.target)?;
    let body = render_switch(&extension.body)?;

    Ok(match extension.conformance {
        Conformance::Decodable => {
            let decoded = format_ident!("{}", DECODED);
            quote! {
                impl<'de> #serde::Deserialize<'de> for #target {
                    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                    where
                        D: #serde::Deserializer<'de>,
                    {
                        let #decoded =
                            <::std::string::String as #serde::Deserialize>::deserialize(deserializer)?;
                        ::core::result::Result::Ok(#body)
                    }
                }
            }
        }
        Conformance::Encodable => quote! {
            impl #serde::Serialize for #target {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: #serde::Serializer,
                {
                    serializer.serialize_str(#body)
                }
            }
        },
    })
}

pub fn render_switch(switch: &Switch) -> syn::Result<TokenStream> {
    let subject = match &switch.subject {
        Subject::Parameter(name) => format_ident!("{}", name).into_token_stream(),
        Subject::SelfValue => quote! { self },
        Subject::DecodedString => {
            let decoded = format_ident!("{}", DECODED);
            quote! { #decoded.as_str() }
        }
    };

    let arms = switch
        .arms
        .iter()
        .map(|arm| {
            let pattern = render_pattern(&arm.pattern)?;
            let branch = render_branch(&arm.branch)?;
            Ok(quote! { #pattern => #branch, })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    let default = render_branch(&switch.default)?;

    Ok(quote! {
        match #subject {
            #(#arms)*
            _ => #default,
        }
    })
}

fn render_pattern(pattern: &Pattern) -> syn::Result<TokenStream> {
    Ok(match pattern {
        Pattern::Str(value) => str_lit(value).into_token_stream(),
        Pattern::Case(name) => {
            let ident = types::case_ident(name)?;
            quote! { Self::#ident }
        }
        Pattern::RawValueOf(name) => {
            let ident = types::case_ident(name)?;
            let accessor = format_ident!("{}", codable::RAW_VALUE_ACCESSOR);
            quote! { raw if raw == Self::#ident.#accessor() }
        }
    })
}

fn render_branch(branch: &Branch) -> syn::Result<TokenStream> {
    Ok(match branch {
        Branch::AssignCase(name) => {
            let ident = types::case_ident(name)?;
            quote! { Self::#ident }
        }
        Branch::ReturnStr(value) => str_lit(value).into_token_stream(),
    })
}

fn str_lit(value: &str) -> LitStr {
    LitStr::new(value, Span::call_site())
}
