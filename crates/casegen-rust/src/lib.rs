//! # casegen-rust
//!
//! Rust front end and back end for the casegen expansion rules.
//!
//! Every expansion runs in two phases:
//! 1. [`parser`] lowers `syn` syntax into a [`casegen_core::SyntaxNode`];
//! 2. a core rule builds output nodes, which [`codegen`] renders as tokens.
//!
//! The entry points here work on `proc_macro2` tokens so they can be driven
//! by the proc-macro crate, the CLI and unit tests alike.

use proc_macro2::TokenStream;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Item, Token};

use casegen_core::rules::stringify;
use casegen_core::syntax::{Declaration, ExprNode, Invocation};
use casegen_core::{ExpansionConfig, ExpansionRequest, Rule};

pub mod codegen;
pub mod diagnostics;
pub mod parser;
pub mod types;

/// Tokens for an expanded item together with the core output they were
/// rendered from.
#[derive(Debug, Clone)]
pub struct Expanded {
    pub tokens: TokenStream,
    pub declarations: Vec<Declaration>,
}

/// Reads `casegen.toml` next to the invoking crate's manifest.
pub fn load_config() -> syn::Result<ExpansionConfig> {
    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else {
        return Ok(ExpansionConfig::default());
    };
    ExpansionConfig::load_from_dir(&manifest_dir)
        .map_err(|e| syn::Error::new(proc_macro2::Span::call_site(), e))
}

/// `stringified!(expr)` -> `(expr, "expr")`.
///
/// The text is the compiler's rendering of the tokens; callers holding the
/// original source should use [`stringify_source`] instead.
pub fn stringify(input: TokenStream) -> syn::Result<TokenStream> {
    let expr = single_expr(input)?;
    let invocation = parser::lower_invocation(stringify::MACRO_NAME, [&expr]);
    Ok(render_stringified(&invocation, &expr))
}

/// Like [`stringify`], but the string half is `source` exactly as written,
/// minus surrounding whitespace and a trailing comma.
pub fn stringify_source(source: &str) -> syn::Result<TokenStream> {
    let expr = single_expr(syn::parse_str(source)?)?;
    let text = source.trim();
    let text = text.strip_suffix(',').unwrap_or(text).trim_end();
    let invocation = Invocation::new(stringify::MACRO_NAME, vec![ExprNode::new(text)]);
    Ok(render_stringified(&invocation, &expr))
}

fn single_expr(input: TokenStream) -> syn::Result<Expr> {
    let arguments: Vec<Expr> = Punctuated::<Expr, Token![,]>::parse_terminated
        .parse2(input.clone())?
        .into_iter()
        .collect();
    match <[Expr; 1]>::try_from(arguments) {
        Ok([expr]) => Ok(expr),
        Err(arguments) => Err(syn::Error::new_spanned(
            input,
            format!(
                "{}! takes exactly one expression, got {}",
                stringify::MACRO_NAME,
                arguments.len()
            ),
        )),
    }
}

fn render_stringified(invocation: &Invocation, expr: &Expr) -> TokenStream {
    let expression = stringify::expand(invocation);
    codegen::render_expression(&expression, expr)
}

pub fn nullable_enum(
    args: TokenStream,
    item: TokenStream,
    config: &ExpansionConfig,
) -> syn::Result<TokenStream> {
    let item = syn::parse2::<Item>(item)?;
    expand_item(Rule::NullableEnum, args, &item, config).map(|expanded| expanded.tokens)
}

pub fn codable_enum(
    args: TokenStream,
    item: TokenStream,
    config: &ExpansionConfig,
) -> syn::Result<TokenStream> {
    let item = syn::parse2::<Item>(item)?;
    expand_item(Rule::CodableEnum, args, &item, config).map(|expanded| expanded.tokens)
}

/// Runs an attribute rule on `item`, whose triggering attribute has already
/// been removed and whose arguments are `args`.
pub fn expand_item(
    rule: Rule,
    args: TokenStream,
    item: &Item,
    config: &ExpansionConfig,
) -> syn::Result<Expanded> {
    let raw_type = match rule {
        Rule::NullableEnum if !args.is_empty() => {
            return Err(syn::Error::new_spanned(
                args,
                format!("#[{}] takes no arguments", rule),
            ));
        }
        Rule::NullableEnum => None,
        Rule::CodableEnum => types::parse_raw_type(args)?.map(|ty| types::type_ref(&ty)),
        Rule::Stringify => {
            return Err(syn::Error::new_spanned(
                item,
                format!("{}! is used as a function-like macro", rule),
            ));
        }
    };

    if let Item::Enum(item) = item {
        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                format!("#[{}] does not support generic enums", rule),
            ));
        }
    }

    let decl = parser::lower_item(item, raw_type);
    tracing::debug!(%rule, item = %decl.name, "expanding item");

    let mut declarations = Vec::new();
    let mut requests = vec![ExpansionRequest::members(decl.clone())];
    if rule == Rule::CodableEnum {
        requests.push(ExpansionRequest::extensions(decl, Vec::new()));
    }
    for request in &requests {
        let expansion = casegen_core::expand(rule, request, config)
            .map_err(|e| diagnostics::to_syn_error(&e, item))?;
        declarations.extend_from_slice(expansion.declarations());
    }

    let Item::Enum(item) = item else {
        return Err(syn::Error::new_spanned(
            item,
            format!("#[{}] can only be applied to an enum", rule),
        ));
    };

    let tokens = codegen::render_enum(item, &declarations, config)
        .map_err(|e| syn::Error::new_spanned(&item.ident, e))?;
    Ok(Expanded {
        tokens,
        declarations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn config() -> ExpansionConfig {
        ExpansionConfig::default()
    }

    mod stringify_tests {
        use super::*;

        #[test]
        fn should_pair_sum_with_text() {
            let tokens = stringify(quote!(a + b)).unwrap();
            assert_eq!(tokens.to_string(), "(a + b , \"a + b\")");
        }

        #[test]
        fn should_reject_no_arguments() {
            let err = stringify(TokenStream::new()).unwrap_err();
            assert!(err.to_string().contains("exactly one expression"));
        }

        #[test]
        fn should_reject_two_arguments() {
            assert!(stringify(quote!(a, b)).is_err());
        }

        #[test]
        fn source_text_should_be_kept_verbatim() {
            for (source, expected) in [
                ("a+b", "(a + b , \"a+b\")"),
                ("foo(x)", "(foo (x) , \"foo(x)\")"),
                ("  x  *  2 ,", "(x * 2 , \"x  *  2\")"),
            ] {
                let tokens = stringify_source(source).unwrap();
                assert_eq!(tokens.to_string(), expected, "source {:?}", source);
            }
        }

        #[test]
        fn source_with_two_expressions_should_fail() {
            let err = stringify_source("a, b").unwrap_err();
            assert!(err.to_string().contains("got 2"));
        }

        #[test]
        fn output_should_parse_as_tuple() {
            let tokens = stringify(quote!(format!("{}", x))).unwrap();
            let tuple: syn::ExprTuple = syn::parse2(tokens).unwrap();
            assert_eq!(tuple.elems.len(), 2);
        }
    }

    mod nullable_tests {
        use super::*;

        #[test]
        fn should_render_fallback_variant_and_constructor() {
            let tokens = nullable_enum(
                TokenStream::new(),
                quote! {
                    #[derive(Debug, PartialEq)]
                    pub enum Status { Visitor, Pr }
                },
                &config(),
            )
            .unwrap();

            let file: syn::File = syn::parse2(tokens).unwrap();
            assert_eq!(file.items.len(), 2, "enum and one impl block");

            let Item::Enum(rendered) = &file.items[0] else {
                panic!("expected the enum first");
            };
            let names: Vec<_> = rendered.variants.iter().map(|v| v.ident.to_string()).collect();
            assert_eq!(names, ["Visitor", "Pr", "Unknown"]);

            let Item::Impl(block) = &file.items[1] else {
                panic!("expected an impl block");
            };
            assert!(block.trait_.is_none());
            assert_eq!(block.items.len(), 1);
        }

        #[test]
        fn should_expose_declarations() {
            let item: Item = syn::parse_quote!(
                enum Status {
                    Visitor,
                    Pr,
                }
            );
            let expanded =
                expand_item(Rule::NullableEnum, TokenStream::new(), &item, &config()).unwrap();

            assert_eq!(expanded.declarations.len(), 2);
            let body = &expanded.declarations[1].as_initializer().unwrap().body;
            assert_eq!(body.branch_count(), 3);
        }

        #[test]
        fn should_reject_arguments() {
            let err = nullable_enum(quote!(String), quote!(enum A { X }), &config()).unwrap_err();
            assert!(err.to_string().contains("takes no arguments"));
        }

        #[test]
        fn should_reject_struct() {
            let err = nullable_enum(TokenStream::new(), quote!(struct Point;), &config()).unwrap_err();
            assert!(err.to_string().contains("#[nullable_enum]"));
            assert!(err.to_string().contains("struct"));
        }

        #[test]
        fn should_reject_payload_variant() {
            let err = nullable_enum(
                TokenStream::new(),
                quote!(enum Shape { Empty, Circle(f64) }),
                &config(),
            )
            .unwrap_err();
            assert!(err.to_string().contains("Circle"));
        }

        #[test]
        fn unescapable_fallback_should_be_an_error() {
            let mut config = config();
            config.codegen.fallback_case = "self".into();

            let err = nullable_enum(
                TokenStream::new(),
                quote!(enum Status { Visitor, Pr }),
                &config,
            )
            .unwrap_err();
            assert!(err.to_string().contains("`self` cannot be used as a case name"));
        }

        #[test]
        fn should_reject_generic_enum() {
            let err = nullable_enum(
                TokenStream::new(),
                quote!(enum Tagged<'a> { A }),
                &config(),
            )
            .unwrap_err();
            assert!(err.to_string().contains("generic"));
        }
    }

    mod codable_tests {
        use super::*;

        fn expand_event() -> syn::File {
            let tokens = codable_enum(
                quote!(String),
                quote! {
                    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                    pub enum Event { Opened, Pr = "pull_request" }
                },
                &config(),
            )
            .unwrap();
            syn::parse2(tokens).unwrap()
        }

        #[test]
        fn should_render_enum_methods_and_two_conformances() {
            let file = expand_event();
            assert_eq!(file.items.len(), 4, "enum, inherent impl, Deserialize, Serialize");

            let Item::Impl(inherent) = &file.items[1] else {
                panic!("expected the inherent impl");
            };
            let methods: Vec<_> = inherent
                .items
                .iter()
                .filter_map(|item| match item {
                    syn::ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                    _ => None,
                })
                .collect();
            assert_eq!(methods, ["raw_value", "from_raw_value"]);

            let traits: Vec<_> = file.items[2..]
                .iter()
                .map(|item| match item {
                    Item::Impl(block) => {
                        let (_, path, _) = block.trait_.as_ref().unwrap();
                        path.segments.last().unwrap().ident.to_string()
                    }
                    _ => panic!("expected a trait impl"),
                })
                .collect();
            assert_eq!(traits, ["Deserialize", "Serialize"]);
        }

        #[test]
        fn should_strip_string_discriminant() {
            let file = expand_event();
            let Item::Enum(rendered) = &file.items[0] else {
                panic!("expected the enum first");
            };
            assert!(rendered.variants.iter().all(|v| v.discriminant.is_none()));
        }

        #[test]
        fn should_use_configured_serde_path() {
            let mut config = config();
            config.codegen.serde_path = "::my_serde".into();
            let tokens = codable_enum(quote!(String), quote!(enum A { X }), &config).unwrap();
            assert!(tokens.to_string().contains(":: my_serde :: Deserialize"));
        }

        #[test]
        fn should_require_raw_type() {
            let err = codable_enum(TokenStream::new(), quote!(enum A { X }), &config()).unwrap_err();
            assert!(err.to_string().contains("raw-value type"));
        }

        #[test]
        fn should_reject_integer_raw_type() {
            let err = codable_enum(quote!(u8), quote!(enum A { X }), &config()).unwrap_err();
            assert!(err.to_string().contains("string raw values"));
        }

        #[test]
        fn should_reject_integer_raw_value() {
            let err =
                codable_enum(quote!(String), quote!(enum A { X = 1 }), &config()).unwrap_err();
            assert!(err.to_string().contains("expected a string literal"));
        }

        #[test]
        fn should_reject_shared_raw_value() {
            let err = codable_enum(
                quote!(String),
                quote!(enum A { X = "x", Y = "x" }),
                &config(),
            )
            .unwrap_err();
            assert!(err.to_string().contains("`Y` reuses raw value \"x\" of case `X`"));
        }

        #[test]
        fn should_reject_fallback_collision() {
            let err = codable_enum(
                quote!(String),
                quote!(enum A { X, Unknown }),
                &config(),
            )
            .unwrap_err();
            assert!(err.to_string().contains("collides"));
        }
    }
}
