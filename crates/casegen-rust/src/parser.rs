//! Lowers `syn` syntax into the casegen-core tree.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Fields, Item, ItemEnum, Lit, Meta, Variant};

use casegen_core::syntax::{
    CaseDecl, CaseElementNode, DeclKind, DeclNode, ExprNode, Invocation, Literal, Member,
    TypeRef,
};
use casegen_core::Rule;

pub fn lower_item(item: &Item, raw_type: Option<TypeRef>) -> DeclNode {
    let (kind, name) = match item {
        Item::Enum(item) => return lower_enum(item, raw_type),
        Item::Struct(item) => (DeclKind::Struct, item.ident.to_string()),
        Item::Union(item) => (DeclKind::Union, item.ident.to_string()),
        Item::Trait(item) => (DeclKind::Trait, item.ident.to_string()),
        Item::Fn(item) => (DeclKind::Function, item.sig.ident.to_string()),
        Item::Const(item) => (DeclKind::Other("const".into()), item.ident.to_string()),
        Item::Static(item) => (DeclKind::Other("static".into()), item.ident.to_string()),
        Item::Type(item) => (DeclKind::Other("type alias".into()), item.ident.to_string()),
        Item::Mod(item) => (DeclKind::Other("module".into()), item.ident.to_string()),
        Item::Impl(item) => (
            DeclKind::Other("impl block".into()),
            item.self_ty.to_token_stream().to_string(),
        ),
        other => (DeclKind::Other("item".into()), other.to_token_stream().to_string()),
    };

    let mut decl = DeclNode::new(kind, name);
    decl.inherited.extend(raw_type);
    decl
}

/// Every variant becomes its own single-element case declaration.
pub fn lower_enum(item: &ItemEnum, raw_type: Option<TypeRef>) -> DeclNode {
    let mut decl = DeclNode::enumeration(item.ident.unraw().to_string());
    decl.inherited.extend(raw_type);
    decl.members = item
        .variants
        .iter()
        .map(|variant| {
            Member::Case(CaseDecl {
                elements: vec![lower_variant(variant)],
            })
        })
        .collect();
    decl
}

fn lower_variant(variant: &Variant) -> CaseElementNode {
    CaseElementNode {
        name: variant.ident.unraw().to_string(),
        raw_value: variant
            .discriminant
            .as_ref()
            .map(|(_, expr)| lower_literal(expr)),
        has_payload: !matches!(variant.fields, Fields::Unit),
    }
}

fn lower_literal(expr: &Expr) -> Literal {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Literal::Str(lit.value()),
        other => Literal::Number(other.to_token_stream().to_string()),
    }
}

pub fn lower_expr(expr: &Expr) -> ExprNode {
    ExprNode::new(source_text(&expr.to_token_stream()))
}

pub fn lower_invocation<'a, I>(name: &str, arguments: I) -> Invocation
where
    I: IntoIterator<Item = &'a Expr>,
{
    Invocation::new(name, arguments.into_iter().map(lower_expr).collect())
}

/// Text of a token stream as the compiler prints it.
///
/// Stable proc macros cannot read the original file, so spacing between
/// tokens follows the compiler's printer; literals keep their exact
/// spelling, escapes included.
pub fn source_text(tokens: &TokenStream) -> String {
    tokens.to_string()
}

/// An item carrying one of the casegen attributes.
#[derive(Debug, Clone)]
pub struct Site {
    pub rule: Rule,
    pub args: TokenStream,
    /// The item with the triggering attribute removed.
    pub item: Item,
}

/// Finds annotated items in a file, descending into inline modules.
pub fn find_sites(file: &syn::File) -> Vec<Site> {
    let mut sites = Vec::new();
    collect_sites(&file.items, &mut sites);
    sites
}

fn collect_sites(items: &[Item], sites: &mut Vec<Site>) {
    for item in items {
        if let Item::Mod(module) = item {
            if let Some((_, items)) = &module.content {
                collect_sites(items, sites);
            }
            continue;
        }

        let mut item = item.clone();
        let Some(attrs) = item_attrs_mut(&mut item) else {
            continue;
        };
        let Some((position, rule)) = attrs
            .iter()
            .enumerate()
            .find_map(|(position, attr)| Some((position, rule_of(attr)?)))
        else {
            continue;
        };

        let attr = attrs.remove(position);
        sites.push(Site {
            rule,
            args: attr_args(&attr),
            item,
        });
    }
}

fn rule_of(attr: &Attribute) -> Option<Rule> {
    let last = attr.path().segments.last()?;
    match Rule::from_attribute(&last.ident.to_string())? {
        Rule::Stringify => None,
        rule => Some(rule),
    }
}

fn attr_args(attr: &Attribute) -> TokenStream {
    match &attr.meta {
        Meta::Path(_) => TokenStream::new(),
        Meta::List(list) => list.tokens.clone(),
        Meta::NameValue(nv) => nv.value.to_token_stream(),
    }
}

fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Enum(item) => Some(&mut item.attrs),
        Item::Struct(item) => Some(&mut item.attrs),
        Item::Union(item) => Some(&mut item.attrs),
        Item::Trait(item) => Some(&mut item.attrs),
        Item::Fn(item) => Some(&mut item.attrs),
        Item::Const(item) => Some(&mut item.attrs),
        Item::Static(item) => Some(&mut item.attrs),
        Item::Type(item) => Some(&mut item.attrs),
        Item::Impl(item) => Some(&mut item.attrs),
        _ => None,
    }
}
