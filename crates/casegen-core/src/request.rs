use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ExpansionConfig;
use crate::error::{ExpansionError, MatchError, Result};
use crate::matcher;
use crate::rules::{codable, nullable, stringify, Rule};
use crate::syntax::{DeclNode, Declaration, Expression, Invocation, SyntaxNode, TypeRef};

/// Where in the program the host invoked a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    Expression,
    MemberSynthesis,
    ExtensionSynthesis,
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::Expression => write!(f, "an expression"),
            SiteKind::MemberSynthesis => write!(f, "a member-synthesis"),
            SiteKind::ExtensionSynthesis => write!(f, "an extension-synthesis"),
        }
    }
}

/// One annotation site, created by the host and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    pub site: SiteKind,
    pub node: SyntaxNode,
    #[serde(default)]
    pub conformances: Vec<TypeRef>,
}

impl ExpansionRequest {
    pub fn expression(invocation: Invocation) -> Self {
        Self {
            site: SiteKind::Expression,
            node: invocation.into(),
            conformances: Vec::new(),
        }
    }

    pub fn members(decl: DeclNode) -> Self {
        Self {
            site: SiteKind::MemberSynthesis,
            node: decl.into(),
            conformances: Vec::new(),
        }
    }

    pub fn extensions(decl: DeclNode, conformances: Vec<TypeRef>) -> Self {
        Self {
            site: SiteKind::ExtensionSynthesis,
            node: decl.into(),
            conformances,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "output", rename_all = "snake_case")]
pub enum Expansion {
    Expression(Expression),
    Declarations(Vec<Declaration>),
}

impl Expansion {
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Expansion::Expression(expr) => Some(expr),
            Expansion::Declarations(_) => None,
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        match self {
            Expansion::Declarations(decls) => decls,
            Expansion::Expression(_) => &[],
        }
    }
}

pub type ExpansionResult = Result<Expansion>;

/// Runs `rule` for one request. The rule either fully succeeds or
/// contributes nothing.
pub fn expand(rule: Rule, request: &ExpansionRequest, config: &ExpansionConfig) -> ExpansionResult {
    let span = tracing::debug_span!("expand", %rule, site = %request.site);
    let _enter = span.enter();

    let expansion = match (rule, request.site) {
        (Rule::Stringify, SiteKind::Expression) => {
            let expression = match &request.node {
                SyntaxNode::Invocation(invocation) => stringify::expand(invocation),
                SyntaxNode::Expr(expr) => stringify::expand(&Invocation::new(
                    stringify::MACRO_NAME,
                    vec![expr.clone()],
                )),
                other => {
                    return Err(ExpansionError::Structural {
                        attribute: stringify::MACRO_NAME,
                        source: MatchError::UnexpectedNode {
                            expected: "an expression",
                            found: other.kind_name(),
                        },
                    })
                }
            };
            Expansion::Expression(expression)
        }
        (Rule::NullableEnum, SiteKind::MemberSynthesis) => {
            Expansion::Declarations(nullable::expand(&request.node, config)?)
        }
        (Rule::CodableEnum, SiteKind::MemberSynthesis) => {
            Expansion::Declarations(codable::expand_members(&request.node, config)?)
        }
        (Rule::CodableEnum, SiteKind::ExtensionSynthesis) => {
            let decl = matcher::enum_decl(&request.node)
                .map_err(ExpansionError::structural(codable::ATTRIBUTE))?;
            tracing::trace!(conformances = ?request.conformances, "synthesizing conformances");
            let target = TypeRef::new(decl.name.as_str());
            Expansion::Declarations(codable::expand_extensions(&request.node, &target, config)?)
        }
        (rule, site) => return Err(ExpansionError::UnsupportedSite { rule, site }),
    };

    tracing::debug!(
        declarations = expansion.declarations().len(),
        "expansion complete"
    );
    Ok(expansion)
}
