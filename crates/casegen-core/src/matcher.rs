//! Reads an enum declaration's case list out of the input tree.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::MatchError;
use crate::syntax::{DeclKind, DeclNode, Literal, Member, SyntaxNode};

/// One enum case, flattened out of its case declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseElement {
    pub name: String,
    pub raw_value: Option<Literal>,
}

/// Returns the node as an enum declaration.
pub fn enum_decl(node: &SyntaxNode) -> Result<&DeclNode, MatchError> {
    let SyntaxNode::Decl(decl) = node else {
        return Err(MatchError::UnexpectedNode {
            expected: "an enum declaration",
            found: node.kind_name(),
        });
    };

    if decl.kind != DeclKind::Enum {
        return Err(MatchError::NotAnEnum {
            name: decl.name.clone(),
            kind: decl.kind.clone(),
        });
    }

    Ok(decl)
}

/// Extracts the enum's cases in declaration order.
pub fn extract_cases(node: &SyntaxNode) -> Result<Vec<CaseElement>, MatchError> {
    cases_of(enum_decl(node)?)
}

pub fn cases_of(decl: &DeclNode) -> Result<Vec<CaseElement>, MatchError> {
    let mut seen = HashSet::new();
    let mut cases = Vec::new();

    let elements = decl
        .members
        .iter()
        .filter_map(|member| match member {
            Member::Case(case) => Some(&case.elements),
            Member::Other { .. } => None,
        })
        .flatten();

    for element in elements {
        if element.has_payload {
            return Err(MatchError::CaseWithPayload {
                case: element.name.clone(),
            });
        }
        if !seen.insert(element.name.as_str()) {
            return Err(MatchError::DuplicateCase {
                case: element.name.clone(),
            });
        }
        cases.push(CaseElement {
            name: element.name.clone(),
            raw_value: element.raw_value.clone(),
        });
    }

    tracing::trace!(decl = %decl.name, cases = cases.len(), "matched enum cases");
    Ok(cases)
}
