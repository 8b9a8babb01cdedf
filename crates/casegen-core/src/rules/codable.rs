//! String-backed enums with a fallback case and string serialization.
//!
//! Member synthesis adds the fallback case, a `raw_value` accessor and a
//! `from_raw_value` constructor. Extension synthesis adds one decode and one
//! encode conformance; both go through the case *name*, not the raw value.

use std::collections::HashMap;

use crate::config::ExpansionConfig;
use crate::error::{ExpansionError, Result};
use crate::matcher::{self, CaseElement};
use crate::syntax::{
    Accessor, Arm, Branch, CaseDeclaration, Conformance, DeclNode, Declaration, Extension,
    Initializer, Literal, Pattern, Subject, Switch, SyntaxNode, TypeRef,
};

use super::FALLBACK_RAW_VALUE;

pub const ATTRIBUTE: &str = "codable_enum";
pub const RAW_VALUE_ACCESSOR: &str = "raw_value";
pub const RAW_VALUE_INITIALIZER: &str = "from_raw_value";
pub const PARAMETER: &str = "value";

/// Accepts `String`, `str` and references to `str`, path-qualified or not.
pub fn is_string_type(ty: &TypeRef) -> bool {
    let name = ty.name.trim();
    let name = match name.strip_prefix('&') {
        Some(rest) => match rest.trim_start().strip_prefix('\'') {
            Some(lifetime) => lifetime
                .trim_start_matches(|c: char| c.is_alphanumeric() || c == '_')
                .trim_start(),
            None => rest.trim_start(),
        },
        None => name,
    };
    let last = name.rsplit("::").next().unwrap_or(name).trim();
    matches!(last, "String" | "str")
}

/// The enum's declared raw-value type, required to be a string type.
pub fn raw_value_type(decl: &DeclNode) -> Result<&TypeRef> {
    let ty = decl
        .inherited
        .first()
        .ok_or_else(|| ExpansionError::MissingRawValueType {
            attribute: ATTRIBUTE,
            name: decl.name.clone(),
        })?;

    if !is_string_type(ty) {
        return Err(ExpansionError::UnsupportedRawValueType {
            attribute: ATTRIBUTE,
            name: decl.name.clone(),
            found: ty.name.clone(),
        });
    }
    Ok(ty)
}

fn raw_value_of(case: &CaseElement) -> Result<String> {
    match &case.raw_value {
        None => Ok(case.name.clone()),
        Some(Literal::Str(value)) => Ok(value.clone()),
        Some(literal) => Err(ExpansionError::InvalidRawValue {
            case: case.name.clone(),
            literal: literal.clone(),
        }),
    }
}

/// Raw values in case order. Two cases sharing one would leave the second
/// unreachable from `from_raw_value`.
fn raw_values(cases: &[CaseElement]) -> Result<Vec<String>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    cases
        .iter()
        .map(|case| {
            let value = raw_value_of(case)?;
            if let Some(first) = seen.insert(value.clone(), &case.name) {
                return Err(ExpansionError::DuplicateRawValue {
                    case: case.name.clone(),
                    first: first.to_owned(),
                    value,
                });
            }
            Ok(value)
        })
        .collect()
}

pub fn expand_members(node: &SyntaxNode, config: &ExpansionConfig) -> Result<Vec<Declaration>> {
    let structural = ExpansionError::structural(ATTRIBUTE);
    let decl = matcher::enum_decl(node).map_err(structural)?;
    let cases = matcher::cases_of(decl).map_err(structural)?;
    raw_value_type(decl)?;
    let fallback = &config.codegen.fallback_case;
    super::ensure_no_collision(&cases, fallback)?;

    let accessor_arms = cases
        .iter()
        .zip(raw_values(&cases)?)
        .map(|(case, value)| Arm::new(Pattern::Case(case.name.clone()), Branch::ReturnStr(value)))
        .collect();

    let accessor = Accessor {
        name: RAW_VALUE_ACCESSOR.into(),
        body: Switch {
            subject: Subject::SelfValue,
            arms: accessor_arms,
            default: Branch::ReturnStr(FALLBACK_RAW_VALUE.into()),
        },
    };

    let initializer = Initializer {
        name: RAW_VALUE_INITIALIZER.into(),
        parameter: PARAMETER.into(),
        body: Switch {
            subject: Subject::Parameter(PARAMETER.into()),
            arms: cases
                .iter()
                .map(|case| {
                    Arm::new(
                        Pattern::RawValueOf(case.name.clone()),
                        Branch::AssignCase(case.name.clone()),
                    )
                })
                .collect(),
            default: Branch::AssignCase(fallback.clone()),
        },
    };

    Ok(vec![
        Declaration::Case(CaseDeclaration::new(fallback.as_str())),
        Declaration::Accessor(accessor),
        Declaration::Initializer(initializer),
    ])
}

/// Builds the decode and encode conformances for `target`, in that order.
pub fn expand_extensions(
    node: &SyntaxNode,
    target: &TypeRef,
    config: &ExpansionConfig,
) -> Result<Vec<Declaration>> {
    let cases = matcher::extract_cases(node).map_err(ExpansionError::structural(ATTRIBUTE))?;
    let fallback = &config.codegen.fallback_case;
    super::ensure_no_collision(&cases, fallback)?;

    let decode = Extension {
        target: target.clone(),
        conformance: Conformance::Decodable,
        body: super::name_lookup(&cases, Subject::DecodedString, fallback),
    };

    let encode = Extension {
        target: target.clone(),
        conformance: Conformance::Encodable,
        body: Switch {
            subject: Subject::SelfValue,
            arms: cases
                .iter()
                .map(|case| {
                    Arm::new(
                        Pattern::Case(case.name.clone()),
                        Branch::ReturnStr(case.name.clone()),
                    )
                })
                .collect(),
            default: Branch::ReturnStr(FALLBACK_RAW_VALUE.into()),
        },
    };

    Ok(vec![
        Declaration::Extension(decode),
        Declaration::Extension(encode),
    ])
}
