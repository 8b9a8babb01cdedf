use thiserror::Error;

use crate::request::SiteKind;
use crate::rules::Rule;
use crate::syntax::{DeclKind, Literal};

/// The input tree does not have the shape a rule reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("can only be applied to an enum, `{name}` is a {kind}")]
    NotAnEnum { name: String, kind: DeclKind },

    #[error("expected {expected}, found {found}")]
    UnexpectedNode {
        expected: &'static str,
        found: &'static str,
    },

    #[error("case `{case}` carries associated values, only unit cases are supported")]
    CaseWithPayload { case: String },

    #[error("case `{case}` is declared more than once")]
    DuplicateCase { case: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("#[{attribute}] {source}")]
    Structural {
        attribute: &'static str,
        source: MatchError,
    },

    #[error("#[{attribute}] requires `{name}` to declare a raw-value type, e.g. #[{attribute}(String)]")]
    MissingRawValueType { attribute: &'static str, name: String },

    #[error("#[{attribute}] only supports string raw values, `{name}` declares `{found}`")]
    UnsupportedRawValueType {
        attribute: &'static str,
        name: String,
        found: String,
    },

    #[error("case `{case}` has raw value {literal}, expected a string literal")]
    InvalidRawValue { case: String, literal: Literal },

    #[error("case `{case}` reuses raw value \"{value}\" of case `{first}`")]
    DuplicateRawValue {
        case: String,
        first: String,
        value: String,
    },

    #[error("case `{case}` collides with the synthesized fallback case")]
    FallbackCollision { case: String },

    #[error("`{rule}` cannot expand at {site} site")]
    UnsupportedSite { rule: Rule, site: SiteKind },
}

impl ExpansionError {
    pub fn structural(attribute: &'static str) -> impl Fn(MatchError) -> Self + Copy {
        move |source| Self::Structural { attribute, source }
    }
}

/// Raised when interpreting a synthesized switch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("pattern {pattern} cannot be compared with {subject}")]
    SubjectMismatch {
        pattern: &'static str,
        subject: &'static str,
    },

    #[error("raw value of case `{0}` requested without an accessor")]
    MissingAccessor(String),

    #[error("accessor produced `{0}` instead of a string")]
    NotAString(String),
}

pub type Result<T> = std::result::Result<T, ExpansionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_error_names_attribute_and_kind() {
        let err = ExpansionError::structural("nullable_enum")(MatchError::NotAnEnum {
            name: "Point".into(),
            kind: DeclKind::Struct,
        });
        let msg = err.to_string();
        assert!(msg.contains("#[nullable_enum]"));
        assert!(msg.contains("struct"));
        assert!(msg.contains("Point"));
    }

    #[test]
    fn test_structural_error_exposes_source() {
        use std::error::Error as _;

        let err = ExpansionError::structural("codable_enum")(MatchError::DuplicateCase {
            case: "a".into(),
        });
        assert!(err.source().is_some());
    }
}
