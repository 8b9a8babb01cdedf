//! Expansion rules.
//!
//! Each rule is a pure function from an input node (plus configuration) to
//! freshly built output nodes. Every switch a rule builds lists the enum's
//! cases in declaration order and ends with exactly one default branch.

pub mod codable;
pub mod nullable;
pub mod stringify;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExpansionError, Result};
use crate::matcher::CaseElement;
use crate::request::SiteKind;
use crate::syntax::{Arm, Branch, Pattern, Subject, Switch};

/// String written for the fallback case wherever a raw or encoded value is
/// produced. It stays capitalized even though the rules are free to name the
/// fallback case itself differently.
pub const FALLBACK_RAW_VALUE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Stringify,
    NullableEnum,
    CodableEnum,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Stringify, Rule::NullableEnum, Rule::CodableEnum];

    /// Name the rule is invoked by in source.
    pub fn attribute(&self) -> &'static str {
        match self {
            Rule::Stringify => stringify::MACRO_NAME,
            Rule::NullableEnum => nullable::ATTRIBUTE,
            Rule::CodableEnum => codable::ATTRIBUTE,
        }
    }

    pub fn from_attribute(name: &str) -> Option<Rule> {
        Self::ALL.into_iter().find(|rule| rule.attribute() == name)
    }

    pub fn supports(&self, site: SiteKind) -> bool {
        match self {
            Rule::Stringify => site == SiteKind::Expression,
            Rule::NullableEnum => site == SiteKind::MemberSynthesis,
            Rule::CodableEnum => matches!(
                site,
                SiteKind::MemberSynthesis | SiteKind::ExtensionSynthesis
            ),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attribute())
    }
}

/// Exact case-name lookup: one arm per case, default to the fallback.
pub(crate) fn name_lookup(cases: &[CaseElement], subject: Subject, fallback: &str) -> Switch {
    let arms = cases
        .iter()
        .map(|case| {
            Arm::new(
                Pattern::Str(case.name.clone()),
                Branch::AssignCase(case.name.clone()),
            )
        })
        .collect();

    Switch {
        subject,
        arms,
        default: Branch::AssignCase(fallback.to_owned()),
    }
}

pub(crate) fn ensure_no_collision(cases: &[CaseElement], fallback: &str) -> Result<()> {
    match cases.iter().find(|case| case.name == fallback) {
        Some(case) => Err(ExpansionError::FallbackCollision {
            case: case.name.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str) -> CaseElement {
        CaseElement {
            name: name.into(),
            raw_value: None,
        }
    }

    #[test]
    fn test_rule_attribute_roundtrip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_attribute(rule.attribute()), Some(rule));
        }
        assert_eq!(Rule::from_attribute("derive"), None);
    }

    #[test]
    fn test_rule_sites() {
        assert!(Rule::Stringify.supports(SiteKind::Expression));
        assert!(!Rule::Stringify.supports(SiteKind::MemberSynthesis));
        assert!(Rule::NullableEnum.supports(SiteKind::MemberSynthesis));
        assert!(!Rule::NullableEnum.supports(SiteKind::ExtensionSynthesis));
        assert!(Rule::CodableEnum.supports(SiteKind::ExtensionSynthesis));
    }

    #[test]
    fn test_name_lookup_appends_default_last() {
        let switch = name_lookup(&[case("b"), case("a")], Subject::DecodedString, "Unknown");

        assert_eq!(switch.arms.len(), 2);
        assert_eq!(switch.arms[0].pattern, Pattern::Str("b".into()));
        assert_eq!(switch.arms[1].pattern, Pattern::Str("a".into()));
        assert_eq!(switch.default, Branch::AssignCase("Unknown".into()));
    }

    #[test]
    fn test_collision() {
        assert!(ensure_no_collision(&[case("a")], "Unknown").is_ok());
        assert_eq!(
            ensure_no_collision(&[case("Unknown")], "Unknown"),
            Err(ExpansionError::FallbackCollision {
                case: "Unknown".into()
            })
        );
    }
}
