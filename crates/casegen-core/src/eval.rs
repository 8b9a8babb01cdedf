//! Interpreter for synthesized switches.
//!
//! Lets the rules' output be checked for behavior (which branch a given
//! input selects) without compiling the rendered code.

use crate::error::EvalError;
use crate::syntax::{Branch, Pattern, Switch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Str(&'a str),
    Case(&'a str),
}

impl Value<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "a string",
            Value::Case(_) => "a case",
        }
    }
}

fn pattern_kind(pattern: &Pattern) -> &'static str {
    match pattern {
        Pattern::Str(_) => "string",
        Pattern::Case(_) => "case",
        Pattern::RawValueOf(_) => "raw value",
    }
}

/// Runs switches; `RawValueOf` patterns resolve through `accessor`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator<'a> {
    accessor: Option<&'a Switch>,
}

impl<'a> Evaluator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accessor(accessor: &'a Switch) -> Self {
        Self {
            accessor: Some(accessor),
        }
    }

    /// Returns the first matching arm's branch, or the default.
    pub fn run<'s>(&self, switch: &'s Switch, subject: Value<'_>) -> Result<&'s Branch, EvalError> {
        for arm in &switch.arms {
            if self.matches(&arm.pattern, subject)? {
                return Ok(&arm.branch);
            }
        }
        Ok(&switch.default)
    }

    pub fn raw_value(&self, case: &str) -> Result<String, EvalError> {
        let accessor = self
            .accessor
            .ok_or_else(|| EvalError::MissingAccessor(case.to_owned()))?;

        match Evaluator::new().run(accessor, Value::Case(case))? {
            Branch::ReturnStr(value) => Ok(value.clone()),
            Branch::AssignCase(other) => Err(EvalError::NotAString(other.clone())),
        }
    }

    fn matches(&self, pattern: &Pattern, subject: Value<'_>) -> Result<bool, EvalError> {
        match (pattern, subject) {
            (Pattern::Str(expected), Value::Str(actual)) => Ok(expected == actual),
            (Pattern::Case(expected), Value::Case(actual)) => Ok(expected == actual),
            (Pattern::RawValueOf(case), Value::Str(actual)) => Ok(self.raw_value(case)? == actual),
            (pattern, subject) => Err(EvalError::SubjectMismatch {
                pattern: pattern_kind(pattern),
                subject: subject.kind(),
            }),
        }
    }
}
