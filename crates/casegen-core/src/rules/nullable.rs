use crate::config::ExpansionConfig;
use crate::error::{ExpansionError, Result};
use crate::matcher;
use crate::syntax::{CaseDeclaration, Declaration, Initializer, Subject, SyntaxNode};

pub const ATTRIBUTE: &str = "nullable_enum";
pub const INITIALIZER: &str = "with_name";
pub const PARAMETER: &str = "value";

/// Synthesizes the fallback case and a string-keyed constructor.
///
/// Always yields exactly two declarations: the fallback case, then the
/// `with_name` initializer whose switch matches each case's exact name.
pub fn expand(node: &SyntaxNode, config: &ExpansionConfig) -> Result<Vec<Declaration>> {
    let cases = matcher::extract_cases(node).map_err(ExpansionError::structural(ATTRIBUTE))?;
    let fallback = &config.codegen.fallback_case;
    super::ensure_no_collision(&cases, fallback)?;

    let initializer = Initializer {
        name: INITIALIZER.into(),
        parameter: PARAMETER.into(),
        body: super::name_lookup(&cases, Subject::Parameter(PARAMETER.into()), fallback),
    };

    Ok(vec![
        Declaration::Case(CaseDeclaration::new(fallback.as_str())),
        Declaration::Initializer(initializer),
    ])
}
