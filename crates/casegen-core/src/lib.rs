//! # casegen-core
//!
//! Host-agnostic core of the casegen code generators.
//!
//! This crate provides:
//! - [`syntax`]: the abstract input and output trees
//! - [`matcher`]: extraction of an enum's ordered case list
//! - [`rules`]: the stringify, nullable-enum and codable-enum expansions
//! - [`request::expand`]: dispatch of one annotation site to one rule
//! - [`eval`]: an interpreter for synthesized switches
//! - [`ExpansionConfig`] and the error types
//!
//! Front ends lower their own syntax into [`SyntaxNode`] and render the
//! returned [`Declaration`]s and [`Expression`]s back out; nothing in here
//! depends on a particular parser.

pub mod config;
pub mod error;
pub mod eval;
pub mod matcher;
pub mod request;
pub mod rules;
pub mod syntax;

pub use config::{ConfigError, ExpansionConfig};
pub use error::{EvalError, ExpansionError, MatchError, Result};
pub use matcher::{extract_cases, CaseElement};
pub use request::{expand, Expansion, ExpansionRequest, ExpansionResult, SiteKind};
pub use rules::{Rule, FALLBACK_RAW_VALUE};
pub use syntax::{Declaration, Expression, SyntaxNode};
