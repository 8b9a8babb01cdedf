//! # casegen
//!
//! Compile-time generators for enum boilerplate and self-describing
//! expressions.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use casegen::prelude::*;
//!
//! #[codable_enum(String)]
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Event {
//!     Opened,
//!     Pr = "pull_request",
//! }
//!
//! assert_eq!(Event::Pr.raw_value(), "pull_request");
//! assert_eq!(Event::from_raw_value("pull_request"), Event::Pr);
//!
//! // Decoding matches variant names and never fails on unknown input.
//! let event: Event = serde_json::from_str("\"closed\"")?;
//! assert_eq!(event, Event::Unknown);
//!
//! let (value, text) = stringified!(2 + 3);
//! assert_eq!((value, text), (5, "2 + 3"));
//! ```
//!
//! The generated serde impls name the crate through `serde`, so the using
//! crate depends on it directly, or points `serde_path` in `casegen.toml` at
//! the re-export: `serde_path = "casegen::serde"`.
//!
//! # Features
//!
//! - `cli`: Enable the `casegen` binary, which expands annotated enums in a
//!   source file and prints the result

#[cfg(feature = "cli")]
pub mod cli;

pub use casegen_core::{
    ConfigError, Declaration, EvalError, ExpansionConfig, ExpansionError, Expression, Rule,
    FALLBACK_RAW_VALUE,
};
pub use casegen_macros::{codable_enum, nullable_enum, stringified};

#[doc(hidden)]
pub use serde;

pub mod prelude {
    pub use casegen_macros::{codable_enum, nullable_enum, stringified};
}
