//! CLI support for verdict-lang
//!
//! Provides programmatic access to verdict CLI functionality for embedding
//! in other tools.

mod check;
mod convert;
mod inspect;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{json_to_context, json_to_value, value_to_json};
pub use inspect::render_ast;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Rule parse/combine error
    Rule(crate::RuleError),
    /// Evaluation error
    Eval(crate::EvalError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No data context provided
    NoInput,
    /// A data context value the engine cannot represent
    UnsupportedData(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Rule(e) => write!(f, "Rule error: {}", e),
            CliError::Eval(e) => write!(f, "Evaluation error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No data context provided. Use --data or pipe JSON to stdin.")
            }
            CliError::UnsupportedData(msg) => write!(f, "Unsupported data context: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Rule(e) => Some(e),
            CliError::Eval(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::RuleError> for CliError {
    fn from(e: crate::RuleError) -> Self {
        CliError::Rule(e)
    }
}

impl From<crate::EvalError> for CliError {
    fn from(e: crate::EvalError) -> Self {
        CliError::Eval(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
