//! Execute verdict rules against a JSON data context

use super::{CliError, json_to_context, value_to_json};
use crate::{ast::Operator, combine_rules_with, evaluate_rule};

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// The rule expressions to check; several are combined with the joiner
    pub rules: Vec<String>,
    /// Operator joining multiple rules
    pub joiner: Operator,
    /// JSON data context string
    pub input: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rule evaluated successfully with JSON output
    Success(serde_json::Value),
}

/// Execute a verdict check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let ast = combine_rules_with(&options.rules, options.joiner)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str).map_err(CliError::Json)?;
    let data = json_to_context(&json_value)?;

    let result = evaluate_rule(&ast, &data).map_err(CliError::Eval)?;

    Ok(CheckResult::Success(value_to_json(result)))
}
