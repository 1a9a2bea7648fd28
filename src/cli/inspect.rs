//! Render parsed rules for inspection

use super::CliError;
use crate::{ast::Operator, combine_rules_with};

/// Parse the rules (combining with the joiner if there are several) and
/// render the resulting AST as an indented tree.
pub fn render_ast(rules: &[String], joiner: Operator) -> Result<String, CliError> {
    let ast = combine_rules_with(rules, joiner)?;
    Ok(format!("{:#?}", ast))
}
