//! Rule construction and combination.
//!
//! [`create_rule`] turns one rule string into an AST; [`combine_rules`]
//! folds several independently parsed rules into a single composite AST
//! joined by a logical operator.

use crate::{
    ast::{AstNode, Operator},
    lexer::{LexError, Lexer},
    parser::{ParseError, Parser},
};

/// Errors from building or combining rules.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Lexer error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
    /// `combine_rules` called with no rules
    EmptyRuleSet,
    /// A joiner that is not `AND`/`OR`
    InvalidJoiner(Operator),
    /// One input of a rule set failed to parse
    InvalidRule { index: usize, source: Box<RuleError> },
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::Lex(e) => write!(f, "Lex error: {}", e),
            RuleError::Parse(e) => write!(f, "Parse error: {}", e),
            RuleError::EmptyRuleSet => write!(f, "Cannot combine an empty rule set"),
            RuleError::InvalidJoiner(op) => {
                write!(f, "Invalid joiner '{}': rules combine with AND or OR", op)
            }
            RuleError::InvalidRule { index, source } => {
                write!(f, "Rule at index {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::Lex(e) => Some(e),
            RuleError::Parse(e) => Some(e),
            RuleError::InvalidRule { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<LexError> for RuleError {
    fn from(e: LexError) -> Self {
        RuleError::Lex(e)
    }
}

impl From<ParseError> for RuleError {
    fn from(e: ParseError) -> Self {
        RuleError::Parse(e)
    }
}

/// Parses a rule string into an AST.
///
/// # Examples
///
/// ```
/// use verdict_lang::{create_rule, AstNode, Operator};
///
/// let ast = create_rule("age > 30 AND department = 'Sales'").unwrap();
/// assert!(matches!(ast, AstNode::BinaryOp { op: Operator::And, .. }));
/// ```
pub fn create_rule(text: &str) -> Result<AstNode, RuleError> {
    let lexer = Lexer::new(text);
    let mut parser = Parser::new(lexer)?;
    Ok(parser.parse()?)
}

/// Combines rule strings into one AST, OR-joined.
///
/// Equivalent to [`combine_rules_with`] with [`Operator::Or`], the
/// compatibility default.
pub fn combine_rules<S: AsRef<str>>(rules: &[S]) -> Result<AstNode, RuleError> {
    combine_rules_with(rules, Operator::Or)
}

/// Combines rule strings into one AST with the given logical joiner.
///
/// Each rule is parsed independently; the first failure aborts and reports
/// the offending input's index. The resulting ASTs fold left-to-right, so
/// three rules produce `joiner(joiner(r0, r1), r2)`. A single rule comes
/// back unchanged with no wrapping node; an empty slice is
/// [`RuleError::EmptyRuleSet`].
///
/// # Examples
///
/// ```
/// use verdict_lang::{combine_rules_with, AstNode, Operator};
///
/// let rules = ["age > 30", "department = 'Sales'"];
/// let ast = combine_rules_with(&rules, Operator::And).unwrap();
/// assert!(matches!(ast, AstNode::BinaryOp { op: Operator::And, .. }));
/// ```
pub fn combine_rules_with<S: AsRef<str>>(
    rules: &[S],
    joiner: Operator,
) -> Result<AstNode, RuleError> {
    if !joiner.is_logical() {
        return Err(RuleError::InvalidJoiner(joiner));
    }

    let mut combined: Option<AstNode> = None;

    for (index, rule) in rules.iter().enumerate() {
        let ast = create_rule(rule.as_ref()).map_err(|e| RuleError::InvalidRule {
            index,
            source: Box::new(e),
        })?;

        combined = Some(match combined {
            None => ast,
            Some(acc) => AstNode::binary(joiner, acc, ast),
        });
    }

    combined.ok_or(RuleError::EmptyRuleSet)
}
