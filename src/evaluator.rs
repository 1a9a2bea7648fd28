use std::cmp::Ordering;

use crate::{
    ast::{AstNode, Literal, Operator},
    value::{DataContext, Value},
};

/// Errors that can occur during rule evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Operands whose types the operator cannot compare
    ///
    /// Raised for any comparison involving `Missing`, for cross-type
    /// comparisons (string against number), and for orderings on booleans.
    TypeMismatch {
        op: Operator,
        left: Value,
        right: Value,
    },

    /// An operator outside the comparison set reached the comparison
    /// dispatcher
    UnknownOperator(Operator),

    /// An operator node carrying no usable operator
    ///
    /// Part of the public taxonomy; the typed AST cannot currently
    /// construct such a node.
    MissingOperator,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::TypeMismatch { op, left, right } => write!(
                f,
                "Type mismatch: cannot apply '{}' to {} and {}",
                op,
                type_name(left),
                type_name(right)
            ),
            EvalError::UnknownOperator(op) => {
                write!(f, "Unknown operator '{}' in comparison position", op)
            }
            EvalError::MissingOperator => write!(f, "Operator node without an operator"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Returns a human-readable type name for a Value
fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Missing => "missing",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Str(_) => "string",
    }
}

/// Evaluates a rule AST against a data context.
///
/// The walk is pure: the AST is never mutated, the data context is only
/// read, and the same inputs always produce the same result. Logical
/// operators short-circuit and return the deciding operand's value, so the
/// result of a rule whose top level is `AND`/`OR` is whatever value decided
/// the outcome; call [`Value::is_truthy`] on the result for a boolean
/// verdict.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use verdict_lang::{create_rule, evaluate_rule, Value};
///
/// let ast = create_rule("age > 30 AND department = 'Sales'").unwrap();
///
/// let mut data = HashMap::new();
/// data.insert("age".to_string(), Value::Number(35.0));
/// data.insert("department".to_string(), Value::Str("Sales".to_string()));
///
/// let result = evaluate_rule(&ast, &data).unwrap();
/// assert!(result.is_truthy());
/// ```
pub fn evaluate_rule(ast: &AstNode, data: &DataContext) -> Result<Value, EvalError> {
    match ast {
        AstNode::Operand(literal) => Ok(eval_literal(literal, data)),
        AstNode::BinaryOp { op, left, right } => match op {
            Operator::And => {
                let left_val = evaluate_rule(left, data)?;
                if !left_val.is_truthy() {
                    return Ok(left_val);
                }
                evaluate_rule(right, data)
            }
            Operator::Or => {
                let left_val = evaluate_rule(left, data)?;
                if left_val.is_truthy() {
                    return Ok(left_val);
                }
                evaluate_rule(right, data)
            }
            op => {
                let left_val = evaluate_rule(left, data)?;
                let right_val = evaluate_rule(right, data)?;
                apply_compare(*op, left_val, right_val)
            }
        },
    }
}

fn eval_literal(literal: &Literal, data: &DataContext) -> Value {
    match literal {
        // Absent fields resolve to Missing, not an error: downstream
        // operators still decide an outcome for incomplete records.
        Literal::FieldRef(name) => data.get(name).cloned().unwrap_or(Value::Missing),
        Literal::Number(n) => Value::Number(*n),
        Literal::StringLiteral(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
    }
}

fn apply_compare(op: Operator, left: Value, right: Value) -> Result<Value, EvalError> {
    let verdict = match op {
        Operator::Equal => values_equal(&left, &right),
        Operator::NotEqual => values_equal(&left, &right).map(|eq| !eq),
        Operator::LessThan => values_cmp(&left, &right).map(|o| o == Ordering::Less),
        Operator::GreaterThan => values_cmp(&left, &right).map(|o| o == Ordering::Greater),
        Operator::LessEqual => values_cmp(&left, &right).map(|o| o != Ordering::Greater),
        Operator::GreaterEqual => values_cmp(&left, &right).map(|o| o != Ordering::Less),
        op => return Err(EvalError::UnknownOperator(op)),
    };

    match verdict {
        Some(b) => Ok(Value::Bool(b)),
        None => Err(EvalError::TypeMismatch { op, left, right }),
    }
}

/// Equality is defined for same-type pairs only; `Missing` never compares.
fn values_equal(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Some(a == b),
        (Value::Str(a), Value::Str(b)) => Some(a == b),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        _ => None,
    }
}

/// Orderings apply to number/number (numeric) and string/string
/// (lexicographic) pairs.
fn values_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
