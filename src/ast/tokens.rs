/// Lexical token produced by the lexer.
///
/// Tokens live only for the duration of a single parse; the parser consumes
/// them in source order and never revisits one.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Field name
    ///
    /// # Examples
    /// ```text
    /// age
    /// department
    /// item_count
    /// ```
    Identifier(String),

    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.5
    /// ```
    Number(f64),

    /// Quoted string literal
    ///
    /// Contents are taken verbatim to the closing quote; there is no escape
    /// processing.
    ///
    /// # Examples
    /// ```text
    /// 'Sales'
    /// "Marketing"
    /// ```
    StringLiteral(String),

    /// Boolean literal (`true` / `false`)
    Bool(bool),

    // Comparison operators
    /// Greater than (`>`)
    Gt,

    /// Less than (`<`)
    Lt,

    /// Greater than or equal (`>=`)
    GtEq,

    /// Less than or equal (`<=`)
    LtEq,

    /// Equal (`=`)
    Eq,

    /// Not equal (`!=`)
    NotEq,

    // Logical keywords
    /// Logical AND (the word `AND`, case-sensitive)
    ///
    /// # Examples
    /// ```text
    /// age > 18 AND verified = true
    /// ```
    And,

    /// Logical OR (the word `OR`, case-sensitive)
    ///
    /// # Examples
    /// ```text
    /// role = 'admin' OR role = 'mod'
    /// ```
    Or,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// End of input
    Eof,
}
