// tests/lexer_tests.rs

use verdict_lang::ast::Token;
use verdict_lang::lexer::{LexError, Lexer};

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        ("<", Token::Lt),
        (">", Token::Gt),
        ("=", Token::Eq),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_two_char_vs_single_char() {
    // < followed by a separate =
    let mut lexer = Lexer::new("< =");
    assert_eq!(lexer.next_token().unwrap(), Token::Lt);
    assert_eq!(lexer.next_token().unwrap(), Token::Eq);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);

    // <= as a single token
    let mut lexer = Lexer::new("<=");
    assert_eq!(lexer.next_token().unwrap(), Token::LtEq);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);

    // >= binds before >
    let mut lexer = Lexer::new("> >=");
    assert_eq!(lexer.next_token().unwrap(), Token::Gt);
    assert_eq!(lexer.next_token().unwrap(), Token::GtEq);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_bare_exclamation_is_invalid() {
    let mut lexer = Lexer::new("a ! b");
    lexer.next_token().unwrap(); // Gets a
    let result = lexer.next_token();
    assert!(matches!(
        result,
        Err(LexError::UnexpectedChar { ch: '!', .. })
    ));
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_keywords() {
    let test_cases = vec![
        ("AND", Token::And),
        ("OR", Token::Or),
        ("true", Token::Bool(true)),
        ("false", Token::Bool(false)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    // lowercase and/or are ordinary field names
    let mut lexer = Lexer::new("and or And Or");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("and".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("or".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("And".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("Or".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_keywords_match_whole_words_only() {
    let mut lexer = Lexer::new("ANDROID ORDER");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("ANDROID".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("ORDER".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

// ============================================================================
// Identifiers and Numbers
// ============================================================================

#[test]
fn test_identifiers() {
    let test_cases = vec!["age", "department", "item_count", "_internal", "x2"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Identifier(input.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_numbers() {
    let test_cases = vec![("0", 0.0), ("42", 42.0), ("30", 30.0), ("3.5", 3.5)];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Number(expected),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_number_then_word() {
    // A digit-led word splits at the first alphabetic character
    let mut lexer = Lexer::new("30abc");
    assert_eq!(lexer.next_token().unwrap(), Token::Number(30.0));
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("abc".to_string()));
}

// ============================================================================
// String Literals
// ============================================================================

#[test]
fn test_single_quoted_string() {
    let mut lexer = Lexer::new("'Sales'");
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::StringLiteral("Sales".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_double_quoted_string() {
    let mut lexer = Lexer::new("\"Marketing\"");
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::StringLiteral("Marketing".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_string_contents_are_verbatim() {
    // No escape processing inside quotes
    let mut lexer = Lexer::new(r"'a\nb'");
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::StringLiteral("a\\nb".to_string())
    );
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("'Sales");
    let result = lexer.next_token();
    assert!(matches!(result, Err(LexError::UnterminatedString { .. })));
}

// ============================================================================
// Whitespace and Errors
// ============================================================================

#[test]
fn test_whitespace_is_discarded() {
    let mut lexer = Lexer::new("  age\t>\n30  ");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("age".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Gt);
    assert_eq!(lexer.next_token().unwrap(), Token::Number(30.0));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_unexpected_characters() {
    for input in ["#", "&", "|", "age $ 1"] {
        let result = Lexer::new(input).tokenize();
        assert!(
            matches!(result, Err(LexError::UnexpectedChar { .. })),
            "Expected UnexpectedChar for input: {}",
            input
        );
    }
}

#[test]
fn test_error_reports_position() {
    let mut lexer = Lexer::new("ab #");
    lexer.next_token().unwrap();
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedChar { ch: '#', position: 3 })
    );
}

// ============================================================================
// Full Rules
// ============================================================================

#[test]
fn test_tokenize_full_rule() {
    let tokens = Lexer::new("(age > 30 AND department = 'Sales')")
        .tokenize()
        .unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::LParen,
            Token::Identifier("age".to_string()),
            Token::Gt,
            Token::Number(30.0),
            Token::And,
            Token::Identifier("department".to_string()),
            Token::Eq,
            Token::StringLiteral("Sales".to_string()),
            Token::RParen,
            Token::Eof,
        ]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(Lexer::new("").tokenize().unwrap(), vec![Token::Eof]);
    assert_eq!(Lexer::new("   ").tokenize().unwrap(), vec![Token::Eof]);
}
