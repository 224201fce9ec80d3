pub mod token;

use logos::Logos;
pub use token::{Token, TokenKind};
use token::{Chunk, Lexeme};

/// Classifies a single whitespace-free word.
///
/// The word is only recognized if a single lexeme spans all of it, so `3x` and `x/` are both
/// [`TokenKind::Invalid`], even though they start with a valid number / name.
pub fn classify(word: &str) -> TokenKind {
    let mut lexer = Lexeme::lexer(word);
    match lexer.next() {
        Some(Ok(lexeme)) if lexer.span() == (0..word.len()) => lexeme.into(),
        _ => TokenKind::Invalid,
    }
}

/// Returns true if the token is non-empty and consists only of decimal digits.
pub fn is_number(token: &str) -> bool {
    classify(token) == TokenKind::Int
}

/// Returns true if the token is non-empty, starts with a letter, and is followed only by letters
/// or digits.
pub fn is_variable(token: &str) -> bool {
    classify(token) == TokenKind::Name
}

/// Returns true if the token is exactly one of `+`, `-`, or `*`.
pub fn is_operator(token: &str) -> bool {
    classify(token).is_operator()
}

/// Returns an owned array containing every whitespace-delimited token in the input, in order.
pub fn tokenize(input: &str) -> Box<[Token]> {
    let mut lexer = Chunk::lexer(input);
    let mut tokens = Vec::new();

    while let Some(chunk) = lexer.next() {
        if let Ok(Chunk::Word) = chunk {
            let lexeme = lexer.slice();
            tokens.push(Token {
                span: lexer.span(),
                kind: classify(lexeme),
                lexeme,
            });
        }
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize(input);
        let found = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();

        assert_eq!(found, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 2 +",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Int, "2"),
                (TokenKind::Add, "+"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "  3\tx1   - 0 y * /  3x ++ ",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Name, "x1"),
                (TokenKind::Sub, "-"),
                (TokenKind::Int, "0"),
                (TokenKind::Name, "y"),
                (TokenKind::Mul, "*"),
                (TokenKind::Invalid, "/"),
                (TokenKind::Invalid, "3x"),
                (TokenKind::Invalid, "++"),
            ],
        );
    }

    #[test]
    fn spans() {
        let tokens = tokenize("ab  12 *");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..2, 4..6, 7..8]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t ").is_empty());
    }

    #[test]
    fn number_predicate() {
        assert!(is_number("0"));
        assert!(is_number("007"));
        assert!(is_number("123456789012345678901234567890"));
        assert!(!is_number(""));
        assert!(!is_number("-1"));
        assert!(!is_number("1.5"));
        assert!(!is_number("12a"));
    }

    #[test]
    fn variable_predicate() {
        assert!(is_variable("x"));
        assert!(is_variable("Total2"));
        assert!(!is_variable(""));
        assert!(!is_variable("2x"));
        assert!(!is_variable("x_y"));
        assert!(!is_variable("é"));
    }

    #[test]
    fn operator_predicate() {
        assert!(is_operator("+"));
        assert!(is_operator("-"));
        assert!(is_operator("*"));
        assert!(!is_operator("/"));
        assert!(!is_operator("**"));
        assert!(!is_operator(""));
    }
}
