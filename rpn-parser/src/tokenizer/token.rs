use logos::Logos;
use std::ops::Range;

/// Whitespace-delimited chunks of an input line.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub(crate) enum Chunk {
    #[regex(r"[ \t\n\r\x0B\x0C]+")]
    Whitespace,

    #[regex(r"[^ \t\n\r\x0B\x0C]+")]
    Word,
}

/// The lexemes a single word can consist of. A word is only meaningful if exactly one of these
/// covers the entire word.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub(crate) enum Lexeme {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// The `+` operator.
    Add,

    /// The `-` operator.
    Sub,

    /// The `*` operator.
    Mul,

    /// A non-negative integer made only of decimal digits, such as `42`.
    Int,

    /// A variable name: a letter followed by letters or digits, such as `x1`.
    Name,

    /// Anything else, such as `/`, `3x` or `x-1`.
    Invalid,
}

impl TokenKind {
    /// Returns true if the token is one of the binary operators.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub | TokenKind::Mul)
    }
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Add => TokenKind::Add,
            Lexeme::Sub => TokenKind::Sub,
            Lexeme::Mul => TokenKind::Mul,
            Lexeme::Int => TokenKind::Int,
            Lexeme::Name => TokenKind::Name,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was classified into this token.
    pub lexeme: &'source str,
}
