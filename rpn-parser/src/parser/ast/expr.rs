use crate::parser::{
    ast::{binary::Binary, literal::{LitInt, LitSym, Literal}},
    fmt::{fmt_infix, Infix},
};
use std::{borrow::Cow, fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Every [`Expr::Binary`] exclusively owns its two children, so a tree is a strict hierarchy:
/// replacing or dropping a node replaces or drops everything below it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A leaf, either an integer or a symbol.
    Literal(Literal),

    /// A binary operation, such as `1 2 +`.
    Binary(Binary),
}

impl Expr {
    /// Creates an integer leaf with the given text.
    pub fn integer(value: impl Into<String>, span: Range<usize>) -> Self {
        Expr::Literal(Literal::Integer(LitInt { value: value.into(), span }))
    }

    /// Creates a symbol leaf with the given name.
    pub fn symbol(name: impl Into<String>, span: Range<usize>) -> Self {
        Expr::Literal(Literal::Symbol(LitSym { name: name.into(), span }))
    }

    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns true if the expression is a binary operation.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary(_))
    }

    /// Returns the integer literal if the expression is one.
    pub fn as_integer(&self) -> Option<&LitInt> {
        match self {
            Expr::Literal(Literal::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is an integer literal.
    pub fn is_integer(&self) -> bool {
        self.as_integer().is_some()
    }

    /// Returns true if the expression is the integer literal written exactly as `0`.
    pub fn is_zero(&self) -> bool {
        self.as_integer().map_or(false, |int| int.value == "0")
    }

    /// Returns true if the expression is the integer literal written exactly as `1`.
    pub fn is_one(&self) -> bool {
        self.as_integer().map_or(false, |int| int.value == "1")
    }

    /// Returns the textual content of the expression.
    ///
    /// For a leaf, this is its text. For a binary operation, this is its parenthesized infix
    /// form, such as `(a+b)`, so that two subtrees have the same content exactly when they print
    /// the same.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Expr::Literal(literal) => Cow::Borrowed(literal.as_str()),
            Expr::Binary(_) => Cow::Owned(self.to_infix(true)),
        }
    }

    /// Wraps the expression in a formatter that writes it in infix notation. Every binary
    /// operation below the root is parenthesized; the root is parenthesized only if
    /// `outer_parens` is true.
    pub fn infix(&self, outer_parens: bool) -> Infix<'_> {
        Infix::new(self, outer_parens)
    }

    /// Renders the expression in infix notation. See [`Expr::infix`].
    pub fn to_infix(&self, outer_parens: bool) -> String {
        self.infix(outer_parens).to_string()
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}

impl From<Binary> for Expr {
    fn from(binary: Binary) -> Self {
        Expr::Binary(binary)
    }
}

/// Writes the expression in infix notation, without parentheses around the root.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_infix(f, self, false)
    }
}
