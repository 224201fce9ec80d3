use crate::parser::{ast::expr::Expr, fmt::fmt_binary, token::op::BinOp};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 2 +`. Binary expressions own both of their operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from. In postfix
    /// notation, this starts at the left-hand side and ends at the operator.
    pub span: Range<usize>,
}

impl Binary {
    /// Creates a binary expression spanning from the start of `lhs` to the end of `op`.
    pub fn new(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        let span = lhs.span().start..op.span.end;
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }
    }

    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_binary(f, self, false)
    }
}
