//! The kinds of errors that can occur while building an expression tree.

use ariadne::Fmt;
use rpn_attrs::ErrorKind;
use rpn_error::{ErrorKind, EXPR};
use crate::parser::token::op::BinOpKind;

/// An operator was found with fewer than two operands available to it.
///
/// The spans point at the operator, then at the single available operand, if any.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operator `{}` needs two operands", self.operator),
    labels = [
        format!("this operator has {} operand{} to work with", self.found, if self.found == 1 { "" } else { "s" }),
        "this is the only operand available".to_string(),
    ],
    help = format!("in postfix notation, both {} of an operator come before it", "operands".fg(EXPR)),
)]
pub struct InsufficientOperands {
    /// The operator that was found.
    pub operator: BinOpKind,

    /// The number of operands that were available.
    pub found: usize,
}

/// A token is neither a number, a variable name, nor an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid token `{}`", self.lexeme),
    labels = ["I don't know what to do with this"],
    help = if self.lexeme == "/" {
        "division is not supported; the only operators are `+`, `-`, and `*`".to_string()
    } else {
        format!(
            "tokens must be {}, {} (a letter followed by letters or digits), or one of `+`, `-`, `*`, separated by spaces",
            "whole numbers".fg(EXPR),
            "names".fg(EXPR),
        )
    },
)]
pub struct InvalidToken {
    /// The text of the token.
    pub lexeme: String,
}

/// The input did not reduce to exactly one expression.
///
/// If operands were left over, the spans point at each of them. Otherwise, the span points at
/// the whole input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if self.operands == 0 {
        "expected an expression".to_string()
    } else {
        format!("{} operands were never combined into one expression", self.operands)
    },
    labels = if self.operands == 0 {
        vec![format!("I expected to see an {} here", "expression".fg(EXPR))]
    } else {
        (1..=self.operands).map(|i| format!("operand #{}", i)).collect::<Vec<_>>()
    },
    help = if self.operands == 0 {
        "write at least one number or variable name"
    } else {
        "add operators after these operands to combine them"
    },
)]
pub struct MalformedExpression {
    /// The number of operands left on the operand stack.
    pub operands: usize,
}

/// Applying an operator would create a tree taller than the supported limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this expression is nested more than {} levels deep", self.limit)],
    help = "split the expression into smaller pieces",
)]
pub struct ExpressionTooDeep {
    /// The maximum height of an expression tree.
    pub limit: usize,
}
