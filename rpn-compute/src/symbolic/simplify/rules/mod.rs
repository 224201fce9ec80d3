//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that inspects a binary node whose operands have already
//! been simplified, and returns `Some(rewrite)` describing what the node should be replaced with
//! if the rule applies, or `None` if the rule does not apply. Rules never need to clone operands:
//! a [`Rewrite`] either names an operand to keep or carries the text of a new leaf.

pub mod add;
pub mod fold;
pub mod multiply;
pub mod subtract;

use crate::symbolic::step_collector::StepCollector;
use rpn_parser::{Binary, BinOpKind, Expr};
use super::step::Step;

/// The replacement for a binary node chosen by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace the node with its left-hand side.
    Lhs,

    /// Replace the node with its right-hand side.
    Rhs,

    /// Replace the node with an integer literal with the given text.
    Integer(String),

    /// Replace the node with a symbol with the given name.
    Symbol(String),
}

impl Rewrite {
    /// Consumes the node and produces its replacement. New leaves take the span of the node they
    /// replace.
    pub fn apply(self, binary: Binary) -> Expr {
        match self {
            Rewrite::Lhs => *binary.lhs,
            Rewrite::Rhs => *binary.rhs,
            Rewrite::Integer(value) => Expr::integer(value, binary.span),
            Rewrite::Symbol(name) => Expr::symbol(name, binary.span),
        }
    }
}

/// If the node applies the given operator, calls the given transformation function with the
/// left and right-hand-side of the node.
///
/// Returns `Some(rewrite)` if a transformation was applied.
pub(crate) fn do_binary(
    binary: &Binary,
    kind: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Rewrite>,
) -> Option<Rewrite> {
    if binary.op.kind == kind {
        f(&binary.lhs, &binary.rhs)
    } else {
        None
    }
}

/// Applies all rules, in priority order.
///
/// Folding constants takes priority over everything else. The remaining rules only apply to one
/// operator each, and within each operator, the first rule that applies wins.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    fold::all(binary, step_collector)
        .or_else(|| multiply::all(binary, step_collector))
        .or_else(|| add::all(binary, step_collector))
        .or_else(|| subtract::all(binary, step_collector))
}
