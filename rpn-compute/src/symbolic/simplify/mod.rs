//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression tree in a single
//! post-order pass: the operands of each binary node are simplified first, then the rules in
//! [`rules`] are tried on the node itself, in priority order. The first rule that applies
//! replaces the node; if no rule applies, the node is kept with its simplified operands.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use rpn_parser::{Binary, Expr};
use step::Step;
use tracing::debug;

/// Base implementation of the simplification algorithm.
///
/// Recursion depth is bounded by the height of the tree, which is capped by the tree builder at
/// [`rpn_parser::MAX_DEPTH`].
fn inner_simplify(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let Expr::Binary(Binary { lhs, op, rhs, span }) = expr else {
        return expr;
    };

    // simplify the operands first, reusing their allocations
    let lhs = if lhs.is_binary() {
        Box::new(inner_simplify(*lhs, step_collector))
    } else {
        lhs
    };
    let rhs = if rhs.is_binary() {
        Box::new(inner_simplify(*rhs, step_collector))
    } else {
        rhs
    };
    let binary = Binary { lhs, op, rhs, span };

    match rules::all(&binary, step_collector) {
        Some(rewrite) => {
            debug!(node = %binary, ?rewrite, "applied rule");
            rewrite.apply(binary)
        },
        None => Expr::Binary(binary),
    }
}

/// Simplify the given expression, consuming it.
pub fn simplify(expr: Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression, consuming it. The steps taken by the simplifier are also
/// collected and returned, in the order they were applied. This is useful for debugging, and also
/// for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
