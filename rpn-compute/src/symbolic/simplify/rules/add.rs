//! Simplification rules for expressions involving addition.

use crate::symbolic::{
    simplify::{rules::{do_binary, Rewrite}, step::Step},
    step_collector::StepCollector,
};
use rpn_parser::{Binary, BinOpKind};

/// `a+a = 2a`
/// `(a*b)+(a*b) = 2(a*b)`
///
/// Operands are compared by their text, so this also turns `2x+2x` into the symbol `22x`.
pub fn double_like_terms(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Add, |lhs, rhs| {
        let text = lhs.text();
        if text == rhs.text() {
            Some(Rewrite::Symbol(format!("2{}", text)))
        } else {
            None
        }
    })?;

    step_collector.push(Step::DoubleLikeTerms);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_zero() {
            Some(Rewrite::Rhs)
        } else if rhs.is_zero() {
            Some(Rewrite::Lhs)
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    double_like_terms(binary, step_collector)
        .or_else(|| add_zero(binary, step_collector))
}
