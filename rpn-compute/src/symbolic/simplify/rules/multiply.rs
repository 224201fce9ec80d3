//! Simplification rules for expressions involving multiplication.

use crate::symbolic::{
    simplify::{rules::{do_binary, Rewrite}, step::Step},
    step_collector::StepCollector,
};
use rpn_parser::{Binary, BinOpKind};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_zero() || rhs.is_zero() {
            Some(Rewrite::Integer("0".to_string()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_one() {
            Some(Rewrite::Rhs)
        } else if rhs.is_one() {
            Some(Rewrite::Lhs)
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Glues an integer coefficient onto the other operand, producing a single symbol with the
/// coefficient first.
///
/// `2*a = 2a`
/// `a*2 = 2a`
/// `2*(a+b) = 2(a+b)`
pub fn coefficient(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_integer() {
            Some(Rewrite::Symbol(format!("{}{}", lhs.text(), rhs.text())))
        } else if rhs.is_integer() {
            Some(Rewrite::Symbol(format!("{}{}", rhs.text(), lhs.text())))
        } else {
            None
        }
    })?;

    step_collector.push(Step::Coefficient);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    multiply_zero(binary, step_collector)
        .or_else(|| multiply_one(binary, step_collector))
        .or_else(|| coefficient(binary, step_collector))
}
