//! Simplification rules for expressions involving subtraction.

use crate::symbolic::{
    simplify::{rules::{do_binary, Rewrite}, step::Step},
    step_collector::StepCollector,
};
use rpn_parser::{Binary, BinOpKind};

/// `a-a = 0`
pub fn subtract_self(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Sub, |lhs, rhs| {
        if lhs.text() == rhs.text() {
            Some(Rewrite::Integer("0".to_string()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// `0-a = -a`
/// `0-(a+b) = -(a+b)`
pub fn subtract_from_zero(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Sub, |lhs, rhs| {
        if lhs.is_zero() {
            Some(Rewrite::Symbol(format!("-{}", rhs.text())))
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let opt = do_binary(binary, BinOpKind::Sub, |_, rhs| {
        if rhs.is_zero() {
            Some(Rewrite::Lhs)
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    subtract_self(binary, step_collector)
        .or_else(|| subtract_from_zero(binary, step_collector))
        .or_else(|| subtract_zero(binary, step_collector))
}
