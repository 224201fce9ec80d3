//! Folding of arithmetic between two integer literals.

use crate::primitive::int_from_str;
use crate::symbolic::{
    simplify::{rules::Rewrite, step::Step},
    step_collector::StepCollector,
};
use rpn_parser::{Binary, BinOpKind};

/// `3+4 = 7`
/// `6-2 = 4`
/// `3*4 = 12`
///
/// Integers have arbitrary precision, so folding never overflows.
pub fn fold_constants(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    let lhs = int_from_str(&binary.lhs.as_integer()?.value)?;
    let rhs = int_from_str(&binary.rhs.as_integer()?.value)?;
    let result = match binary.op.kind {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
    };

    step_collector.push(Step::FoldConstants);
    Some(Rewrite::Integer(result.to_string()))
}

/// Applies all folding rules.
pub fn all(binary: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Rewrite> {
    fold_constants(binary, step_collector)
}
