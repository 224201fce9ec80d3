use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `3+4 = 7`
    /// `6-2 = 4`
    /// `3*4 = 12`
    FoldConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*a = 2a`
    /// `a*2 = 2a`
    Coefficient,

    /// `a+a = 2a`
    DoubleLikeTerms,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-a = 0`
    SubtractSelf,

    /// `0-a = -a`
    SubtractFromZero,

    /// `a-0 = a`
    SubtractZero,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = match self {
            Step::FoldConstants => "fold constants",
            Step::MultiplyZero => "0*a = 0",
            Step::MultiplyOne => "1*a = a",
            Step::Coefficient => "c*a = ca",
            Step::DoubleLikeTerms => "a+a = 2a",
            Step::AddZero => "0+a = a",
            Step::SubtractSelf => "a-a = 0",
            Step::SubtractFromZero => "0-a = -a",
            Step::SubtractZero => "a-0 = a",
        };
        write!(f, "{}", rule)
    }
}
