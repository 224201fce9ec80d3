//! Algebraic simplification of expression trees.
//!
//! # Simplification
//!
//! The [`simplify()`] function rewrites an [`Expr`](rpn_parser::Expr) tree bottom-up: both
//! operands of a binary node are simplified before the node itself is looked at. Each node is then
//! checked against a fixed list of rewrite rules (see [`simplify::rules`]), and the first rule
//! that applies replaces the node. Nodes are visited once; there are no repeated passes.
//!
//! The rules fold constant arithmetic, remove additive and multiplicative identities, and glue
//! numeric coefficients onto symbols:
//!
//! ```
//! use rpn_compute::symbolic::simplify;
//! use rpn_parser::build;
//!
//! // `(0+x)*2 = x*2 = 2x`
//! let expr = build("0 x + 2 *").unwrap();
//! assert_eq!(simplify(expr).to_string(), "2x");
//! ```
//!
//! Rewritten nodes are symbols whose names are built by gluing text together: `x*2` becomes the
//! single symbol `2x`, `x+x` becomes `2x`, and `0-x` becomes `-x`. The simplifier never combines
//! two such symbols, so `2x+3x` is left as it is.

pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
