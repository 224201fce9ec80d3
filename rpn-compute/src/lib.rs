//! Simplification of expression trees read by [`rpn_parser`].
//!
//! ```
//! use rpn_compute::simplify;
//! use rpn_parser::build;
//!
//! let expr = build("x 3 4 + *").unwrap();
//! assert_eq!(expr.to_string(), "x*(3+4)");
//! assert_eq!(simplify(expr).to_string(), "7x");
//! ```

pub mod primitive;
pub mod symbolic;

pub use symbolic::{simplify, simplify_with_steps, Step, StepCollector};
