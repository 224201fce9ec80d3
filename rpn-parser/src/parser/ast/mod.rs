pub mod binary;
pub mod expr;
pub mod literal;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::{LitInt, LitSym, Literal};
