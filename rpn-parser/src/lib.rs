//! Reads postfix (reverse-Polish) arithmetic expressions into expression trees.
//!
//! An input line such as `3 x + 2 *` is split into whitespace-delimited tokens by the
//! [`tokenizer`], and the tokens are assembled bottom-up into an [`Expr`] tree by the
//! [`TreeBuilder`]. Trees print back as fully parenthesized infix text.
//!
//! ```
//! use rpn_parser::build;
//!
//! let expr = build("3 x + 2 *").unwrap();
//! assert_eq!(expr.to_string(), "(3+x)*2");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{
    ast::{Binary, Expr, LitInt, LitSym, Literal},
    build,
    token::op::{BinOp, BinOpKind},
    TreeBuilder,
    MAX_DEPTH,
};
