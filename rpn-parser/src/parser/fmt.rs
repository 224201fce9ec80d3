use std::fmt::{Display, Formatter, Result};
use super::ast::{binary::Binary, expr::Expr};

/// A wrapper type that implements [`Display`] for an expression in infix notation.
///
/// This is created by [`Expr::infix`].
pub struct Infix<'a> {
    expr: &'a Expr,
    outer_parens: bool,
}

impl<'a> Infix<'a> {
    /// Wraps the expression, parenthesizing the root if `outer_parens` is true.
    pub fn new(expr: &'a Expr, outer_parens: bool) -> Self {
        Self { expr, outer_parens }
    }
}

impl Display for Infix<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_infix(f, self.expr, self.outer_parens)
    }
}

/// Writes the expression in infix notation.
///
/// Leaves are written verbatim. Binary operations are written as `lhs op rhs` with no spaces,
/// where both operands that are themselves binary operations are parenthesized, regardless of
/// precedence.
pub fn fmt_infix(f: &mut Formatter, expr: &Expr, outer_parens: bool) -> Result {
    match expr {
        Expr::Literal(literal) => write!(f, "{}", literal),
        Expr::Binary(binary) => fmt_binary(f, binary, outer_parens),
    }
}

/// Helper to format binary operations.
pub fn fmt_binary(f: &mut Formatter, binary: &Binary, outer_parens: bool) -> Result {
    if outer_parens {
        write!(f, "(")?;
    }
    fmt_infix(f, &binary.lhs, true)?;
    write!(f, "{}", binary.op)?;
    fmt_infix(f, &binary.rhs, true)?;
    if outer_parens {
        write!(f, ")")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parser::build;

    #[test]
    fn fmt_leaf() {
        let expr = build("42").unwrap();
        assert_eq!(expr.to_string(), "42");
        assert_eq!(expr.to_infix(true), "42");
    }

    #[test]
    fn fmt_display() {
        let expr = build("3 4 +").unwrap();
        assert_eq!(expr.to_string(), "3+4");
    }

    #[test]
    fn fmt_outer_parens() {
        let expr = build("3 4 +").unwrap();
        assert_eq!(expr.to_infix(true), "(3+4)");
        assert_eq!(format!("{}", expr.infix(false)), "3+4");
    }

    #[test]
    fn fmt_no_precedence_elision() {
        let expr = build("a b * c d * +").unwrap();
        assert_eq!(expr.to_string(), "(a*b)+(c*d)");
    }

    #[test]
    fn fmt_nested() {
        let expr = build("x 2 3 + * y z - -").unwrap();
        assert_eq!(expr.to_string(), "(x*(2+3))-(y-z)");
    }

    #[test]
    fn fmt_keeps_number_text() {
        let expr = build("007 x *").unwrap();
        assert_eq!(expr.to_string(), "007*x");
    }
}
