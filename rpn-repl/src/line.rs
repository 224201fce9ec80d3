use crate::error::Error;
use rpn_compute::{simplify_with_steps, Step};
use rpn_parser::TreeBuilder;
use std::io::{self, Write};
use tracing::debug;

/// The result of processing one line of input.
#[derive(Debug)]
pub enum Line {
    /// An empty line, or a line starting with `#`. It is echoed verbatim.
    Comment(String),

    /// A postfix expression that was built and simplified.
    Evaluated {
        /// The input line.
        postfix: String,

        /// The expression as it was written, in infix notation.
        infix: String,

        /// The simplified expression, in infix notation.
        simplified: String,

        /// The simplification steps, in the order they were applied.
        steps: Vec<Step>,
    },

    /// A postfix expression that could not be built.
    Failed {
        /// The input line.
        postfix: String,

        /// Why the expression could not be built.
        error: Error,
    },
}

impl Line {
    /// Writes the line's output. With `show_steps`, the simplification steps are written after
    /// the simplified expression.
    ///
    /// Errors are not written; see [`Line::report_error`].
    pub fn write_to(&self, out: &mut impl Write, show_steps: bool) -> io::Result<()> {
        match self {
            Line::Comment(text) => writeln!(out, "{}", text),
            Line::Evaluated { postfix, infix, simplified, steps } => {
                writeln!(out, "Postfix: {}", postfix)?;
                writeln!(out, "Infix: {}", infix)?;
                writeln!(out, "Simplified: {}", simplified)?;
                if show_steps {
                    let steps = steps.iter().map(Step::to_string).collect::<Vec<_>>();
                    writeln!(out, "Steps: {}", steps.join(", "))?;
                }
                Ok(())
            },
            Line::Failed { postfix, .. } => writeln!(out, "Postfix: {}", postfix),
        }
    }

    /// Reports the error of a failed line to stderr. Does nothing for other lines.
    pub fn report_error(&self) {
        if let Line::Failed { postfix, error } = self {
            error.report_to_stderr(postfix);
        }
    }
}

/// Processes one line of input: comments are passed through, and anything else is built as a
/// postfix expression, printed, simplified, and printed again.
pub fn process_line(builder: &mut TreeBuilder, input: &str) -> Line {
    if input.is_empty() || input.starts_with('#') {
        return Line::Comment(input.to_owned());
    }

    match builder.build(input) {
        Ok(expr) => {
            debug!(input, "built expression");
            let infix = expr.to_string();
            let (simplified, steps) = simplify_with_steps(expr);
            Line::Evaluated {
                postfix: input.to_owned(),
                infix,
                simplified: simplified.to_string(),
                steps,
            }
        },
        Err(err) => {
            debug!(input, "failed to build expression");
            Line::Failed {
                postfix: input.to_owned(),
                error: err.into(),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rpn_parser::parser::error::{InsufficientOperands, InvalidToken, MalformedExpression};
    use super::*;

    fn output(input: &str, show_steps: bool) -> String {
        let line = process_line(&mut TreeBuilder::new(), input);
        let mut out = Vec::new();
        line.write_to(&mut out, show_steps).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn build_error(line: &Line) -> &rpn_error::Error {
        match line {
            Line::Failed { error: Error::BuildError(err), .. } => err,
            other => panic!("expected a build error, found {:?}", other),
        }
    }

    #[test]
    fn comments_are_echoed() {
        assert_eq!(output("", false), "\n");
        assert_eq!(output("# 3 4 +", false), "# 3 4 +\n");
        assert_eq!(output("#", false), "#\n");
    }

    #[test]
    fn evaluated() {
        assert_eq!(
            output("3 4 +", false),
            "Postfix: 3 4 +\nInfix: 3+4\nSimplified: 7\n",
        );
    }

    #[test]
    fn evaluated_with_steps() {
        assert_eq!(
            output("x 0 + 2 *", true),
            "Postfix: x 0 + 2 *\nInfix: (x+0)*2\nSimplified: 2x\nSteps: 0+a = a, c*a = ca\n",
        );
    }

    #[test]
    fn evaluated_without_steps_taken() {
        assert_eq!(
            output("x y +", true),
            "Postfix: x y +\nInfix: x+y\nSimplified: x+y\nSteps: \n",
        );
    }

    #[test]
    fn failed_only_echoes_input() {
        assert_eq!(output("x y", false), "Postfix: x y\n");
    }

    #[test]
    fn failure_kinds() {
        let mut builder = TreeBuilder::new();

        let line = process_line(&mut builder, "+");
        assert!(build_error(&line).is::<InsufficientOperands>());

        let line = process_line(&mut builder, "x y");
        assert!(build_error(&line).is::<MalformedExpression>());

        let line = process_line(&mut builder, "x /");
        assert!(build_error(&line).is::<InvalidToken>());

        assert_eq!(builder.pending(), 0);
    }

    #[test]
    fn line_after_failure() {
        let mut builder = TreeBuilder::new();
        let _ = process_line(&mut builder, "1 2 3 +");
        match process_line(&mut builder, "0 x -") {
            Line::Evaluated { simplified, .. } => assert_eq!(simplified, "-x"),
            other => panic!("expected an evaluated line, found {:?}", other),
        }
    }

    #[test]
    fn leading_whitespace_is_not_a_comment() {
        match process_line(&mut TreeBuilder::new(), " # x") {
            Line::Failed { .. } => (),
            other => panic!("expected a failed line, found {:?}", other),
        }
    }
}
