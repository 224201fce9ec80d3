//! Builds expression trees from postfix expressions.
//!
//! Tokens are consumed left-to-right. Numbers and names are pushed onto an operand stack as
//! leaves; each operator pops its right and then its left operand and pushes the combined
//! [`Binary`] node. A valid postfix expression leaves exactly one tree on the stack.
//!
//! Every operand on the stack is the sole owner of its subtree. When building fails, whatever is
//! still on the stack is dropped before the error is returned, so no partially built tree
//! outlives a failed build.

pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use ast::{binary::Binary, expr::Expr};
use error::{ExpressionTooDeep, InsufficientOperands, InvalidToken, MalformedExpression};
use rpn_error::Error;
use super::tokenizer::{tokenize, Token, TokenKind};
use token::op::{BinOp, BinOpKind};
use tracing::{debug, trace};

/// The maximum height of a tree the builder will produce.
///
/// Simplifying, printing, and dropping a tree all recurse once per level, so the height is capped
/// to keep those operations well within the limits of the stack.
pub const MAX_DEPTH: usize = 1024;

/// An entry of the operand stack: a complete subtree, along with its height.
#[derive(Debug)]
struct Operand {
    expr: Expr,
    depth: usize,
}

/// Builds expression trees from postfix expressions, using an operand stack.
///
/// The operand stack is reused between calls to [`TreeBuilder::build`], and is always empty once
/// [`TreeBuilder::build`] returns, whether or not building succeeded.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Subtrees waiting to be combined by an operator.
    stack: Vec<Operand>,
}

impl TreeBuilder {
    /// Creates a new builder with an empty operand stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of subtrees currently held by the operand stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Builds an expression tree from the given postfix expression.
    pub fn build(&mut self, source: &str) -> Result<Expr, Error> {
        let result = self.build_inner(source);
        if !self.stack.is_empty() {
            debug!(pending = self.stack.len(), "releasing partially built trees");
            self.stack.clear();
        }
        result
    }

    fn build_inner(&mut self, source: &str) -> Result<Expr, Error> {
        for token in tokenize(source).iter() {
            match token.kind {
                TokenKind::Int => self.push(Expr::integer(token.lexeme, token.span.clone()), 1),
                TokenKind::Name => self.push(Expr::symbol(token.lexeme, token.span.clone()), 1),
                TokenKind::Add => self.reduce(BinOpKind::Add, token)?,
                TokenKind::Sub => self.reduce(BinOpKind::Sub, token)?,
                TokenKind::Mul => self.reduce(BinOpKind::Mul, token)?,
                TokenKind::Invalid => {
                    debug!(lexeme = token.lexeme, "invalid token");
                    return Err(Error::new(vec![token.span.clone()], InvalidToken {
                        lexeme: token.lexeme.to_owned(),
                    }));
                },
            }
        }

        if self.stack.len() == 1 {
            if let Some(root) = self.stack.pop() {
                return Ok(root.expr);
            }
        }

        debug!(operands = self.stack.len(), "input did not reduce to one expression");
        let spans = if self.stack.is_empty() {
            vec![0..source.len()]
        } else {
            self.stack.iter().map(|operand| operand.expr.span()).collect()
        };
        Err(Error::new(spans, MalformedExpression { operands: self.stack.len() }))
    }

    /// Pushes a complete subtree onto the operand stack.
    fn push(&mut self, expr: Expr, depth: usize) {
        trace!(expr = %expr, depth, "push");
        self.stack.push(Operand { expr, depth });
    }

    /// Pops the two topmost operands and combines them with the operator token.
    fn reduce(&mut self, kind: BinOpKind, token: &Token) -> Result<(), Error> {
        let op = BinOp { kind, span: token.span.clone() };

        let (lhs, rhs) = match (self.stack.pop(), self.stack.pop()) {
            (Some(rhs), Some(lhs)) => (lhs, rhs),
            (rhs, _) => {
                let found = usize::from(rhs.is_some());
                debug!(operator = %op, found, "operator is missing operands");
                let mut spans = vec![op.span.clone()];
                spans.extend(rhs.map(|operand| operand.expr.span()));
                return Err(Error::new(spans, InsufficientOperands {
                    operator: op.kind,
                    found,
                }));
            },
        };

        let depth = 1 + lhs.depth.max(rhs.depth);
        if depth > MAX_DEPTH {
            debug!(depth, limit = MAX_DEPTH, "expression is nested too deeply");
            return Err(Error::new(vec![lhs.expr.span().start..op.span.end], ExpressionTooDeep {
                limit: MAX_DEPTH,
            }));
        }

        self.push(Binary::new(lhs.expr, op, rhs.expr).into(), depth);
        Ok(())
    }
}

/// Builds an expression tree from the given postfix expression, using a fresh [`TreeBuilder`].
///
/// ```
/// use rpn_parser::build;
///
/// assert_eq!(build("x 2 *").unwrap().to_string(), "x*2");
/// assert!(build("x y").is_err());
/// ```
pub fn build(source: &str) -> Result<Expr, Error> {
    TreeBuilder::new().build(source)
}
