use crate::{
    ast::{
        binary_op_node::{BinaryOpNode, BinaryOperation},
        expression_node::ExpressionNode,
        int_node::IntNode,
    },
    errors::{ParseError, Result},
};

pub mod lexer;
pub mod span;

use lexer::{Token, TokenKind};

/// A recursive-descent parser over a token sequence.
///
/// Grammar, in order of increasing precedence. All operators are
/// left-associative:
///
/// ```text
/// expr := mul  ( ('+' | '-') mul  )*
/// mul  := term ( ('*' | '/') term )*
/// term := '(' expr ')' | number
/// ```
///
/// Lookahead is exactly one token, and the cursor only advances on a
/// successful match.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    /// Create a new `Parser`.
    ///
    /// # Arguments
    /// `tokens` - The token sequence to consume. Must end with an `Eof`
    ///            sentinel, as produced by [`lexer::tokenize`].
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Parse the token sequence into a single expression tree.
    ///
    /// The whole sequence has to be consumed - trailing tokens after a
    /// complete expression are an error.
    pub fn parse(mut self) -> Result<ExpressionNode> {
        let node = self.expr()?;
        self.expect(TokenKind::Eof)?;

        Ok(node)
    }

    fn expr(&mut self) -> Result<ExpressionNode> {
        let mut node = self.mul()?;

        loop {
            if self.consume(TokenKind::Plus) {
                node = BinaryOpNode::new(node, self.mul()?, BinaryOperation::Add).into();
            } else if self.consume(TokenKind::Minus) {
                node = BinaryOpNode::new(node, self.mul()?, BinaryOperation::Sub).into();
            } else {
                return Ok(node);
            }
        }
    }

    fn mul(&mut self) -> Result<ExpressionNode> {
        let mut node = self.term()?;

        loop {
            if self.consume(TokenKind::Star) {
                node = BinaryOpNode::new(node, self.term()?, BinaryOperation::Mul).into();
            } else if self.consume(TokenKind::Slash) {
                node = BinaryOpNode::new(node, self.term()?, BinaryOperation::Div).into();
            } else {
                return Ok(node);
            }
        }
    }

    fn term(&mut self) -> Result<ExpressionNode> {
        if self.consume(TokenKind::LParen) {
            let node = self.expr()?;
            self.expect(TokenKind::RParen)?;

            return Ok(node);
        }

        Ok(self.expect_number()?.into())
    }

    /// The token under the cursor. The cursor saturates at the trailing `Eof`
    /// sentinel, so there is always one.
    fn current(&self) -> &Token {
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    /// If the current token matches `kind`, advance past it and return `true`.
    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.cursor += 1;

            return true;
        }

        false
    }

    /// Advance past the current token if it matches `kind`, otherwise error.
    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.consume(kind) {
            return Ok(());
        }

        Err(ParseError::new(format!("expected {}", kind), self.current().span).into())
    }

    /// Advance past the current token if it is a number, yielding its node.
    fn expect_number(&mut self) -> Result<IntNode> {
        let token = *self.current();

        if let TokenKind::Int(value) = token.kind {
            self.cursor += 1;

            return Ok(IntNode::new(value).with_span(token.span));
        }

        Err(ParseError::new("expected a number", token.span).into())
    }
}
