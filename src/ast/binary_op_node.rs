use std::{
    fmt,
    fmt::{Display, Formatter},
};

use crate::{
    ast::{ast_node::AstNodeTrait, expression_node::ExpressionNode},
    codegen::tree_walker::TreeWalker,
    errors::Result,
    parser::span::Span,
};

/// All possible binary operations
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
        };

        write!(f, "{}", s)
    }
}

/// Representation of a binary operation
#[derive(Debug, Clone, Eq)]
pub struct BinaryOpNode {
    /// Left-hand side
    pub l: Box<ExpressionNode>,

    /// Right-hand side
    pub r: Box<ExpressionNode>,

    /// The operation to perform
    pub op: BinaryOperation,

    /// The span in the original input covering both operands
    pub span: Option<Span>,
}

impl BinaryOpNode {
    pub fn new(l: ExpressionNode, r: ExpressionNode, op: BinaryOperation) -> Self {
        let span = Span::combine(l.span(), r.span());

        Self {
            l: Box::new(l),
            r: Box::new(r),
            op,
            span,
        }
    }
}

/// Equality is structural. Spans are ignored.
impl PartialEq for BinaryOpNode {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.l == other.l && self.r == other.r
    }
}

impl AstNodeTrait for BinaryOpNode {
    /// This is the double-dispatch endpoint for tree-walking
    fn visit(&self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_binary_op(self)
    }
}

impl Display for BinaryOpNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.l, self.op, self.r)
    }
}
