use std::{
    fmt,
    fmt::{Display, Formatter},
};

use crate::{
    ast::{ast_node::AstNodeTrait, binary_op_node::BinaryOpNode, int_node::IntNode},
    codegen::tree_walker::TreeWalker,
    errors::Result,
    parser::span::Span,
};

/// A node that evaluates to a single value
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExpressionNode {
    BinaryOp(BinaryOpNode),
    Int(IntNode),
}

impl ExpressionNode {
    /// The span of the input text this node was parsed from.
    pub fn span(&self) -> Option<Span> {
        match self {
            ExpressionNode::BinaryOp(node) => node.span,
            ExpressionNode::Int(node) => node.span,
        }
    }
}

impl AstNodeTrait for ExpressionNode {
    fn visit(&self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        match self {
            ExpressionNode::BinaryOp(node) => node.visit(tree_walker),
            ExpressionNode::Int(node) => node.visit(tree_walker),
        }
    }
}

/// Renders the canonical, fully-parenthesized source form. Re-parsing the
/// output yields a structurally identical tree.
impl Display for ExpressionNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::BinaryOp(node) => write!(f, "{}", node),
            ExpressionNode::Int(node) => write!(f, "{}", node),
        }
    }
}

impl From<BinaryOpNode> for ExpressionNode {
    fn from(node: BinaryOpNode) -> Self {
        Self::BinaryOp(node)
    }
}

impl From<IntNode> for ExpressionNode {
    fn from(node: IntNode) -> Self {
        Self::Int(node)
    }
}
