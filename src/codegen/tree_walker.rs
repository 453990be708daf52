use crate::{
    ast::{ast_node::AstNodeTrait, binary_op_node::BinaryOpNode, int_node::IntNode},
    errors::Result,
};

/// A trait for types that can walk abstract syntax trees
pub trait TreeWalker {
    /// Visit a binary operation node
    fn visit_binary_op(&mut self, node: &BinaryOpNode) -> Result<()>
    where
        Self: Sized,
    {
        node.l.visit(self)?;
        node.r.visit(self)?;

        Ok(())
    }

    /// Visit an int (literal) node
    fn visit_int(&mut self, _node: &IntNode) -> Result<()> {
        Ok(())
    }
}
