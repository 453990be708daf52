use std::{
    fmt,
    fmt::{Display, Formatter},
};

use crate::{
    ast::ast_node::AstNodeTrait,
    codegen::tree_walker::TreeWalker,
    errors::Result,
    parser::span::Span,
};

/// A node representing an integer literal
#[derive(Debug, Copy, Clone, Eq)]
pub struct IntNode {
    pub value: i64,

    /// The span of the literal in the original input
    pub span: Option<Span>,
}

impl IntNode {
    pub fn new(value: i64) -> Self {
        Self { value, span: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);

        self
    }
}

/// Equality is structural. Spans are ignored.
impl PartialEq for IntNode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl AstNodeTrait for IntNode {
    /// This is the double-dispatch endpoint for tree-walking
    fn visit(&self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_int(self)
    }
}

impl Display for IntNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
