use crate::{codegen::tree_walker::TreeWalker, errors::Result};

pub trait AstNodeTrait {
    /// This is the double-dispatch endpoint for tree-walking
    fn visit(&self, tree_walker: &mut impl TreeWalker) -> Result<()>;
}
