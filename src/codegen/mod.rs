pub mod codegen_walker;
pub mod tree_walker;
