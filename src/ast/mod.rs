pub mod ast_node;
pub mod binary_op_node;
pub mod expression_node;
pub mod int_node;
