pub mod instruction;
pub mod register;
