#![forbid(unsafe_code)]

pub mod asm;
pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod errors;
pub mod parser;

#[cfg(test)]
pub mod test_support;

pub use errors::Result;
