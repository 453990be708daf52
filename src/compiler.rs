use itertools::Itertools;
use tracing::debug;

use crate::{
    asm::{instruction::Instruction, register::Register},
    ast::ast_node::AstNodeTrait,
    codegen::codegen_walker::CodegenWalker,
    errors::Result,
    parser::{lexer, Parser},
};

/// Compile a single expression into a complete assembly listing for `main`.
///
/// The emitted code evaluates the expression on the hardware stack and
/// returns with the result in `rax`, so the assembled program's exit status
/// is the expression's value.
///
/// # Arguments
/// `code` - The expression to compile.
///
/// # Examples
/// ```
/// let listing = exprcc::compiler::compile_string("1+2").unwrap();
///
/// assert!(listing.contains("add rax, rdi"));
/// ```
pub fn compile_string<T>(code: T) -> Result<String>
where
    T: AsRef<str>,
{
    let code = code.as_ref();

    let tokens = lexer::tokenize(code)?;
    debug!(count = tokens.len(), "tokenized");

    let program = Parser::new(tokens).parse()?;
    debug!(%program, "parsed");

    let mut walker = CodegenWalker::new();
    program.visit(&mut walker)?;
    debug!(count = walker.instructions().len(), "generated");

    Ok(assemble(&walker.into_instructions()))
}

/// Wrap a generated instruction sequence with the fixed prologue and
/// epilogue: the result of the sequence is popped into `rax` and returned.
fn assemble(instructions: &[Instruction]) -> String {
    let body = instructions
        .iter()
        .chain(&[Instruction::Pop(Register::Rax), Instruction::Ret])
        .map(|i| format!("  {}", i))
        .join("\n");

    format!(".intel_syntax noprefix\n.global main\nmain:\n{}\n", body)
}
