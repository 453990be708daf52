use itertools::Itertools;

use crate::{
    asm::{
        instruction::{Instruction, Operand},
        register::Register,
    },
    ast::{
        ast_node::AstNodeTrait,
        binary_op_node::{BinaryOpNode, BinaryOperation},
        int_node::IntNode,
    },
    codegen::tree_walker::TreeWalker,
    errors::Result,
};

/// A tree walker that emits stack-machine instructions for the expression it
/// visits.
///
/// Operands are pushed onto the hardware stack; operators pop their two
/// operands into `rdi` and `rax`, combine them, and push the result back.
/// The walk is post-order, so the net effect of the emitted sequence is a
/// single value left on top of the stack.
#[derive(Debug, Default)]
pub struct CodegenWalker {
    instructions: Vec<Instruction>,
}

impl CodegenWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Get a listing of the emitted instructions, one per line.
    pub fn listing(&self) -> String {
        self.instructions.iter().map(|i| format!("{}", i)).join("\n")
    }
}

impl TreeWalker for CodegenWalker {
    fn visit_int(&mut self, node: &IntNode) -> Result<()> {
        self.instructions
            .push(Instruction::Push(Operand::Imm(node.value)));

        Ok(())
    }

    fn visit_binary_op(&mut self, node: &BinaryOpNode) -> Result<()> {
        // left operand first, so it sits deeper on the stack
        node.l.visit(self)?;
        node.r.visit(self)?;

        self.instructions.push(Instruction::Pop(Register::Rdi));
        self.instructions.push(Instruction::Pop(Register::Rax));

        match node.op {
            BinaryOperation::Add => {
                self.instructions
                    .push(Instruction::Add(Register::Rax, Register::Rdi));
            }
            BinaryOperation::Sub => {
                self.instructions
                    .push(Instruction::Sub(Register::Rax, Register::Rdi));
            }
            BinaryOperation::Mul => {
                self.instructions
                    .push(Instruction::Imul(Register::Rax, Register::Rdi));
            }
            BinaryOperation::Div => {
                // idiv divides rdx:rax, so rax has to be sign-extended first
                self.instructions.push(Instruction::Cqo);
                self.instructions.push(Instruction::Idiv(Register::Rdi));
            }
        }

        self.instructions
            .push(Instruction::Push(Operand::Reg(Register::Rax)));

        Ok(())
    }
}
