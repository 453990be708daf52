use crate::{
    asm::{
        instruction::{Instruction, Operand},
        register::Register,
    },
    ast::ast_node::AstNodeTrait,
    codegen::codegen_walker::CodegenWalker,
    parser::{lexer, Parser},
};

/// A tiny simulator for the emitted instruction set, so generated code can be
/// checked for the value it computes without assembling anything.
#[derive(Debug, Default)]
pub struct StackMachine {
    stack: Vec<i64>,
    rax: i64,
    rdi: i64,
    rdx: i64,
}

impl StackMachine {
    pub fn run(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            match instruction {
                Instruction::Push(Operand::Imm(value)) => self.stack.push(*value),
                Instruction::Push(Operand::Reg(register)) => self.stack.push(self.read(*register)),
                Instruction::Pop(register) => {
                    let value = self.stack.pop().expect("pop from an empty stack");
                    self.write(*register, value);
                }
                Instruction::Add(dst, src) => {
                    let value = self.read(*dst).wrapping_add(self.read(*src));
                    self.write(*dst, value);
                }
                Instruction::Sub(dst, src) => {
                    let value = self.read(*dst).wrapping_sub(self.read(*src));
                    self.write(*dst, value);
                }
                Instruction::Imul(dst, src) => {
                    let value = self.read(*dst).wrapping_mul(self.read(*src));
                    self.write(*dst, value);
                }
                Instruction::Cqo => {
                    self.rdx = if self.rax < 0 { -1 } else { 0 };
                }
                Instruction::Idiv(register) => {
                    // rdx:rax / src, quotient in rax, remainder in rdx.
                    // Rust's integer division truncates toward zero, same as idiv.
                    let divisor = self.read(*register);
                    self.rdx = self.rax % divisor;
                    self.rax /= divisor;
                }
                Instruction::Ret => break,
            }
        }
    }

    pub fn rax(&self) -> i64 {
        self.rax
    }

    fn read(&self, register: Register) -> i64 {
        match register {
            Register::Rax => self.rax,
            Register::Rdi => self.rdi,
        }
    }

    fn write(&mut self, register: Register, value: i64) {
        match register {
            Register::Rax => self.rax = value,
            Register::Rdi => self.rdi = value,
        }
    }
}

/// Compile `code` and simulate the generated instructions, returning the
/// value the real program would leave in `rax`.
pub fn run_expr(code: &str) -> i64 {
    let tokens = lexer::tokenize(code).expect("Failed to tokenize.");
    let program = Parser::new(tokens).parse().expect("Failed to parse.");

    let mut walker = CodegenWalker::new();
    program.visit(&mut walker).expect("Failed to generate code.");

    let mut machine = StackMachine::default();
    machine.run(&walker.into_instructions());
    machine.run(&[Instruction::Pop(Register::Rax), Instruction::Ret]);

    machine.rax()
}
