use std::{
    fmt,
    fmt::{Display, Formatter},
};

use crate::asm::register::Register;

/// The operand of a `push`: an immediate value or a register.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operand {
    Imm(i64),
    Reg(Register),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Imm(value) => write!(f, "{}", value),
            Operand::Reg(register) => write!(f, "{}", register),
        }
    }
}

/// Representation of an assembly language instruction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Instruction {
    /// Push a value onto the stack
    Push(Operand),

    /// Pop the top of the stack into a register
    Pop(Register),

    /// x.0 += x.1
    Add(Register, Register),

    /// x.0 -= x.1
    Sub(Register, Register),

    /// Signed multiplication - x.0 *= x.1
    Imul(Register, Register),

    /// Sign-extend rax into rdx:rax, in preparation for `idiv`
    Cqo,

    /// Signed division of rdx:rax by x.0; the quotient lands in rax
    Idiv(Register),

    /// Return from the current function
    Ret,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(operand) => {
                write!(f, "push {}", operand)
            }
            Instruction::Pop(register) => {
                write!(f, "pop {}", register)
            }
            Instruction::Add(r1, r2) => {
                write!(f, "add {}, {}", r1, r2)
            }
            Instruction::Sub(r1, r2) => {
                write!(f, "sub {}, {}", r1, r2)
            }
            Instruction::Imul(r1, r2) => {
                write!(f, "imul {}, {}", r1, r2)
            }
            Instruction::Cqo => {
                write!(f, "cqo")
            }
            Instruction::Idiv(register) => {
                write!(f, "idiv {}", register)
            }
            Instruction::Ret => {
                write!(f, "ret")
            }
        }
    }
}
