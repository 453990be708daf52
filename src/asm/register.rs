use std::fmt::{Display, Formatter};

/// The two general-purpose registers used as scratch slots for the top two
/// stack values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Register {
    Rax,
    Rdi,
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Register::Rax => "rax",
            Register::Rdi => "rdi",
        };

        write!(f, "{}", s)
    }
}
