use std::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
};

use crate::parser::span::Span;

/// An error found while turning raw input into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    message: String,
    /// The span of the offending input text
    pub span: Span,
}

impl LexError {
    pub fn new<T>(message: T, span: Span) -> Self
    where
        T: Into<String>,
    {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for LexError {}
