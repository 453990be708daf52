use std::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
};

use crate::parser::span::Span;

/// A grammar mismatch found while parsing the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    /// The span of the unmatched token
    pub span: Span,
}

impl ParseError {
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

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ParseError {}
