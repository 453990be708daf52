use std::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
    result,
};

use crate::parser::span::Span;

pub mod lex_error;
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Common `Result` type
pub type Result<T> = result::Result<T, CompilerError>;

/// Anything that can halt a compilation. The first error aborts the whole
/// pipeline; there is no recovery or partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    Lex(LexError),
    Parse(ParseError),
}

impl CompilerError {
    /// The span of the offending input text.
    pub fn span(&self) -> Span {
        match self {
            CompilerError::Lex(e) => e.span,
            CompilerError::Parse(e) => e.span,
        }
    }

    /// Render this error in the caret format existing tooling expects:
    /// the original input line, then a caret under the offending offset,
    /// followed by the message.
    ///
    /// # Arguments
    /// `input` - The line that was being compiled when this error occurred.
    pub fn diagnostic_string(&self, input: &str) -> String {
        format!(
            "{}\n{:width$}^ {}\n",
            input,
            "",
            self,
            width = self.span().l
        )
    }
}

impl Display for CompilerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CompilerError::Lex(e) => write!(f, "{}", e),
            CompilerError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CompilerError {}

impl From<LexError> for CompilerError {
    fn from(err: LexError) -> Self {
        CompilerError::Lex(err)
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        CompilerError::Parse(err)
    }
}
