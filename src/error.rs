/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unknown characters, oversized literals, tokens in positions where they
/// have no meaning and missing closing parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while an operator computes its
/// value: division by zero, domain violations and overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned by [`crate::parse`].
///
/// Evaluation happens while parsing, so a single call can fail either
/// syntactically or arithmetically. The first failure aborts the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized or does not form an expression.
    Parse(ParseError),
    /// The expression is well formed but an operator failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
