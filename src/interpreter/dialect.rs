use clap::ValueEnum;

use crate::interpreter::lexer::Token;

/// Selects which operators the lexer accepts and which tokens may start an
/// expression.
///
/// `Full` is the complete operator set. `Basic` only understands integer
/// literals, infix `+` and infix `*`; every other operator character is
/// rejected by the lexer, and `+` has no prefix form.
///
/// # Example
/// ```
/// use pratt::{Dialect, parse_with};
///
/// assert_eq!(parse_with("1+2*3*4+5", Dialect::Basic).unwrap(), 30);
/// assert!(parse_with("-1", Dialect::Basic).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dialect {
    /// Integer literals with infix `+` and `*`.
    Basic,
    /// Every supported operator.
    #[default]
    Full,
}

impl Dialect {
    /// Returns `true` if tokens of this kind may appear in source written in
    /// this dialect.
    ///
    /// `**` is not recognized by `Basic`; the lexer splits it into two `*`
    /// tokens instead of rejecting it.
    #[must_use]
    pub const fn recognizes(self, token: Token) -> bool {
        match self {
            Self::Full => true,
            Self::Basic => matches!(token, Token::Number(_) | Token::Plus | Token::Star | Token::End),
        }
    }

    /// Returns `true` if `+` may be used as a prefix operator.
    #[must_use]
    pub const fn has_unary_plus(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Full => write!(f, "full"),
        }
    }
}
