use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that is neither a digit nor a known operator.
    UnknownOperator {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The digits as written in the source.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// Found a token without a prefix handler where an operand was expected,
    /// or a token left over after the expression ended.
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A specific token was required but a different one was found.
    ExpectedToken {
        /// The token that was required.
        expected: Token,
        /// The token actually found.
        found:    Token,
        /// Byte offset of the found token in the source.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownOperator { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::ExpectedToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { character, position } => {
                write!(f, "Error at position {position}: Unknown operator '{character}'.")
            },

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error at position {position}: Expected {expected} but found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
