use crate::{interpreter::lexer::Token, operator::InfixOperator};

/// Binding power of `+` and `-` in infix position.
pub const ADDITIVE: u8 = 10;
/// Binding power of `*` and `/`.
pub const MULTIPLICATIVE: u8 = 20;
/// Binding power of `**`.
pub const POWER: u8 = 30;
/// Right binding power of the prefix operators `+`, `-` and `~`.
pub const PREFIX: u8 = 100;
/// Binding power of the postfix `!`.
pub const FACTORIAL: u8 = 150;

impl Token {
    /// Left binding power: how strongly this token, seen after a complete
    /// operand, claims that operand.
    ///
    /// Tokens that cannot continue an expression return `0`, which ends every
    /// `expression` loop.
    ///
    /// # Example
    /// ```
    /// use pratt::Token;
    ///
    /// assert_eq!(Token::Star.lbp(), 20);
    /// assert_eq!(Token::Bang.lbp(), 150);
    /// assert_eq!(Token::RParen.lbp(), 0);
    /// ```
    #[must_use]
    pub const fn lbp(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => ADDITIVE,
            Self::Star | Self::Slash => MULTIPLICATIVE,
            Self::StarStar => POWER,
            Self::Bang => FACTORIAL,
            Self::Number(_) | Self::Tilde | Self::LParen | Self::RParen | Self::End => 0,
        }
    }
}

impl InfixOperator {
    /// The binding power the right operand is parsed with.
    ///
    /// Left-associative operators reuse their own binding power, so an equal
    /// operator to the right stops the recursion. `**` recurses one lower, so
    /// a chained `**` binds inside the right operand.
    #[must_use]
    pub const fn rbp(self) -> u8 {
        match self {
            Self::Add | Self::Sub => ADDITIVE,
            Self::Mul | Self::Div => MULTIPLICATIVE,
            Self::Pow => POWER - 1,
        }
    }
}

/// Maps a token to the infix operator it denotes, if any.
///
/// # Example
/// ```
/// use pratt::{Token, interpreter::parser::binding::token_to_infix_operator, operator::InfixOperator};
///
/// assert_eq!(token_to_infix_operator(Token::StarStar), Some(InfixOperator::Pow));
/// assert_eq!(token_to_infix_operator(Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::StarStar => Some(InfixOperator::Pow),
        _ => None,
    }
}
