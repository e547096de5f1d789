use tracing::trace;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        dialect::Dialect,
        evaluator::{
            binary::core::eval_binary,
            unary::{eval_postfix, eval_prefix},
        },
        lexer::{Spanned, Token, TokenStream},
        parser::binding::{PREFIX, token_to_infix_operator},
        value::Number,
    },
    operator::{PostfixOperator, PrefixOperator},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A Pratt parser that evaluates while it parses.
///
/// The parser owns its token stream and a single current token. Each call to
/// [`Parser::expression`] consumes exactly the tokens of one subexpression and
/// returns its value; nothing is shared between parsers.
///
/// # Example
/// ```
/// use pratt::{Dialect, interpreter::parser::Parser};
///
/// let mut parser = Parser::new("2 ** 2 ** 3", Dialect::Full).unwrap();
/// assert_eq!(parser.parse().unwrap(), 256);
/// ```
pub struct Parser<'src> {
    tokens:  TokenStream<'src>,
    current: Spanned,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the first token cannot be lexed.
    pub fn new(source: &'src str, dialect: Dialect) -> ParseResult<Self> {
        let mut tokens = TokenStream::new(source, dialect);
        let current = Self::pull(&mut tokens)?;
        Ok(Self { tokens, current })
    }

    /// Parses and evaluates the whole input.
    ///
    /// The expression must cover the complete source: any token left over
    /// after it, such as an unmatched `)`, is reported as unexpected.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or arithmetic error encountered.
    pub fn parse(&mut self) -> Result<Number, Error> {
        let value = self.expression(0)?;
        self.finish()?;
        Ok(value)
    }

    /// Parses and evaluates one expression.
    ///
    /// Operators whose left binding power does not exceed `rbp` are left for
    /// the caller, which is how precedence and associativity are decided.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or arithmetic error encountered.
    pub fn expression(&mut self, rbp: u8) -> Result<Number, Error> {
        let t = self.advance()?;
        trace!(rbp, token = %t.token, position = t.position, "nud");
        let mut left = self.nud(t)?;

        while rbp < self.current.token.lbp() {
            let t = self.advance()?;
            trace!(rbp, token = %t.token, position = t.position, "led");
            left = self.led(t, left)?;
        }

        Ok(left)
    }

    /// Requires that all input has been consumed.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for the first unconsumed token.
    pub fn finish(&self) -> ParseResult<()> {
        match self.current {
            Spanned { token: Token::End, .. } => Ok(()),
            Spanned { token, position } => Err(ParseError::UnexpectedToken { token, position }),
        }
    }

    /// Prefix handler: `t` starts an operand.
    fn nud(&mut self, t: Spanned) -> Result<Number, Error> {
        let Spanned { token, position } = t;

        match token {
            Token::Number(value) => Ok(Number::Integer(value)),
            Token::Plus if self.tokens.dialect().has_unary_plus() => {
                self.prefix(PrefixOperator::Identity, position)
            },
            Token::Minus => self.prefix(PrefixOperator::Negate, position),
            Token::Tilde => self.prefix(PrefixOperator::Reciprocal, position),
            Token::LParen => {
                let value = self.expression(0)?;
                self.expect(Token::RParen)?;
                Ok(value)
            },
            _ => Err(ParseError::UnexpectedToken { token, position }.into()),
        }
    }

    /// Infix/postfix handler: `t` follows the already evaluated `left`.
    fn led(&mut self, t: Spanned, left: Number) -> Result<Number, Error> {
        let Spanned { token, position } = t;

        if let Some(op) = token_to_infix_operator(token) {
            let right = self.expression(op.rbp())?;
            return Ok(eval_binary(op, left, right, position)?);
        }

        match token {
            Token::Bang => Ok(eval_postfix(PostfixOperator::Factorial, left, position)?),
            _ => Err(ParseError::UnexpectedToken { token, position }.into()),
        }
    }

    fn prefix(&mut self, op: PrefixOperator, position: usize) -> Result<Number, Error> {
        let operand = self.expression(PREFIX)?;
        Ok(eval_prefix(op, operand, position)?)
    }

    /// Consumes the current token if it is `expected`.
    fn expect(&mut self, expected: Token) -> ParseResult<Spanned> {
        if self.current.token != expected {
            return Err(ParseError::ExpectedToken { expected,
                                                   found: self.current.token,
                                                   position: self.current.position });
        }
        self.advance()
    }

    /// Returns the current token and moves the cursor one token forward.
    ///
    /// `End` is never consumed: advancing past it leaves it current.
    fn advance(&mut self) -> ParseResult<Spanned> {
        let next = if self.current.token == Token::End {
            self.current
        } else {
            Self::pull(&mut self.tokens)?
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn pull(tokens: &mut TokenStream<'src>) -> ParseResult<Spanned> {
        let end = Spanned { token:    Token::End,
                            position: tokens.end_position(), };
        Ok(tokens.next().transpose()?.unwrap_or(end))
    }
}
