use std::iter::FusedIterator;

use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::dialect::Dialect};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the lexer itself; [`TokenStream`]
    /// appends it once the source is exhausted.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::StarStar => write!(f, "'**'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Tilde => write!(f, "'~'"),
            Self::Bang => write!(f, "'!'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte offset where it starts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

/// A lazy, forward-only sequence of tokens.
///
/// Yields every token of the source in order, then exactly one
/// [`Token::End`], then nothing. The first lexical error is yielded in place
/// of a token and ends the sequence.
///
/// # Example
/// ```
/// use pratt::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("2 ** 3!").map(|t| t.unwrap().token).collect();
/// assert_eq!(tokens,
///            [Token::Number(2), Token::StarStar, Token::Number(3), Token::Bang, Token::End]);
/// ```
pub struct TokenStream<'src> {
    lexer:    logos::Lexer<'src, Token>,
    dialect:  Dialect,
    pending:  Option<Spanned>,
    finished: bool,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream over `source` for the given dialect.
    #[must_use]
    pub fn new(source: &'src str, dialect: Dialect) -> Self {
        Self { lexer: Token::lexer(source),
               dialect,
               pending: None,
               finished: false }
    }

    /// The dialect this stream was created for.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Byte offset assigned to the trailing [`Token::End`].
    #[must_use]
    pub fn end_position(&self) -> usize {
        self.lexer.source().len()
    }

    /// Classifies a slice the lexer could not match.
    ///
    /// An all-digit slice can only fail because the literal overflowed `i64`.
    fn lex_error(&self, position: usize) -> ParseError {
        let slice = self.lexer.source().get(self.lexer.span()).unwrap_or_default();
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            return ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                 position };
        }
        self.unknown_operator(position)
    }

    fn unknown_operator(&self, position: usize) -> ParseError {
        let character = self.lexer
                            .source()
                            .get(position..)
                            .and_then(|rest| rest.chars().next())
                            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ParseError::UnknownOperator { character, position }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Spanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(spanned) = self.pending.take() {
            return Some(Ok(spanned));
        }

        let Some(result) = self.lexer.next() else {
            self.finished = true;
            let end = Spanned { token:    Token::End,
                                position: self.end_position(), };
            trace!(position = end.position, "end of input");
            return Some(Ok(end));
        };

        let position = self.lexer.span().start;
        let item = match result {
            // The basic operator set has no power operator, so `**` is two
            // multiplications in a row.
            Ok(Token::StarStar) if self.dialect == Dialect::Basic => {
                self.pending = Some(Spanned { token:    Token::Star,
                                              position: position + 1, });
                Ok(Spanned { token: Token::Star,
                             position })
            },
            Ok(token) if self.dialect.recognizes(token) => Ok(Spanned { token, position }),
            Ok(_) => Err(self.unknown_operator(position)),
            Err(()) => Err(self.lex_error(position)),
        };

        match &item {
            Ok(spanned) => trace!(token = %spanned.token, position, "lexed token"),
            Err(e) => {
                trace!(error = %e, "lexing failed");
                self.finished = true;
            },
        }

        Some(item)
    }
}

impl FusedIterator for TokenStream<'_> {}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
