//! # pratt
//!
//! pratt is an arithmetic expression evaluator written in Rust.
//! It parses with binding powers instead of a grammar of precedence levels
//! and evaluates while parsing, so no syntax tree is ever built.
//!
//! ```
//! assert_eq!(pratt::parse("1+2*3*4+5").unwrap(), 30);
//! assert_eq!(pratt::parse("2**2**3").unwrap(), 256);
//! assert_eq!(pratt::parse("---1++2+~1").unwrap(), 2);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        dialect::Dialect,
        lexer::{Spanned, Token, TokenStream},
        parser::Parser,
        value::Number,
    },
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating an expression. Every error carries the byte offset of the
/// character or operator that caused it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Combines them into the single [`Error`] returned by [`parse`].
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the binding-power parser, the
/// arithmetic of each operator and the numeric value type.
///
/// # Responsibilities
/// - Coordinates all core components: dialect, lexer, parser, evaluator and
///   values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Prefix, infix and postfix operator kinds.
pub mod operator;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64`, `u32` and `f64` without silent data
///   loss.
pub mod util;

/// Parses and evaluates `source` with the full operator set.
///
/// # Errors
/// Returns the first lexing, parsing or arithmetic error encountered.
///
/// # Examples
/// ```
/// use pratt::{Error, ParseError, RuntimeError, Token, parse};
///
/// assert_eq!(parse("1*(2+ (-3-1))").unwrap(), -2);
///
/// // Division always produces a real.
/// assert_eq!(parse("3/2").unwrap(), 1.5);
///
/// assert!(matches!(parse("1/0"), Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
/// assert!(matches!(parse(""),
///                  Err(Error::Parse(ParseError::UnexpectedToken { token: Token::End, .. }))));
/// ```
pub fn parse(source: &str) -> Result<Number, Error> {
    parse_with(source, Dialect::Full)
}

/// Parses and evaluates `source` with the given operator set.
///
/// Every call owns its own [`Parser`]; calls never share state.
///
/// # Errors
/// Returns the first lexing, parsing or arithmetic error encountered.
///
/// # Examples
/// ```
/// use pratt::{Dialect, parse_with};
///
/// assert_eq!(parse_with("1+2+3", Dialect::Basic).unwrap(), 6);
/// assert!(parse_with("2**3", Dialect::Basic).is_err());
/// assert_eq!(parse_with("2**3", Dialect::Full).unwrap(), 8);
/// ```
pub fn parse_with(source: &str, dialect: Dialect) -> Result<Number, Error> {
    debug!(%dialect, source, "parsing expression");

    let result = Parser::new(source, dialect).map_err(Error::from)
                                             .and_then(|mut parser| parser.parse());

    match &result {
        Ok(value) => debug!(%value, "expression evaluated"),
        Err(e) => debug!(error = %e, "expression failed"),
    }

    result
}

/// Returns the lazy token stream of `source` for the full operator set.
///
/// # Examples
/// ```
/// use pratt::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("(1)").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].token, Token::End);
/// assert_eq!(tokens[3].position, 3);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> TokenStream<'_> {
    tokenize_with(source, Dialect::Full)
}

/// Returns the lazy token stream of `source` for the given operator set.
#[must_use]
pub fn tokenize_with(source: &str, dialect: Dialect) -> TokenStream<'_> {
    TokenStream::new(source, dialect)
}
