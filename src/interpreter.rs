/// The dialect module selects the operator set.
///
/// A dialect decides which operator characters the lexer accepts and which
/// tokens may start an expression. `Full` understands every operator, `Basic`
/// only integer literals, `+` and `*`.
pub mod dialect;
/// The evaluator module implements the arithmetic behind every operator.
///
/// Evaluation happens eagerly while parsing: each prefix, infix and postfix
/// handler calls into this module with already computed operands.
///
/// # Responsibilities
/// - Performs checked integer arithmetic and promotes to reals when needed.
/// - Reports division by zero, domain errors and overflow with the position
///   of the failing operator.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of
/// positioned tokens terminated by a single end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Matches `**` before `*` and skips whitespace.
/// - Reports unknown characters and oversized literals.
pub mod lexer;
/// The parser module drives evaluation by binding power.
///
/// The parser pulls tokens one at a time and decides, by comparing binding
/// powers, how much of the remaining input belongs to the current
/// subexpression.
///
/// # Responsibilities
/// - Dispatches every token to its prefix (nud) or infix/postfix (led)
///   handler.
/// - Enforces closing parentheses and complete consumption of the input.
pub mod parser;
/// The value module defines the numeric result type.
///
/// Results are integers until an operation requires a real, at which point
/// operands are promoted.
pub mod value;
