/// Binding powers.
///
/// The left binding power of every token and the right binding power each
/// operator recurses with. These numbers alone decide precedence and
/// associativity.
pub mod binding;
/// Core parsing logic.
///
/// The parser cursor, the `expression` loop and the prefix/infix handlers of
/// every token.
pub mod core;

pub use self::core::Parser;
