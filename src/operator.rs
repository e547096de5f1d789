/// Operators that take a single operand to their right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Unary plus (e.g. `+x`), returns the operand unchanged.
    Identity,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Reciprocal (e.g. `~x`, meaning `1 / x`).
    Reciprocal,
}

/// Operators that take a left and a right operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

/// Operators that take a single operand to their left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Factorial (e.g. `x!`).
    Factorial,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Identity => "+",
            Self::Negate => "-",
            Self::Reciprocal => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factorial => write!(f, "!"),
        }
    }
}
