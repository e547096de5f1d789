#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero, either through `/`, `~` or by raising zero
    /// to a negative power.
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An operator was applied outside of its mathematical domain.
    DomainError {
        /// Details about why the operand is invalid.
        details:  String,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The result cannot be represented.
    Overflow {
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::DomainError { position, .. }
            | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::DomainError { details, position } => {
                write!(f, "Error at position {position}: Domain error: {details}.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Arithmetic overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
