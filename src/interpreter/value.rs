/// The result of evaluating an expression.
///
/// Literals are always integers. Division and reciprocals produce reals, and
/// any operation mixing an integer with a real promotes the integer.
///
/// Equality is numeric across variants, so `Integer(2) == Real(2.0)`. A
/// `Number` can also be compared directly with `i64`, `i32` and `f64` values.
///
/// # Example
/// ```
/// use pratt::Number;
///
/// assert_eq!(Number::Integer(2), Number::Real(2.0));
/// assert_eq!(Number::Real(0.5), 0.5);
/// assert_eq!(Number::Integer(-3).to_string(), "-3");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl Number {
    /// Converts the number to `f64`, rounding integers above `2^53` to the
    /// nearest representable real.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Converts both operands to `f64` for mixed arithmetic.
    #[must_use]
    pub fn promote_to_real(self, other: Self) -> (f64, f64) {
        (self.as_real(), other.as_real())
    }

    /// Returns `true` for integer zero and for both signed real zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the number is an integer or a real with no
    /// fractional part.
    #[must_use]
    pub fn is_integral(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.is_finite() && r.fract() == 0.0,
        }
    }
}

impl PartialEq for Number {
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                *a as f64 == *b
            },
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Integer(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Self::Integer(i64::from(*other))
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Real(*other)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
