//! Runtime values.

use std::fmt;

/// The ways an evaluation can fail.
///
/// The set is closed; every consumer matches it exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `/` or `%` with a zero divisor.
    DivisionByZero,
    /// Operator symbol with no meaning for the operand types.
    UnknownOperator,
    /// Number literal that does not fit its numeric type.
    MalformedNumber,
}

impl ErrorKind {
    /// Sentence shown to the user for this error.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "Division by zero.",
            ErrorKind::UnknownOperator => "Invalid operator.",
            ErrorKind::MalformedNumber => "Invalid number.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of evaluating a node or applying an operator.
///
/// Values are plain `Copy` data: each one is produced by a single step and
/// consumed by its parent step or the printer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Error(ErrorKind),
}

impl Value {
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub const fn float(n: f64) -> Self {
        Value::Float(n)
    }

    #[inline]
    pub const fn error(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub const fn as_error(&self) -> Option<ErrorKind> {
        match self {
            Value::Error(kind) => Some(*kind),
            Value::Int(_) | Value::Float(_) => None,
        }
    }

    /// Name of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Error(_) => "error",
        }
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Value::int(3), Value::Int(3));
        assert_eq!(Value::float(0.5), Value::Float(0.5));
        assert_eq!(
            Value::error(ErrorKind::MalformedNumber),
            Value::Error(ErrorKind::MalformedNumber)
        );
        assert_eq!(
            Value::from(ErrorKind::DivisionByZero),
            Value::Error(ErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn test_error_queries() {
        let err = Value::error(ErrorKind::UnknownOperator);
        assert!(err.is_error());
        assert_eq!(err.as_error(), Some(ErrorKind::UnknownOperator));
        assert!(!Value::int(1).is_error());
        assert_eq!(Value::float(1.0).as_error(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::int(1).type_name(), "int");
        assert_eq!(Value::float(1.0).type_name(), "float");
        assert_eq!(Value::error(ErrorKind::DivisionByZero).type_name(), "error");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ErrorKind::DivisionByZero.to_string(), "Division by zero.");
        assert_eq!(ErrorKind::UnknownOperator.to_string(), "Invalid operator.");
        assert_eq!(ErrorKind::MalformedNumber.to_string(), "Invalid number.");
    }

    #[test]
    fn test_display_matches_printer() {
        assert_eq!(Value::int(-5).to_string(), "-5");
        assert_eq!(Value::float(3.5).to_string(), "3.500000");
        assert_eq!(
            Value::error(ErrorKind::DivisionByZero).to_string(),
            "Division by zero."
        );
    }
}
