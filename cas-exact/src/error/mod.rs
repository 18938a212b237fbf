pub mod kind;

use cas_error::Error;
use kind::{
    DivisionByZero,
    ExponentTooLarge,
    InvalidBinaryOperation,
    NegativeRadicand,
    ParseError,
    UnboundVariable,
    UndefinedOperation,
};
use std::{fmt, ops::Range};

/// Any error that can occur during exact arithmetic or symbolic simplification.
///
/// The engine has no knowledge of where its inputs came from, so this error carries no source
/// spans. Use [`MathError::into_error`] to attach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    DivisionByZero(DivisionByZero),
    UndefinedOperation(UndefinedOperation),
    NegativeRadicand(NegativeRadicand),
    UnboundVariable(UnboundVariable),
    ParseError(ParseError),
    ExponentTooLarge(ExponentTooLarge),
    InvalidBinaryOperation(InvalidBinaryOperation),
}

macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for MathError {
                fn from(kind: $kind) -> Self {
                    MathError::$kind(kind)
                }
            }
        )*

        impl MathError {
            /// Convert the [`MathError`] into a [`cas_error::Error`], pointing at the given
            /// spans.
            pub fn into_error(self, spans: Vec<Range<usize>>) -> Error {
                match self {
                    $(MathError::$kind(kind) => Error::new(spans, kind),)*
                }
            }
        }
    };
}

impl_from_kind!(
    DivisionByZero,
    UndefinedOperation,
    NegativeRadicand,
    UnboundVariable,
    ParseError,
    ExponentTooLarge,
    InvalidBinaryOperation,
);

impl MathError {
    /// Creates an [`UndefinedOperation`] error for the given operation.
    pub fn undefined(expr: impl Into<String>) -> Self {
        UndefinedOperation { expr: expr.into() }.into()
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero(_) => write!(f, "division by zero"),
            MathError::UndefinedOperation(e) => write!(f, "`{}` is undefined", e.expr),
            MathError::NegativeRadicand(e) => write!(f, "even root of negative number `{}`", e.value),
            MathError::UnboundVariable(e) => write!(f, "unbound variable `{}`", e.name),
            MathError::ParseError(e) => write!(f, "`{}` is not a valid integer", e.text),
            MathError::ExponentTooLarge(_) => write!(f, "exponent is too large"),
            MathError::InvalidBinaryOperation(e) => write!(
                f,
                "unsupported operation `{}` between `{}` and `{}`",
                e.op, e.left, e.right,
            ),
        }
    }
}

impl std::error::Error for MathError {}
