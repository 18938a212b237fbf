use ariadne::Fmt;
use cas_attrs::ErrorKind;
use cas_error::EXPR;
use crate::numerical::binary::BinOpKind;

/// A division (or reciprocal, or negative power) of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "division by zero",
    labels = ["this expression evaluates to zero"],
    help = "the divisor of a division, and the base of a negative power, must be non-zero",
)]
pub struct DivisionByZero;

/// An operation without a meaningful result, such as `0^0` or `∞ - ∞`.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("`{}` is undefined", expr),
    labels = ["this operation"],
    help = "the result of this operation is mathematically undefined",
)]
pub struct UndefinedOperation {
    /// The operation that was attempted, written out.
    pub expr: String,
}

/// A square root (or even root) of a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot take an even root of the negative number `{}`", value),
    labels = ["this value is negative"],
    help = format!("complex results are not supported; try {} instead", format!("-√{}", value.trim_start_matches('-')).fg(EXPR)),
)]
pub struct NegativeRadicand {
    /// The negative radicand.
    pub value: String,
}

/// A variable with no known numerical value was evaluated.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot evaluate the unbound variable `{}`", name),
    labels = ["this variable"],
    help = format!("only the constants {} and {} have numerical values", "π".fg(EXPR), "e".fg(EXPR)),
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,
}

/// A string that is not a valid integer literal.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("`{}` is not a valid integer", text),
    labels = ["this literal"],
    help = "integers are written as an optional sign followed by decimal digits",
)]
pub struct ParseError {
    /// The text that failed to parse.
    pub text: String,
}

/// An exact power whose exponent is too large to compute.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "exponent is too large",
    labels = ["this exponent"],
    help = "the result would be too large to represent exactly",
)]
pub struct ExponentTooLarge;

/// The operands of a binary operation have types the operator cannot be applied to.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("unsupported operation `{}` between `{}` and `{}`", op, left, right),
    labels = ["this operator", "this operand", "this operand"],
    help = format!("the {} operator cannot be applied to these types", op.to_string().fg(EXPR)),
)]
pub struct InvalidBinaryOperation {
    /// The operator.
    pub op: BinOpKind,

    /// The type name of the left operand.
    pub left: &'static str,

    /// The type name of the right operand.
    pub right: &'static str,
}
