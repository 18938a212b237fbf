//! Binary operators over the numeric tower.
//!
//! [`eval_operands`] decides which representation the result of a binary operation takes. The
//! first rule that matches the operands wins:
//!
//! 1. Comparisons are exact where both operands are exact, and order infinities by sign.
//! 2. Operations involving an infinity follow the sign rules of each operator.
//! 3. `+` with a string operand concatenates the operands as text.
//! 4. Symbolic and irrational operands are promoted to a [`SymExpr`] and simplified.
//! 5. Float operands use floating-point arithmetic.
//! 6. Two integers where one is a [`BigInteger`] use [`BigInteger`] arithmetic.
//! 7. Rational operands use exact [`Rational`] arithmetic.
//! 8. Two machine integers use checked arithmetic, and are promoted to [`BigInteger`]s if it
//!    overflows.
//!
//! Division prefers exactness: integer division that leaves a remainder produces a [`Rational`].

use crate::{
    error::{
        kind::{DivisionByZero, InvalidBinaryOperation},
        MathError,
    },
    number::{BigInteger, Rational},
    symbolic::expr::{Sign, SymExpr},
};
use std::{cmp::Ordering, fmt};
use super::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operators that can be applied to values of the numeric tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Eq,
    NotEq,
}

impl BinOpKind {
    /// Returns true if the operator compares its operands, producing a boolean.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Greater | Self::GreaterEq | Self::Less | Self::LessEq | Self::Eq | Self::NotEq
        )
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{}", symbol)
    }
}

fn invalid(op: BinOpKind, left: &Value, right: &Value) -> MathError {
    InvalidBinaryOperation {
        op,
        left: left.typename(),
        right: right.typename(),
    }.into()
}

/// A numeric operand reduced to something that can be ordered.
enum Magnitude {
    Infinite(Sign),
    Exact(Rational),
    Approx(f64),
}

impl Magnitude {
    fn of(value: &Value) -> Result<Option<Self>, MathError> {
        if let Value::Symbolic(expr) = value {
            return Ok(Some(match (expr.as_infinity(), expr.as_rational()) {
                (Some(sign), _) => Magnitude::Infinite(sign),
                (None, Some(r)) => Magnitude::Exact(r),
                (None, None) => Magnitude::Approx(expr.to_double()?),
            }));
        }

        Ok(match value {
            Value::Infinity(sign) => Some(Magnitude::Infinite(*sign)),
            _ => value.to_rational()
                .map(Magnitude::Exact)
                .or_else(|| value.to_f64().map(Magnitude::Approx)),
        })
    }

    fn to_f64(&self) -> f64 {
        match self {
            Magnitude::Infinite(Sign::Positive) => f64::INFINITY,
            Magnitude::Infinite(Sign::Negative) => f64::NEG_INFINITY,
            Magnitude::Exact(r) => r.to_f64(),
            Magnitude::Approx(x) => *x,
        }
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Magnitude::Infinite(a), Magnitude::Infinite(b)) => Some(a.to_i8().cmp(&b.to_i8())),
            (Magnitude::Infinite(Sign::Positive), _) => Some(Ordering::Greater),
            (Magnitude::Infinite(Sign::Negative), _) => Some(Ordering::Less),
            (_, Magnitude::Infinite(_)) => other.compare(self).map(Ordering::reverse),
            (Magnitude::Exact(a), Magnitude::Exact(b)) => Some(a.cmp(b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

/// Evaluates a comparison between two values.
///
/// Strings and booleans can be compared with values of the same type. Numeric values are
/// compared exactly when both are exact, and approximately otherwise; a comparison involving NaN
/// is false, except for `!=`.
fn eval_comparison(op: BinOpKind, left: &Value, right: &Value) -> Result<Value, MathError> {
    let ordering = match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => match op {
            BinOpKind::Eq | BinOpKind::NotEq => Some(a.cmp(b)),
            _ => return Err(invalid(op, left, right)),
        },
        _ => match (Magnitude::of(left)?, Magnitude::of(right)?) {
            (Some(a), Some(b)) => a.compare(&b),
            _ => return Err(invalid(op, left, right)),
        },
    };

    Ok(Value::Boolean(match op {
        BinOpKind::Greater => ordering == Some(Ordering::Greater),
        BinOpKind::GreaterEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinOpKind::Less => ordering == Some(Ordering::Less),
        BinOpKind::LessEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinOpKind::Eq => ordering == Some(Ordering::Equal),
        BinOpKind::NotEq => ordering != Some(Ordering::Equal),
        BinOpKind::Exp | BinOpKind::Mul | BinOpKind::Div | BinOpKind::Mod
            | BinOpKind::Add | BinOpKind::Sub => return Err(invalid(op, left, right)),
    }))
}

/// Returns the sign of a finite numeric value. Zero and values of unknown sign, such as
/// expressions with free variables, count as positive.
fn sign_of(value: &Value) -> Sign {
    match value {
        Value::Symbolic(expr) => expr.sign().unwrap_or(Sign::Positive),
        _ if value.to_f64().map_or(false, |x| x < 0.0) => Sign::Negative,
        _ => Sign::Positive,
    }
}

/// Evaluates a binary expression where at least one operand is infinite.
///
/// `∞/∞` and `∞ % a` are undefined, `a/∞ = 0` and `a % ∞ = a`. Every other operation is
/// delegated to the simplifier, which resolves `∞ - ∞` as undefined and `0*∞` as `∞`.
fn eval_infinity_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, MathError> {
    match (op, &left, &right) {
        (BinOpKind::Div, Value::Infinity(_), Value::Infinity(_)) => {
            Err(MathError::undefined("∞ / ∞"))
        },
        (BinOpKind::Div, Value::Infinity(_), _) if right.is_zero() => Err(DivisionByZero.into()),
        (BinOpKind::Div, Value::Infinity(sign), _) => Ok(Value::Infinity(*sign * sign_of(&right))),
        (BinOpKind::Div, _, Value::Infinity(_)) => Ok(Value::Int(0)),
        (BinOpKind::Mod, Value::Infinity(_), _) => {
            Err(MathError::undefined(format!("{} % {}", left, right)))
        },
        (BinOpKind::Mod, _, Value::Infinity(_)) => Ok(left),
        _ => eval_symbolic_operands(op, left, right),
    }
}

/// Evaluates a binary expression by promoting both operands to symbolic expressions and
/// simplifying the result. `%` is evaluated numerically.
fn eval_symbolic_operands(
    op: BinOpKind,
    left: Value,
    right: Value,
) -> Result<Value, MathError> {
    let (Some(a), Some(b)) = (left.to_symbolic(), right.to_symbolic()) else {
        return Err(invalid(op, &left, &right));
    };

    let expr = match op {
        BinOpKind::Add => SymExpr::add(a, b),
        BinOpKind::Sub => SymExpr::subtract(a, b),
        BinOpKind::Mul => SymExpr::multiply(a, b),
        BinOpKind::Div => SymExpr::divide(a, b),
        BinOpKind::Exp => SymExpr::power(a, b),
        BinOpKind::Mod => return eval_float_operands(op, a.to_double()?, b.to_double()?),
        BinOpKind::Greater | BinOpKind::GreaterEq | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Eq | BinOpKind::NotEq => return eval_comparison(op, &left, &right),
    };
    Ok(Value::from_symbolic(expr.simplify()?))
}

/// Evaluates a binary expression with two float operands.
fn eval_float_operands(op: BinOpKind, left: f64, right: f64) -> Result<Value, MathError> {
    Ok(Value::Float(match op {
        BinOpKind::Exp => left.powf(right),
        BinOpKind::Mul => left * right,
        BinOpKind::Div | BinOpKind::Mod if right == 0.0 => Err(DivisionByZero)?,
        BinOpKind::Div => left / right,
        BinOpKind::Mod => left % right,
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Greater | BinOpKind::GreaterEq | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Eq | BinOpKind::NotEq => {
                return eval_comparison(op, &Value::Float(left), &Value::Float(right));
            },
    }))
}

/// Returns `a - b * trunc(a / b)`, which has the sign of `a`.
fn rational_modulo(left: &Rational, right: &Rational) -> Result<Rational, MathError> {
    let quotient = left.divide(right)?;
    let truncated = if quotient.is_negative() {
        -(-&quotient).floor()
    } else {
        quotient.floor()
    };
    Ok(left - &(right * &Rational::from(truncated)))
}

/// Evaluates a binary expression with two integer operands, at least one of which did not fit in
/// a machine integer.
fn eval_big_operands(
    op: BinOpKind,
    left: BigInteger,
    right: BigInteger,
) -> Result<Value, MathError> {
    Ok(match op {
        BinOpKind::Exp => Value::from_rational(left.power(&right)?),
        BinOpKind::Mul => Value::from(&left * &right),
        BinOpKind::Div if !right.is_zero() && left.is_divisible(&right) => {
            Value::from(left.divide(&right)?)
        },
        BinOpKind::Div => Value::from_rational(Rational::new(left, right)?),
        BinOpKind::Mod => Value::from(left.modulo(&right)?),
        BinOpKind::Add => Value::from(&left + &right),
        BinOpKind::Sub => Value::from(&left - &right),
        BinOpKind::Greater | BinOpKind::GreaterEq | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Eq | BinOpKind::NotEq => {
                return eval_comparison(op, &Value::BigInt(left), &Value::BigInt(right));
            },
    })
}

/// Evaluates a binary expression with two exact rational operands.
///
/// A power with a non-integer exponent may be irrational, so it is handed to the simplifier.
fn eval_rational_operands(
    op: BinOpKind,
    left: Rational,
    right: Rational,
) -> Result<Value, MathError> {
    Ok(match op {
        BinOpKind::Exp => match right.to_integer() {
            Some(exponent) => Value::from_rational(left.power(&exponent)?),
            None => return eval_symbolic_operands(
                op,
                Value::Rational(left),
                Value::Rational(right),
            ),
        },
        BinOpKind::Mul => Value::from_rational(&left * &right),
        BinOpKind::Div => Value::from_rational(left.divide(&right)?),
        BinOpKind::Mod => Value::from_rational(rational_modulo(&left, &right)?),
        BinOpKind::Add => Value::from_rational(&left + &right),
        BinOpKind::Sub => Value::from_rational(&left - &right),
        BinOpKind::Greater | BinOpKind::GreaterEq | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Eq | BinOpKind::NotEq => {
                return eval_comparison(op, &Value::Rational(left), &Value::Rational(right));
            },
    })
}

/// Evaluates a binary expression with two machine integer operands.
///
/// If the result does not fit in an [`i64`], or is not an integer at all (negative powers), the
/// operation is redone with [`BigInteger`]s.
fn eval_int_operands(op: BinOpKind, left: i64, right: i64) -> Result<Value, MathError> {
    let result = match op {
        BinOpKind::Exp if left == 0 && right == 0 => return Err(MathError::undefined("0^0")),
        BinOpKind::Exp => u32::try_from(right).ok().and_then(|exp| left.checked_pow(exp)),
        BinOpKind::Mul => left.checked_mul(right),
        BinOpKind::Div | BinOpKind::Mod if right == 0 => return Err(DivisionByZero.into()),
        BinOpKind::Div => match left.checked_rem(right) {
            Some(0) => left.checked_div(right),
            Some(_) => return Ok(Value::from_rational(Rational::from_ints(left, right)?)),
            None => None,
        },
        BinOpKind::Mod => left.checked_rem(right),
        BinOpKind::Add => left.checked_add(right),
        BinOpKind::Sub => left.checked_sub(right),
        BinOpKind::Greater | BinOpKind::GreaterEq | BinOpKind::Less | BinOpKind::LessEq
            | BinOpKind::Eq | BinOpKind::NotEq => {
                return eval_comparison(op, &Value::Int(left), &Value::Int(right));
            },
    };

    match result {
        Some(n) => Ok(Value::Int(n)),
        None => {
            tracing::debug!(%op, left, right, "promoting machine integers to big integers");
            eval_big_operands(op, BigInteger::from_int(left), BigInteger::from_int(right))
        },
    }
}

/// Evaluates the binary expression given the operator, and the left and right operands.
pub fn eval_operands(op: BinOpKind, left: Value, right: Value) -> Result<Value, MathError> {
    if op.is_comparison() {
        return eval_comparison(op, &left, &right);
    }

    let numeric = left.is_numeric() && right.is_numeric();
    if numeric && (left.is_infinity() || right.is_infinity()) {
        return eval_infinity_operands(op, left, right);
    }

    if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) {
        return match op {
            BinOpKind::Add => Ok(Value::String(format!("{}{}", left, right))),
            _ => Err(invalid(op, &left, &right)),
        };
    }

    if !numeric {
        return Err(invalid(op, &left, &right));
    }

    if matches!(left, Value::Symbolic(_) | Value::Irrational(_))
        || matches!(right, Value::Symbolic(_) | Value::Irrational(_))
    {
        return eval_symbolic_operands(op, left, right);
    }

    if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) {
        let (Some(a), Some(b)) = (left.to_f64(), right.to_f64()) else {
            return Err(invalid(op, &left, &right));
        };
        return eval_float_operands(op, a, b);
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_operands(op, a, b),
        (left, right) if left.is_integral() && right.is_integral() => {
            match (left.to_integer(), right.to_integer()) {
                (Some(a), Some(b)) => eval_big_operands(op, a, b),
                _ => Err(invalid(op, &left, &right)),
            }
        },
        (left, right) => match (left.to_rational(), right.to_rational()) {
            (Some(a), Some(b)) => eval_rational_operands(op, a, b),
            _ => Err(invalid(op, &left, &right)),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::kind::UndefinedOperation,
        number::Irrational,
    };
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    fn ratio(n: i64, d: i64) -> Value {
        Value::from(Rational::from_ints(n, d).unwrap())
    }

    fn big(s: &str) -> Value {
        Value::BigInt(BigInteger::from_string(s).unwrap())
    }

    fn eval(op: BinOpKind, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        eval_operands(op, left.into(), right.into()).unwrap()
    }

    #[test]
    fn exact_rationals() {
        assert_eq!(eval(BinOpKind::Add, ratio(1, 3), ratio(1, 6)), ratio(1, 2));
        assert_eq!(eval(BinOpKind::Mul, ratio(3, 2), 4), Value::Int(6));
        assert_eq!(eval(BinOpKind::Sub, ratio(1, 2), ratio(1, 2)), Value::Int(0));
        assert_eq!(eval(BinOpKind::Mod, ratio(7, 2), 2), ratio(3, 2));
        assert_eq!(eval(BinOpKind::Exp, ratio(2, 3), -2), ratio(9, 4));
    }

    #[test]
    fn division_is_exact() {
        assert_eq!(eval(BinOpKind::Div, 6, 3), Value::Int(2));
        assert_eq!(eval(BinOpKind::Div, 7, 2), ratio(7, 2));
        assert_eq!(eval(BinOpKind::Div, -7, 14), ratio(-1, 2));

        let n = big("123456789012345678901234567890");
        assert_eq!(eval(BinOpKind::Div, n.clone(), 10), big("12345678901234567890123456789"));
        assert!(matches!(eval(BinOpKind::Div, n, 11), Value::Rational(_)));
    }

    #[test]
    fn division_by_zero() {
        let zero = Rational::from_ints(0, 1).unwrap();
        assert_eq!(
            eval_operands(BinOpKind::Div, ratio(1, 2), Value::Rational(zero)),
            Err(MathError::from(DivisionByZero)),
        );
        assert_eq!(
            eval_operands(BinOpKind::Div, Value::Int(1), Value::Int(0)),
            Err(MathError::from(DivisionByZero)),
        );
        assert_eq!(
            eval_operands(BinOpKind::Mod, Value::Float(1.0), Value::Int(0)),
            Err(MathError::from(DivisionByZero)),
        );
    }

    #[test]
    fn overflow_promotes() {
        assert_eq!(eval(BinOpKind::Add, i64::MAX, 1), big("9223372036854775808"));
        assert_eq!(eval(BinOpKind::Mul, i64::MIN, -1), big("9223372036854775808"));
        assert_eq!(eval(BinOpKind::Div, i64::MIN, -1), big("9223372036854775808"));
        assert_eq!(eval(BinOpKind::Exp, 2, 100), big("1267650600228229401496703205376"));

        // and demotes again
        assert_eq!(eval(BinOpKind::Sub, big("9223372036854775808"), 1), Value::Int(i64::MAX));
    }

    #[test]
    fn big_integers() {
        let n = big("123456789012345678901234567890");
        assert_eq!(eval(BinOpKind::Mul, n, 2), big("246913578024691357802469135780"));
        assert_eq!(eval(BinOpKind::Exp, Value::BigInt(BigInteger::from_int(5)), -1), ratio(1, 5));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(eval(BinOpKind::Exp, 2, 10), Value::Int(1024));
        assert_eq!(eval(BinOpKind::Exp, 2, -2), ratio(1, 4));
        assert_eq!(
            eval_operands(BinOpKind::Exp, Value::Int(0), Value::Int(0)),
            Err(MathError::undefined("0^0")),
        );
        assert_eq!(
            eval_operands(BinOpKind::Exp, Value::Int(0), Value::Int(-1)),
            Err(MathError::from(DivisionByZero)),
        );
    }

    #[test]
    fn fractional_powers_are_symbolic() {
        assert_eq!(eval(BinOpKind::Exp, 4, ratio(1, 2)), Value::Int(2));
        assert_eq!(eval(BinOpKind::Exp, 8, ratio(2, 3)), Value::Int(4));

        let root = eval(BinOpKind::Exp, 2, ratio(1, 2));
        assert!(matches!(root, Value::Symbolic(_)));
        assert_eq!(root.to_string(), "√2");
    }

    #[test]
    fn irrationals() {
        let root2 = || Value::from(Irrational::sqrt(&BigInteger::from_int(2)).unwrap());
        assert_eq!(eval(BinOpKind::Mul, root2(), root2()), Value::Int(2));
        assert_eq!(eval(BinOpKind::Add, root2(), root2()).to_string(), "2√2");
        assert_eq!(eval(BinOpKind::Sub, root2(), root2()), Value::Int(0));

        // small floats keep their value when promoted
        assert_eq!(eval(BinOpKind::Mul, 1e-7, root2()).to_string(), "(1/10000000)√2");
        assert_eq!(eval(BinOpKind::Div, root2(), 1e-7).to_string(), "10000000√2");
    }

    #[test]
    fn symbolic() {
        let x = Value::Symbolic(SymExpr::variable("x"));
        assert_eq!(eval(BinOpKind::Add, x.clone(), 1).to_string(), "x+1");
        assert_eq!(eval(BinOpKind::Mul, x.clone(), x.clone()).to_string(), "x^2");
        assert_eq!(eval(BinOpKind::Sub, x.clone(), x.clone()), Value::Int(0));
        assert!(matches!(
            eval_operands(BinOpKind::Mod, x, Value::Int(2)),
            Err(MathError::UnboundVariable(_)),
        ));
    }

    #[test]
    fn floats() {
        assert_eq!(eval(BinOpKind::Add, 1.5, 1), Value::Float(2.5));
        assert_eq!(eval(BinOpKind::Mul, ratio(1, 4), 2.0), Value::Float(0.5));

        let Value::Float(x) = eval(BinOpKind::Exp, 2.0, ratio(1, 2)) else {
            panic!("expected a float");
        };
        assert_float_absolute_eq!(x, std::f64::consts::SQRT_2, 1e-12);
    }

    #[test]
    fn infinities() {
        let inf = Value::Infinity(Sign::Positive);
        let neg_inf = Value::Infinity(Sign::Negative);

        assert_eq!(eval(BinOpKind::Add, inf.clone(), 5), inf);
        assert_eq!(eval(BinOpKind::Sub, 5, inf.clone()), neg_inf);
        assert_eq!(eval(BinOpKind::Mul, neg_inf.clone(), -2), inf);
        assert_eq!(eval(BinOpKind::Mul, inf.clone(), 0), inf);
        assert_eq!(eval(BinOpKind::Div, neg_inf.clone(), ratio(1, 2)), neg_inf);
        assert_eq!(eval(BinOpKind::Div, 1, inf.clone()), Value::Int(0));
        assert_eq!(eval(BinOpKind::Mod, 3, inf.clone()), Value::Int(3));

        let neg_root2 = Irrational::Sqrt {
            coefficient: Rational::from(-1),
            radicand: BigInteger::from_int(2),
        };
        assert_eq!(eval(BinOpKind::Mul, neg_root2, inf.clone()), neg_inf);

        // 1 - √2 is negative
        let expr = SymExpr::subtract(SymExpr::number(1), SymExpr::sqrt(SymExpr::number(2)));
        assert_eq!(eval(BinOpKind::Div, inf.clone(), Value::Symbolic(expr)), neg_inf);

        assert_eq!(eval(BinOpKind::Exp, neg_inf.clone(), 2), inf);
        assert_eq!(eval(BinOpKind::Exp, 2, neg_inf.clone()), Value::Int(0));

        assert_eq!(
            eval_operands(BinOpKind::Sub, inf.clone(), inf.clone()),
            Err(MathError::undefined("∞ - ∞")),
        );
        assert_eq!(
            eval_operands(BinOpKind::Div, inf.clone(), neg_inf.clone()),
            Err(MathError::undefined("∞ / ∞")),
        );
        assert_eq!(
            eval_operands(BinOpKind::Mod, inf, Value::Int(2)),
            Err(MathError::from(UndefinedOperation { expr: "∞ % 2".to_string() })),
        );
    }

    #[test]
    fn strings() {
        assert_eq!(eval(BinOpKind::Add, "x = ", 2), Value::from("x = 2"));
        assert_eq!(eval(BinOpKind::Add, ratio(1, 2), "!"), Value::from("1/2!"));
        assert_eq!(
            eval_operands(BinOpKind::Sub, Value::from("a"), Value::Int(1)),
            Err(MathError::from(InvalidBinaryOperation {
                op: BinOpKind::Sub,
                left: "String",
                right: "Int",
            })),
        );
    }

    #[test]
    fn booleans() {
        assert_eq!(eval(BinOpKind::Eq, true, true), Value::Boolean(true));
        assert_eq!(
            eval_operands(BinOpKind::Add, Value::Boolean(true), Value::Int(1)),
            Err(MathError::from(InvalidBinaryOperation {
                op: BinOpKind::Add,
                left: "Boolean",
                right: "Int",
            })),
        );
    }

    #[test]
    fn comparisons() {
        assert_eq!(eval(BinOpKind::Less, ratio(1, 3), 1), Value::Boolean(true));
        assert_eq!(eval(BinOpKind::Eq, ratio(1, 2), 0.5), Value::Boolean(true));
        assert_eq!(eval(BinOpKind::NotEq, big("10000000000000000000"), 1), Value::Boolean(true));
        assert_eq!(
            eval(BinOpKind::Less, Value::Infinity(Sign::Negative), -1000),
            Value::Boolean(true),
        );
        assert_eq!(
            eval(BinOpKind::GreaterEq, Value::Infinity(Sign::Positive), Value::Infinity(Sign::Positive)),
            Value::Boolean(true),
        );
        assert_eq!(eval(BinOpKind::LessEq, f64::NAN, 1), Value::Boolean(false));
        assert_eq!(eval(BinOpKind::NotEq, f64::NAN, 1), Value::Boolean(true));

        let root2 = Value::from(Irrational::sqrt(&BigInteger::from_int(2)).unwrap());
        assert_eq!(eval(BinOpKind::Greater, root2, 1.41), Value::Boolean(true));
        assert_eq!(eval(BinOpKind::Less, "abc", "abd"), Value::Boolean(true));
    }
}
