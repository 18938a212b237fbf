use crate::{
    number::{BigInteger, Irrational, Number, Rational},
    symbolic::expr::{Sign, SymExpr},
};
use std::{fmt, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A member of the numeric tower, or one of the few non-numeric values that binary operators can
/// be applied to.
///
/// Exact results are always stored in their smallest representation: an integer that fits in an
/// [`i64`] is an `Int`, and a [`Rational`] with a denominator of one is an integer. Use
/// [`Value::from_number`] and [`Value::from_symbolic`] to get this normalization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A machine integer.
    Int(i64),

    /// An integer too large for a machine integer.
    BigInt(BigInteger),

    /// An exact fraction that is not an integer.
    Rational(Rational),

    /// A floating-point value.
    Float(f64),

    /// An exact irrational value, such as `3√2` or `π/2`.
    Irrational(Irrational),

    /// A symbolic expression that does not reduce to a number.
    Symbolic(Rc<SymExpr>),

    /// A string.
    String(String),

    /// Positive or negative infinity.
    Infinity(Sign),

    /// A boolean.
    Boolean(bool),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::BigInt(_) => "BigInt",
            Value::Rational(_) => "Rational",
            Value::Float(_) => "Float",
            Value::Irrational(_) => "Irrational",
            Value::Symbolic(_) => "Symbolic",
            Value::String(_) => "String",
            Value::Infinity(_) => "Infinity",
            Value::Boolean(_) => "Boolean",
        }
    }

    /// Creates the value of an exact number, in its smallest representation.
    pub fn from_number(n: Number) -> Self {
        match n.canonical() {
            Number::Int(n) => Value::Int(n),
            Number::Big(n) => Value::BigInt(n),
            Number::Rational(r) => Value::Rational(r),
        }
    }

    /// Creates the value of an exact fraction, in its smallest representation.
    pub fn from_rational(r: Rational) -> Self {
        Self::from_number(Number::from_rational(r))
    }

    /// Creates a value from a simplified symbolic expression. Numbers and infinities become the
    /// corresponding members of the tower; anything else stays symbolic.
    pub fn from_symbolic(expr: Rc<SymExpr>) -> Self {
        match &*expr {
            SymExpr::Number(n) => Self::from_number(n.clone()),
            SymExpr::Infinity(sign) => Value::Infinity(*sign),
            _ => Value::Symbolic(expr),
        }
    }

    /// Returns true if the value is a member of the numeric tower, including infinity.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::String(_) | Value::Boolean(_))
    }

    /// Returns true if the value is an integer.
    pub fn is_integral(&self) -> bool {
        matches!(self, Value::Int(_) | Value::BigInt(_))
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Value::Infinity(_))
    }

    /// Returns true if the value is exactly zero. Floats equal to zero count.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::BigInt(n) => n.is_zero(),
            Value::Rational(r) => r.is_zero(),
            Value::Float(f) => *f == 0.0,
            Value::Symbolic(expr) => expr.is_zero(),
            _ => false,
        }
    }

    /// Returns the value as a [`BigInteger`] if it is an integer.
    pub fn to_integer(&self) -> Option<BigInteger> {
        match self {
            Value::Int(n) => Some(BigInteger::from_int(*n)),
            Value::BigInt(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Returns the value as a [`Rational`] if it is exact and rational.
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Value::Int(n) => Some(Rational::from(*n)),
            Value::BigInt(n) => Some(Rational::from(n.clone())),
            Value::Rational(r) => Some(r.clone()),
            _ => None,
        }
    }

    /// Approximates a finite numeric value as an [`f64`]. Symbolic values, infinities, and
    /// non-numeric values return [`None`].
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::BigInt(n) => Some(n.to_f64()),
            Value::Rational(r) => Some(r.to_f64()),
            Value::Float(f) => Some(*f),
            Value::Irrational(i) => Some(i.to_f64()),
            _ => None,
        }
    }

    /// Converts a numeric value to a symbolic expression.
    ///
    /// Floats are converted to the closest short fraction. Returns [`None`] for strings, booleans,
    /// and NaN.
    pub fn to_symbolic(&self) -> Option<Rc<SymExpr>> {
        Some(match self {
            Value::Int(n) => SymExpr::number(*n),
            Value::BigInt(n) => SymExpr::number(n.clone()),
            Value::Rational(r) => SymExpr::number(Number::from_rational(r.clone())),
            Value::Float(f) if f.is_infinite() => SymExpr::infinity(if *f > 0.0 {
                Sign::Positive
            } else {
                Sign::Negative
            }),
            Value::Float(f) => SymExpr::number(Number::from_rational(Rational::from_double(*f).ok()?)),
            Value::Irrational(i) => i.to_symbolic(),
            Value::Symbolic(expr) => Rc::clone(expr),
            Value::Infinity(sign) => SymExpr::infinity(*sign),
            Value::String(_) | Value::Boolean(_) => return None,
        })
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<BigInteger> for Value {
    fn from(n: BigInteger) -> Self {
        Self::from_number(Number::from(n))
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::from_rational(r)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Irrational> for Value {
    fn from(i: Irrational) -> Self {
        Value::Irrational(i)
    }
}

impl From<Rc<SymExpr>> for Value {
    fn from(expr: Rc<SymExpr>) -> Self {
        Self::from_symbolic(expr)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Float(x) => write!(f, "{}", x),
            Value::Irrational(i) => write!(f, "{}", i),
            Value::Symbolic(expr) => write!(f, "{}", expr),
            Value::String(s) => write!(f, "{}", s),
            Value::Infinity(Sign::Positive) => write!(f, "∞"),
            Value::Infinity(Sign::Negative) => write!(f, "-∞"),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn smallest_representation() {
        assert_eq!(Value::from(BigInteger::from_int(7)), Value::Int(7));
        assert_eq!(Value::from(Rational::from_ints(8, 4).unwrap()), Value::Int(2));

        let big = BigInteger::from_string("123456789012345678901234567890").unwrap();
        assert!(matches!(Value::from(big), Value::BigInt(_)));

        let expr = SymExpr::multiply(SymExpr::number(3), SymExpr::variable("x"));
        assert!(matches!(Value::from(Rc::clone(&expr)), Value::Symbolic(_)));
        assert_eq!(Value::from(SymExpr::infinity(Sign::Negative)), Value::Infinity(Sign::Negative));
    }

    #[test]
    fn to_symbolic() {
        assert_eq!(Value::Float(0.25).to_symbolic().unwrap().to_string(), "1/4");
        assert_eq!(Value::Float(f64::NAN).to_symbolic(), None);
        assert_eq!(Value::from("abc").to_symbolic(), None);

        let root = Irrational::sqrt(&BigInteger::from_int(12)).unwrap();
        assert_eq!(Value::from(root).to_symbolic().unwrap().to_string(), "2√3");
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from(Rational::from_ints(-1, 3).unwrap()).to_string(), "-1/3");
        assert_eq!(Value::Infinity(Sign::Negative).to_string(), "-∞");
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }
}
