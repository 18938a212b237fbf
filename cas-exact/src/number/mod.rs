//! The exact members of the numeric tower.
//!
//! [`BigInteger`] and [`Rational`] are arbitrary precision value types. [`Number`] is the numeric
//! payload of a [`SymExpr::Number`](crate::symbolic::SymExpr::Number) node, keeping machine
//! integers unboxed where possible. [`Irrational`] represents exact multiples of `√n`, `π`, and
//! `e`.

pub mod integer;
pub mod irrational;
pub mod rational;

pub use integer::BigInteger;
pub use irrational::Irrational;
pub use rational::Rational;

use rug::Float;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact number: a machine integer, a big integer, or a rational.
///
/// Equality and hashing are by mathematical value, so `Int(2)`, `Big(2)` and `Rational(2/1)` are
/// all equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Int(i64),
    Big(BigInteger),
    Rational(Rational),
}

impl Number {
    /// Creates the canonical [`Number`] for a [`Rational`]: an `Int` if the value is an integer
    /// that fits in an [`i64`], otherwise a `Big` if it is an integer, otherwise a `Rational`.
    pub fn from_rational(r: Rational) -> Self {
        match r.to_integer() {
            Some(n) => Self::from(n),
            None => Self::Rational(r),
        }
    }

    /// Returns the canonical form of this number.
    pub fn canonical(self) -> Self {
        match self {
            Self::Int(n) => Self::Int(n),
            Self::Big(n) => Self::from(n),
            Self::Rational(r) => Self::from_rational(r),
        }
    }

    /// Converts the number to a [`Rational`].
    pub fn to_rational(&self) -> Rational {
        match self {
            Self::Int(n) => Rational::from(*n),
            Self::Big(n) => Rational::from(n.clone()),
            Self::Rational(r) => r.clone(),
        }
    }

    /// Returns the value as a [`BigInteger`] if it is an integer.
    pub fn to_integer(&self) -> Option<BigInteger> {
        match self {
            Self::Int(n) => Some(BigInteger::from_int(*n)),
            Self::Big(n) => Some(n.clone()),
            Self::Rational(r) => r.to_integer(),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => *n == 0,
            Self::Big(n) => n.is_zero(),
            Self::Rational(r) => r.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Self::Int(n) => *n == 1,
            Self::Big(n) => n.is_one(),
            Self::Rational(r) => r.is_one(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(n) => *n < 0,
            Self::Big(n) => n.is_negative(),
            Self::Rational(r) => r.is_negative(),
        }
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Self::Int(_) | Self::Big(_) => true,
            Self::Rational(r) => r.is_integer(),
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int(n) => *n as f64,
            Self::Big(n) => n.to_f64(),
            Self::Rational(r) => r.to_f64(),
        }
    }

    pub fn to_float(&self) -> Float {
        self.to_rational().to_float()
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, rhs) {
            if let Some(sum) = a.checked_add(*b) {
                return Number::Int(sum);
            }
        }
        Number::from_rational(&self.to_rational() + &rhs.to_rational())
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, rhs) {
            if let Some(product) = a.checked_mul(*b) {
                return Number::Int(product);
            }
        }
        Number::from_rational(&self.to_rational() * &rhs.to_rational())
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(n) => match n.checked_neg() {
                Some(n) => Number::Int(n),
                None => Number::from(-BigInteger::from_int(*n)),
            },
            Number::Big(n) => Number::from(-n),
            Number::Rational(r) => Number::Rational(-r),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.to_rational() == other.to_rational(),
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // integers hash the same regardless of representation
        match self.to_integer() {
            Some(n) => n.hash(state),
            None => self.to_rational().hash(state),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

/// Converts to `Int` when the value fits in an [`i64`].
impl From<BigInteger> for Number {
    fn from(n: BigInteger) -> Self {
        match n.to_i64() {
            Some(n) => Self::Int(n),
            None => Self::Big(n),
        }
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Big(n) => write!(f, "{}", n),
            Self::Rational(r) => write!(f, "{}", r),
        }
    }
}
