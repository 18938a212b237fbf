use crate::error::{
    kind::{DivisionByZero, ParseError},
    MathError,
};
use rug::{ops::Pow, Integer};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};
use super::rational::Rational;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arbitrary precision signed integer.
///
/// Every operation returns a new value. Operations that can fail, such as division by zero,
/// return a [`MathError`] instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigInteger(Integer);

impl BigInteger {
    /// Creates a [`BigInteger`] from a machine integer.
    pub fn from_int(n: i64) -> Self {
        Self(Integer::from(n))
    }

    /// Parses a decimal integer: an optional `+` or `-` sign followed by one or more ASCII digits.
    ///
    /// Anything else, including an empty string or embedded whitespace, is a [`ParseError`].
    pub fn from_string(s: &str) -> Result<Self, MathError> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError { text: s.to_string() }.into());
        }

        let magnitude = Integer::from_str_radix(digits, 10)
            .map_err(|_| ParseError { text: s.to_string() })?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Returns a reference to the underlying [`Integer`].
    pub fn as_rug(&self) -> &Integer {
        &self.0
    }

    /// Consumes the [`BigInteger`], returning the underlying [`Integer`].
    pub fn into_rug(self) -> Integer {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    pub fn is_even(&self) -> bool {
        self.0.is_even()
    }

    /// Returns the sign of the integer as `-1`, `0`, or `1`.
    pub fn signum(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Converts to a machine integer, if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Converts to a [`u32`], if the value fits.
    pub fn to_u32(&self) -> Option<u32> {
        self.0.to_u32()
    }

    /// Converts to the nearest [`f64`].
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Divides, truncating the quotient toward zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, MathError> {
        if rhs.is_zero() {
            return Err(MathError::from(DivisionByZero));
        }
        Ok(Self(Integer::from(&self.0 / &rhs.0)))
    }

    /// Computes the remainder of truncating division, which has the sign of the dividend.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, MathError> {
        if rhs.is_zero() {
            return Err(MathError::from(DivisionByZero));
        }
        Ok(Self(Integer::from(&self.0 % &rhs.0)))
    }

    /// Returns true if `rhs` divides this integer exactly. Zero divides only zero.
    pub fn is_divisible(&self, rhs: &Self) -> bool {
        self.0.is_divisible(&rhs.0)
    }

    /// Raises the integer to the given power.
    ///
    /// The result is a [`Rational`], since a negative exponent produces the reciprocal of the
    /// positive power; non-negative exponents always produce an integral result. See
    /// [`Rational::power`] for the error conditions.
    pub fn power(&self, exponent: &Self) -> Result<Rational, MathError> {
        Rational::from(self.clone()).power(exponent)
    }

    /// Raises the integer to a small non-negative power.
    pub fn pow(&self, exponent: u32) -> Self {
        Self(self.0.clone().pow(exponent))
    }

    /// Returns true if the integer is the square of an integer. Negative integers never are.
    pub fn is_perfect_square(&self) -> bool {
        self.0.is_perfect_square()
    }

    /// Returns the exact square root, or [`None`] if the integer is not a perfect square.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_perfect_square() {
            Some(Self(self.0.clone().sqrt()))
        } else {
            None
        }
    }

    /// Returns the exact `n`th root of a non-negative integer, or [`None`] if there is none.
    pub fn root(&self, n: u32) -> Option<Self> {
        if n == 0 || self.is_negative() {
            return None;
        }
        let root = self.0.clone().root(n);
        if root.clone().pow(n) == self.0 {
            Some(Self(root))
        } else {
            None
        }
    }

    /// Returns the greatest common divisor of the absolute values of `a` and `b`.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        Self(a.0.clone().gcd(&b.0))
    }

    /// Returns the least common multiple of the absolute values of `a` and `b`.
    pub fn lcm(a: &Self, b: &Self) -> Self {
        Self(a.0.clone().lcm(&b.0))
    }

    /// Computes `n!`.
    pub fn factorial(n: u32) -> Self {
        Self(Integer::from(Integer::factorial(n)))
    }
}

macro_rules! impl_binop {
    ($($trait:ident $method:ident),*) => {
        $(
            impl $trait<&BigInteger> for &BigInteger {
                type Output = BigInteger;

                fn $method(self, rhs: &BigInteger) -> BigInteger {
                    BigInteger(Integer::from($trait::$method(&self.0, &rhs.0)))
                }
            }

            impl $trait for BigInteger {
                type Output = BigInteger;

                fn $method(self, rhs: BigInteger) -> BigInteger {
                    BigInteger(self.0.$method(rhs.0))
                }
            }
        )*
    };
}

impl_binop!(Add add, Sub sub, Mul mul);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger(-self.0)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger(-self.0.clone())
    }
}

impl From<i64> for BigInteger {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for BigInteger {
    fn from(n: i32) -> Self {
        Self(Integer::from(n))
    }
}

impl From<u32> for BigInteger {
    fn from(n: u32) -> Self {
        Self(Integer::from(n))
    }
}

impl From<Integer> for BigInteger {
    fn from(n: Integer) -> Self {
        Self(n)
    }
}

impl FromStr for BigInteger {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
