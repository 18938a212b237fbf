use crate::{
    approx::approximate_rational,
    error::{
        kind::{DivisionByZero, ExponentTooLarge},
        MathError,
    },
    primitive::float,
};
use rug::{ops::Pow, Float, Integer};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
};
use super::integer::BigInteger;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest exponent [`Rational::power`] will compute for a base other than `0` and `±1`.
pub const MAX_EXPONENT: u32 = 1 << 24;

/// An exact fraction in lowest terms with a strictly positive denominator.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational(rug::Rational);

impl Rational {
    /// Creates a [`Rational`] from a numerator and denominator, reducing it to lowest terms.
    ///
    /// Returns [`DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Self, MathError> {
        if denominator.is_zero() {
            return Err(MathError::from(DivisionByZero));
        }
        Ok(Self(rug::Rational::from((numerator.into_rug(), denominator.into_rug()))))
    }

    /// Creates a [`Rational`] from a machine numerator and denominator.
    pub fn from_ints(numerator: i64, denominator: i64) -> Result<Self, MathError> {
        Self::new(BigInteger::from_int(numerator), BigInteger::from_int(denominator))
    }

    pub fn zero() -> Self {
        Self(rug::Rational::new())
    }

    pub fn one() -> Self {
        Self(rug::Rational::from(1))
    }

    pub fn one_half() -> Self {
        Self(rug::Rational::from((1, 2)))
    }

    /// Reconstructs a [`Rational`] from a float. This is lossy for floats that are not short
    /// fractions; see [`approximate_rational`].
    ///
    /// Returns [`UndefinedOperation`](crate::error::kind::UndefinedOperation) if the float is NaN
    /// or infinite.
    pub fn from_double(x: f64) -> Result<Self, MathError> {
        approximate_rational(x)
            .map(Self)
            .ok_or_else(|| MathError::undefined(format!("exact value of {}", x)))
    }

    /// Returns a reference to the underlying [`rug::Rational`].
    pub fn as_rug(&self) -> &rug::Rational {
        &self.0
    }

    pub fn numerator(&self) -> BigInteger {
        BigInteger::from(self.0.numer().clone())
    }

    pub fn denominator(&self) -> BigInteger {
        BigInteger::from(self.0.denom().clone())
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn is_one(&self) -> bool {
        *self.0.numer() == 1 && *self.0.denom() == 1
    }

    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }

    /// Returns the value as a [`BigInteger`] if the denominator is one.
    pub fn to_integer(&self) -> Option<BigInteger> {
        self.is_integer().then(|| self.numerator())
    }

    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the greatest integer less than or equal to this value.
    pub fn floor(&self) -> BigInteger {
        let (numer, denom) = (self.0.numer(), self.0.denom());
        let (quotient, remainder) = (Integer::from(numer / denom), Integer::from(numer % denom));
        if remainder.cmp0() == Ordering::Less {
            BigInteger::from(quotient - 1)
        } else {
            BigInteger::from(quotient)
        }
    }

    /// Returns `1 / self`, or [`DivisionByZero`] if this value is zero.
    pub fn reciprocal(&self) -> Result<Self, MathError> {
        if self.is_zero() {
            return Err(MathError::from(DivisionByZero));
        }
        Ok(Self(self.0.clone().recip()))
    }

    /// Divides, returning [`DivisionByZero`] if the divisor is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, MathError> {
        Ok(self * &rhs.reciprocal()?)
    }

    /// Raises the value to an integer power.
    ///
    /// A negative exponent raises the reciprocal instead. `0^0` is an
    /// [`UndefinedOperation`](crate::error::kind::UndefinedOperation), and a negative power of zero
    /// is a [`DivisionByZero`]. Exponents larger than [`MAX_EXPONENT`] in magnitude are
    /// [`ExponentTooLarge`] unless the base is `0` or `±1`.
    pub fn power(&self, exponent: &BigInteger) -> Result<Self, MathError> {
        if exponent.is_zero() {
            if self.is_zero() {
                return Err(MathError::undefined("0^0"));
            }
            return Ok(Self::one());
        }

        if exponent.is_negative() {
            return self.reciprocal()?.power(&-exponent);
        }

        if self.is_zero() || self.is_one() {
            return Ok(self.clone());
        }

        if *self.0.numer() == -1 && self.is_integer() {
            return Ok(if exponent.is_even() { Self::one() } else { self.clone() });
        }

        let exponent = exponent.to_u32()
            .filter(|&n| n <= MAX_EXPONENT)
            .ok_or(ExponentTooLarge)?;
        let numer = self.0.numer().clone().pow(exponent);
        let denom = self.0.denom().clone().pow(exponent);
        Ok(Self(rug::Rational::from((numer, denom))))
    }

    /// Converts to the nearest [`f64`].
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Converts to a [`Float`] with the default precision.
    pub fn to_float(&self) -> Float {
        float(&self.0)
    }
}

macro_rules! impl_binop {
    ($($trait:ident $method:ident),*) => {
        $(
            impl $trait<&Rational> for &Rational {
                type Output = Rational;

                fn $method(self, rhs: &Rational) -> Rational {
                    Rational(self.0.clone().$method(&rhs.0))
                }
            }

            impl $trait for Rational {
                type Output = Rational;

                fn $method(self, rhs: Rational) -> Rational {
                    Rational(self.0.$method(rhs.0))
                }
            }
        )*
    };
}

impl_binop!(Add add, Sub sub, Mul mul);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0.clone())
    }
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Self(rug::Rational::from(n.into_rug()))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self(rug::Rational::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self(rug::Rational::from(n))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
