use crate::{
    consts::{E, PI},
    error::{kind::NegativeRadicand, MathError},
    symbolic::{simplify::rules::root::square_factor, SymExpr},
};
use std::{fmt, rc::Rc};
use super::{BigInteger, Number, Rational};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact irrational member of the numeric tower: a rational multiple of `√n`, `π`, or `e`.
///
/// These are produced by builtin functions such as `sqrt`, `pi`, and `e`, and participate in
/// arithmetic by converting to a [`SymExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Irrational {
    /// `coefficient * √radicand`.
    Sqrt {
        coefficient: Rational,
        radicand: BigInteger,
    },

    /// A rational multiple of `π`.
    Pi(Rational),

    /// A rational multiple of `e`.
    E(Rational),
}

impl Irrational {
    /// Creates the square root of an integer, moving its largest square factor into the
    /// coefficient. The radicand is one if `n` is a perfect square.
    pub fn sqrt(n: &BigInteger) -> Result<Self, MathError> {
        if n.is_negative() {
            return Err(NegativeRadicand { value: n.to_string() }.into());
        }

        let (factor, radicand) = square_factor(n);
        Ok(Self::Sqrt {
            coefficient: Rational::from(factor),
            radicand,
        })
    }

    /// Converts the value to a symbolic expression.
    pub fn to_symbolic(&self) -> Rc<SymExpr> {
        let (coefficient, value) = match self {
            Self::Sqrt { coefficient, radicand } => {
                if radicand.is_one() {
                    return SymExpr::number(Number::from_rational(coefficient.clone()));
                }
                (coefficient, SymExpr::sqrt(SymExpr::number(radicand.clone())))
            },
            Self::Pi(coefficient) => (coefficient, SymExpr::variable("π")),
            Self::E(coefficient) => (coefficient, SymExpr::variable("e")),
        };

        if coefficient.is_zero() {
            SymExpr::number(0)
        } else if coefficient.is_one() {
            value
        } else {
            SymExpr::multiply(SymExpr::number(Number::from_rational(coefficient.clone())), value)
        }
    }

    /// Approximates the value as an [`f64`].
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Sqrt { coefficient, radicand } => coefficient.to_f64() * radicand.to_f64().sqrt(),
            Self::Pi(coefficient) => (coefficient.to_float() * &*PI).to_f64(),
            Self::E(coefficient) => (coefficient.to_float() * &*E).to_f64(),
        }
    }
}

impl fmt::Display for Irrational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_symbolic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_extracts_square_factor() {
        let value = Irrational::sqrt(&BigInteger::from_int(50)).unwrap();
        assert_eq!(
            value,
            Irrational::Sqrt {
                coefficient: Rational::from(5),
                radicand: BigInteger::from_int(2),
            },
        );
        assert_eq!(value.to_string(), "5√2");
        assert_eq!(Irrational::sqrt(&BigInteger::from_int(49)).unwrap().to_string(), "7");
    }

    #[test]
    fn sqrt_of_negative() {
        assert!(Irrational::sqrt(&BigInteger::from_int(-2)).is_err());
    }

    #[test]
    fn constants() {
        let half_pi = Irrational::Pi(Rational::from_ints(1, 2).unwrap());
        assert_eq!(half_pi.to_string(), "(1/2)*π");
        assert!((half_pi.to_f64() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(Irrational::E(Rational::one()).to_string(), "e");
    }
}
