//! Best-effort reconstruction of exact [`Rational`]s from machine floats.

use rug::{Integer, Rational};
use std::cmp::Ordering;
use super::primitive::float;

/// Denominators tried before falling back to the continued fraction expansion.
const COMMON_DENOMINATORS: std::ops::RangeInclusive<u32> = 2..=12;

/// How close a common fraction must be to the input to be accepted.
const COMMON_TOLERANCE: f64 = 1e-6;

/// The maximum number of continued fraction terms to expand.
pub const MAX_TERMS: usize = 20;

/// Convergents with a denominator above this are rejected.
pub const MAX_DENOMINATOR: u64 = 1_000_000_000_000;

/// Computes the [`Rational`] from the continued fraction form of a non-negative number.
fn rational_from_continued_fraction(terms: &[Integer]) -> Rational {
    let mut rational = Rational::new();
    for (i, term) in terms.iter().rev().enumerate() {
        if i == 0 {
            if term.cmp0() == Ordering::Equal {
                continue;
            }
            rational += Rational::from((Integer::from(1), term.clone()));
        } else {
            rational = (rational + term).recip();
        }
    }

    if rational.cmp0() == Ordering::Equal {
        rational
    } else {
        rational.recip()
    }
}

/// Approximates the given float as a rational fraction, returning [`None`] if the float is NaN or
/// infinite.
///
/// Integral floats convert exactly. Otherwise, fractions with a small denominator within `1e-6`
/// of the input are preferred (so that `0.333333333` becomes `1/3`), and failing that, the
/// continued fraction expansion of the input is computed until the convergent matches the input,
/// [`MAX_TERMS`] terms have been expanded, or the next convergent's denominator would exceed
/// [`MAX_DENOMINATOR`]. A nonzero float too small for any such convergent converts exactly.
///
/// The result is lossy for floats that are not short fractions.
pub fn approximate_rational(x: f64) -> Option<Rational> {
    if !x.is_finite() {
        return None;
    }

    if x.fract() == 0.0 {
        return Integer::from_f64(x).map(Rational::from);
    }

    if x < 0.0 {
        return approximate_rational(-x).map(|r| -r);
    }

    for denominator in COMMON_DENOMINATORS {
        let numerator = (x * f64::from(denominator)).round();
        if numerator == 0.0 {
            continue;
        }
        if (numerator / f64::from(denominator) - x).abs() < COMMON_TOLERANCE {
            let numerator = Integer::from_f64(numerator)?;
            return Some(Rational::from((numerator, Integer::from(denominator))));
        }
    }

    let mut terms = Vec::new();
    let mut best = Rational::new();
    let mut n = float(x);
    for _ in 0..MAX_TERMS {
        let (integer, fractional) = n.trunc_fract(float(0));
        terms.push(integer.to_integer()?);

        let candidate = rational_from_continued_fraction(&terms);
        if *candidate.denom() > MAX_DENOMINATOR {
            break;
        }
        best = candidate;

        if fractional.is_zero() || best.to_f64() == x {
            break;
        }

        n = fractional.recip();
    }

    // too small for any convergent within the denominator bound
    if best.cmp0() == Ordering::Equal {
        return Rational::from_f64(x);
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use rug::ops::Pow;
    use super::*;

    #[test]
    fn integral() {
        assert_eq!(approximate_rational(-42.0), Some(Rational::from(-42)));
        assert_eq!(approximate_rational(1e20), Some(Rational::from(Integer::from(10).pow(20))));
    }

    #[test]
    fn common_fractions() {
        assert_eq!(approximate_rational(0.5), Some(Rational::from((1, 2))));
        assert_eq!(approximate_rational(0.333333333), Some(Rational::from((1, 3))));
        assert_eq!(approximate_rational(-1.75), Some(Rational::from((-7, 4))));
        assert_eq!(approximate_rational(0.1), Some(Rational::from((1, 10))));
    }

    #[test]
    fn continued_fraction() {
        let x = 0.123456;
        let approx = approximate_rational(x).unwrap();
        assert!(*approx.denom() <= MAX_DENOMINATOR);
        assert!((approx.to_f64() - x).abs() < 1e-12);
    }

    #[test]
    fn small_values_are_not_zero() {
        let approx = approximate_rational(1e-7).unwrap();
        assert_eq!(approx, Rational::from((1, 10_000_000)));

        let approx = approximate_rational(-3e-7).unwrap();
        assert!(approx.cmp0() == Ordering::Less);
        assert!((approx.to_f64() + 3e-7).abs() < 1e-20);

        let approx = approximate_rational(1e-300).unwrap();
        assert_eq!(approx.to_f64(), 1e-300);
    }

    #[test]
    fn non_finite() {
        assert_eq!(approximate_rational(f64::NAN), None);
        assert_eq!(approximate_rational(f64::INFINITY), None);
    }
}
