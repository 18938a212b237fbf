//! Simplification rules for square roots.

use crate::{
    error::{kind::NegativeRadicand, MathError},
    number::{BigInteger, Number, Rational},
    symbolic::{
        expr::{Sign, SymExpr},
        simplify::{step::Step, Ctxt},
    },
};
use rug::Integer;
use std::rc::Rc;

/// Squares of the integers up to this bound are divided out of a radicand.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 16;

/// Splits a non-negative integer `n` into `(f, r)` such that `n = f^2 * r`, moving as large a
/// square factor as possible into `f`.
///
/// A perfect square is detected directly. Otherwise, integers that fit in a [`u64`] are divided by
/// the squares of `2..=65536`, and a remainder that is itself a perfect square is folded into `f`.
/// This finds the largest square factor of every `n < 65537^2`. Integers beyond [`u64`] that are
/// not perfect squares are returned unchanged, as `(1, n)`.
pub(crate) fn square_factor(n: &BigInteger) -> (BigInteger, BigInteger) {
    if let Some(root) = n.sqrt() {
        return (root, BigInteger::from_int(1));
    }

    let Some(mut rest) = n.as_rug().to_u64() else {
        return (BigInteger::from_int(1), n.clone());
    };

    let mut factor: u64 = 1;
    let mut i: u64 = 2;
    while i <= TRIAL_DIVISION_LIMIT && i * i <= rest {
        let square = i * i;
        while rest % square == 0 {
            rest /= square;
            factor *= i;
        }
        i += 1;
    }

    let factor = BigInteger::from(Integer::from(factor));
    let rest = BigInteger::from(Integer::from(rest));
    match rest.sqrt() {
        Some(root) => (&factor * &root, BigInteger::from_int(1)),
        None => (factor, rest),
    }
}

/// `√∞ = ∞`
///
/// The square root of negative infinity is a [`NegativeRadicand`] error.
fn sqrt_infinity(radicand: &Rc<SymExpr>) -> Result<Option<Rc<SymExpr>>, MathError> {
    match radicand.as_infinity() {
        Some(Sign::Positive) => Ok(Some(Rc::clone(radicand))),
        Some(Sign::Negative) => Err(NegativeRadicand { value: radicand.to_string() }.into()),
        None => Ok(None),
    }
}

/// `√50 = 5√2`
/// `√49 = 7`
/// `√(9/8) = (3/2)√(1/2)`
///
/// Square factors of the numerator and the denominator are moved out of the root separately. The
/// square root of a negative number is a [`NegativeRadicand`] error.
fn sqrt_factor(radicand: &Rc<SymExpr>) -> Result<Option<Rc<SymExpr>>, MathError> {
    let Some(n) = radicand.as_number() else {
        return Ok(None);
    };
    if n.is_negative() {
        return Err(NegativeRadicand { value: n.to_string() }.into());
    }

    let value = n.to_rational();
    let (outer_numer, inner_numer) = square_factor(&value.numerator());
    let (outer_denom, inner_denom) = square_factor(&value.denominator());
    let outer = Rational::new(outer_numer, outer_denom)?;
    let inner = Rational::new(inner_numer, inner_denom)?;

    if inner.is_one() {
        return Ok(Some(SymExpr::number(Number::from_rational(outer))));
    }
    if outer.is_one() {
        return Ok(None);
    }

    Ok(Some(SymExpr::multiply(
        SymExpr::number(Number::from_rational(outer)),
        SymExpr::sqrt(SymExpr::number(Number::from_rational(inner))),
    )))
}

/// `√(a^2) = a`
/// `√(a*a) = a`
///
/// The sign of `a` is not checked.
fn sqrt_of_square(radicand: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    match &**radicand {
        SymExpr::Mul(lhs, rhs) if lhs == rhs => Some(Rc::clone(lhs)),
        SymExpr::Power(base, exponent)
            if exponent.as_number().map_or(false, |n| *n == Number::Int(2)) =>
        {
            Some(Rc::clone(base))
        },
        _ => None,
    }
}

/// Simplifies `√radicand`, where `expr` is the square root node itself.
pub(crate) fn simplify_sqrt(
    expr: &Rc<SymExpr>,
    radicand: &Rc<SymExpr>,
    ctxt: &mut Ctxt,
) -> Result<Rc<SymExpr>, MathError> {
    let new_radicand = ctxt.simplify(radicand)?;

    if let Some(result) = sqrt_infinity(&new_radicand)? {
        ctxt.push(Step::Infinity);
        return Ok(result);
    }

    if let Some(result) = sqrt_factor(&new_radicand)? {
        ctxt.push(Step::SqrtFactor);
        return Ok(result);
    }

    if let Some(result) = sqrt_of_square(&new_radicand) {
        ctxt.push(Step::SqrtOfSquare);
        return Ok(result);
    }

    if Rc::ptr_eq(&new_radicand, radicand) {
        Ok(Rc::clone(expr))
    } else {
        Ok(SymExpr::sqrt(new_radicand))
    }
}
