//! Simplification rules for powers.

use crate::{
    error::{
        kind::{DivisionByZero, NegativeRadicand},
        MathError,
    },
    number::{Number, Rational},
    symbolic::{
        expr::{Sign, SymExpr},
        simplify::{step::Step, Ctxt},
    },
};
use std::rc::Rc;
use super::distribute;

/// The largest integer exponent for which a power of a sum is expanded.
const MAX_EXPANSION: i64 = 4;

fn undefined_power(base: &Rc<SymExpr>, exponent: &Rc<SymExpr>) -> MathError {
    MathError::undefined(SymExpr::power(Rc::clone(base), Rc::clone(exponent)).to_string())
}

/// `2^∞ = ∞`
/// `(1/2)^∞ = 0`
/// `2^-∞ = 0`
/// `(1/2)^-∞ = ∞`
///
/// The base is evaluated numerically. `1^∞` and negative bases of magnitude at least one have no
/// limit, and are an [`UndefinedOperation`](crate::error::kind::UndefinedOperation). `0^-∞` is a
/// [`DivisionByZero`]. Returns `None` if the base cannot be evaluated.
fn infinite_exponent(
    base: &Rc<SymExpr>,
    exponent: &Rc<SymExpr>,
    sign: Sign,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    let value = match base.as_infinity() {
        Some(Sign::Positive) => f64::INFINITY,
        Some(Sign::Negative) => f64::NEG_INFINITY,
        None => match base.to_double() {
            Ok(value) if !value.is_nan() => value,
            _ => return Ok(None),
        },
    };

    let grows = match sign {
        Sign::Positive if value > 1.0 => true,
        Sign::Positive if value.abs() < 1.0 => false,
        Sign::Negative if value > 1.0 => false,
        Sign::Negative if value == 0.0 => return Err(DivisionByZero.into()),
        Sign::Negative if 0.0 < value && value < 1.0 => true,
        _ => return Err(undefined_power(base, exponent)),
    };
    Ok(Some(if grows { SymExpr::infinity(Sign::Positive) } else { SymExpr::number(0) }))
}

/// `∞^2 = ∞`
/// `(-∞)^2 = ∞`
/// `(-∞)^3 = -∞`
/// `∞^-1 = 0`
///
/// `∞^0` and roots of `-∞` with an even index are an
/// [`UndefinedOperation`](crate::error::kind::UndefinedOperation). Returns `None` if the sign of
/// the exponent is unknown.
fn infinite_base(
    base: &Rc<SymExpr>,
    exponent: &Rc<SymExpr>,
    sign: Sign,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    if exponent.is_zero() {
        return Err(undefined_power(base, exponent));
    }
    match exponent.sign() {
        None => return Ok(None),
        Some(Sign::Negative) => return Ok(Some(SymExpr::number(0))),
        Some(Sign::Positive) => (),
    }
    if sign == Sign::Positive {
        return Ok(Some(SymExpr::infinity(Sign::Positive)));
    }

    let Some(ratio) = exponent.as_rational() else {
        return Err(undefined_power(base, exponent));
    };
    if ratio.denominator().is_even() {
        return Err(undefined_power(base, exponent));
    }
    let sign = if ratio.numerator().is_even() { Sign::Positive } else { Sign::Negative };
    Ok(Some(SymExpr::infinity(sign)))
}

/// Resolves powers with an infinite base or exponent. An infinite exponent takes precedence over
/// an infinite base.
fn power_infinity(
    base: &Rc<SymExpr>,
    exponent: &Rc<SymExpr>,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    if let Some(sign) = exponent.as_infinity() {
        infinite_exponent(base, exponent, sign)
    } else if let Some(sign) = base.as_infinity() {
        infinite_base(base, exponent, sign)
    } else {
        Ok(None)
    }
}

/// `a^0 = 1`
///
/// `0^0` is an [`UndefinedOperation`](crate::error::kind::UndefinedOperation).
fn power_zero(base: &SymExpr, exponent: &SymExpr) -> Result<Option<Rc<SymExpr>>, MathError> {
    if !exponent.is_zero() {
        return Ok(None);
    }
    if base.is_zero() {
        return Err(MathError::undefined("0^0"));
    }
    Ok(Some(SymExpr::number(1)))
}

/// `0^a = 0`
///
/// A negative power of zero is a [`DivisionByZero`].
fn power_zero_left(base: &SymExpr, exponent: &SymExpr) -> Result<Option<Rc<SymExpr>>, MathError> {
    if !base.is_zero() {
        return Ok(None);
    }
    if exponent.as_number().map_or(false, Number::is_negative) {
        return Err(DivisionByZero.into());
    }
    Ok(Some(SymExpr::number(0)))
}

/// `a^1 = a`
fn power_one(base: &Rc<SymExpr>, exponent: &SymExpr) -> Option<Rc<SymExpr>> {
    exponent.is_one().then(|| Rc::clone(base))
}

/// `1^a = 1`
fn power_one_left(base: &SymExpr) -> Option<Rc<SymExpr>> {
    base.is_one().then(|| SymExpr::number(1))
}

/// Raises a number to a rational power, exactly if possible.
///
/// - `2^3 = 8`, `(2/3)^-2 = 9/4`
/// - `8^(1/3) = 2`, `(4/9)^(3/2) = 8/27`
/// - `2^(3/2) = √8 = 2√2`
/// - `(-8)^(1/3) = -(8^(1/3)) = -2`
///
/// An even root of a negative number is a [`NegativeRadicand`] error. Returns `None` if the power
/// has no exact form, such as `2^(1/3)`.
fn numeric_power(
    base: &Number,
    exponent: &Number,
    ctxt: &mut Ctxt,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    let base = base.to_rational();
    let exponent = exponent.to_rational();

    if let Some(n) = exponent.to_integer() {
        ctxt.push(Step::PowerNumbers);
        return Ok(Some(SymExpr::number(Number::from_rational(base.power(&n)?))));
    }

    let (p, q) = (exponent.numerator(), exponent.denominator());
    if base.is_negative() {
        if q.is_even() {
            return Err(NegativeRadicand { value: base.to_string() }.into());
        }

        ctxt.push(Step::OddRootOfNegative);
        let magnitude = SymExpr::power(
            SymExpr::number(Number::from_rational(base.abs())),
            SymExpr::number(Number::from_rational(exponent)),
        );
        let result = if p.is_even() { magnitude } else { SymExpr::negate(magnitude) };
        return ctxt.simplify(&result).map(Some);
    }

    let Some(root) = q.to_u32() else {
        return Ok(None);
    };

    if let (Some(numer), Some(denom)) = (base.numerator().root(root), base.denominator().root(root)) {
        ctxt.push(Step::ExactRoot);
        let value = Rational::new(numer, denom)?.power(&p)?;
        return Ok(Some(SymExpr::number(Number::from_rational(value))));
    }

    if root == 2 {
        ctxt.push(Step::PowerToSqrt);
        let radicand = SymExpr::number(Number::from_rational(base.power(&p)?));
        return ctxt.simplify(&SymExpr::sqrt(radicand)).map(Some);
    }

    Ok(None)
}

/// `(a^b)^c = a^(b*c)`
/// `(√a)^b = a^(b/2)`
///
/// The result is not simplified.
fn power_power(base: &SymExpr, exponent: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    let (inner, inner_exponent) = match base {
        SymExpr::Sqrt(radicand) => (
            Rc::clone(radicand),
            SymExpr::number(Number::Rational(Rational::one_half())),
        ),
        SymExpr::Power(inner, inner_exponent) => (Rc::clone(inner), Rc::clone(inner_exponent)),
        _ => return None,
    };
    Some(SymExpr::power(inner, SymExpr::multiply(inner_exponent, Rc::clone(exponent))))
}

/// `(a+b)^2 = (a+b)*(a+b)`
///
/// Powers of sums with small integer exponents are expanded by repeated multiplication, which
/// distributes and collects like terms at each step.
fn expand_power(
    base: &Rc<SymExpr>,
    exponent: &SymExpr,
    ctxt: &mut Ctxt,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    if !matches!(**base, SymExpr::Add(..)) {
        return Ok(None);
    }
    let Some(n) = exponent.as_number().and_then(Number::to_integer).and_then(|n| n.to_i64()) else {
        return Ok(None);
    };
    if !(2..=MAX_EXPANSION).contains(&n) {
        return Ok(None);
    }

    ctxt.push(Step::ExpandPower);
    let mut result = Rc::clone(base);
    for _ in 1..n {
        result = ctxt.simplify(&SymExpr::multiply(result, Rc::clone(base)))?;
    }
    Ok(Some(result))
}

/// Returns true if the term is built only from numbers, square roots of numbers, and products of
/// those.
fn is_processable(term: &SymExpr) -> bool {
    term.post_order_iter()
        .all(|node| matches!(node, SymExpr::Number(_) | SymExpr::Sqrt(_) | SymExpr::Mul(..)))
}

/// `1/(a+b) = (a-b)/(a^2-b^2)`
///
/// Applies to the reciprocal of a sum of two terms made of numbers and square roots, if
/// multiplying by the conjugate leaves a plain number in the denominator.
fn rationalize_denominator(
    base: &Rc<SymExpr>,
    exponent: &SymExpr,
    ctxt: &mut Ctxt,
) -> Result<Option<Rc<SymExpr>>, MathError> {
    if !matches!(**base, SymExpr::Add(..)) || exponent.as_number() != Some(&Number::Int(-1)) {
        return Ok(None);
    }

    let terms = base.terms();
    let [first, second] = terms.as_slice() else {
        return Ok(None);
    };
    if !is_processable(first) || !is_processable(second) {
        return Ok(None);
    }

    let conjugate = SymExpr::add(Rc::clone(first), SymExpr::negate(Rc::clone(second)));
    let denominator = ctxt.simplify(&SymExpr::multiply(Rc::clone(base), Rc::clone(&conjugate)))?;
    let Some(denominator) = denominator.as_number() else {
        return Ok(None);
    };

    ctxt.push(Step::RationalizeDenominator);
    let inverse = denominator.to_rational().reciprocal()?;
    let result = SymExpr::multiply(SymExpr::number(Number::from_rational(inverse)), conjugate);
    ctxt.simplify(&result).map(Some)
}

/// Simplifies `base^exponent`, where `expr` is the power node itself.
pub(crate) fn simplify_power(
    expr: &Rc<SymExpr>,
    base: &Rc<SymExpr>,
    exponent: &Rc<SymExpr>,
    ctxt: &mut Ctxt,
) -> Result<Rc<SymExpr>, MathError> {
    let b = ctxt.simplify(base)?;
    let e = ctxt.simplify(exponent)?;

    if let Some(result) = power_infinity(&b, &e)? {
        ctxt.push(Step::Infinity);
        return Ok(result);
    }

    if let Some(result) = power_zero(&b, &e)? {
        ctxt.push(Step::PowerZero);
        return Ok(result);
    }

    if let Some(result) = power_zero_left(&b, &e)? {
        ctxt.push(Step::PowerZeroLeft);
        return Ok(result);
    }

    if let Some(result) = power_one(&b, &e) {
        ctxt.push(Step::PowerOne);
        return Ok(result);
    }

    if let Some(result) = power_one_left(&b) {
        ctxt.push(Step::PowerOneLeft);
        return Ok(result);
    }

    if let (Some(x), Some(y)) = (b.as_number(), e.as_number()) {
        if let Some(result) = numeric_power(x, y, ctxt)? {
            return Ok(result);
        }
    }

    if let Some(result) = power_power(&b, &e) {
        ctxt.push(Step::PowerPower);
        return ctxt.simplify(&result);
    }

    if let Some(result) = distribute::distribute_power(&b, &e) {
        ctxt.push(Step::DistributePower);
        return ctxt.simplify(&result);
    }

    if let Some(result) = expand_power(&b, &e, ctxt)? {
        return Ok(result);
    }

    if let Some(result) = rationalize_denominator(&b, &e, ctxt)? {
        return Ok(result);
    }

    if Rc::ptr_eq(&b, base) && Rc::ptr_eq(&e, exponent) {
        Ok(Rc::clone(expr))
    } else {
        Ok(SymExpr::power(b, e))
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::simplify::simplify;
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(n: i64) -> Rc<SymExpr> {
        SymExpr::number(n)
    }

    fn frac(n: i64, d: i64) -> Rc<SymExpr> {
        SymExpr::number(Rational::from_ints(n, d).unwrap())
    }

    fn x() -> Rc<SymExpr> {
        SymExpr::variable("x")
    }

    fn simplified(expr: Rc<SymExpr>) -> String {
        simplify(&expr).unwrap().to_string()
    }

    #[test]
    fn identities() {
        assert_eq!(simplified(SymExpr::power(x(), num(0))), "1");
        assert_eq!(simplified(SymExpr::power(x(), num(1))), "x");
        assert_eq!(simplified(SymExpr::power(num(1), x())), "1");
        assert_eq!(simplified(SymExpr::power(num(0), x())), "0");
        assert_eq!(simplified(SymExpr::power(num(0), num(3))), "0");
    }

    #[test]
    fn errors() {
        assert_eq!(simplify(&SymExpr::power(num(0), num(0))), Err(MathError::undefined("0^0")));
        assert_eq!(
            simplify(&SymExpr::power(num(0), frac(-1, 2))),
            Err(MathError::from(DivisionByZero)),
        );
        assert_eq!(
            simplify(&SymExpr::power(num(-4), frac(1, 2))),
            Err(MathError::from(NegativeRadicand { value: "-4".to_string() })),
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(simplified(SymExpr::power(frac(2, 3), num(-2))), "9/4");
        assert_eq!(simplified(SymExpr::power(frac(4, 9), frac(3, 2))), "8/27");
        assert_eq!(simplified(SymExpr::power(num(2), frac(1, 3))), "2^(1/3)");
        assert_eq!(simplified(SymExpr::power(num(-2), frac(1, 3))), "-2^(1/3)");
        assert_eq!(simplified(SymExpr::power(num(-8), frac(2, 3))), "4");
        assert_eq!(simplified(SymExpr::power(num(2), frac(-1, 2))), "√(1/2)");
    }

    #[test]
    fn nested_powers() {
        // (x^2)^3
        let expr = SymExpr::power(SymExpr::power(x(), num(2)), num(3));
        assert_eq!(simplified(expr), "x^6");

        // (√x)^2
        let expr = SymExpr::power(SymExpr::sqrt(x()), num(2));
        assert_eq!(simplified(expr), "x");

        // (√2)^3
        let expr = SymExpr::power(SymExpr::sqrt(num(2)), num(3));
        assert_eq!(simplified(expr), "2√2");
    }

    #[test]
    fn expansion() {
        // (x + 1)^2
        let expr = SymExpr::power(SymExpr::add(x(), num(1)), num(2));
        assert_eq!(simplified(expr), "x^2+2*x+1");

        // (x + 1)^5 is left alone
        let expr = SymExpr::power(SymExpr::add(x(), num(1)), num(5));
        let result = simplify(&expr).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));
    }

    #[test]
    fn rationalization() {
        // 1 / (2 + √3) = 2 - √3
        let expr = SymExpr::power(SymExpr::add(num(2), SymExpr::sqrt(num(3))), num(-1));
        assert_eq!(simplified(expr), "-√3+2");

        // 1 / (√5 - √3) = (√5 + √3) / 2
        let expr = SymExpr::power(
            SymExpr::subtract(SymExpr::sqrt(num(5)), SymExpr::sqrt(num(3))),
            num(-1),
        );
        assert_eq!(simplified(expr), "(1/2)√5+(1/2)√3");

        // symbolic sums cannot be rationalized
        let expr = SymExpr::power(SymExpr::add(x(), SymExpr::sqrt(num(2))), num(-1));
        assert_eq!(simplified(expr), "(√2+x)^(-1)");
    }

    #[test]
    fn infinity() {
        let expr = SymExpr::power(SymExpr::infinity(Sign::Positive), num(2));
        assert_eq!(simplified(expr), "∞");

        let expr = SymExpr::power(num(2), SymExpr::infinity(Sign::Positive));
        assert_eq!(simplified(expr), "∞");
    }

    #[test]
    fn infinite_base_parity() {
        let neg_inf = || SymExpr::infinity(Sign::Negative);
        assert_eq!(simplified(SymExpr::power(neg_inf(), num(2))), "∞");
        assert_eq!(simplified(SymExpr::power(neg_inf(), num(3))), "-∞");
        assert_eq!(simplified(SymExpr::power(neg_inf(), frac(2, 3))), "∞");
        assert_eq!(simplified(SymExpr::power(neg_inf(), num(-1))), "0");
        assert_eq!(
            simplify(&SymExpr::power(neg_inf(), frac(1, 2))),
            Err(MathError::undefined("(-∞)^(1/2)")),
        );
        assert_eq!(
            simplify(&SymExpr::power(SymExpr::infinity(Sign::Positive), num(0))),
            Err(MathError::undefined("∞^0")),
        );
    }

    #[test]
    fn infinite_exponents() {
        let inf = || SymExpr::infinity(Sign::Positive);
        let neg_inf = || SymExpr::infinity(Sign::Negative);
        assert_eq!(simplified(SymExpr::power(num(2), neg_inf())), "0");
        assert_eq!(simplified(SymExpr::power(frac(1, 2), inf())), "0");
        assert_eq!(simplified(SymExpr::power(frac(1, 2), neg_inf())), "∞");
        assert_eq!(simplified(SymExpr::power(SymExpr::sqrt(num(2)), inf())), "∞");
        assert_eq!(
            simplify(&SymExpr::power(num(1), inf())),
            Err(MathError::undefined("1^∞")),
        );
        assert_eq!(
            simplify(&SymExpr::power(num(-2), inf())),
            Err(MathError::undefined("(-2)^∞")),
        );
        assert_eq!(
            simplify(&SymExpr::power(num(0), neg_inf())),
            Err(MathError::from(DivisionByZero)),
        );

        // the sign of a variable is unknown
        let expr = SymExpr::power(x(), inf());
        let result = simplify(&expr).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));
    }
}
