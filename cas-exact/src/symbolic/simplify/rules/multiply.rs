//! Simplification rules for expressions involving multiplication, including combining like
//! factors and merging radicals.

use crate::{
    error::MathError,
    number::{BigInteger, Number, Rational},
    symbolic::{
        expr::{Sign, SymExpr},
        simplify::{step::Step, Ctxt},
    },
};
use std::rc::Rc;
use super::{as_power, distribute, product, sum};

/// Returns the sign a finite factor contributes to a product with infinity. A factor whose sign
/// is unknown, such as a variable, counts as positive.
fn sign_of(expr: &SymExpr) -> Sign {
    expr.sign().unwrap_or(Sign::Positive)
}

/// `∞*a = ∞`
/// `-2*∞ = -∞`
/// `∞*-∞ = -∞`
///
/// `0*∞` is also `∞`.
fn multiply_infinity(lhs: &SymExpr, rhs: &SymExpr) -> Option<Rc<SymExpr>> {
    let sign = match (lhs.as_infinity(), rhs.as_infinity()) {
        (Some(a), Some(b)) => a * b,
        (Some(a), None) => a * sign_of(rhs),
        (None, Some(b)) => sign_of(lhs) * b,
        (None, None) => return None,
    };
    Some(SymExpr::infinity(sign))
}

/// `0*a = 0`
/// `a*0 = 0`
fn multiply_zero(lhs: &SymExpr, rhs: &SymExpr) -> Option<Rc<SymExpr>> {
    (lhs.is_zero() || rhs.is_zero()).then(|| SymExpr::number(0))
}

/// `1*a = a`
/// `a*1 = a`
fn multiply_one(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    if lhs.is_one() {
        Some(Rc::clone(rhs))
    } else if rhs.is_one() {
        Some(Rc::clone(lhs))
    } else {
        None
    }
}

/// `2*3 = 6`
fn multiply_numbers(lhs: &SymExpr, rhs: &SymExpr) -> Option<Rc<SymExpr>> {
    let (a, b) = (lhs.as_number()?, rhs.as_number()?);
    Some(SymExpr::number(a * b))
}

/// Returns true if the factor can take part in pairwise power-law merging.
fn is_power_compatible(expr: &SymExpr) -> bool {
    matches!(
        expr,
        SymExpr::Number(_) | SymExpr::Variable(_) | SymExpr::Sqrt(_) | SymExpr::Power(..)
    )
}

/// `a*a = a^2`
/// `a^b*a^c = a^(b+c)`
/// `√a*√a = a`
///
/// A number next to a square root is a coefficient, and is never merged with it: `2*√2` stays as
/// `2√2`. The result is not simplified.
fn combine_like_factors(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    if !is_power_compatible(lhs) || !is_power_compatible(rhs) {
        return None;
    }

    let coefficient_of_root = (lhs.is_number() && matches!(**rhs, SymExpr::Sqrt(_)))
        || (rhs.is_number() && matches!(**lhs, SymExpr::Sqrt(_)));
    if coefficient_of_root {
        return None;
    }

    let (lhs_base, lhs_exp) = as_power(lhs);
    let (rhs_base, rhs_exp) = as_power(rhs);
    if lhs_base != rhs_base {
        return None;
    }

    Some(SymExpr::power(lhs_base, SymExpr::add(lhs_exp, rhs_exp)))
}

/// If both factors are powers of non-negative numbers whose exponents have the same denominator
/// `q > 1`, returns the exponent `1/q`. Returns the numeric bases and the numerators too.
fn shared_root(
    lhs: &Rc<SymExpr>,
    rhs: &Rc<SymExpr>,
) -> Option<(Rational, BigInteger, Rational, BigInteger, BigInteger)> {
    let (lhs_base, lhs_exp) = as_power(lhs);
    let (rhs_base, rhs_exp) = as_power(rhs);
    let (a, b) = (lhs_base.as_rational()?, rhs_base.as_rational()?);
    if a.is_negative() || b.is_negative() {
        return None;
    }

    let (p, q) = (lhs_exp.as_rational()?, rhs_exp.as_rational()?);
    let root = p.denominator();
    if root.is_one() || root != q.denominator() {
        return None;
    }

    Some((a, p.numerator(), b, q.numerator(), root))
}

/// `√2*√3 = √6`
/// `2^(1/3)*3^(2/3) = 18^(1/3)`
///
/// Only applies to non-negative numeric bases. The result is not simplified.
fn combine_like_roots(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    if !is_power_compatible(lhs) || !is_power_compatible(rhs) {
        return None;
    }

    let (a, p, b, q, root) = shared_root(lhs, rhs)?;
    let base = &a.power(&p).ok()? * &b.power(&q).ok()?;
    let exponent = Rational::new(BigInteger::from_int(1), root).ok()?;
    Some(SymExpr::power(
        SymExpr::number(Number::from_rational(base)),
        SymExpr::number(Number::from_rational(exponent)),
    ))
}

/// Groups the non-numeric factors of a product by base, adding the exponents of each group.
///
/// Returns the number of merged factors and the regrouped factors.
fn group_by_base(factors: &[Rc<SymExpr>]) -> (usize, Vec<Rc<SymExpr>>) {
    // (base, exponents, first factor with that base)
    let mut groups: Vec<(Rc<SymExpr>, Vec<Rc<SymExpr>>, Rc<SymExpr>)> = Vec::new();
    let mut merges = 0;
    for factor in factors {
        let (base, exponent) = as_power(factor);
        match groups.iter_mut().find(|(b, _, _)| *b == base) {
            Some((_, exponents, _)) => {
                exponents.push(exponent);
                merges += 1;
            },
            None => groups.push((base, vec![exponent], Rc::clone(factor))),
        }
    }

    let grouped = groups.into_iter()
        .map(|(base, exponents, first)| {
            if exponents.len() == 1 {
                first
            } else {
                SymExpr::power(base, sum(exponents))
            }
        })
        .collect();
    (merges, grouped)
}

/// Groups the factors of a product that are fractional powers of non-negative numbers by
/// exponent, multiplying the bases of each group. Other factors are kept in place.
///
/// Returns the number of merged factors and the regrouped factors.
fn group_by_exponent(factors: &[Rc<SymExpr>]) -> (usize, Vec<Rc<SymExpr>>) {
    enum Slot {
        Kept(Rc<SymExpr>),
        Group(Rational, Rc<SymExpr>, Rc<SymExpr>, usize),
    }

    let mut slots: Vec<Slot> = Vec::new();
    let mut merges = 0;
    for factor in factors {
        let (base, exponent) = as_power(factor);
        let numeric = base.as_rational()
            .filter(|b| !b.is_negative())
            .zip(exponent.as_number().filter(|e| !e.is_integer()));
        let Some((value, _)) = numeric else {
            slots.push(Slot::Kept(Rc::clone(factor)));
            continue;
        };

        let existing = slots.iter_mut().find_map(|slot| match slot {
            Slot::Group(product, exp, _, count) if *exp == exponent => Some((product, count)),
            _ => None,
        });
        match existing {
            Some((product, count)) => {
                *product = &*product * &value;
                *count += 1;
                merges += 1;
            },
            None => slots.push(Slot::Group(value, exponent, Rc::clone(factor), 1)),
        }
    }

    let grouped = slots.into_iter()
        .map(|slot| match slot {
            Slot::Kept(factor) | Slot::Group(_, _, factor, 1) => factor,
            Slot::Group(base, exponent, _, _) => {
                SymExpr::power(SymExpr::number(Number::from_rational(base)), exponent)
            },
        })
        .collect();
    (merges, grouped)
}

/// `2*a*3 = 6*a`
/// `a*2 = 2*a`
/// `a*b*a^2 = a^3*b`
/// `2^(1/3)*a*3^(1/3) = 6^(1/3)*a`
///
/// Flattens the product, multiplies its numbers into a single leading coefficient, and merges the
/// remaining factors either by base or by exponent, whichever merges more factors. Ties go to
/// merging by base. The result is not simplified.
fn collect_factors(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    let mut factors = lhs.factors();
    factors.extend(rhs.factors());

    let mut coefficient = Number::Int(1);
    let mut numbers = 0;
    let mut others = Vec::with_capacity(factors.len());
    for factor in &factors {
        match factor.as_number() {
            Some(n) => {
                coefficient = &coefficient * n;
                numbers += 1;
            },
            None => others.push(Rc::clone(factor)),
        }
    }

    let (base_merges, by_base) = group_by_base(&others);
    let (exponent_merges, by_exponent) = group_by_exponent(&others);
    let (merges, grouped) = if exponent_merges > base_merges {
        (exponent_merges, by_exponent)
    } else {
        (base_merges, by_base)
    };

    let misplaced = numbers == 1 && !factors[0].is_number();
    if merges == 0 && numbers < 2 && !misplaced {
        return None;
    }

    let mut rebuilt = Vec::with_capacity(grouped.len() + 1);
    if !coefficient.is_one() {
        rebuilt.push(SymExpr::number(coefficient));
    }
    rebuilt.extend(grouped);
    Some(product(rebuilt))
}

/// `√a*√b = √(a*b)`
///
/// Merges every square root factor of the product into one. The result is not simplified.
fn merge_radicals(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    let mut factors = lhs.factors();
    factors.extend(rhs.factors());

    let (roots, others): (Vec<_>, Vec<_>) = factors.into_iter()
        .partition(|factor| matches!(**factor, SymExpr::Sqrt(_)));
    if roots.len() < 2 {
        return None;
    }

    let radicands = roots.iter()
        .filter_map(|root| match &**root {
            SymExpr::Sqrt(radicand) => Some(Rc::clone(radicand)),
            _ => None,
        })
        .collect();
    let mut rebuilt = others;
    rebuilt.push(SymExpr::sqrt(product(radicands)));
    Some(product(rebuilt))
}

/// Simplifies `lhs * rhs`, where `expr` is the product node itself.
pub(crate) fn simplify_multiply(
    expr: &Rc<SymExpr>,
    lhs: &Rc<SymExpr>,
    rhs: &Rc<SymExpr>,
    ctxt: &mut Ctxt,
) -> Result<Rc<SymExpr>, MathError> {
    let a = ctxt.simplify(lhs)?;
    let b = ctxt.simplify(rhs)?;

    if let Some(result) = multiply_infinity(&a, &b) {
        ctxt.push(Step::Infinity);
        return Ok(result);
    }

    if let Some(result) = multiply_zero(&a, &b) {
        ctxt.push(Step::MultiplyZero);
        return Ok(result);
    }

    if let Some(result) = multiply_one(&a, &b) {
        ctxt.push(Step::MultiplyOne);
        return Ok(result);
    }

    if let Some(result) = multiply_numbers(&a, &b) {
        ctxt.push(Step::MultiplyNumbers);
        return Ok(result);
    }

    // the remaining rules rewrite into new expressions, which are simplified again
    let rules: [(fn(&Rc<SymExpr>, &Rc<SymExpr>) -> Option<Rc<SymExpr>>, Step); 5] = [
        (distribute::distributive_property, Step::DistributiveProperty),
        (combine_like_factors, Step::CombineLikeFactors),
        (combine_like_roots, Step::CombineLikeRoots),
        (collect_factors, Step::CollectCoefficients),
        (merge_radicals, Step::MergeRadicals),
    ];
    for (rule, step) in rules {
        if let Some(result) = rule(&a, &b) {
            ctxt.push(step);
            return ctxt.simplify(&result);
        }
    }

    if Rc::ptr_eq(&a, lhs) && Rc::ptr_eq(&b, rhs) {
        Ok(Rc::clone(expr))
    } else {
        Ok(SymExpr::multiply(a, b))
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::simplify::{simplify, simplify_with_steps};
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(n: i64) -> Rc<SymExpr> {
        SymExpr::number(n)
    }

    fn x() -> Rc<SymExpr> {
        SymExpr::variable("x")
    }

    fn y() -> Rc<SymExpr> {
        SymExpr::variable("y")
    }

    fn simplified(expr: Rc<SymExpr>) -> String {
        simplify(&expr).unwrap().to_string()
    }

    #[test]
    fn infinity() {
        let inf = SymExpr::infinity(Sign::Positive);
        assert_eq!(simplified(SymExpr::multiply(num(-2), Rc::clone(&inf))), "-∞");
        assert_eq!(simplified(SymExpr::multiply(num(0), Rc::clone(&inf))), "∞");
        assert_eq!(
            simplified(SymExpr::multiply(Rc::clone(&inf), SymExpr::infinity(Sign::Negative))),
            "-∞",
        );
        assert_eq!(simplified(SymExpr::multiply(x(), inf)), "∞");
    }

    #[test]
    fn infinity_takes_sign_of_irrational_factor() {
        let inf = || SymExpr::infinity(Sign::Positive);

        // -√2 * ∞
        let expr = SymExpr::multiply(SymExpr::negate(SymExpr::sqrt(num(2))), inf());
        assert_eq!(simplified(expr), "-∞");

        // ∞ * (1 - √2)
        let expr = SymExpr::multiply(inf(), SymExpr::subtract(num(1), SymExpr::sqrt(num(2))));
        assert_eq!(simplified(expr), "-∞");

        // -π * -∞
        let expr = SymExpr::multiply(
            SymExpr::negate(SymExpr::variable("π")),
            SymExpr::infinity(Sign::Negative),
        );
        assert_eq!(simplified(expr), "∞");
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(simplified(SymExpr::multiply(x(), num(0))), "0");
        assert_eq!(simplified(SymExpr::multiply(num(1), x())), "x");

        let (result, steps) = simplify_with_steps(&SymExpr::multiply(x(), num(1))).unwrap();
        assert_eq!(result, x());
        assert_eq!(steps, vec![Step::MultiplyOne]);
    }

    #[test]
    fn like_factors() {
        assert_eq!(simplified(SymExpr::multiply(x(), x())), "x^2");

        // x * y * x^3
        let expr = SymExpr::multiply(
            SymExpr::multiply(x(), y()),
            SymExpr::power(x(), num(3)),
        );
        assert_eq!(simplified(expr), "x^4*y");

        // √x * √x
        let expr = SymExpr::multiply(SymExpr::sqrt(x()), SymExpr::sqrt(x()));
        assert_eq!(simplified(expr), "x");

        // x^2 * x^-2
        let expr = SymExpr::multiply(
            SymExpr::power(x(), num(2)),
            SymExpr::power(x(), num(-2)),
        );
        assert_eq!(simplified(expr), "1");
    }

    #[test]
    fn coefficients() {
        // 2 * x * 3
        let expr = SymExpr::multiply(SymExpr::multiply(num(2), x()), num(3));
        assert_eq!(simplified(expr), "6*x");

        // x * √4 moves the number to the front
        let expr = SymExpr::multiply(x(), SymExpr::sqrt(num(4)));
        assert_eq!(simplified(expr), "2*x");

        // 3 * 2√5
        let expr = SymExpr::multiply(num(3), SymExpr::multiply(num(2), SymExpr::sqrt(num(5))));
        assert_eq!(simplified(expr), "6√5");

        // 2√3 * √3
        let expr = SymExpr::multiply(
            SymExpr::multiply(num(2), SymExpr::sqrt(num(3))),
            SymExpr::sqrt(num(3)),
        );
        assert_eq!(simplified(expr), "6");
    }

    #[test]
    fn coefficient_stays_outside_root() {
        let expr = SymExpr::multiply(num(2), SymExpr::sqrt(num(2)));
        let result = simplify(&expr).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));
        assert_eq!(result.to_string(), "2√2");
    }

    #[test]
    fn like_roots() {
        let cube_root = |n| SymExpr::power(num(n), SymExpr::number(Rational::from_ints(1, 3).unwrap()));
        assert_eq!(simplified(SymExpr::multiply(cube_root(2), cube_root(4))), "2");
        assert_eq!(simplified(SymExpr::multiply(cube_root(2), cube_root(3))), "6^(1/3)");

        // 2^(1/3) * x * 3^(1/3) merges across the product
        let expr = SymExpr::multiply(
            SymExpr::multiply(cube_root(2), x()),
            cube_root(3),
        );
        assert_eq!(simplified(expr), "6^(1/3)*x");
    }

    #[test]
    fn radicals() {
        assert_eq!(simplified(SymExpr::multiply(SymExpr::sqrt(num(2)), SymExpr::sqrt(num(8)))), "4");
        assert_eq!(simplified(SymExpr::multiply(SymExpr::sqrt(num(6)), SymExpr::sqrt(num(3)))), "3√2");
        assert_eq!(simplified(SymExpr::multiply(SymExpr::sqrt(x()), SymExpr::sqrt(y()))), "√(x*y)");
    }

    #[test]
    fn negation() {
        let expr = SymExpr::multiply(SymExpr::sqrt(num(2)), num(-1));
        assert_eq!(simplified(expr), "-√2");
    }
}
