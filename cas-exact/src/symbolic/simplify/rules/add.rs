//! Simplification rules for expressions involving addition, including combining like terms.

use crate::{
    error::MathError,
    number::Number,
    symbolic::{
        expr::{Sign, SymExpr},
        hash::HashData,
        simplify::{step::Step, Ctxt},
    },
};
use std::rc::Rc;
use super::{same_nodes, sum};

/// `∞+a = ∞`
/// `-∞+a = -∞`
///
/// `∞-∞` is an [`UndefinedOperation`](crate::error::kind::UndefinedOperation).
fn add_infinity(terms: &[Rc<SymExpr>]) -> Result<Option<Rc<SymExpr>>, MathError> {
    let mut sign = None;
    for term in terms {
        match (sign, term.as_infinity()) {
            (_, None) => {},
            (None, Some(s)) => sign = Some(s),
            (Some(a), Some(b)) if a != b => return Err(MathError::undefined("∞ - ∞")),
            (Some(_), Some(_)) => {},
        }
    }
    Ok(sign.map(SymExpr::infinity))
}

/// A set of like terms.
struct Group {
    /// The decomposition of the first term, with the coefficients of the whole group summed.
    data: HashData,

    /// The first term of the group.
    first: Rc<SymExpr>,

    /// The number of terms in the group.
    count: usize,
}

/// Adds the term to the first group it is a like term of, or starts a new group.
fn insert(groups: &mut Vec<Group>, term: &Rc<SymExpr>, data: HashData) {
    match groups.iter_mut().find(|group| group.data.is_like(&data)) {
        Some(group) => {
            group.data.coefficient = &group.data.coefficient + &data.coefficient;
            group.count += 1;
        },
        None => groups.push(Group {
            data,
            first: Rc::clone(term),
            count: 1,
        }),
    }
}

/// The result of [`combine_like_terms`].
struct Combined {
    terms: Vec<Rc<SymExpr>>,
    merged: bool,
    dropped: bool,
}

/// `2√3+5√3 = 7√3`
/// `a+a = 2*a`
/// `1+2 = 3`
/// `a-a = 0`
///
/// Groups like terms and sums the coefficients of each group, dropping groups that sum to zero.
/// The terms are returned in a canonical order: multiples of numeric square roots first, then the
/// other terms in order of first appearance, then the sum of the numbers.
fn combine_like_terms(terms: &[Rc<SymExpr>]) -> Combined {
    let mut number = Number::Int(0);
    let mut number_terms = Vec::new();
    let mut radicals = Vec::new();
    let mut others = Vec::new();

    for term in terms {
        if let Some(n) = term.as_number() {
            number = &number + n;
            number_terms.push(Rc::clone(term));
            continue;
        }

        let data = HashData::new(term);
        if data.is_number() {
            number = &number + &Number::from_rational(data.coefficient);
            number_terms.push(Rc::clone(term));
        } else if data.is_radical() {
            insert(&mut radicals, term, data);
        } else {
            insert(&mut others, term, data);
        }
    }

    let mut combined = Combined {
        terms: Vec::with_capacity(terms.len()),
        merged: number_terms.len() > 1,
        dropped: false,
    };

    for group in radicals.into_iter().chain(others) {
        if group.data.coefficient.is_zero() {
            combined.dropped = true;
        } else if group.count == 1 {
            combined.terms.push(group.first);
        } else {
            combined.merged = true;
            combined.terms.push(group.data.into_term());
        }
    }

    if number.is_zero() {
        combined.dropped |= !number_terms.is_empty();
    } else if number_terms.len() == 1 && number_terms[0].is_number() {
        combined.terms.extend(number_terms);
    } else {
        combined.terms.push(SymExpr::number(number));
    }

    combined
}

/// Simplifies a sum, where `expr` is the sum node itself.
///
/// The whole chain of nested sums is handled at once: its terms are flattened, simplified, and
/// flattened again, so that terms that simplified to sums are combined with the rest.
pub(crate) fn simplify_add(expr: &Rc<SymExpr>, ctxt: &mut Ctxt) -> Result<Rc<SymExpr>, MathError> {
    let raw = expr.terms();
    let mut terms = Vec::with_capacity(raw.len());
    for term in &raw {
        terms.extend(ctxt.simplify(term)?.terms());
    }

    if let Some(result) = add_infinity(&terms)? {
        ctxt.push(Step::Infinity);
        return Ok(result);
    }

    let combined = combine_like_terms(&terms);
    if combined.merged {
        ctxt.push(Step::CombineLikeTerms);
    }
    if combined.dropped {
        ctxt.push(Step::AddZero);
    }

    if same_nodes(&combined.terms, &raw) {
        Ok(Rc::clone(expr))
    } else {
        Ok(sum(combined.terms))
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::kind::UndefinedOperation, number::Rational, symbolic::simplify::simplify};
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(n: i64) -> Rc<SymExpr> {
        SymExpr::number(n)
    }

    fn x() -> Rc<SymExpr> {
        SymExpr::variable("x")
    }

    fn simplified(expr: Rc<SymExpr>) -> String {
        simplify(&expr).unwrap().to_string()
    }

    #[test]
    fn numbers() {
        let expr = SymExpr::add(SymExpr::add(num(1), num(2)), SymExpr::number(Rational::from_ints(1, 2).unwrap()));
        assert_eq!(simplified(expr), "7/2");

        let expr = SymExpr::add(num(5), num(-5));
        assert_eq!(simplified(expr), "0");
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified(SymExpr::add(x(), x())), "2*x");
        assert_eq!(simplified(SymExpr::subtract(x(), x())), "0");

        // 3x + 2 + -x
        let expr = SymExpr::add(
            SymExpr::add(SymExpr::multiply(num(3), x()), num(2)),
            SymExpr::negate(x()),
        );
        assert_eq!(simplified(expr), "2*x+2");
    }

    #[test]
    fn radicals_come_first() {
        // x + 1 + √2 + √2
        let expr = SymExpr::add(
            SymExpr::add(x(), num(1)),
            SymExpr::add(SymExpr::sqrt(num(2)), SymExpr::sqrt(num(2))),
        );
        assert_eq!(simplified(expr), "2√2+x+1");
    }

    #[test]
    fn unlike_radicals() {
        let expr = SymExpr::add(SymExpr::sqrt(num(2)), SymExpr::sqrt(num(3)));
        let result = simplify(&expr).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));
    }

    #[test]
    fn nested_sums_are_flattened() {
        // 2 * (x + 1) + 3
        let expr = SymExpr::add(
            SymExpr::multiply(num(2), SymExpr::add(x(), num(1))),
            num(3),
        );
        assert_eq!(simplified(expr), "2*x+5");
    }

    #[test]
    fn infinities() {
        let expr = SymExpr::add(x(), SymExpr::infinity(Sign::Negative));
        assert_eq!(simplified(expr), "-∞");

        let expr = SymExpr::add(
            SymExpr::add(SymExpr::infinity(Sign::Positive), num(1)),
            SymExpr::infinity(Sign::Negative),
        );
        assert_eq!(
            simplify(&expr),
            Err(MathError::from(UndefinedOperation { expr: "∞ - ∞".to_string() })),
        );
    }

    #[test]
    fn steps() {
        let (_, steps) = crate::symbolic::simplify::simplify_with_steps(
            &SymExpr::add(num(2), num(-2)),
        ).unwrap();
        assert_eq!(steps, vec![Step::CombineLikeTerms, Step::AddZero]);
    }
}
