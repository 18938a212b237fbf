//! Simplification rules related to the distributive property.

use crate::{number::Number, symbolic::expr::SymExpr};
use std::rc::Rc;
use super::{product, sum};

/// `a*(b+c) = a*b + a*c`
/// `(a+b)*(c+d) = a*c + a*d + b*c + b*d`
///
/// Applies if either operand is a sum. The result is not simplified.
pub fn distributive_property(lhs: &Rc<SymExpr>, rhs: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    if !matches!(**lhs, SymExpr::Add(..)) && !matches!(**rhs, SymExpr::Add(..)) {
        return None;
    }

    let (lhs_terms, rhs_terms) = (lhs.terms(), rhs.terms());
    let terms = lhs_terms.iter()
        .flat_map(|a| {
            rhs_terms.iter().map(move |b| SymExpr::multiply(Rc::clone(a), Rc::clone(b)))
        })
        .collect::<Vec<_>>();
    Some(sum(terms))
}

/// `(a*b)^c = a^c * b^c`, if `c` is an integer
///
/// The result is not simplified.
pub fn distribute_power(base: &Rc<SymExpr>, exponent: &Rc<SymExpr>) -> Option<Rc<SymExpr>> {
    if !matches!(**base, SymExpr::Mul(..)) {
        return None;
    }
    if !exponent.as_number().map_or(false, Number::is_integer) {
        return None;
    }

    let factors = base.factors()
        .into_iter()
        .map(|factor| SymExpr::power(factor, Rc::clone(exponent)))
        .collect::<Vec<_>>();
    Some(product(factors))
}
