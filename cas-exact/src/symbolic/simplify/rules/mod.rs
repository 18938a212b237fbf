//! Implementation of the simplification rules.
//!
//! Each kind of node has an entry point, such as [`power::simplify_power`], that simplifies the
//! node's operands and then tries the rules for that kind in order. A rule takes the simplified
//! operands and returns `Some(expr)` with the rewritten expression if it applies, or `None` if it
//! does not. Rules that can fail return `Result<Option<_>, MathError>` instead.
//!
//! Every entry point receives the original node as well, and returns it as-is when the operands
//! came back unchanged and no rule applied.

pub mod add;
pub mod distribute;
pub mod multiply;
pub mod power;
pub mod root;

use crate::{number::{Number, Rational}, symbolic::expr::SymExpr};
use std::rc::Rc;

/// Utility function to view a factor as a power.
///
/// - `a^b` -> `(a, b)`
/// - `√a` -> `(a, 1/2)`
/// - `a` -> `(a, 1)`
pub(crate) fn as_power(expr: &Rc<SymExpr>) -> (Rc<SymExpr>, Rc<SymExpr>) {
    match &**expr {
        SymExpr::Power(base, exponent) => (Rc::clone(base), Rc::clone(exponent)),
        SymExpr::Sqrt(radicand) => (
            Rc::clone(radicand),
            SymExpr::number(Number::Rational(Rational::one_half())),
        ),
        _ => (Rc::clone(expr), SymExpr::number(1)),
    }
}

/// Returns true if both lists hold the very same nodes, in the same order.
pub(crate) fn same_nodes(lhs: &[Rc<SymExpr>], rhs: &[Rc<SymExpr>]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| Rc::ptr_eq(a, b))
}

/// Builds the product of the given factors, nested to the right. An empty product is `1`.
pub(crate) fn product(factors: Vec<Rc<SymExpr>>) -> Rc<SymExpr> {
    factors.into_iter()
        .rev()
        .reduce(|acc, factor| SymExpr::multiply(factor, acc))
        .unwrap_or_else(|| SymExpr::number(1))
}

/// Builds the sum of the given terms, nested to the right. An empty sum is `0`.
pub(crate) fn sum(terms: Vec<Rc<SymExpr>>) -> Rc<SymExpr> {
    terms.into_iter()
        .rev()
        .reduce(|acc, term| SymExpr::add(term, acc))
        .unwrap_or_else(|| SymExpr::number(0))
}
