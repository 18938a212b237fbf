//! Module to simplify symbolic expressions.
//!
//! This module provides the [`simplify`] function, which reduces a [`SymExpr`] to a normal form in
//! a single bottom-up pass: every node simplifies its operands first, then applies the rules for
//! its own kind (see the [`rules`] module). Rules that rewrite a node into a new, larger
//! expression (distribution, expansion, rationalization) simplify that expression again.
//!
//! # Termination
//!
//! Each nested call to the simplifier increases a depth counter. Once the counter reaches
//! [`SimplifyOptions::max_depth`], the simplifier gives up on the sub-expression and returns it
//! unchanged, logging a warning. This bounds the work done on inputs whose rewrites would
//! otherwise grow without end.
//!
//! # Sharing
//!
//! If no rule changes a node, the simplifier returns the very same [`Rc`], so unchanged sub-trees
//! are never copied.

pub(crate) mod rules;
pub mod step;

use crate::error::MathError;
use std::rc::Rc;
use step::Step;
use super::{expr::SymExpr, step_collector::StepCollector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default value of [`SimplifyOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Options that control the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifyOptions {
    /// The maximum nesting depth of simplifier calls. Sub-expressions reached at this depth are
    /// returned as-is.
    pub max_depth: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SimplifyOptions {
    /// Returns these options with the given maximum depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// State shared by every rule during a single simplification.
pub(crate) struct Ctxt<'a> {
    options: SimplifyOptions,
    depth: usize,
    steps: &'a mut dyn StepCollector<Step>,
}

impl<'a> Ctxt<'a> {
    fn new(options: SimplifyOptions, steps: &'a mut dyn StepCollector<Step>) -> Self {
        Self { options, depth: 0, steps }
    }

    /// Records a step taken by a rule.
    pub(crate) fn push(&mut self, step: Step) {
        tracing::trace!(?step, depth = self.depth, "simplification step");
        self.steps.push(step);
    }

    /// Simplifies an expression, one level deeper than the caller.
    pub(crate) fn simplify(&mut self, expr: &Rc<SymExpr>) -> Result<Rc<SymExpr>, MathError> {
        if self.depth >= self.options.max_depth {
            tracing::warn!(
                max_depth = self.options.max_depth,
                %expr,
                "simplifier reached its depth limit; returning sub-expression unchanged",
            );
            return Ok(Rc::clone(expr));
        }

        self.depth += 1;
        let result = self.dispatch(expr);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, expr: &Rc<SymExpr>) -> Result<Rc<SymExpr>, MathError> {
        match &**expr {
            SymExpr::Number(_) | SymExpr::Variable(_) | SymExpr::Infinity(_) => Ok(Rc::clone(expr)),
            SymExpr::Sqrt(radicand) => rules::root::simplify_sqrt(expr, radicand, self),
            SymExpr::Power(base, exponent) => rules::power::simplify_power(expr, base, exponent, self),
            SymExpr::Mul(lhs, rhs) => rules::multiply::simplify_multiply(expr, lhs, rhs, self),
            SymExpr::Add(..) => rules::add::simplify_add(expr, self),
        }
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Rc<SymExpr>,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Rc<SymExpr>, MathError> {
    Ctxt::new(*options, step_collector).simplify(expr)
}

/// Simplify the given expression with the default options.
///
/// Returns an error if the expression is undefined, such as `0^0`, `∞-∞`, or the square root of
/// a negative number.
pub fn simplify(expr: &Rc<SymExpr>) -> Result<Rc<SymExpr>, MathError> {
    inner_simplify_with(expr, &SimplifyOptions::default(), &mut ())
}

/// Simplify the given expression with the given options.
pub fn simplify_with(
    expr: &Rc<SymExpr>,
    options: &SimplifyOptions,
) -> Result<Rc<SymExpr>, MathError> {
    inner_simplify_with(expr, options, &mut ())
}

/// Simplify the given expression with the default options. The steps taken by the simplifier are
/// also collected and returned, in the order they were applied.
pub fn simplify_with_steps(expr: &Rc<SymExpr>) -> Result<(Rc<SymExpr>, Vec<Step>), MathError> {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, &SimplifyOptions::default(), &mut steps)?;
    Ok((expr, steps))
}

#[cfg(test)]
mod tests {
    use crate::{
        error::kind::{DivisionByZero, NegativeRadicand},
        number::{Number, Rational},
        symbolic::expr::Sign,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    fn num(n: i64) -> Rc<SymExpr> {
        SymExpr::number(n)
    }

    fn frac(n: i64, d: i64) -> Rc<SymExpr> {
        SymExpr::number(Rational::from_ints(n, d).unwrap())
    }

    fn sqrt(n: i64) -> Rc<SymExpr> {
        SymExpr::sqrt(num(n))
    }

    fn x() -> Rc<SymExpr> {
        SymExpr::variable("x")
    }

    fn simplified(expr: Rc<SymExpr>) -> String {
        simplify(&expr).unwrap().to_string()
    }

    #[test]
    fn square_roots() {
        assert_eq!(simplified(sqrt(50)), "5√2");
        assert_eq!(simplified(sqrt(49)), "7");
        assert_eq!(simplified(sqrt(0)), "0");
        assert_eq!(simplified(SymExpr::sqrt(frac(9, 8))), "(3/2)√(1/2)");
    }

    #[test]
    fn like_radicals() {
        // 2√3 + 5√3
        let expr = SymExpr::add(
            SymExpr::multiply(num(2), sqrt(3)),
            SymExpr::multiply(num(5), sqrt(3)),
        );
        assert_eq!(simplified(expr), "7√3");

        // 2 + √3 + 3√3
        let expr = SymExpr::add(
            SymExpr::add(num(2), sqrt(3)),
            SymExpr::multiply(num(3), sqrt(3)),
        );
        assert_eq!(simplified(expr), "4√3+2");
    }

    #[test]
    fn powers_of_variables() {
        assert_eq!(simplified(SymExpr::power(x(), num(0))), "1");
        assert_eq!(simplified(SymExpr::power(x(), num(1))), "x");

        // x^2 * x^3
        let expr = SymExpr::multiply(
            SymExpr::power(x(), num(2)),
            SymExpr::power(x(), num(3)),
        );
        assert_eq!(simplified(expr), "x^5");
    }

    #[test]
    fn numeric_powers() {
        assert_eq!(simplified(SymExpr::power(num(8), frac(1, 3))), "2");
        assert_eq!(simplified(SymExpr::power(num(2), num(10))), "1024");
        assert_eq!(simplified(SymExpr::power(num(2), num(-2))), "1/4");
        assert_eq!(simplified(SymExpr::power(num(2), frac(3, 2))), "2√2");
        assert_eq!(simplified(SymExpr::power(num(-8), frac(1, 3))), "-2");
    }

    #[test]
    fn rationalize_denominator() {
        // 1 / (1 + √2)
        let expr = SymExpr::divide(num(1), SymExpr::add(num(1), sqrt(2)));
        assert_eq!(simplified(expr), "√2-1");
    }

    #[test]
    fn expand_square_of_sum() {
        // (1 + √2)^2
        let expr = SymExpr::power(SymExpr::add(num(1), sqrt(2)), num(2));
        assert_eq!(simplified(expr), "2√2+3");
    }

    #[test]
    fn merge_radicals() {
        assert_eq!(simplified(SymExpr::multiply(sqrt(2), sqrt(8))), "4");
        assert_eq!(simplified(SymExpr::multiply(sqrt(2), sqrt(3))), "√6");
    }

    #[test]
    fn undefined_forms() {
        assert_eq!(
            simplify(&SymExpr::power(num(0), num(0))),
            Err(MathError::undefined("0^0")),
        );
        assert_eq!(
            simplify(&SymExpr::add(
                SymExpr::infinity(Sign::Positive),
                SymExpr::infinity(Sign::Negative),
            )),
            Err(MathError::undefined("∞ - ∞")),
        );
        assert_eq!(
            simplify(&SymExpr::power(num(0), num(-1))),
            Err(MathError::from(DivisionByZero)),
        );
        assert_eq!(
            simplify(&sqrt(-4)),
            Err(MathError::from(NegativeRadicand { value: "-4".to_string() })),
        );
    }

    #[test]
    fn unchanged_expression_is_shared() {
        let expr = SymExpr::add(sqrt(3), SymExpr::multiply(num(2), x()));
        let result = simplify(&expr).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));
    }

    #[test]
    fn depth_limit() {
        // x + x with no depth to work with is returned as-is
        let expr = SymExpr::add(x(), x());
        let options = SimplifyOptions::default().with_max_depth(0);
        let result = simplify_with(&expr, &options).unwrap();
        assert!(Rc::ptr_eq(&expr, &result));

        assert_eq!(simplify(&expr).unwrap().to_string(), "2*x");
    }

    #[test]
    fn steps_are_collected() {
        let (result, steps) = simplify_with_steps(&SymExpr::power(x(), num(0))).unwrap();
        assert_eq!(result, num(1));
        assert_eq!(steps, vec![Step::PowerZero]);

        let (result, steps) = simplify_with_steps(&sqrt(50)).unwrap();
        assert_eq!(result.to_string(), "5√2");
        assert!(steps.contains(&Step::SqrtFactor));
    }

    #[test]
    fn numbers_stay_canonical() {
        let expr = SymExpr::multiply(frac(3, 2), num(4));
        let result = simplify(&expr).unwrap();
        assert!(matches!(result.as_number(), Some(Number::Int(6))));
    }

    fn arb_expr() -> impl Strategy<Value = Rc<SymExpr>> {
        let leaf = prop_oneof![
            (-20i64..20).prop_map(SymExpr::number),
            (0i64..60).prop_map(|n| SymExpr::sqrt(SymExpr::number(n))),
            prop_oneof![Just("x"), Just("y")].prop_map(SymExpr::variable),
        ];
        leaf.prop_recursive(3, 12, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| SymExpr::add(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| SymExpr::multiply(a, b)),
                (inner, 0i64..3).prop_map(|(a, n)| SymExpr::power(a, SymExpr::number(n))),
            ]
        })
    }

    proptest! {
        #[test]
        fn simplify_is_idempotent(expr in arb_expr()) {
            if let Ok(once) = simplify(&expr) {
                let twice = simplify(&once).unwrap();
                prop_assert_eq!(&once, &twice);
            }
        }
    }
}
