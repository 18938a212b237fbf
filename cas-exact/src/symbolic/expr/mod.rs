//! The symbolic expression tree.
//!
//! A [`SymExpr`] is an immutable tree of numbers, square roots, powers, products, sums,
//! variables, and signed infinities. Children are reference-counted, so sub-trees are freely
//! shared between expressions, and the simplifier returns the very same node for any sub-tree it
//! leaves unchanged.
//!
//! Products and sums are binary nodes, but most operations view them through their flattened
//! list of factors / terms: `x * (y * z)` has the factors `x`, `y`, and `z`.
//!
//! # Strict equality
//!
//! Deciding whether two expressions are mathematically equal is as hard as simplification
//! itself. Instead, the [`PartialEq`] and [`Eq`] implementations for [`SymExpr`] implement
//! **strict equality**. Two expressions are strictly equal if:
//!
//! - Both are [`SymExpr::Number`]s with the same value (regardless of representation).
//! - Both are the same [`SymExpr::Variable`] or the same [`SymExpr::Infinity`].
//! - Both are [`SymExpr::Sqrt`]s with strictly equal radicands, or [`SymExpr::Power`]s with
//! strictly equal bases and exponents.
//! - Both are [`SymExpr::Add`]s or both are [`SymExpr::Mul`]s, with strictly equal flattened
//! terms / factors, in any order.
//!
//! Strict equality never reports false positives, so the simplifier can use it to decide when
//! terms and factors can be combined. The [`Hash`] implementation agrees with it.

mod iter;

use crate::{
    consts,
    error::{
        kind::{NegativeRadicand, UnboundVariable},
        MathError,
    },
    number::{Number, Rational},
    primitive::float,
};
use iter::ExprIter;
use rug::{ops::Pow, Float};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Mul, Neg},
    rc::Rc,
};
use super::hash::structural_hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign of an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns `1` or `-1`.
    pub fn to_i8(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// A symbolic expression.
///
/// Nodes are constructed with the associated functions [`SymExpr::number`], [`SymExpr::sqrt`],
/// [`SymExpr::power`], [`SymExpr::multiply`], [`SymExpr::add`], [`SymExpr::variable`], and
/// [`SymExpr::infinity`], which perform no simplification. Use [`SymExpr::simplify`] to reduce an
/// expression to its normal form.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// An exact number, such as `2`, `10^30`, or `1/3`.
    Number(Number),

    /// The principal square root of an expression.
    Sqrt(Rc<SymExpr>),

    /// An expression raised to a power.
    Power(Rc<SymExpr>, Rc<SymExpr>),

    /// The product of two expressions.
    Mul(Rc<SymExpr>, Rc<SymExpr>),

    /// The sum of two expressions.
    Add(Rc<SymExpr>, Rc<SymExpr>),

    /// A named variable, such as `x`. The names `π`, `pi`, and `e` refer to the usual constants
    /// when evaluated numerically.
    Variable(String),

    /// Positive or negative infinity.
    Infinity(Sign),
}

impl SymExpr {
    pub fn number(n: impl Into<Number>) -> Rc<Self> {
        Rc::new(Self::Number(n.into()))
    }

    pub fn sqrt(radicand: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Sqrt(radicand))
    }

    pub fn power(base: Rc<Self>, exponent: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Power(base, exponent))
    }

    /// Creates a product. If only the right operand is a [`SymExpr::Number`], the operands are
    /// swapped so that the number comes first.
    pub fn multiply(lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        if rhs.is_number() && !lhs.is_number() {
            Rc::new(Self::Mul(rhs, lhs))
        } else {
            Rc::new(Self::Mul(lhs, rhs))
        }
    }

    pub fn add(lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Add(lhs, rhs))
    }

    pub fn variable(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::Variable(name.into()))
    }

    pub fn infinity(sign: Sign) -> Rc<Self> {
        Rc::new(Self::Infinity(sign))
    }

    /// Creates `-expr`, represented as `-1 * expr`.
    pub fn negate(expr: Rc<Self>) -> Rc<Self> {
        Self::multiply(Self::number(-1), expr)
    }

    /// Creates `lhs - rhs`, represented as `lhs + -1 * rhs`.
    pub fn subtract(lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        Self::add(lhs, Self::negate(rhs))
    }

    /// Creates `lhs / rhs`, represented as `lhs * rhs^-1`.
    pub fn divide(lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        Self::multiply(lhs, Self::power(rhs, Self::number(-1)))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// If the expression is a [`SymExpr::Number`], returns a reference to the number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the expression is a [`SymExpr::Number`], returns its value as a [`Rational`].
    pub fn as_rational(&self) -> Option<Rational> {
        self.as_number().map(Number::to_rational)
    }

    pub fn is_zero(&self) -> bool {
        self.as_number().map_or(false, Number::is_zero)
    }

    pub fn is_one(&self) -> bool {
        self.as_number().map_or(false, Number::is_one)
    }

    /// If the expression is a [`SymExpr::Infinity`], returns its sign.
    pub fn as_infinity(&self) -> Option<Sign> {
        match self {
            Self::Infinity(sign) => Some(*sign),
            _ => None,
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity(_))
    }

    /// Returns the sign of the expression's value, or [`None`] if it cannot be evaluated, such as
    /// when it contains a free variable. Zero counts as positive.
    ///
    /// Expressions other than numbers and infinities are evaluated numerically, so `-√2` and
    /// `1-√2` are both negative.
    pub fn sign(&self) -> Option<Sign> {
        let negative = match self {
            Self::Number(n) => n.is_negative(),
            Self::Infinity(sign) => return Some(*sign),
            _ => {
                let value = self.to_double().ok().filter(|x| !x.is_nan())?;
                value < 0.0
            },
        };
        Some(if negative { Sign::Negative } else { Sign::Positive })
    }

    /// Returns the flattened terms of the expression. An expression that is not a sum is its own
    /// single term.
    pub fn terms(self: &Rc<Self>) -> Vec<Rc<Self>> {
        fn push(expr: &Rc<SymExpr>, out: &mut Vec<Rc<SymExpr>>) {
            match &**expr {
                SymExpr::Add(lhs, rhs) => {
                    push(lhs, out);
                    push(rhs, out);
                },
                _ => out.push(Rc::clone(expr)),
            }
        }

        let mut out = Vec::new();
        push(self, &mut out);
        out
    }

    /// Returns the flattened factors of the expression. An expression that is not a product is
    /// its own single factor.
    pub fn factors(self: &Rc<Self>) -> Vec<Rc<Self>> {
        fn push(expr: &Rc<SymExpr>, out: &mut Vec<Rc<SymExpr>>) {
            match &**expr {
                SymExpr::Mul(lhs, rhs) => {
                    push(lhs, out);
                    push(rhs, out);
                },
                _ => out.push(Rc::clone(expr)),
            }
        }

        let mut out = Vec::new();
        push(self, &mut out);
        out
    }

    /// Collects references to the flattened terms of the expression.
    pub(crate) fn collect_terms<'a>(&'a self, out: &mut Vec<&'a SymExpr>) {
        match self {
            Self::Add(lhs, rhs) => {
                lhs.collect_terms(out);
                rhs.collect_terms(out);
            },
            _ => out.push(self),
        }
    }

    /// Collects references to the flattened factors of the expression.
    pub(crate) fn collect_factors<'a>(&'a self, out: &mut Vec<&'a SymExpr>) {
        match self {
            Self::Mul(lhs, rhs) => {
                lhs.collect_factors(out);
                rhs.collect_factors(out);
            },
            _ => out.push(self),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Simplifies the expression with the default options. See
    /// [`simplify`](crate::symbolic::simplify::simplify).
    pub fn simplify(self: &Rc<Self>) -> Result<Rc<Self>, MathError> {
        super::simplify::simplify(self)
    }

    /// Numerically evaluates the expression with [`PRECISION`](crate::primitive::PRECISION) bits
    /// of precision.
    ///
    /// `π`, `pi`, and `e` evaluate to their usual values; any other variable is an
    /// [`UnboundVariable`] error. The square root of a negative value is a [`NegativeRadicand`]
    /// error.
    pub fn to_float(&self) -> Result<Float, MathError> {
        Ok(match self {
            Self::Number(n) => n.to_float(),
            Self::Sqrt(radicand) => {
                let value = radicand.to_float()?;
                if value.cmp0() == Some(Ordering::Less) {
                    return Err(NegativeRadicand { value: radicand.to_string() }.into());
                }
                value.sqrt()
            },
            Self::Power(base, exponent) => base.to_float()?.pow(exponent.to_float()?),
            Self::Mul(lhs, rhs) => lhs.to_float()? * rhs.to_float()?,
            Self::Add(lhs, rhs) => lhs.to_float()? + rhs.to_float()?,
            Self::Variable(name) => consts::lookup(name)
                .cloned()
                .ok_or_else(|| UnboundVariable { name: name.clone() })?,
            Self::Infinity(Sign::Positive) => float(f64::INFINITY),
            Self::Infinity(Sign::Negative) => float(f64::NEG_INFINITY),
        })
    }

    /// Numerically evaluates the expression as an [`f64`]. See [`SymExpr::to_float`].
    pub fn to_double(&self) -> Result<f64, MathError> {
        self.to_float().map(|value| value.to_f64())
    }

    /// If the expression is a term with a negative numeric coefficient, returns the term with the
    /// coefficient negated. Used to print sums with subtraction.
    fn negated_term(&self) -> Option<SymExpr> {
        match self {
            Self::Number(n) if n.is_negative() => Some(Self::Number(-n)),
            Self::Mul(lhs, rhs) => {
                let n = lhs.as_number().filter(|n| n.is_negative())?;
                let magnitude = -n;
                if magnitude.is_one() {
                    Some((**rhs).clone())
                } else {
                    Some(Self::Mul(Rc::new(Self::Number(magnitude)), Rc::clone(rhs)))
                }
            },
            _ => None,
        }
    }
}

/// Returns true if two lists of expressions contain strictly equal elements, in any order.
fn same_elements(lhs: &[&SymExpr], rhs: &[&SymExpr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    for l in lhs {
        let found = rhs.iter()
            .enumerate()
            .position(|(i, r)| !used[i] && l == r);
        match found {
            Some(i) => used[i] = true,
            None => return false,
        }
    }

    true
}

/// Checks if two expressions are **strictly** equal. See the
/// [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Infinity(a), Self::Infinity(b)) => a == b,
            (Self::Sqrt(a), Self::Sqrt(b)) => a == b,
            (Self::Power(a, b), Self::Power(c, d)) => a == c && b == d,
            (Self::Add(..), Self::Add(..)) => {
                let (mut lhs, mut rhs) = (Vec::new(), Vec::new());
                self.collect_terms(&mut lhs);
                other.collect_terms(&mut rhs);
                same_elements(&lhs, &rhs)
            },
            (Self::Mul(..), Self::Mul(..)) => {
                let (mut lhs, mut rhs) = (Vec::new(), Vec::new());
                self.collect_factors(&mut lhs);
                other.collect_factors(&mut rhs);
                same_elements(&lhs, &rhs)
            },
            _ => false,
        }
    }
}

impl Eq for SymExpr {}

/// The hash is independent of the order and grouping of terms and factors, so that strictly
/// equal expressions hash identically.
impl Hash for SymExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(structural_hash(self));
    }
}

/// Returns true if the expression can be printed as an operand of `√` or `^` without
/// parentheses.
fn is_atomic(expr: &SymExpr, sqrt_is_atomic: bool) -> bool {
    match expr {
        SymExpr::Number(n) => n.is_integer() && !n.is_negative(),
        SymExpr::Variable(_) | SymExpr::Infinity(Sign::Positive) => true,
        SymExpr::Sqrt(_) => sqrt_is_atomic,
        _ => false,
    }
}

fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &SymExpr, sqrt_is_atomic: bool) -> fmt::Result {
    if is_atomic(expr, sqrt_is_atomic) {
        write!(f, "{}", expr)
    } else {
        write!(f, "({})", expr)
    }
}

/// Prints a factor of a product. Nested products need no parentheses.
fn fmt_factor(f: &mut fmt::Formatter<'_>, expr: &SymExpr) -> fmt::Result {
    match expr {
        SymExpr::Mul(..) | SymExpr::Power(..) => write!(f, "{}", expr),
        SymExpr::Number(n) if n.is_integer() => write!(f, "{}", n),
        _ => fmt_operand(f, expr, true),
    }
}

fn fmt_product(f: &mut fmt::Formatter<'_>, lhs: &SymExpr, rhs: &SymExpr) -> fmt::Result {
    if let (Some(n), false) = (lhs.as_number(), rhs.is_number()) {
        if n == &Number::Int(-1) {
            write!(f, "-")?;
            return fmt_factor(f, rhs);
        }

        // coefficients are written directly before a square root: `2√3`
        if let SymExpr::Sqrt(_) = rhs {
            if n.is_integer() {
                return write!(f, "{}{}", n, rhs);
            }
            return write!(f, "({}){}", n, rhs);
        }
    }

    fmt_factor(f, lhs)?;
    write!(f, "*")?;
    fmt_factor(f, rhs)
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Infinity(Sign::Positive) => write!(f, "∞"),
            Self::Infinity(Sign::Negative) => write!(f, "-∞"),
            Self::Sqrt(radicand) => {
                write!(f, "√")?;
                fmt_operand(f, radicand, true)
            },
            Self::Power(base, exponent) => {
                fmt_operand(f, base, false)?;
                write!(f, "^")?;
                fmt_operand(f, exponent, true)
            },
            Self::Mul(lhs, rhs) => fmt_product(f, lhs, rhs),
            Self::Add(..) => {
                let mut terms = Vec::new();
                self.collect_terms(&mut terms);

                let mut iter = terms.into_iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                }
                for term in iter {
                    match term.negated_term() {
                        Some(magnitude @ Self::Add(..)) => write!(f, "-({})", magnitude)?,
                        Some(magnitude) => write!(f, "-{}", magnitude)?,
                        None => write!(f, "+{}", term)?,
                    }
                }
                Ok(())
            },
        }
    }
}
