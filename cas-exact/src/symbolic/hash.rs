//! Order-independent hashing of expressions, and the [`HashData`] used to collect like terms.

use crate::number::{Number, Rational};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    rc::Rc,
};
use super::expr::{Sign, SymExpr};

const SQRT_SALT: u64 = 0x5157_5254_0000_0001;
const POWER_SALT: u64 = 0x504f_5745_5200_0002;
const MUL_SALT: u64 = 0x4d55_4c00_0000_0003;
const ADD_SALT: u64 = 0x4144_4400_0000_0004;
const INFINITY_SALT: u64 = 0x494e_4600_0000_0005;

/// Scrambles the bits of a hash so that combining hashes with `+` and `*` stays well
/// distributed.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn hash_value(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Computes a hash of the expression that is independent of the order and grouping of the terms
/// of a sum and the factors of a product. Numbers hash by value.
///
/// Terms are combined with wrapping addition and factors with wrapping multiplication, both of
/// which are commutative and associative.
pub fn structural_hash(expr: &SymExpr) -> u64 {
    match expr {
        SymExpr::Number(n) => hash_value(n),
        SymExpr::Variable(name) => hash_value(name),
        SymExpr::Infinity(sign) => INFINITY_SALT ^ (*sign == Sign::Negative) as u64,
        SymExpr::Sqrt(radicand) => mix(structural_hash(radicand) ^ SQRT_SALT),
        SymExpr::Power(base, exponent) => {
            mix(structural_hash(base) ^ mix(structural_hash(exponent)).rotate_left(17) ^ POWER_SALT)
        },
        SymExpr::Mul(..) => {
            let mut factors = Vec::new();
            expr.collect_factors(&mut factors);
            factors.into_iter()
                .fold(1u64, |acc, factor| acc.wrapping_mul(mix(structural_hash(factor)) | 1))
                ^ MUL_SALT
        },
        SymExpr::Add(..) => {
            let mut terms = Vec::new();
            expr.collect_terms(&mut terms);
            terms.into_iter()
                .fold(0u64, |acc, term| acc.wrapping_add(mix(structural_hash(term))))
                ^ ADD_SALT
        },
    }
}

/// The decomposition of a term of a sum into `coefficient * √radicand * residual`, where the
/// coefficient and radicand are exact rationals and the residual is the product of the term's
/// remaining, non-numeric factors.
///
/// Two terms are like terms, and can be combined by adding their coefficients, if they have equal
/// radicands and strictly equal residuals. The [`HashData::hash`] of the residual is compared
/// first, so most unlike terms are rejected without a structural comparison.
#[derive(Debug, Clone)]
pub struct HashData {
    /// The numeric coefficient of the term.
    pub coefficient: Rational,

    /// The rational under the square root, or one if the term has no numeric square root.
    pub radicand: Rational,

    /// The product of the term's other factors, or [`None`] if it has none.
    pub residual: Option<Rc<SymExpr>>,

    /// The structural hash of the residual, or zero if there is none.
    pub hash: u64,
}

impl HashData {
    /// Decomposes the given term.
    pub fn new(term: &Rc<SymExpr>) -> Self {
        match &**term {
            SymExpr::Number(n) => Self {
                coefficient: n.to_rational(),
                radicand: Rational::one(),
                residual: None,
                hash: 0,
            },
            SymExpr::Sqrt(radicand) if radicand.as_number().map_or(false, |n| !n.is_negative()) => {
                Self {
                    coefficient: Rational::one(),
                    radicand: radicand.as_rational().unwrap_or_else(Rational::one),
                    residual: None,
                    hash: 0,
                }
            },
            SymExpr::Mul(lhs, rhs) => {
                let (lhs, rhs) = (Self::new(lhs), Self::new(rhs));
                let residual = match (lhs.residual, rhs.residual) {
                    (Some(a), Some(b)) => Some(SymExpr::multiply(a, b)),
                    (a, b) => a.or(b),
                };
                Self {
                    coefficient: &lhs.coefficient * &rhs.coefficient,
                    radicand: &lhs.radicand * &rhs.radicand,
                    hash: residual.as_deref().map_or(0, structural_hash),
                    residual,
                }
            },
            _ => Self {
                coefficient: Rational::one(),
                radicand: Rational::one(),
                hash: structural_hash(term),
                residual: Some(Rc::clone(term)),
            },
        }
    }

    /// Returns true if the term has no residual and no square root, i.e. it is a plain number.
    pub fn is_number(&self) -> bool {
        self.residual.is_none() && self.radicand.is_one()
    }

    /// Returns true if the term is a rational multiple of a numeric square root.
    pub fn is_radical(&self) -> bool {
        self.residual.is_none() && !self.radicand.is_one()
    }

    /// Returns true if the two terms differ only in their coefficient.
    pub fn is_like(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.radicand == other.radicand
            && self.residual == other.residual
    }

    /// Rebuilds the term `coefficient * √radicand * residual`.
    pub fn into_term(self) -> Rc<SymExpr> {
        let root = (!self.radicand.is_one())
            .then(|| SymExpr::sqrt(SymExpr::number(Number::from_rational(self.radicand))));
        let rest = match (root, self.residual) {
            (Some(root), Some(residual)) => Some(SymExpr::multiply(root, residual)),
            (root, residual) => root.or(residual),
        };

        match rest {
            None => SymExpr::number(Number::from_rational(self.coefficient)),
            Some(rest) if self.coefficient.is_one() => rest,
            Some(rest) => SymExpr::multiply(
                SymExpr::number(Number::from_rational(self.coefficient)),
                rest,
            ),
        }
    }
}
