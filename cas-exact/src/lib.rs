//! Exact arithmetic and symbolic simplification for CalcScript.
//!
//! This crate is the exact core of the interpreter:
//!
//! - [`number`] contains the exact members of the numeric tower, arbitrary precision
//!   [`BigInteger`](number::BigInteger)s and [`Rational`](number::Rational)s.
//! - [`symbolic`] contains the [`SymExpr`](symbolic::SymExpr) expression tree and the simplifier
//!   that reduces it to a canonical form.
//! - [`numerical`] decides which member of the tower the result of a binary operation should be,
//!   preferring exact results wherever possible.
//!
//! ```
//! use cas_exact::numerical::{eval_operands, BinOpKind, Value};
//! use cas_exact::number::Rational;
//!
//! let third = Value::from(Rational::from_ints(1, 3).unwrap());
//! let sixth = Value::from(Rational::from_ints(1, 6).unwrap());
//! let sum = eval_operands(BinOpKind::Add, third, sixth).unwrap();
//! assert_eq!(sum.to_string(), "1/2");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for the numeric types, expressions, and
//!   values provided by this crate.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod approx;
pub mod consts;
pub mod error;
pub mod number;
pub mod numerical;
pub mod primitive;
pub mod symbolic;
