//! Exact manipulation of symbolic expressions.
//!
//! # Expression representation
//!
//! Expressions are immutable trees of [`SymExpr`] nodes, built with its constructor functions.
//! Sums and products are binary nodes, but every rule treats them as flat lists of terms and
//! factors, so `x + (y + z)` and `(x + y) + z` behave identically.
//!
//! # Simplification
//!
//! The [`simplify()`] function reduces an expression to a canonical form: square factors move out
//! of square roots, like terms and like factors combine, numeric powers are computed exactly, and
//! small powers of sums are expanded.
//!
//! ```
//! use cas_exact::symbolic::{simplify, SymExpr};
//!
//! // 2√3 + 5√3
//! let expr = SymExpr::add(
//!     SymExpr::multiply(SymExpr::number(2), SymExpr::sqrt(SymExpr::number(3))),
//!     SymExpr::multiply(SymExpr::number(5), SymExpr::sqrt(SymExpr::number(3))),
//! );
//! assert_eq!(simplify(&expr).unwrap().to_string(), "7√3");
//! ```
//!
//! Undefined forms such as `0^0`, `∞ - ∞`, and the square root of a negative number are reported
//! as a [`MathError`](crate::error::MathError).
//!
//! For more information, see the [`mod@simplify`] module.

pub mod expr;
pub mod hash;
pub mod simplify;
pub mod step_collector;

pub use expr::{Sign, SymExpr};
pub use hash::HashData;
pub use simplify::{simplify, simplify_with, simplify_with_steps, step::Step, SimplifyOptions};
pub use step_collector::StepCollector;
