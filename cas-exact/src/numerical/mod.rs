//! The dynamically typed side of the numeric tower.
//!
//! [`Value`] holds any member of the tower, and [`eval_operands`] applies a binary operator to two
//! values, choosing the representation of the result.

pub mod binary;
pub mod value;

pub use binary::{eval_operands, BinOpKind};
pub use value::Value;
