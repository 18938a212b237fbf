//! Constants that symbolic variables may be bound to during numerical evaluation.

use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::float;

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());

/// Returns the value of the named constant, if the name refers to one.
///
/// Both `π` and `pi` refer to pi.
pub fn lookup(name: &str) -> Option<&'static Float> {
    match name {
        "π" | "pi" => Some(&PI),
        "e" => Some(&E),
        _ => None,
    }
}
