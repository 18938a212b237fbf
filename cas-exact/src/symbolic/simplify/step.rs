#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `√∞ = ∞`
    /// `a+∞ = ∞`
    /// `-2*∞ = -∞`
    /// `(-∞)^3 = -∞`
    /// `2^-∞ = 0`
    Infinity,

    /// `√50 = 5√2`
    /// `√49 = 7`
    /// `√(9/8) = (3/2)√(1/2)`
    SqrtFactor,

    /// `√(a^2) = a`
    /// `√(a*a) = a`
    SqrtOfSquare,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3 = 6`
    /// `(1/2)*4 = 2`
    MultiplyNumbers,

    /// `a*(b+c) = a*b + a*c`
    DistributiveProperty,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// `√a*√a = a`
    CombineLikeFactors,

    /// `√2*√3 = √6`
    /// `2^(1/3)*3^(1/3) = 6^(1/3)`
    CombineLikeRoots,

    /// `2*a*3 = 6*a`
    /// `a*2 = 2*a`
    CollectCoefficients,

    /// `√a*√b = √(a*b)`
    MergeRadicals,

    /// `2√3+5√3 = 7√3`
    /// `1+2 = 3`
    /// `a+a = 2*a`
    CombineLikeTerms,

    /// `a-a = 0`
    /// `a+0 = a`
    AddZero,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,

    /// `2^3 = 8`
    /// `(2/3)^-2 = 9/4`
    PowerNumbers,

    /// `8^(1/3) = 2`
    /// `(4/9)^(3/2) = 8/27`
    ExactRoot,

    /// `2^(3/2) = √8`
    PowerToSqrt,

    /// `(-8)^(1/3) = -(8^(1/3))`
    OddRootOfNegative,

    /// `(a^b)^c = a^(b*c)`
    /// `(√a)^b = a^(b/2)`
    PowerPower,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `(a+b)^2 = (a+b)*(a+b)`
    ExpandPower,

    /// `1/(1+√2) = √2-1`
    RationalizeDenominator,
}
