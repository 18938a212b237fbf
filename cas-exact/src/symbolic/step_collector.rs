/// A type that collects the rewrite steps taken by the simplifier, in the order they are applied.
///
/// Implemented for the unit type `()`, which discards every step, and for [`Vec`], which keeps
/// them all. [`simplify_with_steps`](super::simplify::simplify_with_steps) uses the latter.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
