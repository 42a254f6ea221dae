/// Receives integration events and decides whether the run should continue.
///
/// Solvers call [`observe`](Observer::observe) once per computed sample. An
/// observer returns `Some(action)` to request a solver-specific action (such
/// as stopping early) or `None` to let integration proceed.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer used by the `solve_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes a single event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
