/// Hook called by a solver once per iteration.
///
/// The bisection solver hands each iteration's event to its observer right
/// after recording it. Returning `Some(action)` asks the solver to act on
/// it (the bisection solver only knows how to stop early); `None` lets the
/// iteration continue.
///
/// A closure `FnMut(&E) -> Option<A>` works as an observer, which is how the
/// app echoes iterations to stderr. Pass `()` to observe nothing.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
