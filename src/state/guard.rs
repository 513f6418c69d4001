//! Guard predicates over session state.
//!
//! Guards are pure boolean functions deciding whether a request may be
//! dispatched. They keep mode checks out of the calculation engine.

/// Pure predicate evaluated before dispatching a request.
///
/// # Example
///
/// ```rust
/// use reckon::state::{Guard, SessionMode};
///
/// let scientific_only = Guard::new(|mode: &SessionMode| mode.is_scientific());
///
/// assert!(!scientific_only.check(&SessionMode::new(false)));
/// assert!(scientific_only.check(&SessionMode::new(true)));
/// ```
pub struct Guard<S> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether the guard lets a request through in this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
