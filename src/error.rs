use thiserror::Error;

/// Failure raised by a projection's `project` when its result cannot be
/// derived from the current event.
///
/// Failures always propagate synchronously to the caller of
/// [`Event::realize`](crate::Event::realize); the failed candidate is not
/// registered, so a later equivalent request re-attempts the computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The event record contains no identifiable beam particles.
    #[error("no identifiable beam particles in the event record")]
    NoBeams,

    /// The construction parameters cannot be satisfied by this event.
    #[error("projection `{projection}` is unsatisfiable: {reason}")]
    Unsatisfiable {
        /// The kind name of the failing projection.
        projection: &'static str,
        /// What the event was missing.
        reason: String,
    },
}

impl ProjectionError {
    /// Shorthand for kind implementors reporting unsatisfiable parameters.
    pub fn unsatisfiable(projection: &'static str, reason: impl Into<String>) -> Self {
        Self::Unsatisfiable { projection, reason: reason.into() }
    }
}
