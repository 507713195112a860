use std::any::Any;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::ProjectionError;
use crate::event::Event;

/// A derived computation over an event's collision record.
///
/// A projection is identified by its construction parameters (cuts, particle
/// selectors, thresholds) and its dependency projections, never by object
/// identity: two instances of the same kind whose parameters compare as
/// equal are interchangeable and the event cache computes only one of them.
///
/// An instance lives through at most three states: constructed, computed
/// (after a successful [`project`](Self::project)) and frozen, shared
/// immutably for the rest of the event's lifetime. A constructed instance
/// that turns out to be equivalent to an already registered one is simply
/// discarded; a failed computation is never registered.
pub trait Projection: Any + Debug {
    /// Short kind name used in logs.
    fn name(&self) -> &'static str;

    /// Populate the result payload from the event's record.
    ///
    /// Dependency projections must be obtained through [`Event::realize`],
    /// never by calling another projection's `project` directly, which would
    /// bypass the cache and risk duplicate work or divergent results within
    /// the same event. Projecting twice against the same event must yield
    /// identical results.
    fn project(&mut self, event: &Event) -> Result<(), ProjectionError>;

    /// Compare against another projection of the same concrete kind.
    ///
    /// The result must depend on construction parameters only, not on any
    /// field populated by [`project`](Self::project): the cache compares
    /// candidates before computing them. Kinds composed from a base kind
    /// must compare the base part first and inspect their own fields only
    /// when the base part is equal, which keeps the registry order
    /// consistent as kinds are layered. [`crate::cmp::by_params`] implements
    /// the downcast-and-compare step for kinds that implement
    /// [`ParamOrd`](crate::cmp::ParamOrd).
    fn cmp_same_kind(&self, other: &dyn Projection) -> Ordering;
}
