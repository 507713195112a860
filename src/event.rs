use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::cmp;
use crate::error::ProjectionError;
use crate::projection::Projection;
use crate::record::Record;

/// One collision record under analysis, together with the registry of
/// projections realized against it so far.
///
/// The record is owned externally and must outlive the event. The registry
/// lives and dies with the event: projections realized here are never valid
/// against another event, and a fresh event always starts empty.
///
/// Events are single-threaded by construction (`RefCell`, `Rc`). To process
/// several events in parallel, give each worker thread exclusive ownership
/// of its own event; the registry needs no coordination beyond that.
pub struct Event<'r> {
    /// The externally owned particle record.
    record: &'r Record,
    /// The scalar event weight.
    weight: f64,
    /// Realized projections, sorted by [`cmp::projections`]. Never contains
    /// two entries that compare as equal.
    registry: RefCell<Vec<Rc<dyn Projection>>>,
}

impl<'r> Event<'r> {
    /// Wrap a collision record for analysis.
    ///
    /// The event weight is the record's first weight, or 1.0 if the record
    /// carries none.
    pub fn new(record: &'r Record) -> Self {
        Self {
            record,
            weight: record.weight(),
            registry: RefCell::new(Vec::new()),
        }
    }

    /// The underlying particle record.
    pub fn record(&self) -> &'r Record {
        self.record
    }

    /// The weight associated with the event.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// How many distinct projection equivalence classes have been realized.
    pub fn realized(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Obtain the canonical, computed instance for a requested projection.
    ///
    /// If an equivalent projection has been realized against this event
    /// before, the candidate is discarded without being computed and the
    /// registered instance is returned. Otherwise the candidate's
    /// [`project`](Projection::project) runs (recursively realizing its
    /// dependencies through this same cache), and on success the candidate
    /// is registered and returned. On failure nothing is registered and the
    /// error propagates, so a later equivalent request tries again.
    pub fn realize<P>(&self, candidate: P) -> Result<Rc<P>, ProjectionError>
    where
        P: Projection,
    {
        {
            let registry = self.registry.borrow();
            let found = registry
                .binary_search_by(|entry| cmp::projections(entry.as_ref(), &candidate));
            if let Ok(index) = found {
                trace!(kind = candidate.name(), "reusing equivalent projection");
                #[cfg(feature = "testing")]
                crate::testing::register_hit();
                return Ok(Self::downcast(registry[index].clone()));
            }
        }
        // The registry borrow is released before computing, so that the
        // candidate can realize its own dependencies through this cache.
        trace!(kind = candidate.name(), "projecting fresh instance");
        let mut fresh = candidate;
        fresh.project(self)?;

        #[cfg(feature = "testing")]
        crate::testing::register_miss();

        let shared: Rc<dyn Projection> = Rc::new(fresh);
        let mut registry = self.registry.borrow_mut();
        let position = registry
            .binary_search_by(|entry| cmp::projections(entry.as_ref(), shared.as_ref()));
        let canonical = match position {
            // A nested realization registered an equivalent in the meantime;
            // the registered instance stays canonical.
            Ok(index) => registry[index].clone(),
            Err(index) => {
                registry.insert(index, shared.clone());
                shared
            }
        };
        Ok(Self::downcast(canonical))
    }

    /// Recover the concrete kind behind a registry entry.
    ///
    /// The registry order compares kind descriptors before parameters, so an
    /// entry that compared as equal to a `P` candidate is a `P`.
    fn downcast<P: Projection>(shared: Rc<dyn Projection>) -> Rc<P> {
        let any: Rc<dyn Any> = shared;
        any.downcast().expect("registry entry has a mismatched kind")
    }
}
