//! Per-event projection interning and memoization.
//!
//! An [`Event`] wraps one externally owned collision [`Record`]. Analyses
//! derive quantities from the record through [`Projection`]s: computations
//! identified by their construction parameters rather than by object
//! identity. Realizing a projection through the event's cache computes it at
//! most once per event; every later request for an equivalent projection
//! (same kind, equivalent parameters and dependencies) shares the already
//! computed instance.
//!
//! ```
//! use projemo::Event;
//! use projemo::projections::FinalState;
//! use projemo::record::{FourMomentum, Particle, Record, Status};
//!
//! let record = Record::new(vec![
//!     Particle::new(211, Status::Stable, FourMomentum::from_pt_eta_phi_e(0.7, 0.1, 0.0, 0.9)),
//!     Particle::new(22, Status::Stable, FourMomentum::from_pt_eta_phi_e(0.3, -1.2, 1.0, 0.6)),
//! ]);
//!
//! let event = Event::new(&record);
//! let fs = event.realize(FinalState::new().with_pt_min(0.5))?;
//! assert_eq!(fs.particles().len(), 1);
//! # Ok::<(), projemo::ProjectionError>(())
//! ```
//!
//! [`Record`]: record::Record

pub mod cmp;
mod error;
mod event;
mod projection;
pub mod projections;
pub mod record;

#[cfg(feature = "testing")]
pub mod testing;

pub use crate::error::ProjectionError;
pub use crate::event::Event;
pub use crate::projection::Projection;

#[cfg(feature = "macros")]
pub use projemo_macros::Compare;
