use std::cmp::Ordering;

use crate::cmp::{self, ParamOrd};
use crate::error::ProjectionError;
use crate::event::Event;
use crate::projection::Projection;
use crate::projections::FinalState;
use crate::record::Particle;

/// The charged particles of an underlying final state.
#[derive(Debug, Clone, Default)]
pub struct ChargedFinalState {
    fs: FinalState,
    particles: Vec<Particle>,
}

impl ChargedFinalState {
    pub fn new(fs: FinalState) -> Self {
        Self { fs, particles: Vec::new() }
    }

    /// The selected charged particles, in record order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl ParamOrd for ChargedFinalState {
    // Fully determined by the underlying final state.
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.fs.param_cmp(&other.fs)
    }
}

impl Projection for ChargedFinalState {
    fn name(&self) -> &'static str {
        "ChargedFinalState"
    }

    fn project(&mut self, event: &Event) -> Result<(), ProjectionError> {
        let fs = event.realize(self.fs.clone())?;
        self.particles =
            fs.particles().iter().filter(|p| p.is_charged()).cloned().collect();
        Ok(())
    }

    fn cmp_same_kind(&self, other: &dyn Projection) -> Ordering {
        cmp::by_params(self, other)
    }
}
