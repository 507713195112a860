use std::cmp::Ordering;

use crate::cmp::{self, ParamOrd};
use crate::error::ProjectionError;
use crate::event::Event;
use crate::projection::Projection;
use crate::record::{Particle, Status};

/// Stable final-state particles within optional kinematic cuts.
///
/// The base of most particle-level projections: a transverse-momentum
/// threshold plus an optional pseudorapidity window.
#[derive(Debug, Clone, Default)]
pub struct FinalState {
    pt_min: f64,
    eta: Option<(f64, f64)>,
    particles: Vec<Particle>,
}

impl FinalState {
    /// All stable final-state particles, no cuts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a transverse momentum of at least `pt_min`.
    pub fn with_pt_min(mut self, pt_min: f64) -> Self {
        self.pt_min = pt_min;
        self
    }

    /// Restrict to the pseudorapidity window `[lo, hi]`.
    pub fn within_eta(mut self, lo: f64, hi: f64) -> Self {
        self.eta = Some((lo, hi));
        self
    }

    /// The selected particles, in record order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn accept(&self, particle: &Particle) -> bool {
        particle.status() == Status::Stable
            && particle.momentum().pt() >= self.pt_min
            && self.eta.is_none_or(|(lo, hi)| {
                let eta = particle.momentum().eta();
                lo <= eta && eta <= hi
            })
    }
}

impl ParamOrd for FinalState {
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.pt_min
            .param_cmp(&other.pt_min)
            .then_with(|| self.eta.param_cmp(&other.eta))
    }
}

impl Projection for FinalState {
    fn name(&self) -> &'static str {
        "FinalState"
    }

    fn project(&mut self, event: &Event) -> Result<(), ProjectionError> {
        self.particles = event
            .record()
            .particles()
            .iter()
            .filter(|p| self.accept(p))
            .cloned()
            .collect();
        Ok(())
    }

    fn cmp_same_kind(&self, other: &dyn Projection) -> Ordering {
        cmp::by_params(self, other)
    }
}
