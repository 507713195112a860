use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::cmp::{self, ParamOrd};
use crate::error::ProjectionError;
use crate::event::Event;
use crate::projection::Projection;
use crate::projections::FinalState;
use crate::record::Particle;

/// A final state with a set of PDG ids removed.
#[derive(Debug, Clone, Default)]
pub struct VetoedFinalState {
    fs: FinalState,
    veto: BTreeSet<i32>,
    particles: Vec<Particle>,
}

impl VetoedFinalState {
    pub fn new(fs: FinalState) -> Self {
        Self { fs, veto: BTreeSet::new(), particles: Vec::new() }
    }

    /// Also veto particles with the given PDG id.
    pub fn veto_id(mut self, pdg_id: i32) -> Self {
        self.veto.insert(pdg_id);
        self
    }

    /// The surviving particles, in record order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl ParamOrd for VetoedFinalState {
    // Base final state first, own veto set only on a tie.
    fn param_cmp(&self, other: &Self) -> Ordering {
        self.fs
            .param_cmp(&other.fs)
            .then_with(|| self.veto.param_cmp(&other.veto))
    }
}

impl Projection for VetoedFinalState {
    fn name(&self) -> &'static str {
        "VetoedFinalState"
    }

    fn project(&mut self, event: &Event) -> Result<(), ProjectionError> {
        let fs = event.realize(self.fs.clone())?;
        self.particles = fs
            .particles()
            .iter()
            .filter(|p| !self.veto.contains(&p.pdg_id()))
            .cloned()
            .collect();
        Ok(())
    }

    fn cmp_same_kind(&self, other: &dyn Projection) -> Ordering {
        cmp::by_params(self, other)
    }
}
