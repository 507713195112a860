use std::cmp::Ordering;

use crate::cmp::{self, ParamOrd};
use crate::error::ProjectionError;
use crate::event::Event;
use crate::projection::Projection;
use crate::record::{Particle, Status};

/// The pair of incoming beam particles.
///
/// Fails with [`ProjectionError::NoBeams`] when the record holds fewer than
/// two particles flagged as beams, so analyses depending on beam kinematics
/// see the failure instead of a degenerate result.
#[derive(Debug, Clone, Default)]
pub struct Beam {
    beams: Option<(Particle, Particle)>,
}

impl Beam {
    pub fn new() -> Self {
        Self::default()
    }

    /// The beam pair, in record order. `Some` once realized.
    pub fn beams(&self) -> Option<(&Particle, &Particle)> {
        self.beams.as_ref().map(|(a, b)| (a, b))
    }

    /// The collision energy, the invariant mass of the beam pair.
    pub fn sqrt_s(&self) -> Option<f64> {
        self.beams.as_ref().map(|(a, b)| {
            let (pa, pb) = (a.momentum(), b.momentum());
            let e = pa.e + pb.e;
            let px = pa.px + pb.px;
            let py = pa.py + pb.py;
            let pz = pa.pz + pb.pz;
            let s = e * e - px * px - py * py - pz * pz;
            s.max(0.0).sqrt()
        })
    }
}

impl ParamOrd for Beam {
    // No construction parameters: any two beam projections are equivalent.
    fn param_cmp(&self, _: &Self) -> Ordering {
        Ordering::Equal
    }
}

impl Projection for Beam {
    fn name(&self) -> &'static str {
        "Beam"
    }

    fn project(&mut self, event: &Event) -> Result<(), ProjectionError> {
        let mut beams = event
            .record()
            .particles()
            .iter()
            .filter(|p| p.status() == Status::Beam);
        match (beams.next(), beams.next()) {
            (Some(a), Some(b)) => {
                self.beams = Some((a.clone(), b.clone()));
                Ok(())
            }
            _ => Err(ProjectionError::NoBeams),
        }
    }

    fn cmp_same_kind(&self, other: &dyn Projection) -> Ordering {
        cmp::by_params(self, other)
    }
}
