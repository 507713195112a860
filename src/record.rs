//! The read-only collision record the core consumes.
//!
//! An upstream generator owns the full particle/vertex graph; the core only
//! needs an ordered collection of particles (PDG id, four-momentum, status)
//! plus the event weights. Everything here is plain data, immutable for the
//! whole lifetime of the events built on top of it.

/// A four-momentum in (px, py, pz, E) form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FourMomentum {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourMomentum {
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Build from collider coordinates: transverse momentum, pseudorapidity,
    /// azimuth and energy.
    pub fn from_pt_eta_phi_e(pt: f64, eta: f64, phi: f64, e: f64) -> Self {
        Self {
            px: pt * phi.cos(),
            py: pt * phi.sin(),
            pz: pt * eta.sinh(),
            e,
        }
    }

    /// Magnitude of the three-momentum.
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        (self.px * self.px + self.py * self.py).sqrt()
    }

    /// Pseudorapidity. Particles along the beam axis map to ±infinity.
    pub fn eta(&self) -> f64 {
        if self.pt() == 0.0 {
            if self.pz == 0.0 {
                0.0
            } else if self.pz > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            let p = self.p();
            0.5 * ((p + self.pz) / (p - self.pz)).ln()
        }
    }

    /// Azimuthal angle in (-pi, pi].
    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    /// Invariant mass, clamped to zero for spacelike rounding errors.
    pub fn mass(&self) -> f64 {
        let m2 = self.e * self.e - self.p() * self.p();
        m2.max(0.0).sqrt()
    }
}

/// Generator status of a particle, reduced to what the core reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// An incoming beam particle.
    Beam,
    /// A stable final-state particle.
    Stable,
    /// A decayed intermediate particle.
    Decayed,
    /// Any other generator-specific code.
    Other(i32),
}

/// One generated particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pdg_id: i32,
    status: Status,
    momentum: FourMomentum,
}

impl Particle {
    pub fn new(pdg_id: i32, status: Status, momentum: FourMomentum) -> Self {
        Self { pdg_id, status, momentum }
    }

    /// The PDG particle id; negative values are antiparticles.
    pub fn pdg_id(&self) -> i32 {
        self.pdg_id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn momentum(&self) -> &FourMomentum {
        &self.momentum
    }

    /// Three times the electric charge, from a table of common PDG ids.
    /// Unknown ids count as neutral.
    pub fn charge3(&self) -> i32 {
        let charge = match self.pdg_id.abs() {
            // Charged leptons. The positive id is the negative particle.
            11 | 13 | 15 => -3,
            // Neutrinos, gauge/Higgs bosons, neutral hadrons.
            12 | 14 | 16 | 21 | 22 | 23 | 25 | 111 | 130 | 310 | 421 | 2112 => 0,
            // W and common positively charged hadrons.
            24 | 211 | 321 | 411 | 431 | 521 | 2212 | 3222 => 3,
            // Common negatively charged baryons.
            3112 | 3312 | 3334 => -3,
            _ => 0,
        };
        if self.pdg_id < 0 { -charge } else { charge }
    }

    pub fn is_charged(&self) -> bool {
        self.charge3() != 0
    }
}

/// One simulated collision record: an ordered particle collection plus the
/// generator's weights.
#[derive(Debug, Clone, Default)]
pub struct Record {
    particles: Vec<Particle>,
    weights: Vec<f64>,
}

impl Record {
    /// A record with no explicit weights (the event weight defaults to 1.0).
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, weights: Vec::new() }
    }

    /// Append a generator weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weights.push(weight);
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The event weight: the first generator weight, or 1.0 when none are
    /// present.
    pub fn weight(&self) -> f64 {
        self.weights.first().copied().unwrap_or(1.0)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
