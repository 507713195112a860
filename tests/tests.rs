//! Run with `cargo test --all-features`.

use std::rc::Rc;

use projemo::Event;
use projemo::projections::{Beam, ChargedFinalState, FinalState, VetoedFinalState};
use projemo::record::{FourMomentum, Particle, Record, Status};

macro_rules! realize {
    (miss: $event:expr, $candidate:expr) => {{
        let shared = $event.realize($candidate).unwrap();
        assert!(!projemo::testing::last_was_hit());
        shared
    }};
    (hit: $event:expr, $candidate:expr) => {{
        let shared = $event.realize($candidate).unwrap();
        assert!(projemo::testing::last_was_hit());
        shared
    }};
}

fn particle(pdg_id: i32, status: Status, pt: f64, eta: f64) -> Particle {
    Particle::new(pdg_id, status, FourMomentum::from_pt_eta_phi_e(pt, eta, 0.4, 2.0 * pt))
}

/// Ten particles, in MeV: charged and neutral, above and below 500,
/// plus a decayed intermediate that no final state may pick up.
fn sample_record() -> Record {
    Record::new(vec![
        particle(211, Status::Stable, 700.0, 0.3),    // pi+, charged, above
        particle(-211, Status::Stable, 200.0, -0.1),  // pi-, charged, below
        particle(22, Status::Stable, 900.0, 1.2),     // photon, neutral, above
        particle(11, Status::Stable, 650.0, -1.8),    // e-, charged, above
        particle(2112, Status::Stable, 800.0, 0.9),   // neutron, neutral, above
        particle(13, Status::Stable, 450.0, 2.1),     // mu-, charged, below
        particle(321, Status::Stable, 1200.0, -0.6),  // K+, charged, above
        particle(111, Status::Stable, 300.0, 0.0),    // pi0, neutral, below
        particle(-13, Status::Stable, 510.0, 1.0),    // mu+, charged, above
        particle(23, Status::Decayed, 5000.0, 0.0),   // Z, not final state
    ])
}

fn beamed_record() -> Record {
    Record::new(vec![
        Particle::new(2212, Status::Beam, FourMomentum::new(0.0, 0.0, 6500.0, 6500.0)),
        Particle::new(2212, Status::Beam, FourMomentum::new(0.0, 0.0, -6500.0, 6500.0)),
        particle(211, Status::Stable, 700.0, 0.3),
    ])
}

/// Equivalent candidates share one instance; the later ones are never
/// computed.
#[test]
fn test_idempotent_realization() {
    let record = sample_record();
    let event = Event::new(&record);

    let first = realize!(miss: event, FinalState::new().with_pt_min(500.0));
    let second = realize!(hit: event, FinalState::new().with_pt_min(500.0));
    assert!(Rc::ptr_eq(&first, &second));

    // A different cut is a different equivalence class.
    let other = realize!(miss: event, FinalState::new().with_pt_min(250.0));
    assert!(!Rc::ptr_eq(&first, &other));
    assert_eq!(event.realized(), 2);
}

/// "Charged particles with pT > 500 MeV" requested by two unrelated
/// analyses: one computation, one shared result.
#[test]
fn test_charged_scenario() {
    let record = sample_record();
    let event = Event::new(&record);

    let for_first_analysis =
        realize!(miss: event, ChargedFinalState::new(FinalState::new().with_pt_min(500.0)));
    let for_second_analysis =
        realize!(hit: event, ChargedFinalState::new(FinalState::new().with_pt_min(500.0)));

    assert!(Rc::ptr_eq(&for_first_analysis, &for_second_analysis));

    let ids: Vec<i32> =
        for_first_analysis.particles().iter().map(|p| p.pdg_id()).collect();
    assert_eq!(ids, vec![211, 11, 321, -13]);
}

/// A hidden common dependency is computed once and shared.
#[test]
fn test_structural_sharing() {
    let record = sample_record();
    let event = Event::new(&record);

    let fs = FinalState::new().with_pt_min(100.0);
    let _charged = realize!(miss: event, ChargedFinalState::new(fs.clone()));
    let vetoed = realize!(miss: event, VetoedFinalState::new(fs.clone()).veto_id(22));

    // Both kinds realized the same underlying final state: three classes in
    // total, and re-requesting the bare final state is a hit.
    assert_eq!(event.realized(), 3);
    let _again = realize!(hit: event, fs);

    assert!(vetoed.particles().iter().all(|p| p.pdg_id() != 22));
}

/// Beams and the derived collision energy.
#[test]
fn test_beams() {
    let record = beamed_record();
    let event = Event::new(&record);

    let beam = realize!(miss: event, Beam::new());
    let (a, b) = beam.beams().unwrap();
    assert_eq!(a.pdg_id(), 2212);
    assert_eq!(b.pdg_id(), 2212);
    assert!((beam.sqrt_s().unwrap() - 13000.0).abs() < 1e-6);

    let _again = realize!(hit: event, Beam::new());
}

/// Eta windows restrict the final state; the decayed Z never appears.
#[test]
fn test_final_state_cuts() {
    let record = sample_record();
    let event = Event::new(&record);

    let central = realize!(miss: event, FinalState::new().within_eta(-1.0, 1.0));
    assert!(central.particles().iter().all(|p| {
        let eta = p.momentum().eta();
        -1.0 <= eta && eta <= 1.0 && p.status() == Status::Stable
    }));

    // Same cuts spelled the same way: same class. Different window: new one.
    let _same = realize!(hit: event, FinalState::new().within_eta(-1.0, 1.0));
    let _wider = realize!(miss: event, FinalState::new().within_eta(-2.0, 2.0));
}
