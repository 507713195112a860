//! Bundled projection kinds.
//!
//! Each kind supplies the two halves of the projection contract: a
//! [`project`](crate::Projection::project) that derives the payload from the
//! event, and a same-kind comparison over its construction parameters. The
//! comparisons here are written by hand; downstream kinds can derive the
//! parameter chain with `#[derive(Compare)]` instead.

mod beam;
mod charged_final_state;
mod final_state;
mod vetoed_final_state;

pub use self::beam::Beam;
pub use self::charged_final_state::ChargedFinalState;
pub use self::final_state::FinalState;
pub use self::vetoed_final_state::VetoedFinalState;
