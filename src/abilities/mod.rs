//! Abilities domain: timed dash and slam plus the slam collision gate.

mod controller;
mod gate;
mod runtime;

pub use controller::Abilities;
pub use gate::CollisionGate;
pub use runtime::{AbilityKind, AbilityPhase, AbilityRuntime};
