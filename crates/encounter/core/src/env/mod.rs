//! Collaborator-facing inputs of an encounter.
//!
//! The encounter reads outside data through narrow oracle traits so it never
//! couples to the content pack that provides it, and owns its randomness
//! through an explicitly seeded generator.
mod affinity;
mod rng;

pub use affinity::{AffinityOracle, StaticAffinityTable};
pub use rng::{DeterministicRng, SeedStream, derive_seed};
