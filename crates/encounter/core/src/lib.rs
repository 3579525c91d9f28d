//! Deterministic disposition encounter rules.
//!
//! `encounter-core` resolves one card encounter between a hero and an enemy
//! along a bipolar disposition track that ends in either destruction or
//! subjugation. It is pure computation: no I/O, no clocks, no global
//! randomness. Every encounter owns its RNG and fate deck, and the whole
//! thing can be captured into an [`EncounterSnapshot`] and resumed
//! bit-exactly.
//!
//! All state mutation flows through [`CombatSimulation`]; the enemy side is
//! split into a pure [`enemy::resolve`] dispatcher and a swappable
//! [`EnemyPolicy`].
pub mod calculator;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod env;
pub mod error;
pub mod fate;
pub mod resonance;
pub mod snapshot;
pub mod state;

pub use calculator::{KeywordGates, PowerInputs, effective_cost, effective_power};
pub use config::EncounterConfig;
pub use enemy::{
    BehaviorState, EnemyAction, EnemyActionReport, EnemyArchetype, EnemyMode, EnemyPolicy,
    EnemyProfile, EnemyTuning, ModeSelector, WillProfile,
};
pub use engine::{ActionRejection, ActionReport, CombatSimulation, EncounterBuilder};
pub use env::{AffinityOracle, DeterministicRng, SeedStream, StaticAffinityTable, derive_seed};
pub use error::{EncounterError, ErrorSeverity};
pub use fate::{FateCard, FateDeck, FateDeckKind, FateDeckState, FateKeyword};
pub use resonance::{AlignmentCategory, ResonanceFamily, ResonanceZone};
pub use snapshot::{EncounterSnapshot, SnapshotError};
pub use state::{
    ActionCounts, ActionType, Card, CardId, CardKind, EchoRecord, EchoSlot, EncounterPhase,
    EncounterState, EnemyModifiers, MomentumState, Outcome,
};
