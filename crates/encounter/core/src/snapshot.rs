//! Snapshot and restore.
//!
//! An [`EncounterSnapshot`] holds everything a [`CombatSimulation`] needs to
//! resume bit-exactly: the full encounter state, both fate piles, and the RNG
//! token. Nothing is optional, so restoring never has to fill in defaults or
//! recompute the starting disposition.

use crate::engine::CombatSimulation;
use crate::env::DeterministicRng;
use crate::error::{EncounterError, ErrorSeverity};
use crate::fate::{FateDeck, FateDeckState};
use crate::state::EncounterState;

/// Immutable capture of a running encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSnapshot {
    /// Layout version; always the first encoded field.
    pub version: u32,
    pub state: EncounterState,
    pub fate: FateDeckState,
    pub rng_state: u64,
}

/// Errors from snapshot byte encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(String),

    #[error("snapshot version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

impl EncounterError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Encode(_) => ErrorSeverity::Internal,
            Self::Decode(_) | Self::VersionMismatch { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "SNAPSHOT_ENCODE",
            Self::Decode(_) => "SNAPSHOT_DECODE",
            Self::VersionMismatch { .. } => "SNAPSHOT_VERSION_MISMATCH",
        }
    }
}

impl EncounterSnapshot {
    pub const VERSION: u32 = 1;
}

#[cfg(feature = "serde")]
impl EncounterSnapshot {
    /// Encodes the snapshot with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Decodes a snapshot, refusing bytes written under another layout
    /// version before attempting the full decode.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let found: u32 =
            bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))?;
        if found != Self::VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: Self::VERSION,
                found,
            });
        }
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// SHA-256 over the encoded bytes.
    ///
    /// Two encounters with equal digests will produce identical futures, which
    /// makes this a cheap state root for replay comparison.
    pub fn digest(&self) -> Result<[u8; 32], SnapshotError> {
        use sha2::{Digest, Sha256};

        let bytes = self.encode()?;
        Ok(Sha256::digest(&bytes).into())
    }
}

impl CombatSimulation {
    pub fn capture(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            version: EncounterSnapshot::VERSION,
            state: self.state.clone(),
            fate: self.fate.state(),
            rng_state: self.rng.state(),
        }
    }

    pub fn restore(snapshot: EncounterSnapshot) -> Self {
        Self {
            state: snapshot.state,
            rng: DeterministicRng::from_state(snapshot.rng_state),
            fate: FateDeck::from_state(snapshot.fate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyArchetype;
    use crate::env::StaticAffinityTable;
    use crate::state::{Card, CardId, CardKind};

    fn sim() -> CombatSimulation {
        let hand = (1..=5).map(|id| Card::new(id, 4, 1, CardKind::Spiritual)).collect();
        CombatSimulation::builder(EnemyArchetype::sentient("oracle", 25), hand)
            .seed(77)
            .starting_disposition(10)
            .build(&StaticAffinityTable::new())
    }

    #[test]
    fn capture_then_restore_is_identity() {
        let mut sim = sim();
        sim.influence(CardId(1)).unwrap();
        sim.strike(CardId(2)).unwrap();
        let snapshot = sim.capture();
        assert_eq!(snapshot.version, EncounterSnapshot::VERSION);
        assert_eq!(CombatSimulation::restore(snapshot), sim);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bytes_round_trip_and_digest_is_stable() {
        let mut sim = sim();
        sim.strike(CardId(3)).unwrap();
        let snapshot = sim.capture();

        let bytes = snapshot.encode().unwrap();
        let decoded = EncounterSnapshot::decode(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.digest().unwrap(), snapshot.digest().unwrap());
        assert_eq!(hex::encode(snapshot.digest().unwrap()).len(), 64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decode_rejects_other_versions() {
        let mut snapshot = sim().capture();
        snapshot.version = 9;
        let bytes = snapshot.encode().unwrap();
        assert_eq!(
            EncounterSnapshot::decode(&bytes),
            Err(SnapshotError::VersionMismatch {
                expected: EncounterSnapshot::VERSION,
                found: 9
            })
        );
        assert!(matches!(
            EncounterSnapshot::decode(&[1, 0]),
            Err(SnapshotError::Decode(_))
        ));
    }
}
