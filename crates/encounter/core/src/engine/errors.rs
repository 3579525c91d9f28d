//! Rejections returned by the combat simulation.

use crate::error::{EncounterError, ErrorSeverity};
use crate::state::{CardId, EncounterPhase, Outcome};

/// Why an action was refused.
///
/// A rejected call never mutates the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionRejection {
    #[error("encounter already resolved: {outcome}")]
    EncounterFinished { outcome: Outcome },

    #[error("hero has been defeated")]
    HeroDefeated,

    #[error("player actions are not accepted during {phase}")]
    NotPlayerTurn { phase: EncounterPhase },

    #[error("a new player turn can only begin after the enemy turn, not during {phase}")]
    NotEnemyTurn { phase: EncounterPhase },

    #[error("{card} is not in hand")]
    CardNotInHand { card: CardId },

    #[error("insufficient energy: required {required}, available {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("sacrifice already used this turn")]
    SacrificeAlreadyUsed,

    #[error("no action to echo")]
    NothingToEcho,

    #[error("cannot echo a sacrifice")]
    EchoAfterSacrifice,

    #[error("previous action was already echoed")]
    EchoAlreadyUsed,
}

impl EncounterError for ActionRejection {
    fn severity(&self) -> ErrorSeverity {
        use ActionRejection::*;
        match self {
            EncounterFinished { .. } | HeroDefeated => ErrorSeverity::Fatal,
            CardNotInHand { .. } => ErrorSeverity::Validation,
            NotPlayerTurn { .. }
            | NotEnemyTurn { .. }
            | InsufficientEnergy { .. }
            | SacrificeAlreadyUsed
            | NothingToEcho
            | EchoAfterSacrifice
            | EchoAlreadyUsed => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionRejection::*;
        match self {
            EncounterFinished { .. } => "ACTION_ENCOUNTER_FINISHED",
            HeroDefeated => "ACTION_HERO_DEFEATED",
            NotPlayerTurn { .. } => "ACTION_NOT_PLAYER_TURN",
            NotEnemyTurn { .. } => "ACTION_NOT_ENEMY_TURN",
            CardNotInHand { .. } => "ACTION_CARD_NOT_IN_HAND",
            InsufficientEnergy { .. } => "ACTION_INSUFFICIENT_ENERGY",
            SacrificeAlreadyUsed => "ACTION_SACRIFICE_ALREADY_USED",
            NothingToEcho => "ACTION_NOTHING_TO_ECHO",
            EchoAfterSacrifice => "ACTION_ECHO_AFTER_SACRIFICE",
            EchoAlreadyUsed => "ACTION_ECHO_ALREADY_USED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_rejections_are_fatal() {
        let finished = ActionRejection::EncounterFinished {
            outcome: Outcome::Destroyed,
        };
        assert_eq!(finished.severity(), ErrorSeverity::Fatal);
        assert_eq!(finished.to_string(), "encounter already resolved: destroyed");
        assert!(ActionRejection::HeroDefeated.severity().is_internal());
    }

    #[test]
    fn codes_and_messages() {
        let missing = ActionRejection::CardNotInHand { card: CardId(7) };
        assert_eq!(missing.error_code(), "ACTION_CARD_NOT_IN_HAND");
        assert_eq!(missing.to_string(), "card#7 is not in hand");

        let energy = ActionRejection::InsufficientEnergy {
            required: 3,
            available: 1,
        };
        assert!(energy.severity().is_recoverable());

        let early = ActionRejection::NotEnemyTurn {
            phase: EncounterPhase::PlayerTurn,
        };
        assert_eq!(early.error_code(), "ACTION_NOT_ENEMY_TURN");
        assert!(early.severity().is_recoverable());
        assert_eq!(
            energy.to_string(),
            "insufficient energy: required 3, available 1"
        );
    }
}
