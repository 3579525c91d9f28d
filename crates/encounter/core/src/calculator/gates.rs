//! Keyword exceptions evaluated before the power formula.
//!
//! Strike, influence, and echo all resolve their fate keyword through
//! [`evaluate`], so a keyword behaves the same no matter which path plays it.

use crate::config::EncounterConfig;
use crate::fate::FateKeyword;
use crate::state::ActionType;

/// Adjustments a keyword makes to one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordGates {
    /// Strike ignores the pending defend reduction.
    pub ignore_defend: bool,
    /// Influence ignores the pending provoke penalty.
    pub ignore_provoke: bool,
    /// Penalty added to the formula's subtraction side.
    pub keyword_penalty: u32,
    /// Strike deals no constructive-zone self-damage.
    pub ward: bool,
}

/// Evaluate the keyword gates for an action about to be played.
///
/// # Rules
///
/// - **Focus**: a strike at disposition `<= -EXTREME` ignores Defend; an
///   influence at disposition `>= EXTREME` ignores Provoke.
/// - **Shadow**: switching away from the previous action type costs
///   `SHADOW_SWITCH_PENALTY` extra power.
/// - **Ward**: flags the strike as warded.
/// - **Surge** is part of the formula itself; **Echo** has no gate.
pub fn evaluate(
    keyword: Option<FateKeyword>,
    action: ActionType,
    last_action: Option<ActionType>,
    disposition: i32,
) -> KeywordGates {
    let mut gates = KeywordGates::default();
    let Some(keyword) = keyword else {
        return gates;
    };

    match keyword {
        FateKeyword::Focus => match action {
            ActionType::Strike => {
                gates.ignore_defend = disposition <= -EncounterConfig::EXTREME_DISPOSITION;
            }
            ActionType::Influence => {
                gates.ignore_provoke = disposition >= EncounterConfig::EXTREME_DISPOSITION;
            }
            ActionType::Sacrifice => {}
        },
        FateKeyword::Shadow => {
            if last_action.is_some_and(|last| last != action) {
                gates.keyword_penalty = EncounterConfig::SHADOW_SWITCH_PENALTY as u32;
            }
        }
        FateKeyword::Ward => gates.ward = true,
        FateKeyword::Surge | FateKeyword::Echo => {}
    }

    gates
}
