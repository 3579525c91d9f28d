//! Player action types and momentum (streak) tracking.

/// Kind of player action.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionType {
    /// Pushes disposition towards destroyed.
    Strike,
    /// Pushes disposition towards subjugated.
    Influence,
    /// Exhausts a card for energy at the cost of a permanent enemy buff.
    Sacrifice,
}

/// Consecutive-action tracking.
///
/// `streak_count` is 0 only before the first recorded action; afterwards it is
/// at least 1, resets to 1 when the action type changes, and grows by one on
/// every repetition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumState {
    pub last_action: Option<ActionType>,
    pub streak_type: Option<ActionType>,
    pub streak_count: u32,
}

impl MomentumState {
    pub const fn new() -> Self {
        Self {
            last_action: None,
            streak_type: None,
            streak_count: 0,
        }
    }

    /// Streak count the given action would have if it were played now.
    pub fn prospective_streak(&self, action: ActionType) -> u32 {
        if self.streak_type == Some(action) {
            self.streak_count + 1
        } else {
            1
        }
    }

    /// Bonus the current streak grants, `streak_count - 1` floored at 0.
    pub fn streak_bonus(&self) -> u32 {
        self.streak_count.saturating_sub(1)
    }

    /// Records a played action.
    pub fn record(&mut self, action: ActionType) {
        self.streak_count = self.prospective_streak(action);
        self.streak_type = Some(action);
        self.last_action = Some(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetition_grows_and_switch_resets() {
        let mut momentum = MomentumState::new();
        assert_eq!(momentum.prospective_streak(ActionType::Strike), 1);

        momentum.record(ActionType::Strike);
        momentum.record(ActionType::Strike);
        momentum.record(ActionType::Strike);
        assert_eq!(momentum.streak_count, 3);
        assert_eq!(momentum.streak_bonus(), 2);
        assert_eq!(momentum.prospective_streak(ActionType::Strike), 4);
        assert_eq!(momentum.prospective_streak(ActionType::Influence), 1);

        momentum.record(ActionType::Influence);
        assert_eq!(momentum.streak_count, 1);
        assert_eq!(momentum.streak_type, Some(ActionType::Influence));
        assert_eq!(momentum.last_action, Some(ActionType::Influence));
    }

    #[test]
    fn action_type_parses_from_snake_case() {
        assert_eq!("strike".parse::<ActionType>(), Ok(ActionType::Strike));
        assert_eq!("INFLUENCE".parse::<ActionType>(), Ok(ActionType::Influence));
        assert_eq!(ActionType::Sacrifice.to_string(), "sacrifice");
    }
}
