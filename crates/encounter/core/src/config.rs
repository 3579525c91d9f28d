/// Encounter rule constants and per-encounter tunable parameters.
///
/// The config is fixed when an encounter is built and travels with the
/// encounter state, so a restored snapshot always resolves with the rules it
/// was captured under.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    /// Energy restored at the start of every player turn.
    pub starting_energy: u32,

    /// Probability that a sacrifice in a constructive zone exhausts one extra
    /// card from hand.
    pub sacrifice_exhaust_chance: f64,
}

impl EncounterConfig {
    // ===== disposition track =====
    pub const DISPOSITION_MIN: i32 = -100;
    pub const DISPOSITION_MAX: i32 = 100;
    /// Starting dispositions are kept strictly inside the track so that an
    /// encounter never begins already resolved.
    pub const STARTING_DISPOSITION_LIMIT: i32 = 99;

    // ===== power formula =====
    pub const POWER_CAP: i32 = 25;
    pub const THREAT_BONUS: i32 = 2;
    pub const RESONANCE_BONUS: i32 = 2;
    pub const SHADOW_SWITCH_PENALTY: i32 = 2;
    /// Distance from zero at which Focus starts ignoring enemy modifiers.
    pub const EXTREME_DISPOSITION: i32 = 75;

    // ===== hero =====
    pub const CONSTRUCTIVE_STRIKE_SELF_DAMAGE: u32 = 1;

    // ===== energy =====
    pub const MAX_ENERGY: u32 = 10;
    pub const SACRIFICE_ENERGY_REFUND: u32 = 1;

    // ===== enemy =====
    /// Disposition at which a sentient enemy begs for mercy.
    pub const PLEA_THRESHOLD: i32 = 60;
    pub const MIN_ADAPT_PENALTY: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_ENERGY: u32 = 3;
    pub const DEFAULT_SACRIFICE_EXHAUST_CHANCE: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            starting_energy: Self::DEFAULT_STARTING_ENERGY,
            sacrifice_exhaust_chance: Self::DEFAULT_SACRIFICE_EXHAUST_CHANCE,
        }
    }

    pub fn with_starting_energy(starting_energy: u32) -> Self {
        Self {
            starting_energy: starting_energy.min(Self::MAX_ENERGY),
            ..Self::new()
        }
    }

    /// Clamps a raw disposition value onto the track.
    pub fn clamp_disposition(value: i32) -> i32 {
        value.clamp(Self::DISPOSITION_MIN, Self::DISPOSITION_MAX)
    }

    /// Clamps a derived starting disposition strictly inside the track.
    pub fn clamp_starting_disposition(value: i32) -> i32 {
        value.clamp(
            -Self::STARTING_DISPOSITION_LIMIT,
            Self::STARTING_DISPOSITION_LIMIT,
        )
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}
