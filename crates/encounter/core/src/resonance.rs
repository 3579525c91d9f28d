//! World resonance.
//!
//! An encounter runs inside one resonance zone, fixed for its whole duration.
//! Zones sit along a dark/light axis and group into three families that the
//! calculator and the sacrifice rule read.

/// Graduated world alignment, darkest first.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ResonanceZone {
    DeepDark,
    Dark,
    #[default]
    Neutral,
    Light,
    DeepLight,
}

/// Coarse grouping of resonance zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum ResonanceFamily {
    /// Strikes gain power and cost less.
    Destructive,
    Neutral,
    /// Influence gains power; strikes hurt the hero; sacrifices may burn an extra card.
    Constructive,
}

impl ResonanceZone {
    pub const fn family(self) -> ResonanceFamily {
        match self {
            Self::DeepDark | Self::Dark => ResonanceFamily::Destructive,
            Self::Neutral => ResonanceFamily::Neutral,
            Self::Light | Self::DeepLight => ResonanceFamily::Constructive,
        }
    }

    pub const fn is_destructive(self) -> bool {
        matches!(self.family(), ResonanceFamily::Destructive)
    }

    pub const fn is_constructive(self) -> bool {
        matches!(self.family(), ResonanceFamily::Constructive)
    }

    /// Zone for a signed world balance in `[-100, 100]`.
    ///
    /// The family boundary is the same ±30 used by [`AlignmentCategory`], so
    /// the two classifications can never disagree.
    pub fn from_balance(balance: i32) -> Self {
        match balance {
            i32::MIN..=-60 => Self::DeepDark,
            -59..=-30 => Self::Dark,
            -29..=29 => Self::Neutral,
            30..=59 => Self::Light,
            _ => Self::DeepLight,
        }
    }
}

/// Canonical light/neutral/dark reading of a signed world balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum AlignmentCategory {
    Dark,
    Neutral,
    Light,
}

impl AlignmentCategory {
    pub const LIGHT_THRESHOLD: i32 = 30;
    pub const DARK_THRESHOLD: i32 = -30;

    pub fn from_balance(balance: i32) -> Self {
        if balance >= Self::LIGHT_THRESHOLD {
            Self::Light
        } else if balance <= Self::DARK_THRESHOLD {
            Self::Dark
        } else {
            Self::Neutral
        }
    }
}

impl From<ResonanceFamily> for AlignmentCategory {
    fn from(family: ResonanceFamily) -> Self {
        match family {
            ResonanceFamily::Destructive => Self::Dark,
            ResonanceFamily::Neutral => Self::Neutral,
            ResonanceFamily::Constructive => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn families_group_zones() {
        let destructive: Vec<_> = ResonanceZone::iter()
            .filter(|zone| zone.is_destructive())
            .collect();
        let constructive: Vec<_> = ResonanceZone::iter()
            .filter(|zone| zone.is_constructive())
            .collect();
        assert_eq!(destructive, vec![ResonanceZone::DeepDark, ResonanceZone::Dark]);
        assert_eq!(
            constructive,
            vec![ResonanceZone::Light, ResonanceZone::DeepLight]
        );
    }

    #[test]
    fn balance_thresholds_agree_everywhere() {
        for balance in -100..=100 {
            let zone = ResonanceZone::from_balance(balance);
            assert_eq!(
                AlignmentCategory::from(zone.family()),
                AlignmentCategory::from_balance(balance),
                "balance {balance}"
            );
        }
        assert_eq!(ResonanceZone::from_balance(-60), ResonanceZone::DeepDark);
        assert_eq!(ResonanceZone::from_balance(-30), ResonanceZone::Dark);
        assert_eq!(ResonanceZone::from_balance(29), ResonanceZone::Neutral);
        assert_eq!(ResonanceZone::from_balance(60), ResonanceZone::DeepLight);
    }
}
