//! Batch configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, a
//! TOML file, and `BALANCE_*` environment variables. CLI flags are applied on
//! top by the binary.

use std::collections::BTreeSet;
use std::env;
use std::path::Path;

use anyhow::{Context, bail};
use encounter_core::{
    Card, CardKind, CombatSimulation, EncounterConfig, EnemyArchetype, EnemyMode, EnemyTuning,
    FateDeckKind, ResonanceZone, StaticAffinityTable,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::agent::AgentKind;

/// Everything a batch needs to build its encounters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Encounters played per agent.
    pub runs: u32,
    /// Base seed; every run derives its own seed from it.
    pub seed: u64,
    pub agents: Vec<AgentKind>,

    pub enemy_id: String,
    /// Makes the enemy sentient with this will. Beasts never plead.
    pub enemy_will: Option<u32>,
    pub enemy_mode: EnemyMode,
    pub base_damage: u32,

    pub hero_world: String,
    pub hero_hp: u32,
    /// Affinity returned for every enemy/world pair.
    pub affinity: i32,
    pub situation_modifier: i32,
    /// Skips the affinity lookup when set.
    pub starting_disposition: Option<i32>,
    pub starting_energy: u32,
    pub resonance: ResonanceZone,
    pub fate_deck: FateDeckKind,

    pub hand: Vec<Card>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 0,
            agents: AgentKind::iter().collect(),
            enemy_id: "hollow_knight".into(),
            enemy_will: Some(40),
            enemy_mode: EnemyMode::Dynamic,
            base_damage: EnemyTuning::DEFAULT_BASE_DAMAGE,
            hero_world: "ember_vale".into(),
            hero_hp: 30,
            affinity: 0,
            situation_modifier: 0,
            starting_disposition: None,
            starting_energy: EncounterConfig::DEFAULT_STARTING_ENERGY,
            resonance: ResonanceZone::Neutral,
            fate_deck: FateDeckKind::Keyword,
            hand: default_hand(),
        }
    }
}

/// A small mixed hand: two cards of each kind at a spread of costs.
pub fn default_hand() -> Vec<Card> {
    vec![
        Card::new(1, 6, 1, CardKind::Combat),
        Card::new(2, 4, 0, CardKind::Combat),
        Card::new(3, 5, 1, CardKind::Spiritual),
        Card::new(4, 3, 0, CardKind::Spiritual),
        Card::new(5, 8, 2, CardKind::Utility),
        Card::new(6, 5, 1, CardKind::Utility),
    ]
}

impl BalanceConfig {
    /// Parses a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overrides fields from `BALANCE_*` variables. Unparsable values are
    /// ignored.
    pub fn apply_env(&mut self) {
        if let Some(runs) = read_env::<u32>("BALANCE_RUNS") {
            self.runs = runs;
        }
        if let Some(seed) = read_env::<u64>("BALANCE_SEED") {
            self.seed = seed;
        }
        if let Some(mode) = read_env::<EnemyMode>("BALANCE_ENEMY_MODE") {
            self.enemy_mode = mode;
        }
        if let Some(damage) = read_env::<u32>("BALANCE_BASE_DAMAGE") {
            self.base_damage = damage;
        }
        if let Some(hp) = read_env::<u32>("BALANCE_HERO_HP") {
            self.hero_hp = hp;
        }
        if let Some(zone) = read_env::<ResonanceZone>("BALANCE_RESONANCE") {
            self.resonance = zone;
        }
        if let Some(disposition) = read_env::<i32>("BALANCE_STARTING_DISPOSITION") {
            self.starting_disposition = Some(disposition);
        }
    }

    /// Loads `path` when given (defaults otherwise), applies the environment
    /// and validates the result.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.runs == 0 {
            bail!("runs must be at least 1");
        }
        if self.agents.is_empty() {
            bail!("at least one agent is required");
        }
        if self.hero_hp == 0 {
            bail!("hero_hp must be positive");
        }
        if self.hand.is_empty() {
            bail!("hand must contain at least one card");
        }
        let mut ids = BTreeSet::new();
        for card in &self.hand {
            if !ids.insert(card.id) {
                bail!("duplicate card id {} in hand", card.id.0);
            }
        }
        Ok(())
    }

    pub fn enemy(&self) -> EnemyArchetype {
        match self.enemy_will {
            Some(will) => EnemyArchetype::sentient(self.enemy_id.clone(), will),
            None => EnemyArchetype::beast(self.enemy_id.clone()),
        }
    }

    /// Builds a fresh encounter for one run.
    pub fn encounter(&self, seed: u64) -> CombatSimulation {
        let mut builder = CombatSimulation::builder(self.enemy(), self.hand.clone())
            .hero_world(self.hero_world.clone())
            .hero_hp(self.hero_hp, self.hero_hp)
            .resonance(self.resonance)
            .seed(seed)
            .situation_modifier(self.situation_modifier)
            .starting_energy(self.starting_energy)
            .fate_deck(self.fate_deck);
        if let Some(disposition) = self.starting_disposition {
            builder = builder.starting_disposition(disposition);
        }
        builder.build(&StaticAffinityTable::with_default(self.affinity))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
