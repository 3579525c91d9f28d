use super::CombatSimulation;
use crate::config::EncounterConfig;
use crate::enemy::EnemyArchetype;
use crate::env::{AffinityOracle, DeterministicRng};
use crate::fate::{FateDeck, FateDeckKind};
use crate::resonance::ResonanceZone;
use crate::state::{
    ActionCounts, Card, CardZones, EchoSlot, EncounterPhase, EncounterState, EnemyModifiers,
    MomentumState, SacrificeState,
};

/// Builder for a fresh [`CombatSimulation`].
///
/// The starting disposition is `affinity(enemy, hero_world) + situation_modifier`,
/// clamped strictly inside the track. [`starting_disposition`](Self::starting_disposition)
/// bypasses the affinity lookup entirely.
#[derive(Clone, Debug)]
pub struct EncounterBuilder {
    enemy: EnemyArchetype,
    hand: Vec<Card>,
    hero_world: String,
    hero_hp: u32,
    hero_max_hp: u32,
    resonance: ResonanceZone,
    seed: u64,
    situation_modifier: i32,
    starting_disposition: Option<i32>,
    config: EncounterConfig,
    fate_deck: FateDeckKind,
}

impl EncounterBuilder {
    pub const DEFAULT_HERO_HP: u32 = 30;

    pub fn new(enemy: EnemyArchetype, hand: Vec<Card>) -> Self {
        Self {
            enemy,
            hand,
            hero_world: String::new(),
            hero_hp: Self::DEFAULT_HERO_HP,
            hero_max_hp: Self::DEFAULT_HERO_HP,
            resonance: ResonanceZone::default(),
            seed: 0,
            situation_modifier: 0,
            starting_disposition: None,
            config: EncounterConfig::default(),
            fate_deck: FateDeckKind::default(),
        }
    }

    #[must_use]
    pub fn hero_world(mut self, world: impl Into<String>) -> Self {
        self.hero_world = world.into();
        self
    }

    /// Current HP is clamped to `max_hp` at build time.
    #[must_use]
    pub fn hero_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hero_hp = hp;
        self.hero_max_hp = max_hp;
        self
    }

    #[must_use]
    pub fn resonance(mut self, zone: ResonanceZone) -> Self {
        self.resonance = zone;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn situation_modifier(mut self, modifier: i32) -> Self {
        self.situation_modifier = modifier;
        self
    }

    /// Uses this value instead of the affinity lookup.
    #[must_use]
    pub fn starting_disposition(mut self, disposition: i32) -> Self {
        self.starting_disposition = Some(disposition);
        self
    }

    #[must_use]
    pub fn starting_energy(mut self, energy: u32) -> Self {
        self.config.starting_energy = energy.min(EncounterConfig::MAX_ENERGY);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EncounterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn fate_deck(mut self, kind: FateDeckKind) -> Self {
        self.fate_deck = kind;
        self
    }

    /// Builds the encounter, consulting `affinity` unless an explicit
    /// starting disposition was given.
    pub fn build(self, affinity: &dyn AffinityOracle) -> CombatSimulation {
        let raw = match self.starting_disposition {
            Some(disposition) => disposition,
            None => affinity
                .affinity(&self.enemy.id, &self.hero_world)
                .saturating_add(self.situation_modifier),
        };
        let disposition = EncounterConfig::clamp_starting_disposition(raw);

        let mut rng = DeterministicRng::new(self.seed);
        let fate = FateDeck::of_kind(self.fate_deck, &mut rng);

        let hero_hp = self.hero_hp.min(self.hero_max_hp);
        let phase = if hero_hp == 0 {
            EncounterPhase::Finished
        } else {
            EncounterPhase::PlayerTurn
        };

        let state = EncounterState {
            energy: self.config.starting_energy.min(EncounterConfig::MAX_ENERGY),
            config: self.config,
            enemy: self.enemy,
            resonance: self.resonance,
            hero_hp,
            hero_max_hp: self.hero_max_hp,
            starting_disposition: disposition,
            disposition,
            outcome: None,
            phase,
            turn: 1,
            zones: CardZones::new(self.hand),
            momentum: MomentumState::new(),
            sacrifice: SacrificeState::default(),
            modifiers: EnemyModifiers::default(),
            echo: EchoSlot::Empty,
            counts: ActionCounts::default(),
        };

        CombatSimulation { state, rng, fate }
    }
}
