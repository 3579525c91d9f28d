//! Generated action sequences against the combat state machine.

use encounter_core::{
    Card, CardId, CardKind, CombatSimulation, EncounterConfig, EnemyAction, EnemyArchetype,
    ResonanceZone, StaticAffinityTable,
};
use proptest::prelude::*;

/// One call a host could make, whether or not it is legal right now.
#[derive(Clone, Debug)]
enum Step {
    Strike(u32),
    Influence(u32),
    Sacrifice(u32),
    Echo(i32),
    EndTurn,
    Enemy(EnemyAction),
    BeginTurn,
}

fn enemy_action() -> impl Strategy<Value = EnemyAction> {
    prop_oneof![
        (0u32..12).prop_map(|damage| EnemyAction::Attack { damage }),
        (0u32..6).prop_map(|reduction| EnemyAction::Defend { reduction }),
        (0u32..6).prop_map(|penalty| EnemyAction::Provoke { penalty }),
        Just(EnemyAction::Adapt),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    // Card ids 1..=8 include two that were never dealt.
    prop_oneof![
        4 => (1u32..=8).prop_map(Step::Strike),
        4 => (1u32..=8).prop_map(Step::Influence),
        1 => (1u32..=8).prop_map(Step::Sacrifice),
        1 => (-2i32..=2).prop_map(Step::Echo),
        2 => Just(Step::EndTurn),
        2 => enemy_action().prop_map(Step::Enemy),
        2 => Just(Step::BeginTurn),
    ]
}

fn zone() -> impl Strategy<Value = ResonanceZone> {
    prop_oneof![
        Just(ResonanceZone::DeepDark),
        Just(ResonanceZone::Dark),
        Just(ResonanceZone::Neutral),
        Just(ResonanceZone::Light),
        Just(ResonanceZone::DeepLight),
    ]
}

fn encounter(seed: u64, zone: ResonanceZone, disposition: i32) -> CombatSimulation {
    let hand = vec![
        Card::new(1, 6, 1, CardKind::Combat),
        Card::new(2, 4, 0, CardKind::Combat),
        Card::new(3, 9, 2, CardKind::Spiritual),
        Card::new(4, 3, 0, CardKind::Spiritual),
        Card::new(5, 12, 3, CardKind::Utility),
        Card::new(6, 5, 1, CardKind::Utility),
    ];
    CombatSimulation::builder(EnemyArchetype::sentient("ashen_oracle", 30), hand)
        .hero_hp(40, 40)
        .resonance(zone)
        .seed(seed)
        .starting_disposition(disposition)
        .build(&StaticAffinityTable::new())
}

/// Applies a step. Returns the reported power for accepted player actions.
fn apply(sim: &mut CombatSimulation, step: &Step) -> Result<Option<u32>, ()> {
    let power = |result: Result<encounter_core::ActionReport, _>| {
        result.map(|report| Some(report.power)).map_err(|_| ())
    };
    match step {
        Step::Strike(id) => power(sim.strike(CardId(*id))),
        Step::Influence(id) => power(sim.influence(CardId(*id))),
        Step::Sacrifice(id) => power(sim.sacrifice(CardId(*id))),
        Step::Echo(modifier) => power(sim.echo(*modifier)),
        Step::EndTurn => sim.end_player_turn().map(|_| None).map_err(|_| ()),
        Step::Enemy(action) => sim.resolve_enemy_action(*action).map(|_| None).map_err(|_| ()),
        Step::BeginTurn => sim.begin_player_turn().map(|_| None).map_err(|_| ()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Disposition and power stay clamped, cards are conserved, and a
    /// rejected call leaves the simulation untouched.
    #[test]
    fn prop_any_sequence_keeps_invariants(
        seed in any::<u64>(),
        zone in zone(),
        disposition in -99i32..=99,
        steps in proptest::collection::vec(step(), 0..120),
    ) {
        let mut sim = encounter(seed, zone, disposition);
        let cards = sim.state().zones.total();
        let mut exhausted = 0;

        for step in &steps {
            let before = sim.clone();
            match apply(&mut sim, step) {
                Ok(Some(power)) => {
                    prop_assert!(power <= EncounterConfig::POWER_CAP as u32);
                }
                Ok(None) => {}
                Err(()) => {
                    prop_assert_eq!(&sim, &before, "rejected {:?} mutated state", step);
                }
            }
            prop_assert!(
                (EncounterConfig::DISPOSITION_MIN..=EncounterConfig::DISPOSITION_MAX)
                    .contains(&sim.disposition())
            );
            prop_assert_eq!(sim.state().zones.total(), cards);
            prop_assert!(sim.exhausted().len() >= exhausted);
            exhausted = sim.exhausted().len();
            prop_assert!(sim.energy() <= EncounterConfig::MAX_ENERGY);
            prop_assert!(sim.hero_hp() <= sim.hero_max_hp());
            if before.is_finished() {
                prop_assert_eq!(&sim, &before);
            }
        }
    }

    /// A restored snapshot is equal to the live simulation and stays equal
    /// under any continuation.
    #[test]
    fn prop_restore_tracks_the_original(
        seed in any::<u64>(),
        zone in zone(),
        prefix in proptest::collection::vec(step(), 0..60),
        suffix in proptest::collection::vec(step(), 0..100),
    ) {
        let mut sim = encounter(seed, zone, 0);
        for step in &prefix {
            let _ = apply(&mut sim, step);
        }

        let mut restored = CombatSimulation::restore(sim.capture());
        prop_assert_eq!(&restored, &sim);

        for step in &suffix {
            let a = apply(&mut sim, step);
            let b = apply(&mut restored, step);
            prop_assert_eq!(a, b);
            prop_assert_eq!(&restored, &sim);
        }
    }
}

#[cfg(feature = "serde")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Snapshot bytes decode to the same snapshot and hash the same.
    #[test]
    fn prop_snapshot_bytes_round_trip(
        seed in any::<u64>(),
        zone in zone(),
        steps in proptest::collection::vec(step(), 0..60),
    ) {
        let mut sim = encounter(seed, zone, 0);
        for step in &steps {
            let _ = apply(&mut sim, step);
        }

        let snapshot = sim.capture();
        let bytes = snapshot.encode().expect("snapshot should encode");
        let decoded = encounter_core::EncounterSnapshot::decode(&bytes)
            .expect("snapshot should decode");
        prop_assert_eq!(&decoded, &snapshot);
        prop_assert_eq!(
            decoded.digest().expect("digest"),
            snapshot.digest().expect("digest")
        );
    }
}
