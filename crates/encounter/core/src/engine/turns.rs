//! Turn structure and enemy actions.

use super::{ActionRejection, CombatSimulation};
use crate::enemy::{self, EnemyAction, EnemyActionReport};
use crate::state::{EncounterPhase, TurnFlags};

impl CombatSimulation {
    /// Ends the player turn: clears the sacrifice flag and hands control to
    /// the enemy.
    pub fn end_player_turn(&mut self) -> Result<(), ActionRejection> {
        self.ensure_player_turn()?;
        self.state.sacrifice.flags.remove(TurnFlags::SACRIFICE_USED);
        self.state.phase = EncounterPhase::EnemyTurn;
        Ok(())
    }

    /// Applies one enemy action. Accepted in any phase until the encounter is
    /// finished.
    pub fn resolve_enemy_action(
        &mut self,
        action: EnemyAction,
    ) -> Result<EnemyActionReport, ActionRejection> {
        self.ensure_live()?;
        let report = enemy::resolve(&mut self.state, action);
        self.settle();
        Ok(report)
    }

    /// Starts the next player turn. Only accepted during the enemy turn.
    ///
    /// Restores energy to the starting value, clears per-turn flags, and, if
    /// the hand is empty, returns the discard pile to hand. Exhausted cards
    /// never come back. Returns the number of recycled cards.
    pub fn begin_player_turn(&mut self) -> Result<usize, ActionRejection> {
        self.ensure_live()?;
        if self.state.phase != EncounterPhase::EnemyTurn {
            return Err(ActionRejection::NotEnemyTurn {
                phase: self.state.phase,
            });
        }
        let state = &mut self.state;
        state.energy = state.config.starting_energy;
        state.sacrifice.flags = TurnFlags::empty();
        state.turn += 1;
        state.phase = EncounterPhase::PlayerTurn;

        let recycled = if state.zones.hand().is_empty() {
            state.zones.recycle_discard()
        } else {
            0
        };
        Ok(recycled)
    }
}

#[cfg(test)]
mod tests {
    use crate::enemy::{EnemyAction, EnemyArchetype};
    use crate::engine::{ActionRejection, CombatSimulation};
    use crate::env::StaticAffinityTable;
    use crate::state::{ActionType, Card, CardId, CardKind, EncounterPhase, Outcome};

    fn sim(hand: u32) -> CombatSimulation {
        let cards = (1..=hand)
            .map(|id| Card::new(id, 5, 1, CardKind::Combat))
            .collect();
        CombatSimulation::builder(EnemyArchetype::beast("wolf"), cards)
            .hero_hp(12, 12)
            .build(&StaticAffinityTable::new())
    }

    #[test]
    fn turn_cycle() {
        let mut sim = sim(3);
        sim.strike_with(CardId(1), None).unwrap();
        assert_eq!(sim.energy(), 2);

        sim.end_player_turn().unwrap();
        assert_eq!(sim.phase(), EncounterPhase::EnemyTurn);
        assert_eq!(
            sim.strike_with(CardId(2), None),
            Err(ActionRejection::NotPlayerTurn {
                phase: EncounterPhase::EnemyTurn
            })
        );

        sim.resolve_enemy_action(EnemyAction::Defend { reduction: 3 })
            .unwrap();
        assert_eq!(sim.begin_player_turn(), Ok(0));
        assert_eq!(sim.turn(), 2);
        assert_eq!(sim.energy(), 3);
        assert_eq!(sim.modifiers().defend_reduction, 3);
    }

    #[test]
    fn player_turn_cannot_restart_itself() {
        let mut sim = sim(4);
        sim.strike_with(CardId(1), None).unwrap();
        sim.sacrifice(CardId(2)).unwrap();
        let before = sim.clone();

        assert_eq!(
            sim.begin_player_turn(),
            Err(ActionRejection::NotEnemyTurn {
                phase: EncounterPhase::PlayerTurn
            })
        );
        assert_eq!(sim, before);
        assert_eq!(
            sim.sacrifice(CardId(3)),
            Err(ActionRejection::SacrificeAlreadyUsed)
        );
        assert_eq!(sim.enemy_buff(), 1);

        sim.end_player_turn().unwrap();
        assert_eq!(sim.begin_player_turn(), Ok(0));
        assert!(sim.sacrifice(CardId(3)).is_ok());
        assert_eq!(sim.enemy_buff(), 2);
    }

    #[test]
    fn auto_turn_end_tracks_energy_while_live() {
        let mut sim = sim(4);
        assert!(!sim.is_auto_turn_end());
        sim.strike_with(CardId(1), None).unwrap();
        sim.strike_with(CardId(2), None).unwrap();
        assert!(!sim.is_auto_turn_end());
        sim.strike_with(CardId(3), None).unwrap();
        assert_eq!(sim.energy(), 0);
        assert!(sim.is_auto_turn_end());

        sim.end_player_turn().unwrap();
        sim.resolve_enemy_action(EnemyAction::Defend { reduction: 0 })
            .unwrap();
        sim.begin_player_turn().unwrap();
        assert!(!sim.is_auto_turn_end());

        let mut decided = CombatSimulation::builder(
            EnemyArchetype::beast("wolf"),
            vec![Card::new(1, 20, 1, CardKind::Combat)],
        )
        .starting_disposition(-90)
        .starting_energy(1)
        .build(&StaticAffinityTable::new());
        decided.strike_with(CardId(1), None).unwrap();
        assert_eq!(decided.energy(), 0);
        assert_eq!(decided.outcome(), Some(Outcome::Destroyed));
        assert!(!decided.is_auto_turn_end());
    }

    #[test]
    fn empty_hand_recycles_discard() {
        let mut sim = sim(2);
        sim.strike_with(CardId(1), None).unwrap();
        sim.sacrifice(CardId(2)).unwrap();
        assert!(sim.hand().is_empty());

        sim.end_player_turn().unwrap();
        assert_eq!(sim.begin_player_turn(), Ok(1));
        assert_eq!(sim.hand().len(), 1);
        assert_eq!(sim.exhausted().len(), 1);
        assert!(sim.can_sacrifice());
    }

    #[test]
    fn sacrifice_buff_adds_to_attacks() {
        let mut sim = sim(4);
        sim.sacrifice(CardId(1)).unwrap();
        sim.end_player_turn().unwrap();
        sim.begin_player_turn().unwrap();
        sim.sacrifice(CardId(2)).unwrap();

        let report = sim
            .resolve_enemy_action(EnemyAction::Attack { damage: 5 })
            .unwrap();
        assert_eq!(report.hero_damage, 7);
        assert_eq!(sim.hero_hp(), 5);
    }

    #[test]
    fn hero_death_finishes_the_encounter() {
        let mut sim = sim(2);
        let report = sim
            .resolve_enemy_action(EnemyAction::Attack { damage: 40 })
            .unwrap();
        assert!(report.hero_defeated);
        assert_eq!(sim.hero_hp(), 0);
        assert_eq!(sim.phase(), EncounterPhase::Finished);
        assert_eq!(sim.outcome(), None);

        assert_eq!(sim.strike(CardId(1)), Err(ActionRejection::HeroDefeated));
        assert_eq!(sim.begin_player_turn(), Err(ActionRejection::HeroDefeated));
        assert_eq!(
            sim.resolve_enemy_action(EnemyAction::Adapt),
            Err(ActionRejection::HeroDefeated)
        );
    }

    #[test]
    fn adapt_targets_the_current_streak() {
        let mut sim = sim(3);
        sim.influence_with(CardId(1), None).unwrap();
        sim.influence_with(CardId(2), None).unwrap();
        sim.end_player_turn().unwrap();
        sim.resolve_enemy_action(EnemyAction::Adapt).unwrap();
        sim.begin_player_turn().unwrap();

        let adapt = sim.modifiers().adapt.unwrap();
        assert_eq!(adapt.target, ActionType::Influence);
        assert_eq!(adapt.amount, 3);

        // streak 3: 5 + 2 - 3
        let report = sim.influence_with(CardId(3), None).unwrap();
        assert_eq!(report.power, 4);
        assert!(sim.modifiers().adapt.is_none());
    }

    #[test]
    fn finished_encounter_rejects_turn_changes() {
        let mut sim = CombatSimulation::builder(
            EnemyArchetype::beast("wolf"),
            vec![Card::new(1, 20, 1, CardKind::Combat)],
        )
        .starting_disposition(-90)
        .build(&StaticAffinityTable::new());
        sim.strike_with(CardId(1), None).unwrap();
        let finished = Err(ActionRejection::EncounterFinished {
            outcome: Outcome::Destroyed,
        });
        assert_eq!(sim.end_player_turn(), finished);
        assert_eq!(sim.begin_player_turn().map(|_| ()), finished);
    }
}
