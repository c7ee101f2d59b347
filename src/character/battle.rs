use log::{debug, info};

use crate::character::Combatant;
use crate::engine::combat::{BattleOutcome, CombatEvent, CombatEventHandler};
use crate::engine::damage_roll::DamageRoll;
use crate::error::errors::CombatError;

/*
    A single fight between two combatants. The initiator always acts first in each round,
    and a defeated opponent never gets to counter.
 */
#[derive(Debug)]
pub struct Battle {
    initiator: Combatant,
    opponent: Combatant,
    finished : bool,
    rounds: u32,
    round_limit: Option<u32>
}

pub fn build_battle(initiator: Combatant, opponent: Combatant) -> Result<Battle, CombatError> {
    // Nobody could ever lose health, so the loop would never end
    if initiator.get_attack_power() == 0 && opponent.get_attack_power() == 0 {
        return Err(CombatError::NoDamagePossible);
    }
    Ok(Battle { initiator, opponent, finished: false, rounds: 0, round_limit: None })
}

fn emit(events: &mut impl CombatEventHandler, event: CombatEvent) {
    debug!("{}", event.to_json());
    events.handle_event(&event);
}

fn attack_event(attacker: &Combatant, target: &Combatant, damage: i32) -> CombatEvent {
    CombatEvent::Attack {
        attacker: attacker.get_name(),
        target: target.get_name(),
        damage,
        target_health: target.get_health(),
        target_defeated: !target.is_alive()
    }
}

impl Battle {
    pub fn with_round_limit(mut self, round_limit: u32) -> Battle {
        self.round_limit = Some(round_limit);
        self
    }

    pub fn get_initiator(&self) -> &Combatant { &self.initiator }
    pub fn get_opponent(&self) -> &Combatant { &self.opponent }
    pub fn get_rounds(&self) -> u32 { self.rounds }

    fn end(&mut self) {
        self.finished = true;
    }

    fn round_limit_reached(&self) -> bool {
        match self.round_limit {
            Some(limit) => self.rounds >= limit,
            None => false
        }
    }

    fn play_round(&mut self, roll: &mut impl DamageRoll, events: &mut impl CombatEventHandler) -> Result<(), CombatError> {
        self.rounds = self.rounds.saturating_add(1);
        debug!("Round {} begins", self.rounds);

        let damage = self.initiator.attack(&mut self.opponent, &mut *roll)?;
        emit(events, attack_event(&self.initiator, &self.opponent, damage));

        if self.opponent.is_alive() {
            let damage = self.opponent.attack(&mut self.initiator, &mut *roll)?;
            emit(events, attack_event(&self.opponent, &self.initiator, damage));
            emit(events, CombatEvent::HealthReport { name: self.initiator.get_name(), health: self.initiator.get_health() });
        } else {
            emit(events, CombatEvent::Defeated { name: self.opponent.get_name(), game_over: false });
        }
        Ok(())
    }

    pub fn run(&mut self, roll: &mut impl DamageRoll, events: &mut impl CombatEventHandler) -> Result<BattleOutcome, CombatError> {
        if self.finished {
            return Err(CombatError::BattleFinished);
        }

        info!("Battle started: {} ({} hp, {} atk) vs {} ({} hp, {} atk)",
              self.initiator.get_name(), self.initiator.get_health(), self.initiator.get_attack_power(),
              self.opponent.get_name(), self.opponent.get_health(), self.opponent.get_attack_power());
        emit(events, CombatEvent::BattleStarted { initiator: self.initiator.get_name(), opponent: self.opponent.get_name() });

        while self.initiator.is_alive() && self.opponent.is_alive() {
            if self.round_limit_reached() {
                info!("Round limit of {} reached with both sides standing", self.rounds);
                emit(events, CombatEvent::Stalemate { rounds: self.rounds });
                self.end();
                return Ok(BattleOutcome::Stalemate { rounds: self.rounds });
            }

            if let Err(e) = self.play_round(&mut *roll, &mut *events) {
                self.end();
                return Err(e);
            }
        }

        if !self.initiator.is_alive() {
            emit(events, CombatEvent::Defeated { name: self.initiator.get_name(), game_over: true });
        }
        self.end();

        let outcome = if self.initiator.is_alive() { BattleOutcome::InitiatorWins } else { BattleOutcome::OpponentWins };
        info!("Battle over after {} rounds: {:?}", self.rounds, outcome);
        Ok(outcome)
    }
}
