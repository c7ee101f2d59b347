use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    BattleStarted { initiator: String, opponent: String },
    Attack { attacker: String, target: String, damage: i32, target_health: i32, target_defeated: bool },
    // Reported for the initiator after each counter-attack
    HealthReport { name: String, health: i32 },
    // game_over is set when the initiator is the one defeated
    Defeated { name: String, game_over: bool },
    Stalemate { rounds: u32 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    InitiatorWins,
    OpponentWins,
    // Only reachable when a round limit is set on the battle
    Stalemate { rounds: u32 }
}

/*
    Receives every event a battle emits, in order. Renderers and recorders hook in here
 */
pub trait CombatEventHandler {
    fn handle_event(&mut self, event: &CombatEvent);
}

impl CombatEventHandler for Vec<CombatEvent> {
    fn handle_event(&mut self, event: &CombatEvent) {
        self.push(event.clone());
    }
}

impl CombatEvent {
    pub fn to_json(&self) -> Value {
        match self {
            CombatEvent::BattleStarted { initiator, opponent } => {
                json!({ "event": "battle_started", "initiator": initiator, "opponent": opponent })
            }
            CombatEvent::Attack { attacker, target, damage, target_health, target_defeated } => {
                json!({
                    "event": "attack",
                    "attacker": attacker,
                    "target": target,
                    "damage": damage,
                    "target_health": target_health,
                    "target_defeated": target_defeated
                })
            }
            CombatEvent::HealthReport { name, health } => {
                json!({ "event": "health_report", "name": name, "health": health })
            }
            CombatEvent::Defeated { name, game_over } => {
                json!({ "event": "defeated", "name": name, "game_over": game_over })
            }
            CombatEvent::Stalemate { rounds } => {
                json!({ "event": "stalemate", "rounds": rounds })
            }
        }
    }
}
