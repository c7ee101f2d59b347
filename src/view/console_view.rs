use std::io::Write;

use log::error;

use crate::engine::combat::{CombatEvent, CombatEventHandler};

pub fn render_event(event: &CombatEvent) -> String {
    match event {
        CombatEvent::BattleStarted { opponent, .. } => {
            format!("A wild {} appears!", opponent)
        }
        CombatEvent::Attack { attacker, target, damage, .. } => {
            format!("{} attacks {} for {} damage!", attacker, target, damage)
        }
        CombatEvent::HealthReport { name, health } => {
            format!("{} has {} health left.", name, health)
        }
        CombatEvent::Defeated { name, game_over: false } => {
            format!("{} has been defeated!", name)
        }
        CombatEvent::Defeated { name, game_over: true } => {
            format!("{} has been defeated! Game Over.", name)
        }
        CombatEvent::Stalemate { rounds } => {
            format!("Neither side has fallen after {} rounds. The battle ends in a stalemate.", rounds)
        }
    }
}

/*
    Writes one narrative line per combat event
 */
pub struct ConsoleView<W: Write> {
    writer: W,
    // Set after the first failed write, output stops from then on
    write_failed: bool
}

impl <W: Write> ConsoleView<W> {
    pub fn new(writer: W) -> ConsoleView<W> {
        ConsoleView { writer, write_failed: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl <W: Write> CombatEventHandler for ConsoleView<W> {
    fn handle_event(&mut self, event: &CombatEvent) {
        if self.write_failed {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", render_event(event)) {
            error!("Failed to write combat event, console output stopped: {}", e);
            self.write_failed = true;
        }
    }
}
