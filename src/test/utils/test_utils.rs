use crate::character::battle::{build_battle, Battle};
use crate::character::{build_combatant, Combatant};
use crate::engine::damage_roll::DamageRoll;

pub struct MaxRoll {}

impl DamageRoll for MaxRoll {
    fn roll(&mut self, max: i32) -> i32 {
        max
    }
}

pub struct ZeroRoll {}

impl DamageRoll for ZeroRoll {
    fn roll(&mut self, _max: i32) -> i32 {
        0
    }
}

// Replays the given values in order, wrapping around when exhausted
pub struct SequenceRoll {
    values: Vec<i32>,
    index: usize
}

impl SequenceRoll {
    pub fn new(values: Vec<i32>) -> SequenceRoll {
        assert!(!values.is_empty(), "SequenceRoll needs at least one value");
        SequenceRoll { values, index: 0 }
    }
}

impl DamageRoll for SequenceRoll {
    fn roll(&mut self, _max: i32) -> i32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

pub fn build_test_combatant(name: &str, health: i32, attack_power: i32) -> Combatant {
    build_combatant(name.to_string(), health, attack_power).expect("Test combatant stats should be valid")
}

pub fn build_test_battle(initiator: (&str, i32, i32), opponent: (&str, i32, i32)) -> Battle {
    let initiator = build_test_combatant(initiator.0, initiator.1, initiator.2);
    let opponent = build_test_combatant(opponent.0, opponent.1, opponent.2);
    build_battle(initiator, opponent).expect("Test battle should be valid")
}
