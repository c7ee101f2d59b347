use crate::engine::damage_roll::DamageRoll;
use crate::error::errors::CombatError;

pub mod battle;
pub mod builder;

#[derive(Debug)]
pub struct Combatant {
    name : String,
    // May drop below zero when damage overshoots
    health: i32,
    attack_power: i32
}

pub fn build_combatant(name: String, health: i32, attack_power: i32) -> Result<Combatant, CombatError> {
    if health <= 0 {
        return Err(CombatError::InvalidCombatant(format!("{} must start with positive health, got {}", name, health)));
    }
    if attack_power < 0 {
        return Err(CombatError::InvalidCombatant(format!("{} cannot have negative attack power, got {}", name, attack_power)));
    }
    Ok(Combatant { name, health, attack_power })
}

impl Combatant {
    pub fn get_name(&self) -> String {
        return self.name.clone();
    }

    pub fn get_health(&self) -> i32 {
        return self.health;
    }

    pub fn get_attack_power(&self) -> i32 {
        return self.attack_power;
    }

    pub fn is_alive(&self) -> bool {
        return self.health > 0;
    }

    fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    /*
        Draws damage in 0..=attack_power and applies it to the target.
        Returns the damage dealt, which may be zero.
     */
    pub fn attack(&self, target: &mut Combatant, roll: &mut impl DamageRoll) -> Result<i32, CombatError> {
        if !self.is_alive() {
            return Err(CombatError::DefeatedAttacker(self.get_name()));
        }

        let damage = roll.roll(self.attack_power).clamp(0, self.attack_power);
        target.take_damage(damage);
        log::debug!("{} rolled {} (max {}) against {}", self.name, damage, self.attack_power, target.name);
        Ok(damage)
    }
}
