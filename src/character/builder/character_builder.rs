use crate::character::{build_combatant, Combatant};
use crate::error::errors::CombatError;

#[derive(Clone, Debug)]
pub struct CharacterPattern {
    blueprint: CharacterBlueprint
}

impl CharacterPattern {
    // The player's side, always the initiator in the default matchup
    pub fn hero() -> CharacterPattern {
        let blueprint = CharacterBlueprint { name: String::from("Hero"), health: 100, attack_power: 20 };
        CharacterPattern { blueprint }
    }

    pub fn goblin() -> CharacterPattern {
        let blueprint = CharacterBlueprint { name: String::from("Goblin"), health: 50, attack_power: 10 };
        CharacterPattern { blueprint }
    }
}

/*
    Starting stats shared by every individual built from a pattern
 */
#[derive(Clone, Debug)]
pub struct CharacterBlueprint {
    pub name: String,
    pub health: i32,
    pub attack_power: i32
}

pub struct CharacterBuilder {
    pattern: CharacterPattern
}

impl CharacterBuilder {
    pub fn new(character_pattern: CharacterPattern) -> CharacterBuilder {
        CharacterBuilder { pattern: character_pattern }
    }

    pub fn build(&self) -> Result<Combatant, CombatError> {
        let blueprint = &self.pattern.blueprint;
        return build_combatant(blueprint.name.clone(), blueprint.health, blueprint.attack_power);
    }
}
