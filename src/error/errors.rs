use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

#[derive(PartialEq)]
pub enum CombatError {
    InvalidCombatant(String),
    DefeatedAttacker(String),
    NoDamagePossible,
    BattleFinished
}

impl CombatError {
    fn message(&self) -> String {
        match self {
            CombatError::InvalidCombatant(reason) => {
                format!("Invalid combatant: {}", reason)
            }
            CombatError::DefeatedAttacker(name) => {
                format!("{} has already been defeated and cannot attack", name)
            }
            CombatError::NoDamagePossible => {
                String::from("Neither combatant is able to deal damage")
            }
            CombatError::BattleFinished => {
                String::from("This battle has already been fought")
            }
        }
    }
}

impl Debug for CombatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Display for CombatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for CombatError {

}

impl From<CombatError> for io::Error {
    fn from(err: CombatError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, err.message())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use crate::error::errors::CombatError;

    #[test]
    fn test_display_names_defeated_attacker() {
        let err = CombatError::DefeatedAttacker(String::from("Goblin"));
        assert_eq!("Goblin has already been defeated and cannot attack", err.to_string());
    }

    #[test]
    fn test_into_io_error() {
        // GIVEN a combat error
        let err = CombatError::NoDamagePossible;
        // WHEN we convert it for the binary's io::Result
        let io_err : io::Error = err.into();
        // THEN the kind and message carry over
        assert_eq!(io::ErrorKind::InvalidInput, io_err.kind());
        assert_eq!("Neither combatant is able to deal damage", io_err.to_string());
    }

    #[test]
    fn test_equality_compares_variant_and_payload() {
        assert_eq!(CombatError::InvalidCombatant(String::from("Ghost")), CombatError::InvalidCombatant(String::from("Ghost")));
        assert_ne!(CombatError::InvalidCombatant(String::from("Ghost")), CombatError::DefeatedAttacker(String::from("Ghost")));
        assert_ne!(CombatError::DefeatedAttacker(String::from("Hero")), CombatError::DefeatedAttacker(String::from("Goblin")));
    }
}
