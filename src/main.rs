use std::io;

use log::{error, info, LevelFilter};

use crate::character::battle::{build_battle, Battle};
use crate::character::builder::character_builder::{CharacterBuilder, CharacterPattern};
use crate::engine::damage_roll::build_seeded_roll;
use crate::error::errors::CombatError;
use crate::error_utils::missing_setting_error;
use crate::settings::{build_settings, Settings, SETTING_RNG_SEED};
use crate::view::console_view::ConsoleView;

mod character;
mod engine;
mod error;
mod error_utils;
mod global_flags;
mod logging;
mod settings;
mod view;

fn build_default_battle(settings: &Settings) -> Result<Battle, CombatError> {
    let hero = CharacterBuilder::new(CharacterPattern::hero()).build()?;
    let goblin = CharacterBuilder::new(CharacterPattern::goblin()).build()?;
    let battle = build_battle(hero, goblin)?;
    if let Some(limit) = settings.get_round_limit() {
        return Ok(battle.with_round_limit(limit));
    }
    Ok(battle)
}

fn main() -> Result<(), io::Error> {
    let settings = build_settings();
    let log_level = settings.get_log_level().unwrap_or(LevelFilter::Info);
    if let Err(e) = logging::init_logging(log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    let rng_seed = settings.get_rng_seed().ok_or(missing_setting_error(SETTING_RNG_SEED))?;
    info!("Using RNG seed: {}", rng_seed);
    let mut roll = build_seeded_roll(rng_seed);

    let mut battle = build_default_battle(&settings)?;
    let stdout = io::stdout();
    let mut console = ConsoleView::new(stdout.lock());
    match battle.run(&mut roll, &mut console) {
        Ok(outcome) => {
            let initiator = battle.get_initiator();
            let opponent = battle.get_opponent();
            info!("Outcome: {:?} after {} rounds, {} on {} health, {} on {} health",
                  outcome, battle.get_rounds(),
                  initiator.get_name(), initiator.get_health(),
                  opponent.get_name(), opponent.get_health());
            Ok(())
        },
        Err(e) => {
            error!("Battle aborted: {}", e);
            Err(e.into())
        }
    }
}
