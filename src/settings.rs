use std::str::FromStr;

use log::LevelFilter;
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::global_flags::GLOBALS;

pub const SETTING_RNG_SEED : &str = "RNG Seed";
pub const SETTING_ROUND_LIMIT : &str = "Round Limit";
pub const SETTING_LOG_LEVEL : &str = "Log Level";

pub const DEFAULT_ROUND_LIMIT : u32 = 1000;
// Debug keeps the per-event JSON lines in the log file
pub const DEFAULT_LOG_LEVEL : &str = "debug";
const RNG_SEED_LENGTH : usize = 12;

pub struct Setting<T> {
    pub name : String,
    pub value : T
}

pub struct Settings {
    pub u32_settings : Vec<Setting<u32>>,
    pub string_settings : Vec<Setting<String>>
}

impl Settings {
    pub fn find_string_setting_value(&self, name : String) -> Option<String> {
        let setting = self.string_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value.clone());
        }
        None
    }

    pub fn find_u32_setting_value(&self, name : String) -> Option<u32> {
        let setting = self.u32_settings.iter().find(|x| x.name == name);
        if let Some(s) = setting {
            return Some(s.value);
        }
        None
    }

    pub fn get_rng_seed(&self) -> Option<String> {
        self.find_string_setting_value(SETTING_RNG_SEED.to_string())
    }

    pub fn get_round_limit(&self) -> Option<u32> {
        self.find_u32_setting_value(SETTING_ROUND_LIMIT.to_string())
    }

    pub fn get_log_level(&self) -> Option<LevelFilter> {
        let level = self.find_string_setting_value(SETTING_LOG_LEVEL.to_string())?;
        LevelFilter::from_str(&level).ok()
    }
}

fn generate_seed() -> String {
    if let Some(seed) = GLOBALS.rng_seed_override {
        return seed.to_string();
    }

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RNG_SEED_LENGTH)
        .map(char::from)
        .collect()
}

pub fn build_settings() -> Settings {
    let rng_seed : Setting<String> = Setting { name: SETTING_RNG_SEED.to_string(), value: generate_seed() };
    let round_limit : Setting<u32> = Setting { name: SETTING_ROUND_LIMIT.to_string(), value: DEFAULT_ROUND_LIMIT };
    let log_level : Setting<String> = Setting { name: SETTING_LOG_LEVEL.to_string(), value: DEFAULT_LOG_LEVEL.to_string() };
    Settings { u32_settings: vec![round_limit], string_settings: vec![rng_seed, log_level] }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use crate::settings::{build_settings, Setting, DEFAULT_ROUND_LIMIT, SETTING_LOG_LEVEL};

    #[test]
    fn test_build_settings_defaults() {
        let settings = build_settings();
        let seed = settings.get_rng_seed().unwrap();
        assert_eq!(12, seed.len());
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(Some(DEFAULT_ROUND_LIMIT), settings.get_round_limit());
        assert_eq!(Some(LevelFilter::Debug), settings.get_log_level());
    }

    #[test]
    fn test_find_unknown_setting() {
        let settings = build_settings();
        assert_eq!(None, settings.find_string_setting_value(String::from("Fog of War")));
        assert_eq!(None, settings.find_u32_setting_value(String::from("RNG Seed")));
    }

    #[test]
    fn test_log_level_parsing() {
        // GIVEN settings with the log level swapped out
        let mut settings = build_settings();
        settings.string_settings.retain(|s| s.name != SETTING_LOG_LEVEL);
        assert_eq!(None, settings.get_log_level());

        settings.string_settings.push(Setting { name: SETTING_LOG_LEVEL.to_string(), value: String::from("WARN") });
        assert_eq!(Some(LevelFilter::Warn), settings.get_log_level());

        // THEN an unknown level is not a level at all
        settings.string_settings.retain(|s| s.name != SETTING_LOG_LEVEL);
        settings.string_settings.push(Setting { name: SETTING_LOG_LEVEL.to_string(), value: String::from("loud") });
        assert_eq!(None, settings.get_log_level());
    }
}
