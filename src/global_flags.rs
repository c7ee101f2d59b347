pub struct GlobalFlags {
    pub rng_seed_override: Option<&'static str>
}

pub const GLOBALS: GlobalFlags = GlobalFlags {
    // Forces the damage RNG seed, useful for replaying a specific battle
    rng_seed_override: None //Some("02sZFl3vcYKb")
};
