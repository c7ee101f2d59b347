use rand::Rng;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

/*
    Source of attack damage. Implementations must return a value within 0..=max (inclusive)
 */
pub trait DamageRoll {
    fn roll(&mut self, max: i32) -> i32;
}

pub struct RngDamageRoll<R: Rng> {
    rng: R
}

impl <R: Rng> RngDamageRoll<R> {
    pub fn new(rng: R) -> RngDamageRoll<R> {
        RngDamageRoll { rng }
    }
}

impl <R: Rng> DamageRoll for RngDamageRoll<R> {
    fn roll(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        self.rng.random_range(0..=max)
    }
}

pub fn build_seeded_roll(seed: String) -> RngDamageRoll<Pcg64> {
    let rng : Pcg64 = Seeder::from(seed).into_rng();
    RngDamageRoll::new(rng)
}
