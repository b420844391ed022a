use core::cmp::min;
use rand::{RngCore, SeedableRng};
use std::{
    fs::File,
    io::{self, Read},
};

/// Map a probability in `[0, 1]` onto the `u64` range, for comparison against a raw draw
pub fn chance(p: f64) -> u64 {
    if p >= 1. {
        u64::MAX
    } else if p > 0. {
        (p * u64::MAX as f64) as u64
    } else {
        0
    }
}

/// Whether an event with the `u64`-scaled probability `threshold` happens on this draw
#[inline]
pub fn happens(rng: &mut impl RngCore, threshold: u64) -> bool {
    threshold > rng.next_u64()
}

/// Small, fast generator used for every per-skeleton random stream
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_ne_bytes()[..lim]);
            idx += lim;
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// An entropy-seeded [WyRng]. Falls back to the thread generator where `/dev/urandom` is missing.
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::rng().next_u64()))
}

#[cfg(test)]
mod test {
    use super::*;
    use core::iter::once;
    use rand::rngs::ThreadRng;

    const fn percent(x: u64) -> u64 {
        x * (u64::MAX / 100)
    }

    fn assert_within_deviation(chance_f: f64, range: f64, rng: &mut impl RngCore) {
        let samples = 10_000.;
        let expected = chance_f * samples;
        let max_deviation = expected * range;
        let threshold = chance(chance_f);
        for _ in 0..100 {
            let incidence = once(())
                .cycle()
                .take(samples as usize)
                .filter(|()| happens(rng, threshold))
                .count() as f64;
            assert!(
                (expected - incidence).abs() < max_deviation,
                "{chance_f}: {incidence} != {expected} ± {max_deviation}"
            );
        }
    }

    // control test - we are confident that rand generates good random numbers
    #[test]
    fn test_deviation_rand() {
        let mut rng = ThreadRng::default();
        for p in [0.05, 0.1, 0.5, 0.9] {
            assert_within_deviation(p, 0.33, &mut rng);
        }
    }

    #[test]
    fn test_deviation_wyrand() {
        let mut rng = WyRng::seeded(0x5eed);
        for p in [0.05, 0.1, 0.5, 0.9] {
            assert_within_deviation(p, 0.33, &mut rng);
        }
    }

    #[test]
    fn test_chance_edges() {
        let mut rng = default_rng();
        for _ in 0..1_000 {
            assert!(!happens(&mut rng, chance(0.)));
            assert!(!happens(&mut rng, chance(-1.)));
        }
        assert_eq!(u64::MAX, chance(1.));
        assert_eq!(u64::MAX, chance(2.));
        assert!(chance(0.5).abs_diff(percent(50)) < percent(1));
    }

    #[test]
    fn test_wyrng_is_reproducible() {
        let mut a = WyRng::seed_from_u64(42);
        let mut b = WyRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_fill_bytes_covers_every_byte() {
        let mut rng = WyRng::seeded(1);
        let mut buf = [0u8; 29];
        rng.fill_bytes(&mut buf);
        // a zero run this long from a working generator is vanishingly unlikely
        assert!(buf[24..].iter().any(|b| *b != 0));
        assert!(buf[..8].iter().any(|b| *b != 0));
    }
}
