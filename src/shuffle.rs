//! Seeded shuffle used for the "random" sort order.
//!
//! The same seed always yields the same permutation, so a shared URL
//! reproduces the ordering its sender saw.

const MULTIPLIER: i32 = 48271;
const SCALE: f64 = 2_147_483_648.0;

/// Park–Miller (1993 multiplier) linear-congruential generator.
///
/// State is a 32-bit signed integer updated with wrapping multiplication
/// and never reduced modulo 2^31 - 1; only the low 31 bits feed the output.
/// This matches the sequences produced by the gallery's existing web
/// client bit for bit.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: i32,
}

impl Lcg {
    /// The state starts at `seed + 1` so that seed 0 is not stuck at zero
    pub fn new(seed: u64) -> Self {
        Self {
            // truncation to 32 bits is intended
            state: seed.wrapping_add(1) as u32 as i32,
        }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = MULTIPLIER.wrapping_mul(self.state);
        f64::from(self.state & 0x7FFF_FFFF) / SCALE
    }

    /// Uniform index in `0..bound`
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Fisher–Yates shuffle driven by [`Lcg`], walking from the back.
pub fn shuffle_in_place<T>(items: &mut [T], seed: u64) {
    let mut rng = Lcg::new(seed);
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// A new seed for switching a listing to random order.
///
/// Kept within 32 bits so every client reproduces the same sequence.
pub fn fresh_seed() -> u64 {
    u64::from(rand::random::<u32>())
}
