// Linear congruential generator with the Numerical Recipes constants.
// Every stage draws from it in a fixed order, so the recurrence and the
// draw order together define the output for a given seed.

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Seeds are reduced modulo 2^32; the state is the seed itself, not a hash of it.
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed as u32)
    }
}

/// Uniform draw in `[0, 1)`: the next 32-bit output divided by 2^32.
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / MODULUS
}

/// `floor(unit * len)`, clamped into `0..len`. `len` must be non-zero.
pub fn pick_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "pick_index called with an empty range");
    let idx = (unit(rng) * len as f64) as usize;
    idx.min(len.saturating_sub(1))
}

/// Fisher-Yates shuffle driven by `unit` draws, one per position from the back.
pub fn shuffle<T, R: RngCore + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = pick_index(rng, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_recurrence_from_zero() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
        assert_eq!(rng.next_u32(), 3_519_870_697);
    }

    #[test]
    fn test_unit_matches_state_over_modulus() {
        let mut rng = Lcg::seed_from_u64(12345);
        let first = unit(&mut rng);
        assert_eq!(rng.state(), 87_628_868);
        assert!((first - 87_628_868.0 / MODULUS).abs() < f64::EPSILON);
        assert!((0.0..1.0).contains(&first));
    }

    #[test]
    fn test_seed_is_reduced_modulo_2_32() {
        let a = Lcg::seed_from_u64(7);
        let b = Lcg::seed_from_u64(7 + (1u64 << 32));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut high = StepRng::new(u64::from(u32::MAX), 0);
        assert_eq!(pick_index(&mut high, 3), 2);
        let mut low = StepRng::new(0, 0);
        assert_eq!(pick_index(&mut low, 3), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = Lcg::new(99);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
