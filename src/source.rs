use log::trace;
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Largest value a [`RandomSource`] hands out, same as the classic C `RAND_MAX`.
pub(crate) const RAND_MAX: u32 = (1 << 31) - 1;

/// Something that can produce non-negative pseudo-random integers, one at a time.
pub(crate) trait RandomSource {
    /// Returns the next integer, in `0..=RAND_MAX`.
    fn next_int(&mut self) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_int(&mut self) -> u32 {
        (**self).next_int()
    }
}

/// A generator seeded once, from the clock or anything else, and owned by its caller.
pub(crate) struct TimeSeededSource {
    rng: StdRng,
}

impl TimeSeededSource {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for TimeSeededSource {
    fn next_int(&mut self) -> u32 {
        // Top 31 bits.
        let value = self.rng.next_u32() >> 1;
        debug_assert!(value <= RAND_MAX);
        trace!("raw draw: {}", value);
        value
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = TimeSeededSource::new(1_700_000_000);
    let mut b = TimeSeededSource::new(1_700_000_000);
    for _ in 0..32 {
        assert_eq!(a.next_int(), b.next_int());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = TimeSeededSource::new(1);
    let mut b = TimeSeededSource::new(2);
    let a: Vec<u32> = (0..8).map(|_| a.next_int()).collect();
    let b: Vec<u32> = (0..8).map(|_| b.next_int()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_never_exceeds_rand_max() {
    let mut source = TimeSeededSource::new(42);
    for _ in 0..10_000 {
        assert!(source.next_int() <= RAND_MAX);
    }
}

#[test]
fn test_borrowed_source_advances_owner() {
    let mut owned = TimeSeededSource::new(7);
    let mut reference = TimeSeededSource::new(7);

    fn take_one<S: RandomSource>(mut source: S) -> u32 {
        source.next_int()
    }

    assert_eq!(take_one(&mut owned), reference.next_int());
    assert_eq!(owned.next_int(), reference.next_int());
}
