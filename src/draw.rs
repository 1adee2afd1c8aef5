use log::debug;

use crate::source::RandomSource;

/// Smallest value [`between`] can return.
pub(crate) const LOW: u32 = 10;
/// Largest value [`between`] can return.
pub(crate) const HIGH: u32 = 1000;
/// Number of distinct values in `LOW..=HIGH`.
pub(crate) const SPAN: u32 = HIGH - LOW + 1;

/// Draws one integer from `source` and folds it into `LOW..=HIGH`.
pub(crate) fn between<S: RandomSource>(source: &mut S) -> u32 {
    let value = source.next_int() % SPAN + LOW;
    debug!("drew {}", value);
    value
}

#[cfg(test)]
struct Fixed(u32);

#[cfg(test)]
impl RandomSource for Fixed {
    fn next_int(&mut self) -> u32 {
        self.0
    }
}

#[cfg(test)]
struct Counting(u32);

#[cfg(test)]
impl RandomSource for Counting {
    fn next_int(&mut self) -> u32 {
        let value = self.0;
        self.0 = self.0.wrapping_add(1);
        value
    }
}

#[test]
fn test_span() {
    assert_eq!(SPAN, 991);
}

#[test]
fn test_known_draws() {
    assert_eq!(between(&mut Fixed(0)), 10);
    assert_eq!(between(&mut Fixed(990)), 1000);
    assert_eq!(between(&mut Fixed(991)), 10);
    assert_eq!(between(&mut Fixed(1234)), 1234 % 991 + 10);
    assert_eq!(between(&mut Fixed(crate::source::RAND_MAX)), 2_147_483_647 % 991 + 10);
    assert_eq!(between(&mut Fixed(u32::MAX)), u32::MAX % 991 + 10);
}

#[test]
fn test_every_residue_in_range() {
    // One full cycle hits each value of the range exactly once.
    let mut source = Counting(5_000);
    let mut seen = vec![false; SPAN as usize];
    for _ in 0..SPAN {
        let value = between(&mut source);
        assert!((LOW..=HIGH).contains(&value), "{} out of range", value);
        seen[(value - LOW) as usize] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn test_seeded_draws_in_range() {
    let mut source = crate::source::TimeSeededSource::new(1_600_000_000);
    for _ in 0..10_000 {
        let value = between(&mut source);
        assert!((LOW..=HIGH).contains(&value), "{} out of range", value);
    }
}
