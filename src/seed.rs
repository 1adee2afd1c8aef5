use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use log::debug;

/// Whole seconds elapsed between the Unix epoch and `now`.
pub(crate) fn from_time(now: SystemTime) -> anyhow::Result<u64> {
    let elapsed = now
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the Unix epoch")?;
    Ok(elapsed.as_secs())
}

/// Seed for this run, taken from the wall clock at second granularity.
pub(crate) fn from_clock() -> anyhow::Result<u64> {
    let seed = from_time(SystemTime::now())?;
    debug!("seeding from clock: {}", seed);
    Ok(seed)
}

#[cfg(test)]
use std::time::Duration;

#[test]
fn test_drops_subsecond_precision() -> anyhow::Result<()> {
    let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_999);
    assert_eq!(from_time(at)?, 1_700_000_000);

    let at = UNIX_EPOCH + Duration::from_secs(1_700_000_001);
    assert_eq!(from_time(at)?, 1_700_000_001);

    Ok(())
}

#[test]
fn test_epoch_is_zero() -> anyhow::Result<()> {
    assert_eq!(from_time(UNIX_EPOCH)?, 0);
    Ok(())
}

#[test]
fn test_before_epoch_is_an_error() {
    let err = from_time(UNIX_EPOCH - Duration::from_secs(1)).unwrap_err();
    assert!(err.to_string().contains("before the Unix epoch"));
}

#[test]
fn test_clock_is_past_2020() -> anyhow::Result<()> {
    // 2020-01-01T00:00:00Z
    assert!(from_clock()? > 1_577_836_800);
    Ok(())
}
