//! Linear vesting accrual math.
//! - vested = min(1, (now - start) / duration) * total, integer-truncated
//! - withdrawable = vested - withdrawn
//! - locked = total - vested
//!
//! Every function takes the current timestamp as an explicit parameter;
//! nothing in this module reads a clock.

use crate::error::VestingError;
use crate::state::RecipientEntry;

/// Amount vested at `now_ts` for a grant of `total` starting at `start_ts`.
/// Clamps to 0 before `start_ts` and to `total` from
/// `start_ts + duration_secs` onward.
pub fn vested_amount(
    total: u64,
    start_ts: i64,
    now_ts: i64,
    duration_secs: i64,
) -> Result<u64, VestingError> {
    if duration_secs <= 0 {
        return Err(VestingError::InvalidConfig);
    }
    let elapsed = now_ts.saturating_sub(start_ts);
    if elapsed <= 0 {
        return Ok(0);
    }
    if elapsed >= duration_secs {
        return Ok(total);
    }
    let v = (total as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration_secs as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Vested amount not yet withdrawn. Non-negative whenever the ledger
/// invariant `withdrawn <= vested` holds; a violation surfaces as overflow.
pub fn withdrawable_amount(
    entry: &RecipientEntry,
    now_ts: i64,
    duration_secs: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(entry.total_granted, entry.start_ts, now_ts, duration_secs)?;
    vested
        .checked_sub(entry.withdrawn)
        .ok_or(VestingError::MathOverflow)
}

/// Granted amount not yet vested.
pub fn locked_amount(total: u64, vested: u64) -> Result<u64, VestingError> {
    total.checked_sub(vested).ok_or(VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const TOTAL: u64 = 1_000_000;
    const DURATION: i64 = 1_000;

    fn entry(withdrawn: u64) -> RecipientEntry {
        RecipientEntry {
            wallet: Pubkey::new_from_array([7u8; 32]),
            total_granted: TOTAL,
            start_ts: 0,
            withdrawn,
        }
    }

    #[test]
    fn linear_accrual_scenario() {
        // Half way through: half vested, all of it withdrawable.
        assert_eq!(vested_amount(TOTAL, 0, 500, DURATION).unwrap(), 500_000);
        assert_eq!(withdrawable_amount(&entry(0), 500, DURATION).unwrap(), 500_000);

        // After withdrawing the 500_000, nothing is left at the same instant.
        assert_eq!(withdrawable_amount(&entry(500_000), 500, DURATION).unwrap(), 0);

        // At the end boundary everything has vested; only the second half
        // remains withdrawable.
        assert_eq!(vested_amount(TOTAL, 0, 1_000, DURATION).unwrap(), TOTAL);
        assert_eq!(
            withdrawable_amount(&entry(500_000), 1_000, DURATION).unwrap(),
            500_000
        );
    }

    #[test]
    fn vested_is_monotone_and_complements_locked() {
        let mut prev = 0u64;
        for now in [-50, 0, 1, 3, 250, 500, 999, 1_000, 1_001, 10_000] {
            let vested = vested_amount(TOTAL, 0, now, DURATION).unwrap();
            assert!(vested >= prev);
            assert!(vested <= TOTAL);
            assert_eq!(locked_amount(TOTAL, vested).unwrap() + vested, TOTAL);
            prev = vested;
        }
    }

    #[test]
    fn clamps_at_both_ends() {
        assert_eq!(vested_amount(TOTAL, 100, 50, DURATION).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 100, 100, DURATION).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 100, 100 + DURATION, DURATION).unwrap(), TOTAL);
        assert_eq!(vested_amount(TOTAL, 100, i64::MAX, DURATION).unwrap(), TOTAL);
    }

    #[test]
    fn truncates_toward_zero() {
        // 3 tokens over 1000s: nothing vests until a full third has elapsed.
        assert_eq!(vested_amount(3, 0, 333, 1_000).unwrap(), 0);
        assert_eq!(vested_amount(3, 0, 334, 1_000).unwrap(), 1);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let e = entry(123_456);
        let first = withdrawable_amount(&e, 700, DURATION).unwrap();
        let second = withdrawable_amount(&e, 700, DURATION).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn large_grant_does_not_overflow() {
        // u64::MAX grant mid-schedule exercises the u128 intermediates.
        let vested = vested_amount(u64::MAX, 0, 500, DURATION).unwrap();
        assert_eq!(vested, (u64::MAX as u128 * 500 / 1_000) as u64);
    }

    #[test]
    fn invalid_duration_rejected() {
        assert!(vested_amount(TOTAL, 0, 500, 0).is_err());
        assert!(vested_amount(TOTAL, 0, 500, -1).is_err());
    }
}
