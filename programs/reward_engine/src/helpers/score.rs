use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, MAX_BATCH_CONTRIBUTORS, REWARD_DENOM},
    error::ErrorCode,
    state::{ContributorStats, MetricSet},
};

/// Relative improvement in bps: `max(0, (new - baseline) * 10,000 / baseline)`.
/// A zero baseline yields zero rather than a division fault.
pub fn improvement_bps(baseline: u16, new: u16) -> u64 {
    if baseline == 0 || new <= baseline {
        return 0;
    }
    ((new - baseline) as u64 * BPS_DENOM) / baseline as u64
}

/// Arithmetic mean of the five per-metric improvements. Zero when no metric
/// improved.
pub fn aggregate_score_bps(baseline: &MetricSet, new: &MetricSet) -> u64 {
    let total: u64 = baseline
        .values()
        .iter()
        .zip(new.values().iter())
        .map(|(&b, &n)| improvement_bps(b, n))
        .sum();
    total / MetricSet::COUNT
}

/// `(score/100) * rate * (weight/10,000)`, floored, zero below the
/// minimum-improvement threshold, clamped (not rejected) at `max_reward`.
pub fn compute_reward(
    score_bps: u64,
    rate: u64,
    weight_bps: u16,
    min_improvement_bps: u64,
    max_reward: u64,
) -> Result<u64> {
    if score_bps < min_improvement_bps {
        return Ok(0);
    }

    let raw = (score_bps as u128)
        .checked_mul(rate as u128)
        .and_then(|v| v.checked_mul(weight_bps as u128))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / REWARD_DENOM;

    Ok(core::cmp::min(raw, max_reward as u128) as u64)
}

/// Proportional split with exact conservation: each share is floored, and the
/// rounding remainder goes in full to the first contributor. The distributed
/// sum therefore equals `total` exactly.
pub fn split_reward(total: u64, weights: &[u16]) -> Result<Vec<u64>> {
    let mut shares = Vec::with_capacity(weights.len());
    let mut distributed: u64 = 0;
    for &weight in weights {
        let share = ((total as u128 * weight as u128) / BPS_DENOM as u128) as u64;
        distributed = distributed
            .checked_add(share)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        shares.push(share);
    }

    let remainder = total
        .checked_sub(distributed)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if let Some(first) = shares.first_mut() {
        *first = first
            .checked_add(remainder)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }
    Ok(shares)
}

/// Batch weight invariants: non-empty, within the batch ceiling, every
/// weight a valid bps share, and the shares summing to exactly 10,000.
pub fn validate_weights(weights: &[u16]) -> Result<()> {
    require!(!weights.is_empty(), ErrorCode::EmptyBatch);
    require!(
        weights.len() <= MAX_BATCH_CONTRIBUTORS,
        ErrorCode::BatchTooLarge
    );

    let mut sum: u64 = 0;
    for &weight in weights {
        require!(weight as u64 <= BPS_DENOM, ErrorCode::InvalidWeight);
        sum += weight as u64;
    }
    require!(sum == BPS_DENOM, ErrorCode::WeightSumMismatch);
    Ok(())
}

pub fn enforce_cooldown(stats: &ContributorStats, now: i64, cooldown_secs: i64) -> Result<()> {
    if stats.last_submitted_at == 0 {
        return Ok(());
    }
    let eligible_at = stats.last_submitted_at.saturating_add(cooldown_secs);
    require!(now >= eligible_at, ErrorCode::CooldownActive);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(values: [u16; 5]) -> MetricSet {
        MetricSet {
            accuracy: values[0],
            precision: values[1],
            recall: values[2],
            f1: values[3],
            auc: values[4],
        }
    }

    #[test]
    fn zero_baseline_yields_zero_not_a_fault() {
        assert_eq!(improvement_bps(0, 5_000), 0);
        assert_eq!(improvement_bps(0, 0), 0);
    }

    #[test]
    fn regression_floors_at_zero() {
        assert_eq!(improvement_bps(5_000, 4_000), 0);
        assert_eq!(improvement_bps(5_000, 5_000), 0);
    }

    #[test]
    fn improvement_is_relative_to_baseline() {
        // 5000 -> 5500 is a 10% improvement.
        assert_eq!(improvement_bps(5_000, 5_500), 1_000);
        // 100 -> 200 doubles: 100%.
        assert_eq!(improvement_bps(100, 200), 10_000);
    }

    #[test]
    fn aggregate_is_mean_of_five() {
        let baseline = metrics([5_000, 5_000, 5_000, 5_000, 0]);
        let new = metrics([5_500, 5_000, 4_000, 6_000, 9_000]);
        // Per-metric: 1000, 0, 0, 2000, 0 (zero baseline) -> mean 600.
        assert_eq!(aggregate_score_bps(&baseline, &new), 600);
    }

    #[test]
    fn reward_below_threshold_is_zero() {
        assert_eq!(compute_reward(99, 1_000_000, 10_000, 100, u64::MAX).unwrap(), 0);
        assert!(compute_reward(100, 1_000_000, 10_000, 100, u64::MAX).unwrap() > 0);
    }

    #[test]
    fn reward_formula_and_clamp() {
        // 500 bps = 5 percentage points at rate 1e6, full weight: 5e6 tokens.
        assert_eq!(
            compute_reward(500, 1_000_000, 10_000, 0, u64::MAX).unwrap(),
            5_000_000
        );
        // Half weight halves it.
        assert_eq!(
            compute_reward(500, 1_000_000, 5_000, 0, u64::MAX).unwrap(),
            2_500_000
        );
        // The cap clamps silently instead of failing.
        assert_eq!(
            compute_reward(500, 1_000_000, 10_000, 0, 1_000).unwrap(),
            1_000
        );
    }

    #[test]
    fn split_conserves_total_exactly() {
        for total in [1u64, 99, 100, 12_345, 1_000_000_007] {
            let shares = split_reward(total, &[5_000, 3_000, 2_000]).unwrap();
            assert_eq!(shares.iter().sum::<u64>(), total);
        }
    }

    #[test]
    fn dust_goes_to_the_first_contributor() {
        let shares = split_reward(100, &[3_333, 3_333, 3_334]).unwrap();
        assert_eq!(shares, vec![34, 33, 33]);
        assert_eq!(shares.iter().sum::<u64>(), 100);
    }

    #[test]
    fn extreme_skew_floors_minority_to_zero_without_loss() {
        let shares = split_reward(100, &[9_999, 1]).unwrap();
        assert_eq!(shares[1], 0);
        assert_eq!(shares.iter().sum::<u64>(), 100);
    }

    #[test]
    fn weight_validation_accepts_exact_sum() {
        assert!(validate_weights(&[10_000]).is_ok());
        assert!(validate_weights(&[5_000, 3_000, 2_000]).is_ok());
        assert!(validate_weights(&[9_999, 1]).is_ok());
    }

    #[test]
    fn weight_validation_rejects_each_invariant() {
        assert!(validate_weights(&[]).is_err());
        assert!(validate_weights(&[5_000, 4_999]).is_err());
        assert!(validate_weights(&[5_000, 5_001]).is_err());
        assert!(validate_weights(&[10_001]).is_err());

        let oversize = vec![100u16; 101];
        assert!(validate_weights(&oversize).is_err());
        // 100 entries is the ceiling, not past it.
        let at_ceiling = vec![100u16; 100];
        assert!(validate_weights(&at_ceiling).is_ok());
    }

    #[test]
    fn cooldown_window_boundaries() {
        let mut stats = ContributorStats {
            model: Pubkey::default(),
            contributor: Pubkey::default(),
            last_submitted_at: 0,
            submission_count: 0,
            total_rewarded: 0,
            bump: 0,
        };
        // A fresh account has never submitted.
        assert!(enforce_cooldown(&stats, 1_000, 3_600).is_ok());

        stats.last_submitted_at = 1_000;
        assert!(enforce_cooldown(&stats, 1_000 + 3_599, 3_600).is_err());
        assert!(enforce_cooldown(&stats, 1_000 + 3_600, 3_600).is_ok());
    }
}
