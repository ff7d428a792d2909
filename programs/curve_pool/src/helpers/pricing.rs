use anchor_lang::prelude::*;

use crate::{
    constants::PRICE_SCALE,
    error::ErrorCode,
    helpers::math::{inv_ppm_to_q64, mul_bps_u64, ppm_to_q64, pow_q64, Q64_ONE},
    state::Pool,
};

#[derive(Debug)]
pub struct BuyOutcome {
    pub fee: u64,
    pub protocol_fee: u64,
    pub reserve_fee: u64,
    pub reserve_in: u64,
    pub tokens_out: u64,
    pub crossed_threshold: bool,
}

#[derive(Debug)]
pub struct SellOutcome {
    pub reserve_out: u64,
    pub fee: u64,
    pub protocol_fee: u64,
    pub reserve_fee: u64,
    pub net_payout: u64,
}

/// Per-trade ceiling: `max_trade_bps` of the reserve as it stands right now.
/// Never cached, so the limit scales with the pool and cannot go stale.
pub fn trade_cap(pool: &Pool) -> Result<u64> {
    mul_bps_u64(pool.reserve_balance, pool.max_trade_bps as u64)
}

fn to_u64(value: u128) -> Result<u64> {
    require!(value <= u64::MAX as u128, ErrorCode::MathOverflow);
    Ok(value as u64)
}

fn quote_flat_buy(reserve_in: u64, flat_price: u64) -> Result<u64> {
    let tokens = (reserve_in as u128)
        .checked_mul(PRICE_SCALE as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / flat_price as u128;
    to_u64(tokens)
}

fn quote_flat_sell(tokens_in: u64, flat_price: u64) -> Result<u64> {
    let reserve = (tokens_in as u128)
        .checked_mul(flat_price as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / PRICE_SCALE as u128;
    to_u64(reserve)
}

/// Tokens minted for `reserve_in` added to a live curve:
/// `supply * ((1 + reserve_in/reserve)^w - 1)`, floored.
pub fn quote_curve_buy(
    reserve: u64,
    supply: u64,
    reserve_ratio_ppm: u32,
    reserve_in: u64,
) -> Result<u64> {
    require!(reserve > 0, ErrorCode::InsufficientReserve);
    require!(supply > 0, ErrorCode::SupplyEmpty);
    if reserve_in == 0 {
        return Ok(0);
    }

    let ratio_q64 = Q64_ONE
        .checked_add(((reserve_in as u128) << 64) / reserve as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let factor = pow_q64(ratio_q64, ppm_to_q64(reserve_ratio_ppm))?;
    let gain = factor.saturating_sub(Q64_ONE);

    let tokens = (supply as u128)
        .checked_mul(gain)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        >> 64;
    to_u64(tokens)
}

/// Reserve released for burning `tokens_in` against a live curve:
/// `reserve * (1 - (1 - tokens_in/supply)^(1/w))`, floored. Exact inverse of
/// the buy leg, so a round trip can never withdraw more than was deposited.
/// Never exceeds the reserve; burning the whole supply drains it exactly.
pub fn quote_curve_sell(
    reserve: u64,
    supply: u64,
    reserve_ratio_ppm: u32,
    tokens_in: u64,
) -> Result<u64> {
    require!(supply > 0, ErrorCode::SupplyEmpty);
    require!(tokens_in <= supply, ErrorCode::SellExceedsSupply);
    if tokens_in == 0 {
        return Ok(0);
    }
    if tokens_in == supply {
        return Ok(reserve);
    }

    let remainder_q64 = Q64_ONE - ((tokens_in as u128) << 64) / supply as u128;
    let factor = pow_q64(remainder_q64, inv_ppm_to_q64(reserve_ratio_ppm)?)?;
    let loss = Q64_ONE.saturating_sub(factor);

    let out = (reserve as u128)
        .checked_mul(loss)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        >> 64;
    to_u64(out)
}

/// Quote a buy of `reserve_in` (post-fee) against the pool's current phase.
/// A flat-phase buy that would carry the reserve past the threshold is split:
/// the sub-amount filling exactly to the threshold prices flat, the remainder
/// prices on the curve with the threshold as its starting baseline, keeping
/// the output continuous across the boundary.
pub fn quote_buy(pool: &Pool, supply: u64, reserve_in: u64) -> Result<(u64, bool)> {
    if pool.has_graduated {
        let tokens = quote_curve_buy(
            pool.reserve_balance,
            supply,
            pool.reserve_ratio_ppm,
            reserve_in,
        )?;
        return Ok((tokens, false));
    }

    let new_reserve = pool
        .reserve_balance
        .checked_add(reserve_in)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if new_reserve <= pool.graduation_threshold {
        return Ok((quote_flat_buy(reserve_in, pool.flat_price)?, false));
    }

    let flat_portion = pool.graduation_threshold - pool.reserve_balance;
    let curve_portion = reserve_in - flat_portion;
    let flat_tokens = quote_flat_buy(flat_portion, pool.flat_price)?;
    let base_supply = supply
        .checked_add(flat_tokens)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let curve_tokens = quote_curve_buy(
        pool.graduation_threshold,
        base_supply,
        pool.reserve_ratio_ppm,
        curve_portion,
    )?;

    let tokens = flat_tokens
        .checked_add(curve_tokens)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok((tokens, true))
}

/// Gross reserve quote for selling `tokens_in` under the current phase.
pub fn quote_sell(pool: &Pool, supply: u64, tokens_in: u64) -> Result<u64> {
    if pool.has_graduated {
        quote_curve_sell(
            pool.reserve_balance,
            supply,
            pool.reserve_ratio_ppm,
            tokens_in,
        )
    } else {
        quote_flat_sell(tokens_in, pool.flat_price)
    }
}

/// Spot price in reserve units per token, Q64.64. Flat phase pins it to the
/// configured price; on the curve it satisfies `price = reserve / (w * supply)`.
pub fn spot_price_q64(pool: &Pool, supply: u64) -> Result<u128> {
    if !pool.has_graduated {
        return Ok(((pool.flat_price as u128) << 64) / PRICE_SCALE as u128);
    }
    require!(supply > 0, ErrorCode::SupplyEmpty);

    let weighted_supply = ppm_to_q64(pool.reserve_ratio_ppm)
        .checked_mul(supply as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        >> 64;
    require!(weighted_supply > 0, ErrorCode::SupplyEmpty);
    Ok(((pool.reserve_balance as u128) << 64) / weighted_supply)
}

fn mark_graduated(pool: &mut Pool) -> bool {
    if !pool.has_graduated && pool.reserve_balance > pool.graduation_threshold {
        pool.has_graduated = true;
        return true;
    }
    false
}

/// Validates, quotes, and applies a buy to the pool counters. Rejections
/// happen before any mutation. Token minting is the caller's job.
pub fn settle_buy(
    pool: &mut Pool,
    supply: u64,
    amount_in: u64,
    min_tokens_out: u64,
) -> Result<BuyOutcome> {
    require!(amount_in > 0, ErrorCode::InvalidAmount);
    if pool.has_graduated {
        require!(amount_in <= trade_cap(pool)?, ErrorCode::TradeSizeExceeded);
    }

    let fee = mul_bps_u64(amount_in, pool.trade_fee_bps as u64)?;
    let reserve_in = amount_in
        .checked_sub(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let protocol_fee = mul_bps_u64(fee, pool.protocol_fee_bps as u64)?;
    let reserve_fee = fee
        .checked_sub(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let (tokens_out, _) = quote_buy(pool, supply, reserve_in)?;
    require!(tokens_out > 0, ErrorCode::InvalidAmount);
    require!(tokens_out >= min_tokens_out, ErrorCode::SlippageExceeded);

    pool.reserve_balance = pool
        .reserve_balance
        .checked_add(reserve_in)
        .and_then(|r| r.checked_add(reserve_fee))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.treasury_balance = pool
        .treasury_balance
        .checked_add(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let crossed_threshold = mark_graduated(pool);

    Ok(BuyOutcome {
        fee,
        protocol_fee,
        reserve_fee,
        reserve_in,
        tokens_out,
        crossed_threshold,
    })
}

/// Validates, quotes, and applies a sell. The trade-size cap binds on the
/// quoted gross outflow; slippage is checked against the gross quote; the fee
/// comes out of the payout, with its reserve share credited back.
pub fn settle_sell(
    pool: &mut Pool,
    supply: u64,
    tokens_in: u64,
    min_reserve_out: u64,
) -> Result<SellOutcome> {
    require!(tokens_in > 0, ErrorCode::InvalidAmount);

    let reserve_out = quote_sell(pool, supply, tokens_in)?;
    require!(reserve_out > 0, ErrorCode::InvalidAmount);
    require!(
        reserve_out <= pool.reserve_balance,
        ErrorCode::InsufficientReserve
    );
    if pool.has_graduated {
        require!(
            reserve_out <= trade_cap(pool)?,
            ErrorCode::TradeSizeExceeded
        );
    }
    require!(reserve_out >= min_reserve_out, ErrorCode::SlippageExceeded);

    let fee = mul_bps_u64(reserve_out, pool.trade_fee_bps as u64)?;
    let protocol_fee = mul_bps_u64(fee, pool.protocol_fee_bps as u64)?;
    let reserve_fee = fee
        .checked_sub(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let net_payout = reserve_out
        .checked_sub(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    pool.reserve_balance = pool
        .reserve_balance
        .checked_sub(reserve_out)
        .and_then(|r| r.checked_add(reserve_fee))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.treasury_balance = pool
        .treasury_balance
        .checked_add(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok(SellOutcome {
        reserve_out,
        fee,
        protocol_fee,
        reserve_fee,
        net_payout,
    })
}

/// Direct reserve top-up (fee sweep), bypassing trade mechanics. May itself
/// push the pool over the threshold. Returns whether it did.
pub fn apply_deposit(pool: &mut Pool, amount: u64) -> Result<bool> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    pool.reserve_balance = pool
        .reserve_balance
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok(mark_graduated(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u64 = 25_000_000_000; // $25k at 6 decimals
    const FLAT_PRICE: u64 = 10_000; // $0.01 per whole token

    fn flat_pool(trade_fee_bps: u16) -> Pool {
        Pool {
            admin: Pubkey::default(),
            treasury: Pubkey::default(),
            token_mint: Pubkey::default(),
            reserve_mint: Pubkey::default(),
            reserve_vault: Pubkey::default(),
            treasury_vault: Pubkey::default(),
            token_authority_program: Pubkey::default(),
            reserve_balance: 0,
            treasury_balance: 0,
            reserve_ratio_ppm: 100_000, // 10%
            trade_fee_bps,
            protocol_fee_bps: 2_500,
            max_trade_bps: 2_000,
            flat_price: FLAT_PRICE,
            graduation_threshold: THRESHOLD,
            sell_enabled_at: 0,
            has_graduated: false,
            paused: false,
            created_at: 0,
            authority_bump: 0,
            bump: 0,
        }
    }

    fn graduated_pool(trade_fee_bps: u16) -> (Pool, u64) {
        let mut pool = flat_pool(trade_fee_bps);
        pool.reserve_balance = 30_000_000_000;
        pool.has_graduated = true;
        let supply = 2_500_000_000_000u64;
        (pool, supply)
    }

    #[test]
    fn flat_buy_prices_at_configured_rate() {
        let mut pool = flat_pool(0);
        let out = settle_buy(&mut pool, 0, 1_000_000, 0).unwrap();
        // $1 at $0.01 per token = 100 whole tokens.
        assert_eq!(out.tokens_out, 100 * PRICE_SCALE);
        assert_eq!(pool.reserve_balance, 1_000_000);
        assert!(!pool.has_graduated);
    }

    #[test]
    fn buy_to_exact_threshold_stays_flat_one_more_unit_graduates() {
        let mut pool = flat_pool(0);
        let supply = 0u64;

        let out = settle_buy(&mut pool, supply, THRESHOLD, 0).unwrap();
        assert!(!out.crossed_threshold);
        assert!(!pool.has_graduated);
        assert_eq!(pool.reserve_balance, THRESHOLD);
        let supply = out.tokens_out;

        let out = settle_buy(&mut pool, supply, 1_000_000, 0).unwrap();
        assert!(out.crossed_threshold);
        assert!(pool.has_graduated);
        let supply = supply + out.tokens_out;

        // A later buy must not report a second transition.
        let out = settle_buy(&mut pool, supply, 1_000_000, 0).unwrap();
        assert!(!out.crossed_threshold);
    }

    #[test]
    fn crossing_buy_splits_and_curve_leg_pays_fewer_tokens_per_unit() {
        let pool = {
            let mut p = flat_pool(0);
            p.reserve_balance = 0;
            p
        };

        let reserve_in = 30_000_000_000u64; // $30k against a $25k threshold
        let (total, crossed) = quote_buy(&pool, 0, reserve_in).unwrap();
        assert!(crossed);

        let flat_tokens = quote_flat_buy(THRESHOLD, FLAT_PRICE).unwrap();
        let curve_tokens = total - flat_tokens;
        assert_eq!(flat_tokens, 2_500_000_000_000);
        // 2.5e12 * (1.2^0.1 - 1) ~ 4.6e10
        assert!(curve_tokens > 45_000_000_000 && curve_tokens < 47_000_000_000);

        // Strictly fewer tokens per reserve unit on the curve leg.
        let curve_portion = reserve_in - THRESHOLD;
        assert!(
            (curve_tokens as u128) * (THRESHOLD as u128)
                < (flat_tokens as u128) * (curve_portion as u128)
        );
    }

    #[test]
    fn slippage_rejection_leaves_pool_untouched() {
        let (mut pool, supply) = graduated_pool(100);
        let before = pool.clone();

        let err = settle_buy(&mut pool, supply, 1_000_000_000, u64::MAX).unwrap_err();
        assert_eq!(err, ErrorCode::SlippageExceeded.into());
        assert_eq!(pool.reserve_balance, before.reserve_balance);
        assert_eq!(pool.treasury_balance, before.treasury_balance);
        assert_eq!(pool.has_graduated, before.has_graduated);
    }

    #[test]
    fn trade_cap_tracks_current_reserve() {
        let (mut pool, supply) = graduated_pool(0);
        let cap = trade_cap(&pool).unwrap();
        assert_eq!(cap, 6_000_000_000); // 20% of 30e9

        let err = settle_buy(&mut pool, supply, cap + 1, 0).unwrap_err();
        assert_eq!(err, ErrorCode::TradeSizeExceeded.into());

        // Growing the reserve raises the cap for the next call.
        settle_buy(&mut pool, supply, cap, 0).unwrap();
        assert!(trade_cap(&pool).unwrap() > cap);
    }

    #[test]
    fn flat_phase_trades_are_uncapped() {
        let mut pool = flat_pool(0);
        // Far above max_trade_bps of the (zero) reserve.
        assert!(settle_buy(&mut pool, 0, 10_000_000_000, 0).is_ok());
    }

    #[test]
    fn sell_quote_never_exceeds_reserve_and_full_burn_drains_it() {
        let (pool, supply) = graduated_pool(0);
        for tokens in [1u64, supply / 7, supply / 3, supply - 1] {
            let gross =
                quote_curve_sell(pool.reserve_balance, supply, pool.reserve_ratio_ppm, tokens)
                    .unwrap();
            assert!(gross <= pool.reserve_balance);
        }
        let all = quote_curve_sell(pool.reserve_balance, supply, pool.reserve_ratio_ppm, supply)
            .unwrap();
        assert_eq!(all, pool.reserve_balance);
    }

    #[test]
    fn graduation_survives_reserve_drain() {
        let (mut pool, mut supply) = graduated_pool(0);
        assert!(pool.has_graduated);

        // Capped sells of 2% of supply each remove ~18% of the reserve.
        for _ in 0..3 {
            let tokens = supply / 50;
            let out = settle_sell(&mut pool, supply, tokens, 0).unwrap();
            assert!(out.reserve_out <= mul_bps_u64(out.reserve_out + pool.reserve_balance, 2_000).unwrap());
            supply -= tokens;
        }

        assert!(pool.reserve_balance < THRESHOLD);
        assert!(pool.has_graduated);

        // And sells keep pricing on the curve, not the flat tier.
        let gross = quote_sell(&pool, supply, supply / 100).unwrap();
        let flat = quote_flat_sell(supply / 100, FLAT_PRICE).unwrap();
        assert_ne!(gross, flat);
    }

    #[test]
    fn round_trip_returns_strictly_less_with_fees_and_never_more_without() {
        for fee_bps in [0u16, 100] {
            let (mut pool, supply) = graduated_pool(fee_bps);
            let amount_in = 1_000_000_000u64;

            let buy = settle_buy(&mut pool, supply, amount_in, 0).unwrap();
            let supply_after = supply + buy.tokens_out;

            let sell = settle_sell(&mut pool, supply_after, buy.tokens_out, 0).unwrap();
            if fee_bps == 0 {
                assert!(sell.net_payout <= amount_in);
            } else {
                assert!(sell.net_payout < amount_in);
            }
        }
    }

    #[test]
    fn sell_fee_split_conserves_value() {
        let (mut pool, supply) = graduated_pool(100);
        let reserve_before = pool.reserve_balance;
        let treasury_before = pool.treasury_balance;

        let out = settle_sell(&mut pool, supply, supply / 100, 0).unwrap();
        assert_eq!(out.fee, out.protocol_fee + out.reserve_fee);
        assert_eq!(out.net_payout, out.reserve_out - out.fee);
        assert_eq!(
            pool.reserve_balance,
            reserve_before - out.reserve_out + out.reserve_fee
        );
        assert_eq!(pool.treasury_balance, treasury_before + out.protocol_fee);
    }

    #[test]
    fn deposit_can_trigger_graduation_exactly_once() {
        let mut pool = flat_pool(0);
        assert!(!apply_deposit(&mut pool, THRESHOLD).unwrap());
        assert!(!pool.has_graduated);
        assert!(apply_deposit(&mut pool, 1).unwrap());
        assert!(pool.has_graduated);
        assert!(!apply_deposit(&mut pool, 1_000_000).unwrap());
    }

    #[test]
    fn spot_price_matches_reserve_ratio_invariant() {
        let (pool, supply) = graduated_pool(0);
        // price = R / (w * S) = 30e9 / (0.1 * 2.5e12) = 0.12 reserve/token unit
        let price = spot_price_q64(&pool, supply).unwrap();
        let price_f = price as f64 / (1u128 << 64) as f64;
        assert!((price_f - 0.12).abs() < 1e-6);
    }

    #[test]
    fn zero_and_oversized_sells_are_rejected() {
        let (mut pool, supply) = graduated_pool(0);
        assert!(settle_sell(&mut pool, supply, 0, 0).is_err());
        let err = settle_sell(&mut pool, supply, supply + 1, 0).unwrap_err();
        assert_eq!(err, ErrorCode::SellExceedsSupply.into());
    }
}
