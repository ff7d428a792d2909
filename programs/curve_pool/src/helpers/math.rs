use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, PPM_DENOM},
    error::ErrorCode,
};

/// Q64.64 fixed point: a u128 whose low 64 bits are fractional.
pub const Q64_ONE: u128 = 1u128 << 64;

/// Fractional-exponent bits consumed by `pow_q64`. Exponent truncation below
/// 2^-48 contributes a relative error under `ln(x) * 2^-48`; together with
/// the square-root chain the total relative error stays below 2^-28 on the
/// reachable domain (base in (0, 64), exponent in [0.05, 20]). All callers
/// floor their outputs, so the rounding direction always favors the pool.
pub const POW_FRACTION_BITS: u32 = 48;

pub fn mul_bps_u64(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Exact floor((a * b) >> 64) without overflowing the 128-bit intermediate,
/// by 64-bit limb decomposition.
pub fn mul_q64(a: u128, b: u128) -> Result<u128> {
    let (a_hi, a_lo) = (a >> 64, a & (Q64_ONE - 1));
    let (b_hi, b_lo) = (b >> 64, b & (Q64_ONE - 1));

    let hh = a_hi
        .checked_mul(b_hi)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    require!(hh <= u64::MAX as u128, ErrorCode::MathOverflow);
    let hi = hh << 64;
    let cross = a_hi
        .checked_mul(b_lo)
        .and_then(|v| v.checked_add(a_lo * b_hi))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    hi.checked_add(cross)
        .and_then(|v| v.checked_add((a_lo * b_lo) >> 64))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Floor integer square root, bisection over u128.
fn isqrt_u128(x: u128) -> u128 {
    let mut lo: u128 = 0;
    let mut hi: u128 = 1u128 << 64;
    while lo < hi {
        let diff = hi - lo;
        let mid = lo + (diff / 2) + (diff % 2);
        match mid.checked_mul(mid) {
            Some(sq) if sq <= x => lo = mid,
            _ => hi = mid - 1,
        }
    }
    lo
}

/// Square root in Q64.64: floor(sqrt(a * 2^64)). The input is pre-shifted by
/// the largest even amount that fits so precision is maximal near 1.
pub fn sqrt_q64(a: u128) -> u128 {
    if a == 0 {
        return 0;
    }
    let shift = core::cmp::min(64, a.leading_zeros() & !1);
    let root = isqrt_u128(a << shift);
    root << (32 - shift / 2)
}

/// base^exp for Q64.64 operands, base > 0, via binary exponentiation on both
/// sides of the radix point: the integer bits of the exponent contribute
/// square-and-multiply factors, the k-th fractional bit contributes
/// base^(2^-k) obtained by iterated square roots. Deterministic,
/// integer-only, no constant tables.
pub fn pow_q64(base: u128, exp: u128) -> Result<u128> {
    require!(base > 0, ErrorCode::MathOverflow);

    let mut result = Q64_ONE;

    let mut int_bits = exp >> 64;
    let mut square = base;
    while int_bits > 0 {
        if int_bits & 1 != 0 {
            result = mul_q64(result, square)?;
        }
        int_bits >>= 1;
        if int_bits > 0 {
            square = mul_q64(square, square)?;
        }
    }

    let mut factor = base;
    for k in 1..=POW_FRACTION_BITS {
        factor = sqrt_q64(factor);
        if exp & (1u128 << (64 - k)) != 0 {
            result = mul_q64(result, factor)?;
        }
    }
    Ok(result)
}

pub fn ppm_to_q64(ppm: u32) -> u128 {
    ((ppm as u128) << 64) / PPM_DENOM as u128
}

/// 1/w in Q64.64 for a reserve ratio given in ppm. Bounded callers keep the
/// result in [2, 20].
pub fn inv_ppm_to_q64(ppm: u32) -> Result<u128> {
    require!(ppm > 0, ErrorCode::MathOverflow);
    Ok(((PPM_DENOM as u128) << 64) / ppm as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q64(x: f64) -> u128 {
        (x * Q64_ONE as f64) as u128
    }

    fn from_q64(x: u128) -> f64 {
        x as f64 / Q64_ONE as f64
    }

    #[test]
    fn mul_bps_basic_splits() {
        assert_eq!(mul_bps_u64(1_000_000, 500).unwrap(), 50_000);
        assert_eq!(mul_bps_u64(2_500_000, 10_000).unwrap(), 2_500_000);
        assert_eq!(mul_bps_u64(0, 10_000).unwrap(), 0);
    }

    #[test]
    fn mul_q64_is_exact_on_powers_of_two() {
        assert_eq!(mul_q64(Q64_ONE, Q64_ONE).unwrap(), Q64_ONE);
        assert_eq!(mul_q64(Q64_ONE * 3, Q64_ONE / 2).unwrap(), Q64_ONE * 3 / 2);
        assert_eq!(mul_q64(Q64_ONE / 4, Q64_ONE / 4).unwrap(), Q64_ONE / 16);
    }

    #[test]
    fn sqrt_q64_known_values() {
        assert_eq!(sqrt_q64(Q64_ONE), Q64_ONE);
        assert_eq!(sqrt_q64(Q64_ONE * 4), Q64_ONE * 2);
        let root = sqrt_q64(Q64_ONE / 4);
        assert!((from_q64(root) - 0.5).abs() < 1e-9);
        let root2 = sqrt_q64(q64(2.0));
        assert!((from_q64(root2) - 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn pow_q64_half_power_is_sqrt() {
        let r = pow_q64(q64(0.25), Q64_ONE / 2).unwrap();
        assert!((from_q64(r) - 0.5).abs() < 1e-6);

        let r = pow_q64(q64(2.0), Q64_ONE / 2).unwrap();
        assert!((from_q64(r) - 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn pow_q64_matches_float_reference() {
        for &(base, exp) in &[
            (1.2f64, 0.1f64),
            (1.5, 0.5),
            (1.0001, 0.05),
            (0.9, 0.1),
            (0.001, 0.5),
            (0.999999, 0.25),
            (1.5, 0.05),
        ] {
            let got = from_q64(pow_q64(q64(base), q64(exp)).unwrap());
            let want = base.powf(exp);
            assert!(
                (got - want).abs() / want < 1e-6,
                "{base}^{exp}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn pow_q64_is_monotonic_in_base() {
        let w = ppm_to_q64(100_000);
        let mut prev = 0u128;
        for i in 1..=50u128 {
            let base = Q64_ONE + i * (Q64_ONE / 100);
            let cur = pow_q64(base, w).unwrap();
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn pow_q64_integer_exponents() {
        assert_eq!(pow_q64(Q64_ONE * 2, Q64_ONE * 2).unwrap(), Q64_ONE * 4);
        assert_eq!(pow_q64(Q64_ONE, Q64_ONE * 17).unwrap(), Q64_ONE);

        // 0.98^10 and mixed integer+fraction exponents against a float oracle.
        for &(base, exp) in &[(0.98f64, 10.0f64), (0.9, 20.0), (1.05, 2.5), (0.7, 3.000003)] {
            let got = from_q64(pow_q64(q64(base), q64(exp)).unwrap());
            let want = base.powf(exp);
            assert!(
                (got - want).abs() / want < 1e-6,
                "{base}^{exp}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn pow_q64_rejects_zero_base() {
        assert!(pow_q64(0, Q64_ONE / 2).is_err());
    }

    #[test]
    fn inv_ppm_matches_reciprocal() {
        assert_eq!(inv_ppm_to_q64(100_000).unwrap(), Q64_ONE * 10);
        assert_eq!(inv_ppm_to_q64(500_000).unwrap(), Q64_ONE * 2);
        assert_eq!(inv_ppm_to_q64(50_000).unwrap(), Q64_ONE * 20);
        assert!(inv_ppm_to_q64(0).is_err());
    }

    #[test]
    fn ppm_conversion_brackets() {
        assert!((from_q64(ppm_to_q64(100_000)) - 0.1).abs() < 1e-12);
        assert!((from_q64(ppm_to_q64(500_000)) - 0.5).abs() < 1e-12);
        assert!((from_q64(ppm_to_q64(50_000)) - 0.05).abs() < 1e-12);
    }
}
