use crate::Half;
use crate::layout::{MANT_SHIFT_DELTA, half, single};

// ─────────────────────────── binary32 → binary16 ────────────────────────────

/// Converts a binary32 value to the binary16 storage format.
///
/// Total over every input bit pattern:
///
/// - `±0.0` map to `0x0000` / `0x8000`.
/// - The mantissa is truncated to its top 10 bits; there is no rounding.
/// - binary32 denormals keep exponent 0 and their truncated mantissa; they
///   are not rescaled into binary16 denormals.
/// - `±inf` map to `0x7C00` / `0xFC00`.
/// - NaNs keep their sign and truncated payload. A payload that truncates
///   to zero gets its lowest mantissa bit set so the result is still a NaN.
/// - Finite values outside the binary16 exponent range saturate the
///   exponent field to 0 or 31 instead of producing a denormal or an
///   overflow.
pub fn to_half(value: f32) -> Half {
    let bits = value.to_bits();
    if let Some(zero) = signed_zero_to_half(bits) {
        return zero;
    }

    let sign = single::sign_bit(bits);
    let mant = single::mantissa_bits(bits) >> MANT_SHIFT_DELTA;
    let exp = single::exponent_bits(bits);

    let out = match exp {
        0 => half::compose(sign, 0, mant),
        single::EXP_MAX if single::mantissa_bits(bits) == 0 => {
            if sign == 0 { half::POS_INFINITY } else { half::NEG_INFINITY }
        }
        single::EXP_MAX => half::compose(sign, half::EXP_MAX, mant.max(1)),
        _ => half::compose(sign, rebias_to_half(exp), mant),
    };
    Half::from_bits(out)
}

/// Converts a binary32 value to binary16, treating every non-zero input as
/// a normalized number.
///
/// Only finite, normalized inputs convert correctly. Denormals, infinities
/// and NaNs produce some pattern derived from reading their fields as if
/// they were normalized; the function never panics on them.
pub fn to_half_fast(value: f32) -> Half {
    let bits = value.to_bits();
    if let Some(zero) = signed_zero_to_half(bits) {
        return zero;
    }

    Half::from_bits(half::compose(
        single::sign_bit(bits),
        rebias_to_half(single::exponent_bits(bits)),
        single::mantissa_bits(bits) >> MANT_SHIFT_DELTA,
    ))
}

// ─────────────────────────── binary16 → binary32 ────────────────────────────

/// Converts a binary16 storage value back to binary32.
///
/// Total over all 2^16 patterns and exact for every normalized binary16
/// value. binary16 denormals keep exponent 0 and their mantissa widened by
/// 13 bits; they are not renormalized. `±inf` and NaNs keep their class,
/// sign and (widened) payload.
pub fn to_single(value: Half) -> f32 {
    let bits = value.to_bits();
    if let Some(zero) = signed_zero_to_single(bits) {
        return zero;
    }

    let sign = half::sign_bit(bits);
    let mant = half::mantissa_bits(bits) << MANT_SHIFT_DELTA;
    let exp = half::exponent_bits(bits);

    let out = match exp {
        0 => single::compose(sign, 0, mant),
        half::EXP_MAX if mant == 0 => {
            if sign == 0 { single::POS_INFINITY } else { single::NEG_INFINITY }
        }
        half::EXP_MAX => single::compose(sign, single::EXP_MAX, mant),
        _ => single::compose(sign, rebias_to_single(exp), mant),
    };
    f32::from_bits(out)
}

/// Converts a binary16 storage value to binary32, treating every non-zero
/// input as a normalized number.
///
/// Only finite, normalized inputs convert correctly; the function never
/// panics on the others.
pub fn to_single_fast(value: Half) -> f32 {
    let bits = value.to_bits();
    if let Some(zero) = signed_zero_to_single(bits) {
        return zero;
    }

    f32::from_bits(single::compose(
        half::sign_bit(bits),
        rebias_to_single(half::exponent_bits(bits)),
        half::mantissa_bits(bits) << MANT_SHIFT_DELTA,
    ))
}

// ────────────────────────────── Internals ───────────────────────────────────

fn signed_zero_to_half(bits: u32) -> Option<Half> {
    match bits {
        0 => Some(Half::ZERO),
        single::SIGN_MASK => Some(Half::NEG_ZERO),
        _ => None,
    }
}

fn signed_zero_to_single(bits: u16) -> Option<f32> {
    match bits {
        0 => Some(0.0),
        half::SIGN_MASK => Some(-0.0),
        _ => None,
    }
}

/// Moves a binary32 exponent field to the binary16 bias, saturating at the
/// binary16 field bounds.
fn rebias_to_half(exp: u32) -> u32 {
    (exp as i32 - single::BIAS + half::BIAS).clamp(0, half::EXP_MAX as i32) as u32
}

/// Moves a binary16 exponent field to the binary32 bias. Every 5-bit field
/// lands inside the 8-bit range, so no clamping is needed.
fn rebias_to_single(exp: u32) -> u32 {
    (exp as i32 - half::BIAS + single::BIAS) as u32
}
