//! Bit-field layout of the IEEE‑754 binary16 and binary32 formats.
//!
//! Every function here is a pure transform on a fixed-width unsigned
//! integer. Field values are returned widened to `u32` so the conversion
//! code can do its exponent arithmetic without casts at every step.

/// Distance between the binary32 and binary16 mantissa widths (23 - 10).
/// Shifting a binary32 mantissa right by this truncates it to binary16;
/// shifting a binary16 mantissa left by this widens it to binary32.
pub const MANT_SHIFT_DELTA: u32 = single::MANT_BITS - half::MANT_BITS;

/// binary16: 1 sign bit, 5 exponent bits (bias 15), 10 mantissa bits.
pub mod half {
    pub const SIGN_SHIFT: u32 = 15;
    pub const EXP_SHIFT: u32 = 10;
    pub const MANT_SHIFT: u32 = 0;

    pub const SIGN_MASK: u16 = 0x8000;
    pub const EXP_MASK: u16 = 0x7C00;
    pub const MANT_MASK: u16 = 0x03FF;

    pub const MANT_BITS: u32 = 10;
    pub const EXP_MAX: u32 = 0x1F;
    pub const BIAS: i32 = 15;

    pub const POS_INFINITY: u16 = 0x7C00;
    pub const NEG_INFINITY: u16 = 0xFC00;

    #[inline]
    pub const fn sign_bit(bits: u16) -> u32 {
        (bits >> SIGN_SHIFT) as u32
    }

    #[inline]
    pub const fn exponent_bits(bits: u16) -> u32 {
        ((bits >> EXP_SHIFT) as u32) & EXP_MAX
    }

    #[inline]
    pub const fn mantissa_bits(bits: u16) -> u32 {
        (bits & MANT_MASK) as u32
    }

    /// Replaces the sign field, keeping exponent and mantissa.
    #[inline]
    pub const fn with_sign_bit(bits: u16, sign: u32) -> u16 {
        (((sign << SIGN_SHIFT) as u16) & SIGN_MASK) | (bits & (EXP_MASK | MANT_MASK))
    }

    /// Replaces the exponent field, keeping sign and mantissa.
    #[inline]
    pub const fn with_exponent_bits(bits: u16, exp: u32) -> u16 {
        (((exp << EXP_SHIFT) as u16) & EXP_MASK) | (bits & (SIGN_MASK | MANT_MASK))
    }

    /// Replaces the mantissa field, keeping sign and exponent.
    #[inline]
    pub const fn with_mantissa_bits(bits: u16, mant: u32) -> u16 {
        (((mant << MANT_SHIFT) as u16) & MANT_MASK) | (bits & (SIGN_MASK | EXP_MASK))
    }

    #[inline]
    pub const fn compose(sign: u32, exp: u32, mant: u32) -> u16 {
        with_mantissa_bits(with_exponent_bits(with_sign_bit(0, sign), exp), mant)
    }
}

/// binary32: 1 sign bit, 8 exponent bits (bias 127), 23 mantissa bits.
pub mod single {
    pub const SIGN_SHIFT: u32 = 31;
    pub const EXP_SHIFT: u32 = 23;
    pub const MANT_SHIFT: u32 = 0;

    pub const SIGN_MASK: u32 = 0x8000_0000;
    pub const EXP_MASK: u32 = 0x7F80_0000;
    pub const MANT_MASK: u32 = 0x007F_FFFF;

    pub const MANT_BITS: u32 = 23;
    pub const EXP_MAX: u32 = 0xFF;
    pub const BIAS: i32 = 127;

    pub const POS_INFINITY: u32 = 0x7F80_0000;
    pub const NEG_INFINITY: u32 = 0xFF80_0000;

    #[inline]
    pub const fn sign_bit(bits: u32) -> u32 {
        bits >> SIGN_SHIFT
    }

    #[inline]
    pub const fn exponent_bits(bits: u32) -> u32 {
        (bits >> EXP_SHIFT) & EXP_MAX
    }

    #[inline]
    pub const fn mantissa_bits(bits: u32) -> u32 {
        bits & MANT_MASK
    }

    /// Replaces the sign field, keeping exponent and mantissa.
    #[inline]
    pub const fn with_sign_bit(bits: u32, sign: u32) -> u32 {
        ((sign << SIGN_SHIFT) & SIGN_MASK) | (bits & (EXP_MASK | MANT_MASK))
    }

    /// Replaces the exponent field, keeping sign and mantissa.
    #[inline]
    pub const fn with_exponent_bits(bits: u32, exp: u32) -> u32 {
        ((exp << EXP_SHIFT) & EXP_MASK) | (bits & (SIGN_MASK | MANT_MASK))
    }

    /// Replaces the mantissa field, keeping sign and exponent.
    #[inline]
    pub const fn with_mantissa_bits(bits: u32, mant: u32) -> u32 {
        ((mant << MANT_SHIFT) & MANT_MASK) | (bits & (SIGN_MASK | EXP_MASK))
    }

    #[inline]
    pub const fn compose(sign: u32, exp: u32, mant: u32) -> u32 {
        with_mantissa_bits(with_exponent_bits(with_sign_bit(0, sign), exp), mant)
    }
}
