use core::fmt;
use dcbor::prelude::*;
use crate::{Error, Result, codec, layout::half};

/// An IEEE‑754 binary16 value held purely for storage and transport.
///
/// The bit pattern is the whole state. Equality and hashing compare bits,
/// not numbers: `-0` and `+0` differ, and two NaNs with the same bits are
/// equal. It has no arithmetic and no ordering; convert to `f32` with
/// [`Half::to_f32`] to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    // ───────────────────────────── Constants ────────────────────────────────

    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3C00);
    pub const INFINITY: Self = Self(half::POS_INFINITY);
    pub const NEG_INFINITY: Self = Self(half::NEG_INFINITY);
    /// Quiet NaN with an empty payload.
    pub const NAN: Self = Self(0x7E00);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);
    /// Smallest positive normalized value, 2^-14.
    pub const MIN_POSITIVE: Self = Self(0x0400);

    // ───────────────────────────── Constructors ─────────────────────────────

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Converts from binary32, handling every special case. See
    /// [`codec::to_half`].
    pub fn from_f32(value: f32) -> Self {
        codec::to_half(value)
    }

    /// Converts from binary32 assuming a finite, normalized input. See
    /// [`codec::to_half_fast`].
    pub fn from_f32_fast(value: f32) -> Self {
        codec::to_half_fast(value)
    }

    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Construct from a big‑endian byte slice, which must be exactly 2 bytes.
    pub fn from_be_slice(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let b = <[u8; 2]>::try_from(b).map_err(|_| Error::InvalidLength(b.len()))?;
        Ok(Self::from_be_bytes(b))
    }

    /// Parse the big‑endian hex form produced by [`Half::to_hex`].
    pub fn from_hex(s: impl AsRef<str>) -> Result<Self> {
        Self::from_be_slice(hex::decode(s.as_ref())?)
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Converts to binary32, handling every special case. See
    /// [`codec::to_single`].
    pub fn to_f32(self) -> f32 {
        codec::to_single(self)
    }

    /// Converts to binary32 assuming a finite, normalized value. See
    /// [`codec::to_single_fast`].
    pub fn to_f32_fast(self) -> f32 {
        codec::to_single_fast(self)
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Four lowercase hex digits, big‑endian.
    pub fn to_hex(self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Returns the sign bit (true if set).
    pub const fn sign(self) -> bool {
        half::sign_bit(self.0) == 1
    }

    /// The raw 5-bit exponent field, still biased by 15.
    pub const fn exponent_bits(self) -> u16 {
        half::exponent_bits(self.0) as u16
    }

    /// The raw 10-bit mantissa field.
    pub const fn mantissa_bits(self) -> u16 {
        half::mantissa_bits(self.0) as u16
    }

    // ──────────────────────────── Classification ────────────────────────────

    pub const fn is_sign_negative(self) -> bool {
        self.sign()
    }

    pub const fn is_zero(self) -> bool {
        self.0 & !half::SIGN_MASK == 0
    }

    pub const fn is_denormal(self) -> bool {
        self.exponent_bits() == 0 && self.mantissa_bits() != 0
    }

    pub const fn is_normal(self) -> bool {
        let exp = self.exponent_bits() as u32;
        exp != 0 && exp != half::EXP_MAX
    }

    pub const fn is_infinite(self) -> bool {
        self.exponent_bits() as u32 == half::EXP_MAX && self.mantissa_bits() == 0
    }

    pub const fn is_nan(self) -> bool {
        self.exponent_bits() as u32 == half::EXP_MAX && self.mantissa_bits() != 0
    }
}

impl From<f32> for Half {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

// ──────────────────────────────── CBOR ──────────────────────────────────────

impl From<Half> for CBOR {
    fn from(value: Half) -> Self {
        CBOR::from(ByteString::from(&value.to_be_bytes()[..]))
    }
}

impl TryFrom<CBOR> for Half {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        Ok(Half::from_be_slice(bs.data())?)
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f16(0x{:04x}): {} exp=0x{:02x} mant=0x{:03x}",
            self.0,
            if self.sign() { "-" } else { "+" },
            self.exponent_bits(),
            self.mantissa_bits(),
        )
    }
}
