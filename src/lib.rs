//! Bit-exact conversion between IEEE‑754 binary32 (`f32`) and the
//! IEEE‑754‑2008 binary16 "half" storage format.
//!
//! [`Half`] is a storage type: it lets callers keep or transmit values in
//! half the space of `f32` and widen them again later. It has no
//! arithmetic. The four conversions live in [`codec`]:
//!
//! - [`codec::to_half`] / [`codec::to_single`] handle signed zero,
//!   denormals, infinities and NaNs, and saturate out-of-range exponents.
//! - [`codec::to_half_fast`] / [`codec::to_single_fast`] assume a finite,
//!   normalized input and skip the special-case checks.
//!
//! Mantissas are truncated, never rounded.
//!
//! The two-byte big‑endian pattern is the wire format; it can be carried
//! as raw bytes, as hex, or as a CBOR byte string.

pub mod codec;
pub mod layout;
mod half;
pub use half::*;
mod error;
pub use error::*;
