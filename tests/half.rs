use std::collections::HashSet;

use dcbor::prelude::*;
use half_storage::{Error, Half};
use hex_literal::hex;
use indoc::indoc;

#[test]
fn default_is_positive_zero() {
    let h = Half::default();
    assert_eq!(h, Half::ZERO);
    assert_eq!(h.to_bits(), 0);
    assert!(h.is_zero());
    assert!(!h.sign());
}

#[test]
fn equality_is_bitwise() {
    // Same bits from different routes compare equal, even for NaN.
    let a = Half::from_f32(f32::NAN);
    let b = Half::from_bits(0x7E00);
    assert_eq!(a, b);
    assert_eq!(a, Half::NAN);

    // Numerically equal zeros are different patterns.
    assert_ne!(Half::ZERO, Half::NEG_ZERO);
    assert_ne!(Half::from_bits(0x7E00), Half::from_bits(0x7E01));

    let copy = a;
    assert_eq!(copy, a);
}

#[test]
fn hash_follows_bits() {
    let set: HashSet<Half> = [Half::ZERO, Half::NEG_ZERO, Half::NAN, Half::from_f32(f32::NAN)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn from_f32_is_precise_conversion() {
    assert_eq!(Half::from(1.0f32), Half::ONE);
    assert_eq!(Half::from_f32(-2.5), Half::from_bits(0xC100));
    assert_eq!(Half::from_f32(f32::NEG_INFINITY), Half::NEG_INFINITY);
    assert_eq!(Half::ONE.to_f32(), 1.0);
    assert_eq!(Half::from_bits(0xC100).to_f32(), -2.5);
}

#[test]
fn fast_methods_match_on_normals() {
    for value in [1.0f32, -2.5, 0.1, 1000.0, -65504.0] {
        let h = Half::from_f32_fast(value);
        assert_eq!(h, Half::from_f32(value), "{value}");
        assert_eq!(h.to_f32_fast().to_bits(), h.to_f32().to_bits(), "{value}");
    }
}

#[test]
fn field_accessors() {
    let h = Half::from_bits(0xC100);
    assert!(h.sign());
    assert!(h.is_sign_negative());
    assert_eq!(h.exponent_bits(), 16);
    assert_eq!(h.mantissa_bits(), 0x100);
}

#[test]
fn classification() {
    assert!(Half::ZERO.is_zero());
    assert!(Half::NEG_ZERO.is_zero());
    assert!(!Half::ZERO.is_normal());

    assert!(Half::ONE.is_normal());
    assert!(Half::MAX.is_normal());
    assert!(Half::MIN_POSITIVE.is_normal());

    let denormal = Half::from_bits(0x0001);
    assert!(denormal.is_denormal());
    assert!(!denormal.is_zero());
    assert!(!denormal.is_normal());

    assert!(Half::INFINITY.is_infinite());
    assert!(Half::NEG_INFINITY.is_infinite());
    assert!(!Half::INFINITY.is_nan());

    assert!(Half::NAN.is_nan());
    assert!(!Half::NAN.is_infinite());
    assert!(!Half::NAN.is_normal());
}

#[test]
fn byte_order() {
    assert_eq!(Half::ONE.to_be_bytes(), hex!("3c00"));
    assert_eq!(Half::ONE.to_le_bytes(), hex!("003c"));
    assert_eq!(Half::from_be_bytes(hex!("c100")), Half::from_f32(-2.5));
    assert_eq!(Half::from_le_bytes(hex!("00c1")), Half::from_f32(-2.5));
}

#[test]
fn from_be_slice_checks_length() {
    assert_eq!(Half::from_be_slice(hex!("7c00")).unwrap(), Half::INFINITY);
    assert!(matches!(
        Half::from_be_slice(hex!("7c")),
        Err(Error::InvalidLength(1))
    ));
    assert!(matches!(
        Half::from_be_slice(hex!("7c0000")),
        Err(Error::InvalidLength(3))
    ));
    assert!(matches!(Half::from_be_slice([0u8; 0]), Err(Error::InvalidLength(0))));
}

#[test]
fn hex_round_trip() {
    assert_eq!(Half::ONE.to_hex(), "3c00");
    assert_eq!(Half::from_hex("3c00").unwrap(), Half::ONE);
    assert_eq!(Half::from_hex("FC00").unwrap(), Half::NEG_INFINITY);
    assert_eq!(Half::NEG_ZERO.to_hex(), "8000");
}

#[test]
fn hex_errors() {
    assert!(matches!(Half::from_hex("zz"), Err(Error::Hex(_))));
    assert!(matches!(Half::from_hex("3c0"), Err(Error::Hex(_))));
    assert!(matches!(Half::from_hex("3c0000"), Err(Error::InvalidLength(3))));
    assert_eq!(
        String::from(Half::from_hex("3c0000").unwrap_err()),
        "invalid half length: expected 2 bytes, got 3 bytes"
    );
}

#[test]
fn cbor_byte_string() {
    let cbor = CBOR::from(Half::ONE);
    assert_eq!(cbor.diagnostic(), "h'3c00'");

    let back: Half = cbor.try_into().unwrap();
    assert_eq!(back, Half::ONE);

    let nan = Half::from_bits(0xFE01);
    let back = Half::try_from(CBOR::from(nan)).unwrap();
    assert_eq!(back, nan);
}

#[test]
fn cbor_rejects_other_shapes() {
    assert!(Half::try_from(CBOR::from("3c00")).is_err());

    let three = CBOR::from(ByteString::from(&hex!("3c0000")[..]));
    assert!(Half::try_from(three).is_err());
}

#[test]
fn display() {
    let shown = [
        Half::ONE,
        Half::from_f32(-2.5),
        Half::NEG_INFINITY,
        Half::NAN,
        Half::from_bits(0x0001),
    ]
    .iter()
    .map(|h| h.to_string())
    .collect::<Vec<_>>()
    .join("\n");

    assert_eq!(
        shown,
        indoc! {"
            f16(0x3c00): + exp=0x0f mant=0x000
            f16(0xc100): - exp=0x10 mant=0x100
            f16(0xfc00): - exp=0x1f mant=0x000
            f16(0x7e00): + exp=0x1f mant=0x200
            f16(0x0001): + exp=0x00 mant=0x001"}
    );
}

#[test]
fn read_me() {
    // Store an f32 in two bytes.
    let h = Half::from_f32(-2.5);
    assert_eq!(h.to_be_bytes(), [0xc1, 0x00]);
    assert_eq!(h.to_hex(), "c100");

    // Widen it again.
    assert_eq!(h.to_f32(), -2.5);

    // Precision beyond 10 mantissa bits is truncated.
    assert_eq!(Half::from_f32(0.1).to_f32(), 0.099975586);

    // Special values keep their class.
    assert!(Half::from_f32(f32::NAN).is_nan());
    assert_eq!(Half::from_f32(f32::INFINITY), Half::INFINITY);

    // Transport as a CBOR byte string.
    let cbor = CBOR::from(h);
    assert_eq!(cbor.diagnostic(), "h'c100'");
    assert_eq!(Half::try_from(cbor).unwrap(), h);
}
