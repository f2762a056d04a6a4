//! Byte Codec Tests - Variant-1 and Variant-2 Wire Forms
//!
//! Pins the two byte orderings to their published reference vectors and
//! checks both round trips over arbitrary values, for the const array forms
//! and the streaming Buf/BufMut forms alike.

mod common;

use bytes::BytesMut;
use guid::{guid, Guid};

const SAMPLE: Guid = guid!("{00112233-4455-6677-8899-aabbccddeeff}");

const SAMPLE_VARIANT1: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
    0xff,
];

const SAMPLE_VARIANT2: [u8; 16] = [
    0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
    0xff,
];

fn samples() -> Vec<Guid> {
    let mut all = vec![
        Guid::NIL,
        SAMPLE,
        guid!("{ffffffff-ffff-ffff-ffff-ffffffffffff}"),
        guid!("{00000037-0000-0000-c000-000000000046}"),
    ];
    all.extend((0..32).map(|_| Guid::generate()));
    all
}

#[test]
fn test_variant1_reference_vector() {
    assert_eq!(SAMPLE.to_bytes(), SAMPLE_VARIANT1);
}

#[test]
fn test_variant2_reference_vector() {
    assert_eq!(SAMPLE.to_bytes_le(), SAMPLE_VARIANT2);
}

#[test]
fn test_variant1_round_trip() {
    for g in samples() {
        assert_eq!(Guid::from_bytes(g.to_bytes()), g, "{g}");
    }
}

#[test]
fn test_variant2_round_trip() {
    for g in samples() {
        assert_eq!(Guid::from_bytes_le(g.to_bytes_le()), g, "{g}");
    }
}

#[test]
fn test_variants_share_the_trailing_eight_bytes() {
    for g in samples() {
        assert_eq!(g.to_bytes()[8..], g.to_bytes_le()[8..], "{g}");
    }
}

#[test]
fn test_variant1_matches_textual_digit_order() {
    // The mainstream wire form lists the bytes in the order the string
    // spells them; what libuuid-style consumers expect.
    for g in samples() {
        assert_eq!(g.to_bytes(), textual_digit_bytes(&g), "{g}");
    }
}

/// Rebuilds the byte sequence from the string form, independently of the
/// codec under test.
fn textual_digit_bytes(g: &Guid) -> [u8; 16] {
    let text = g.to_string();
    let hex: String = text
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();
    let mut bytes = [0u8; 16];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).unwrap();
        bytes[i] = u8::from_str_radix(pair, 16).unwrap();
    }
    bytes
}

#[test]
fn test_streaming_encode_matches_array_forms() {
    for g in samples() {
        let mut big = BytesMut::new();
        g.encode(&mut big, false);
        assert_eq!(big.as_ref(), g.to_bytes());

        let mut little = BytesMut::new();
        g.encode(&mut little, true);
        assert_eq!(little.as_ref(), g.to_bytes_le());
    }
}

#[test]
fn test_streaming_decode_round_trip() {
    for g in samples() {
        for little_endian in [false, true] {
            let mut buf = BytesMut::new();
            g.encode(&mut buf, little_endian);
            let decoded = Guid::decode(&mut buf.freeze(), little_endian).unwrap();
            assert_eq!(decoded, g);
        }
    }
}

#[test]
fn test_streaming_decode_underflow() {
    let mut short = &SAMPLE_VARIANT1[..10];
    assert!(Guid::decode(&mut short, false).is_none());
}

#[test]
fn test_variant_mismatch_swaps_integer_fields() {
    // Decoding wire bytes with the wrong variant scrambles exactly the three
    // integer fields and leaves data4 alone.
    let wrong = Guid::from_bytes_le(SAMPLE.to_bytes());
    assert_eq!(wrong.data1, SAMPLE.data1.swap_bytes());
    assert_eq!(wrong.data2, SAMPLE.data2.swap_bytes());
    assert_eq!(wrong.data3, SAMPLE.data3.swap_bytes());
    assert_eq!(wrong.data4, SAMPLE.data4);
}
