//! Tests for standard base64 encoding.

use base64::Engine as _;
use fiirust_base64::{encode, STANDARD};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn matches_reference_engine() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = base64::engine::general_purpose::STANDARD.encode(&blob);
        assert_eq!(encode(&blob), expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn slice_and_string_agree() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut dest = vec![0u8; blob.len() * 2 + 4];
        let length = STANDARD.encode_to_slice(&blob, &mut dest).unwrap();
        assert_eq!(&dest[..length], encode(&blob).as_bytes());
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b""), "");
}

#[test]
fn man() {
    assert_eq!(encode("Man"), "TWFu");
}

#[test]
fn zero_bytes() {
    assert_eq!(encode([0x00]), "AA==");
    assert_eq!(encode([0x00, 0x00]), "AAA=");
    assert_eq!(encode([0x00, 0x00, 0x00]), "AAAA");
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
}

#[test]
fn utf8_text() {
    assert_eq!(encode("héllo"), "aMOpbGxv");
}

#[test]
fn output_length() {
    for len in 0..50usize {
        let encoded = encode(vec![0xA5; len]);
        assert_eq!(encoded.len(), len.div_ceil(3) * 4);
    }
}
