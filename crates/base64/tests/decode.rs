//! Tests for standard base64 decoding.

use fiirust_base64::{decode, encode, Reason};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let invalid = format!("{}!!!!", encoded);
        let expected = match encoded.find('=') {
            Some(position) => (position, Reason::MisplacedPadding),
            None => (encoded.len(), Reason::InvalidCharacter('!')),
        };
        let err = decode(&invalid).unwrap_err();
        assert_eq!((err.position(), err.reason()), expected);
    }
}

#[test]
fn padding_must_be_trailing() {
    let err = decode("AB=A").unwrap_err();
    assert_eq!(err.reason(), Reason::MisplacedPadding);
}

#[test]
fn length_must_be_multiple_of_four() {
    let err = decode("ABC").unwrap_err();
    assert_eq!(err.reason(), Reason::InvalidLength(3));
}

#[test]
fn invalid_character() {
    let err = decode("AB!=").unwrap_err();
    assert_eq!(err.reason(), Reason::InvalidCharacter('!'));
}

#[test]
fn empty_input() {
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn man() {
    assert_eq!(decode("TWFu").unwrap(), b"Man");
}

#[test]
fn single_byte() {
    assert_eq!(decode("Zg==").unwrap(), b"f");
}

#[test]
fn two_bytes() {
    assert_eq!(decode("Zm8=").unwrap(), b"fo");
}

#[test]
fn three_bytes() {
    assert_eq!(decode("Zm9v").unwrap(), b"foo");
}

#[test]
fn hello_world() {
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}
