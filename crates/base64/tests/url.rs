//! Tests for URL-safe base64 (encode_url / decode_url).

use base64::Engine as _;
use fiirust_base64::{decode_url, encode, encode_url};
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
        let base64url = encode_url(&blob);

        assert!(!base64url.contains('+'));
        assert!(!base64url.contains('/'));
        assert!(!base64url.contains('='));

        let expected = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&blob);
        assert_eq!(base64url, expected, "Failed for blob of length {}", blob.len());
        assert_eq!(decode_url(&base64url).unwrap(), blob);
    }
}

#[test]
fn accepts_padded_input() {
    for _ in 0..100 {
        let blob = generate_blob();
        let padded = encode(&blob).replace('+', "-").replace('/', "_");
        assert_eq!(decode_url(&padded).unwrap(), blob);
    }
}

#[test]
fn hello_world() {
    assert_eq!(encode_url(b"hello world"), "aGVsbG8gd29ybGQ");
    assert_eq!(decode_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
}
