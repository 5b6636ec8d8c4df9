//! End-to-end use of the facade crate

use std::fs;

use xycrypt::prelude::*;
use xycrypt::common::{decrypt_then_unpad, pad_then_encrypt};
use xycrypt_tests::run_stepped;

#[test]
fn test_cipher_by_name() {
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let mode = Mode::from_name("cbc", ModeParams::with_iv(iv)).unwrap();
    let cipher = Cipher::aes(
        &hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap(),
        mode,
        PaddingPolicy::Scheme("ansix923".parse().unwrap()),
    )
    .unwrap();
    assert_eq!(cipher.padding().unwrap().kind(), PaddingKind::AnsiX923);

    let ct = cipher.encrypt(b"sixteen byte msg").unwrap();
    assert_eq!(ct.len(), 32);
    for step in [1, 5, 16, 31] {
        let mut dec = cipher.decryptor().unwrap();
        assert_eq!(run_stepped(dec.as_mut(), &ct, step).unwrap(), b"sixteen byte msg");
    }
}

#[test]
fn test_missing_iv_is_config_error() {
    let err = Mode::from_name("OFB", ModeParams::default()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_manual_composition_matches_cipher() {
    let key = [0x11u8; 16];
    let iv = vec![0x22u8; 16];
    let cipher = Cipher::aes(&key, Mode::Cbc { iv: iv.clone() }, PaddingPolicy::ModeDefault).unwrap();

    let raw = Cipher::aes(&key, Mode::Cbc { iv }, PaddingPolicy::Disabled).unwrap();
    let scheme = PaddingScheme::new(PaddingKind::Pkcs7, 16).unwrap();

    let msg = b"composed by hand, one stream at a time";
    let mut enc = pad_then_encrypt(raw.backend().encryptor().unwrap(), scheme.padder());
    let ct = run_stepped(&mut enc, msg, 7).unwrap();
    assert_eq!(ct, cipher.encrypt(msg).unwrap());

    let mut dec = decrypt_then_unpad(scheme.unpadder(), raw.backend().decryptor().unwrap());
    assert_eq!(run_stepped(&mut dec, &ct, 9).unwrap(), msg);
}

#[test]
fn test_tampered_ciphertext_never_returns_partial_plaintext() {
    let cipher = Cipher::aes(&[5u8; 32], Mode::Ecb, PaddingPolicy::ModeDefault).unwrap();
    let ct = cipher.encrypt(b"hello").unwrap();

    let mut dec = cipher.decryptor().unwrap();
    assert!(dec.update(&ct[..15]).unwrap().is_empty());
    let err = dec.finalize().unwrap_err();
    assert!(matches!(err, Error::Backend { .. }));
    assert!(matches!(dec.update(b"x"), Err(Error::State { .. })));
}

#[test]
fn test_directory_digests() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"first").unwrap();
    fs::write(dir.path().join("b"), b"second").unwrap();

    let expected = xor_fold(
        32,
        [
            xycrypt::algorithms::hash::<Sha256>(b"first"),
            xycrypt::algorithms::hash::<Sha256>(b"second"),
        ],
    )
    .unwrap();
    assert_eq!(xycrypt::algorithms::hash_fs::<Sha256>(dir.path()).unwrap(), expected);

    let tags = xor_fold(
        32,
        [
            Hmac::<Sha256>::mac(b"k", b"first"),
            Hmac::<Sha256>::mac(b"k", b"second"),
        ],
    )
    .unwrap();
    assert_eq!(Hmac::<Sha256>::mac_fs(b"k", dir.path()).unwrap(), tags);
}

#[test]
fn test_ciphers_of_every_family() {
    let msg = b"every family round-trips through the facade";

    let tdes = Cipher::triple_des(&[0x31u8; 24], Mode::Cbc { iv: vec![9; 8] }, PaddingPolicy::ModeDefault).unwrap();
    let ct = tdes.encrypt(msg).unwrap();
    assert_eq!(ct.len() % 8, 0);
    assert_eq!(tdes.decrypt(&ct).unwrap(), msg);

    let chacha = Cipher::chacha20(&[0x42u8; 32], &[0u8; 16], PaddingPolicy::ModeDefault).unwrap();
    let ct = chacha.encrypt(msg).unwrap();
    assert_eq!(ct.len(), msg.len());
    let mut dec = chacha.decryptor_with_total(ct.len()).unwrap();
    assert_eq!(run_stepped(dec.as_mut(), &ct, 5).unwrap(), msg);
}
