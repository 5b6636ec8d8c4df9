//! Property-based tests for AES streams composed with padding

use proptest::prelude::*;
use xycrypt_padding::PaddingKind;
use xycrypt_symmetric::{Cipher, Mode, ModeKind, PaddingPolicy, StreamingTransform};
use xycrypt_tests::{run_pieces, split_at_offsets};

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn mode() -> impl Strategy<Value = Mode> {
    (0u8..5, any::<[u8; 16]>()).prop_map(|(tag, v)| {
        let v = v.to_vec();
        match tag {
            0 => Mode::Ecb,
            1 => Mode::Cbc { iv: v },
            2 => Mode::Cfb { iv: v },
            3 => Mode::Ofb { iv: v },
            _ => Mode::Ctr { nonce: v },
        }
    })
}

fn policy() -> impl Strategy<Value = PaddingPolicy> {
    prop_oneof![
        Just(PaddingPolicy::ModeDefault),
        Just(PaddingPolicy::Scheme(PaddingKind::Pkcs7)),
        Just(PaddingPolicy::Scheme(PaddingKind::AnsiX923)),
        Just(PaddingPolicy::Scheme(PaddingKind::Iso10126)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn encrypt_then_decrypt_roundtrips(
        key in key(),
        mode in mode(),
        policy in policy(),
        msg in prop::collection::vec(any::<u8>(), 0..300),
        enc_cuts in prop::collection::vec(any::<usize>(), 0..6),
        dec_cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let cipher = Cipher::aes(&key, mode, policy).unwrap();

        let mut enc = cipher.encryptor().unwrap();
        let ct = run_pieces(enc.as_mut(), &split_at_offsets(&msg, &enc_cuts)).unwrap();

        let mut dec = cipher.decryptor().unwrap();
        let pt = run_pieces(dec.as_mut(), &split_at_offsets(&ct, &dec_cuts)).unwrap();
        prop_assert_eq!(pt, msg);
    }

    #[test]
    fn chunked_encryption_matches_one_shot(
        key in key(),
        mode in mode(),
        msg in prop::collection::vec(any::<u8>(), 0..300),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        // ISO 10126 filler is random, so stick to deterministic padding
        let cipher = Cipher::aes(&key, mode, PaddingPolicy::ModeDefault).unwrap();
        let whole = cipher.encrypt(&msg).unwrap();

        let mut enc = cipher.encryptor().unwrap();
        let chunked = run_pieces(enc.as_mut(), &split_at_offsets(&msg, &cuts)).unwrap();
        prop_assert_eq!(chunked, whole);
    }

    #[test]
    fn ciphertext_length_follows_mode_policy(
        key in key(),
        mode in mode(),
        msg in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let kind = mode.kind();
        let cipher = Cipher::aes(&key, mode, PaddingPolicy::ModeDefault).unwrap();
        let ct = cipher.encrypt(&msg).unwrap();
        if kind.pads_by_default() {
            prop_assert_eq!(ct.len(), (msg.len() / 16 + 1) * 16);
        } else {
            prop_assert!(matches!(kind, ModeKind::Cfb | ModeKind::Ofb | ModeKind::Ctr));
            prop_assert_eq!(ct.len(), msg.len());
        }
    }

    #[test]
    fn known_total_decryption_matches_lagging(
        key in key(),
        iv in any::<[u8; 16]>(),
        msg in prop::collection::vec(any::<u8>(), 0..300),
        cuts in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let cipher = Cipher::aes(&key, Mode::Cbc { iv: iv.to_vec() }, PaddingPolicy::ModeDefault).unwrap();
        let ct = cipher.encrypt(&msg).unwrap();
        let pieces = split_at_offsets(&ct, &cuts);

        let mut fast = cipher.decryptor_with_total(ct.len()).unwrap();
        let mut out = Vec::new();
        for piece in &pieces {
            out.extend(fast.update(piece).unwrap());
        }
        out.extend(fast.finalize().unwrap());
        prop_assert_eq!(out, msg);
    }
}
