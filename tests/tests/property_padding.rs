//! Property-based tests for the padding codecs

use proptest::prelude::*;
use xycrypt_padding::{PaddingKind, PaddingScheme, StreamingTransform};
use xycrypt_tests::{run_pieces, split_at_offsets};

fn padded_kind() -> impl Strategy<Value = PaddingKind> {
    prop_oneof![
        Just(PaddingKind::Pkcs7),
        Just(PaddingKind::AnsiX923),
        Just(PaddingKind::Iso10126),
    ]
}

fn deterministic_kind() -> impl Strategy<Value = PaddingKind> {
    prop_oneof![Just(PaddingKind::Pkcs7), Just(PaddingKind::AnsiX923)]
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..600)
}

fn cuts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..8)
}

proptest! {
    #[test]
    fn pad_then_unpad_roundtrips(
        kind in padded_kind(),
        block_size in 1usize..=255,
        msg in message(),
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let padded = scheme.pad(&msg).unwrap();
        prop_assert_eq!(scheme.unpad(&padded).unwrap(), msg);
    }

    #[test]
    fn padding_adds_one_to_block_size_bytes(
        kind in padded_kind(),
        block_size in 1usize..=255,
        msg in message(),
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let padded = scheme.pad(&msg).unwrap();
        let added = padded.len() - msg.len();
        prop_assert!(added >= 1 && added <= block_size);
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(&padded[..msg.len()], &msg[..]);
    }

    #[test]
    fn chunked_padding_matches_whole_buffer(
        kind in deterministic_kind(),
        block_size in 1usize..=64,
        msg in message(),
        cuts in cuts(),
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let whole = scheme.pad(&msg).unwrap();
        let pieces = split_at_offsets(&msg, &cuts);
        prop_assert_eq!(run_pieces(&mut scheme.padder(), &pieces).unwrap(), whole);
    }

    #[test]
    fn chunked_unpadding_matches_whole_buffer(
        kind in padded_kind(),
        block_size in 1usize..=64,
        msg in message(),
        cuts in cuts(),
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let padded = scheme.pad(&msg).unwrap();
        let pieces = split_at_offsets(&padded, &cuts);

        prop_assert_eq!(run_pieces(&mut scheme.unpadder(), &pieces).unwrap(), msg.clone());

        let mut fast = scheme.fast_unpadder(padded.len()).unwrap();
        prop_assert_eq!(run_pieces(&mut fast, &pieces).unwrap(), msg);
    }

    #[test]
    fn unpadder_never_releases_the_last_block_early(
        kind in padded_kind(),
        block_size in 1usize..=32,
        msg in message(),
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let padded = scheme.pad(&msg).unwrap();
        let mut unpadder = scheme.unpadder();
        let released = unpadder.update(&padded).unwrap();
        prop_assert_eq!(released.len(), padded.len() - block_size);
    }

    #[test]
    fn none_scheme_passes_through(
        block_size in 1usize..=255,
        msg in message(),
        cuts in cuts(),
    ) {
        let scheme = PaddingScheme::new(PaddingKind::None, block_size).unwrap();
        let pieces = split_at_offsets(&msg, &cuts);
        prop_assert_eq!(run_pieces(&mut scheme.padder(), &pieces).unwrap(), msg.clone());
        prop_assert_eq!(run_pieces(&mut scheme.unpadder(), &pieces).unwrap(), msg);
    }

    #[test]
    fn truncated_input_is_rejected(
        kind in padded_kind(),
        block_size in 2usize..=32,
        msg in message(),
        drop in 1usize..32,
    ) {
        let scheme = PaddingScheme::new(kind, block_size).unwrap();
        let padded = scheme.pad(&msg).unwrap();
        let drop = drop % block_size;
        prop_assume!(drop != 0);
        let err = scheme.unpad(&padded[..padded.len() - drop]).unwrap_err();
        prop_assert!(err.is_padding());
    }
}
