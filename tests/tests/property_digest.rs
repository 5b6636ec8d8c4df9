//! Property-based tests for HMAC and the aggregate digest

use proptest::prelude::*;
use xycrypt_algorithms::{xor_fold, AggregateDigest, HashStream, Hmac, Sha256, Sha512};

fn digests(size: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), size), 0..12)
}

proptest! {
    #[test]
    fn hmac_verify_accepts_own_tag(
        key in prop::collection::vec(any::<u8>(), 0..200),
        msg in prop::collection::vec(any::<u8>(), 0..500),
    ) {
        let mut h = Hmac::<Sha256>::new(&key);
        h.update(&msg);
        let tag = h.finalize();
        prop_assert!(h.verify(&tag));
        prop_assert_eq!(tag, Hmac::<Sha256>::mac(&key, &msg));
    }

    #[test]
    fn hmac_verify_rejects_flipped_tag_bit(
        key in prop::collection::vec(any::<u8>(), 0..200),
        msg in prop::collection::vec(any::<u8>(), 0..500),
        bit in 0usize..(Sha512::DIGEST_SIZE * 8),
    ) {
        let mut h = Hmac::<Sha512>::new(&key);
        h.update(&msg);
        let mut tag = h.finalize();
        tag[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!h.verify(&tag));
    }

    #[test]
    fn hmac_verify_rejects_flipped_message_bit(
        key in prop::collection::vec(any::<u8>(), 1..100),
        msg in prop::collection::vec(any::<u8>(), 1..500),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let tag = Hmac::<Sha256>::mac(&key, &msg);
        let mut tampered = msg.clone();
        let i = pos.index(tampered.len());
        tampered[i] ^= 1 << bit;

        let mut h = Hmac::<Sha256>::new(&key);
        h.update(&tampered);
        prop_assert!(!h.verify(&tag));
    }

    #[test]
    fn hmac_chunking_does_not_matter(
        key in prop::collection::vec(any::<u8>(), 0..200),
        msg in prop::collection::vec(any::<u8>(), 0..500),
        step in 1usize..130,
    ) {
        let mut h = Hmac::<Sha256>::new(&key);
        for chunk in msg.chunks(step) {
            h.update(chunk);
        }
        prop_assert_eq!(h.finalize(), Hmac::<Sha256>::mac(&key, &msg));
    }

    #[test]
    fn fold_is_permutation_invariant(
        (ds, perm) in digests(16).prop_flat_map(|ds| {
            let n = ds.len();
            (Just(ds), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        }),
    ) {
        let shuffled: Vec<&Vec<u8>> = perm.iter().map(|&i| &ds[i]).collect();
        prop_assert_eq!(xor_fold(16, &ds).unwrap(), xor_fold(16, shuffled).unwrap());
    }

    #[test]
    fn fold_of_duplicate_is_zero(d in prop::collection::vec(any::<u8>(), 32)) {
        prop_assert_eq!(xor_fold(32, [&d]).unwrap(), d.clone());
        prop_assert_eq!(xor_fold(32, [&d, &d]).unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn merged_partial_folds_match(ds in digests(8), split in any::<prop::sample::Index>()) {
        let at = if ds.is_empty() { 0 } else { split.index(ds.len() + 1) };
        let (left, right) = ds.split_at(at);

        let mut a = AggregateDigest::new(8);
        left.iter().try_for_each(|d| a.absorb(d)).unwrap();
        let mut b = AggregateDigest::new(8);
        right.iter().try_for_each(|d| b.absorb(d)).unwrap();
        a.merge(&b).unwrap();

        prop_assert_eq!(a.len(), ds.len());
        prop_assert_eq!(a.finish(), xor_fold(8, &ds).unwrap());
    }
}
