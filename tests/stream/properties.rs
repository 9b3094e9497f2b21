// Property-based tests for encoder/decoder sessions.

use proptest::prelude::*;

use lz4stream::stream::{StreamDecoder, StreamEncoder, Variant};
use lz4stream::HISTORY_WINDOW;

/// Blocks drawn from a small alphabet so they compress and cross-reference.
fn blocks_strategy(max_block: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c'), any::<u8>()], 0..max_block),
        1..12,
    )
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Fast), Just(Variant::HighRatio)]
}

fn encode_all(enc: &mut StreamEncoder, blocks: &[Vec<u8>]) -> Vec<Vec<u8>> {
    blocks.iter().map(|b| enc.update(b).unwrap()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_round_trip(blocks in blocks_strategy(3000), variant in variant_strategy()) {
        let mut enc = StreamEncoder::new(3000, variant, None).unwrap();
        let mut dec = StreamDecoder::new(None);
        for block in &blocks {
            let packed = enc.update(block).unwrap();
            prop_assert_eq!(&dec.update(&packed, 3000).unwrap(), block);
        }
    }

    #[test]
    fn prop_identical_sessions_agree(blocks in blocks_strategy(2000), variant in variant_strategy()) {
        let mut a = StreamEncoder::new(2000, variant, None).unwrap();
        let mut b = StreamEncoder::new(2000, variant, None).unwrap();
        prop_assert_eq!(encode_all(&mut a, &blocks), encode_all(&mut b, &blocks));
    }

    #[test]
    fn prop_reset_replays(blocks in blocks_strategy(2000), variant in variant_strategy()) {
        let mut enc = StreamEncoder::new(2000, variant, None).unwrap();
        let first = encode_all(&mut enc, &blocks);
        enc.reset(None, None, None).unwrap();
        prop_assert_eq!(encode_all(&mut enc, &blocks), first);
    }

    #[test]
    fn prop_window_is_trailing_plaintext(
        blocks in blocks_strategy(40_000),
        dict in prop::option::of(prop::collection::vec(any::<u8>(), 0..100)),
    ) {
        let mut enc = StreamEncoder::new(40_000, Variant::Fast, dict.as_deref()).unwrap();
        let mut dec = StreamDecoder::new(dict.as_deref());

        let mut history = vec![0u8; HISTORY_WINDOW];
        if let Some(d) = &dict {
            let at = HISTORY_WINDOW - d.len();
            history[at..].copy_from_slice(d);
        }
        for block in &blocks {
            let packed = enc.update(block).unwrap();
            dec.update(&packed, block.len()).unwrap();
            history.extend_from_slice(block);
            prop_assert_eq!(dec.window(), &history[history.len() - HISTORY_WINDOW..]);
        }
    }

    #[test]
    fn prop_many_small_blocks_force_slides(
        seed in any::<u64>(),
        count in 200usize..320,
        variant in variant_strategy(),
    ) {
        let mut enc = StreamEncoder::new(1024, variant, None).unwrap();
        let mut dec = StreamDecoder::new(None);
        let mut x = seed | 1;
        let mut total = 0usize;
        for _ in 0..count {
            let block: Vec<u8> = (0..1024)
                .map(|_| {
                    x ^= x << 7;
                    x ^= x >> 9;
                    b"lz4 stream "[(x % 11) as usize]
                })
                .collect();
            let packed = enc.update(&block).unwrap();
            let out = dec.update(&packed, 1024).unwrap();
            prop_assert_eq!(&out, &block);
            total += out.len();
        }
        prop_assert_eq!(total, count * 1024);
    }
}
