// Integration tests for preset dictionaries on both session kinds.

use lz4stream::stream::{PresetDictionary, StreamDecoder, StreamEncoder, Variant};
use lz4stream::HISTORY_WINDOW;

fn record(i: usize) -> Vec<u8> {
    format!(
        "{{\"id\":{i},\"kind\":\"measurement\",\"unit\":\"celsius\",\"value\":{}.{}}}\n",
        i * 7 % 40,
        i % 10
    )
    .into_bytes()
}

#[test]
fn matching_dictionary_shrinks_first_block() {
    let dict: Vec<u8> = (0..50).flat_map(record).collect();
    let block = record(1234);

    for variant in [Variant::Fast, Variant::HighRatio] {
        let mut plain = StreamEncoder::new(1024, variant, None).unwrap();
        let mut primed = StreamEncoder::new(1024, variant, Some(dict.as_slice())).unwrap();
        let without = plain.update(&block).unwrap();
        let with = primed.update(&block).unwrap();
        assert!(with.len() < without.len(), "{variant:?}: {} >= {}", with.len(), without.len());

        let mut dec = StreamDecoder::new(Some(dict.as_slice()));
        assert_eq!(dec.update(&with, 1024).unwrap(), block);
    }
}

#[test]
fn only_the_last_window_of_a_long_dictionary_counts() {
    let mut long = vec![0xAAu8; 3 * HISTORY_WINDOW];
    long.extend_from_slice(b"tail marker");
    let trimmed = &long[long.len() - HISTORY_WINDOW..];

    let mut a = StreamEncoder::new(4096, Variant::Fast, Some(long.as_slice())).unwrap();
    let mut b = StreamEncoder::new(4096, Variant::Fast, Some(trimmed)).unwrap();
    let block = b"tail marker, tail marker, tail marker";
    assert_eq!(a.update(block).unwrap(), b.update(block).unwrap());
}

#[test]
fn seed_pads_short_dictionaries() {
    let mut window = vec![0xFFu8; HISTORY_WINDOW];
    PresetDictionary::from(b"abc".as_slice()).seed(&mut window);
    assert!(window[..HISTORY_WINDOW - 3].iter().all(|&b| b == 0));
    assert_eq!(&window[HISTORY_WINDOW - 3..], b"abc");

    PresetDictionary::default().seed(&mut window);
    assert!(window.iter().all(|&b| b == 0));
    assert!(PresetDictionary::from(None::<&[u8]>).is_zeroed());
}

#[test]
fn empty_dictionary_behaves_like_zero_history() {
    let block = vec![0u8; 500];
    let mut enc = StreamEncoder::new(1024, Variant::Fast, Some(&[][..])).unwrap();
    let packed = enc.update(&block).unwrap();
    let mut dec = StreamDecoder::new(None);
    assert_eq!(dec.update(&packed, 1024).unwrap(), block);
}
