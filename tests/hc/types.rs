// Integration tests for HC level parameters.

use lz4stream::hc::types::{get_clevel_params, normalize_level, K_CL_TABLE};
use lz4stream::hc::{LZ4HC_CLEVEL_DEFAULT, LZ4HC_CLEVEL_MAX, LZ4HC_CLEVEL_MIN};

#[test]
fn search_depth_grows_with_level() {
    for level in LZ4HC_CLEVEL_MIN..LZ4HC_CLEVEL_MAX {
        let here = get_clevel_params(level);
        let next = get_clevel_params(level + 1);
        assert!(next.nb_searches >= here.nb_searches, "level {level}");
    }
}

#[test]
fn low_levels_are_greedy() {
    assert!(!K_CL_TABLE[1].lazy);
    assert!(!K_CL_TABLE[2].lazy);
    assert!(K_CL_TABLE[LZ4HC_CLEVEL_DEFAULT as usize].lazy);
}

#[test]
fn normalize_handles_out_of_range() {
    assert_eq!(normalize_level(0), LZ4HC_CLEVEL_DEFAULT);
    assert_eq!(normalize_level(LZ4HC_CLEVEL_MAX + 1), LZ4HC_CLEVEL_MAX);
    assert_eq!(normalize_level(5), 5);
}
