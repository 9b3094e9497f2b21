//! HC compression constants and the level table.

// ─────────────────────────────────────────────────────────────────────────────
// Compression levels
// ─────────────────────────────────────────────────────────────────────────────

pub const LZ4HC_CLEVEL_MIN: i32 = 1;
pub const LZ4HC_CLEVEL_DEFAULT: i32 = 9;
pub const LZ4HC_CLEVEL_MAX: i32 = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Table sizing
// ─────────────────────────────────────────────────────────────────────────────

pub const LZ4HC_DICTIONARY_LOGSIZE: u32 = 16;
/// Chain table length: one entry per slot in the 64 KB window.
pub const LZ4HC_MAXD: usize = 1 << LZ4HC_DICTIONARY_LOGSIZE; // 65536
pub const LZ4HC_MAXD_MASK: usize = LZ4HC_MAXD - 1;

pub const LZ4HC_HASH_LOG: u32 = 15;
pub const LZ4HC_HASHTABLESIZE: usize = 1 << LZ4HC_HASH_LOG; // 32768

// ─────────────────────────────────────────────────────────────────────────────
// Per-level parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters selected by the compression level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CParams {
    /// Maximum chain entries examined per position.
    pub nb_searches: u32,
    /// Defer a match by one byte when the next position matches longer.
    pub lazy: bool,
}

/// Level → parameters. Index is the compression level (0 is unused).
pub static K_CL_TABLE: [CParams; (LZ4HC_CLEVEL_MAX + 1) as usize] = [
    CParams { nb_searches:    2, lazy: false }, /* 0, unused */
    CParams { nb_searches:    2, lazy: false }, /* 1 */
    CParams { nb_searches:    2, lazy: false }, /* 2 */
    CParams { nb_searches:    4, lazy: true  }, /* 3 */
    CParams { nb_searches:    8, lazy: true  }, /* 4 */
    CParams { nb_searches:   16, lazy: true  }, /* 5 */
    CParams { nb_searches:   32, lazy: true  }, /* 6 */
    CParams { nb_searches:   64, lazy: true  }, /* 7 */
    CParams { nb_searches:  128, lazy: true  }, /* 8 */
    CParams { nb_searches:  256, lazy: true  }, /* 9 */
    CParams { nb_searches:  512, lazy: true  }, /* 10 */
    CParams { nb_searches: 1024, lazy: true  }, /* 11 */
    CParams { nb_searches: 4096, lazy: true  }, /* 12 */
];

/// Clamp `c_level` into `1..=12` (values below 1 select the default level).
#[inline]
pub fn normalize_level(c_level: i32) -> i32 {
    if c_level < LZ4HC_CLEVEL_MIN {
        LZ4HC_CLEVEL_DEFAULT
    } else {
        c_level.min(LZ4HC_CLEVEL_MAX)
    }
}

/// Return the compression parameters for a given compression level.
#[inline]
pub fn get_clevel_params(c_level: i32) -> CParams {
    K_CL_TABLE[normalize_level(c_level) as usize]
}
