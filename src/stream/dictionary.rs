//! Preset dictionaries for seeding a session's history window.

use crate::config::HISTORY_WINDOW;

/// How a session's history window is initialised at creation or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PresetDictionary<'a> {
    /// Start from an all-zero window: no prior context.
    #[default]
    Zeroed,
    /// Seed the window with the trailing bytes of a caller-supplied buffer.
    Bytes(&'a [u8]),
}

impl<'a> PresetDictionary<'a> {
    pub fn is_zeroed(&self) -> bool {
        matches!(self, PresetDictionary::Zeroed)
    }

    /// Write the window image into `window`, which must be exactly
    /// [`HISTORY_WINDOW`] bytes long.
    ///
    /// Only the last `HISTORY_WINDOW` bytes of a longer dictionary are kept;
    /// a shorter one is right-aligned with zero padding in front of it.
    pub fn seed(&self, window: &mut [u8]) {
        debug_assert_eq!(window.len(), HISTORY_WINDOW);
        match *self {
            PresetDictionary::Zeroed => window.fill(0),
            PresetDictionary::Bytes(bytes) => {
                let kept = &bytes[bytes.len().saturating_sub(HISTORY_WINDOW)..];
                let pad = window.len() - kept.len();
                window[..pad].fill(0);
                window[pad..].copy_from_slice(kept);
            }
        }
    }
}

impl<'a> From<Option<&'a [u8]>> for PresetDictionary<'a> {
    fn from(bytes: Option<&'a [u8]>) -> Self {
        bytes.map_or(PresetDictionary::Zeroed, PresetDictionary::Bytes)
    }
}

impl<'a> From<&'a [u8]> for PresetDictionary<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        PresetDictionary::Bytes(bytes)
    }
}
