//! Error kinds reported by the streaming sessions.

use std::fmt;

use crate::block::{DecompressError, Lz4Error};

/// Failure of a session operation.
///
/// Every error is reported at the call that caused it; sessions never
/// retry internally and never return partial output alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A size argument is zero, too large, or otherwise malformed.
    InvalidArgument,
    /// The block is larger than the session's configured block size.
    BufferOverflow,
    /// The compressor could not produce a block within the output bound.
    CodecFailure,
    /// The compressed block is malformed or decodes past the output bound.
    CorruptData,
    /// The handle has not been initialised with a session.
    UninitializedSession,
    /// The handle already holds a session.
    AlreadyInitialized,
    /// An earlier codec failure left the session unusable until `reset`.
    ResetRequired,
}

impl Error {
    /// Stable identifier for the error kind.
    pub fn error_name(&self) -> &'static str {
        match self {
            Error::InvalidArgument => "ERROR_invalidArgument",
            Error::BufferOverflow => "ERROR_bufferOverflow",
            Error::CodecFailure => "ERROR_codecFailure",
            Error::CorruptData => "ERROR_corruptData",
            Error::UninitializedSession => "ERROR_uninitializedSession",
            Error::AlreadyInitialized => "ERROR_alreadyInitialized",
            Error::ResetRequired => "ERROR_resetRequired",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidArgument => "invalid argument",
            Error::BufferOverflow => "block is larger than the configured block size",
            Error::CodecFailure => "block compression failed",
            Error::CorruptData => "corrupt compressed data or output bound too small",
            Error::UninitializedSession => "session is not initialized",
            Error::AlreadyInitialized => "session is already initialized",
            Error::ResetRequired => "session must be reset after a failed update",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<Lz4Error> for Error {
    fn from(err: Lz4Error) -> Self {
        match err {
            Lz4Error::InputTooLarge => Error::InvalidArgument,
            Lz4Error::OutputTooSmall => Error::CodecFailure,
        }
    }
}

impl From<DecompressError> for Error {
    fn from(_: DecompressError) -> Self {
        Error::CorruptData
    }
}

/// Result alias used throughout the session API.
pub type Result<T> = std::result::Result<T, Error>;
