//! Error types for `O2WKit`

use thiserror::Error;

/// The error type for `O2WKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== O2W Decode Errors ====================
    /// A read ran past the end of the buffer (truncated or corrupt data).
    #[error("read of {needed} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds {
        /// Byte offset at which the read started.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Total length of the buffer.
        len: usize,
    },

    /// A block tag byte was not one of the known O2W block types.
    #[error("unrecognized block tag {tag} at offset {offset}")]
    UnrecognizedBlockTag {
        /// The offending tag byte.
        tag: u8,
        /// Byte offset of the tag within the buffer.
        offset: usize,
    },

    /// The decode was cancelled by the caller between batches.
    #[error("decode cancelled")]
    Cancelled,
}

/// A `Result` alias where the `Err` case is `o2wkit::Error`.
pub type Result<T> = std::result::Result<T, Error>;
