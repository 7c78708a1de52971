//! Tagged error type for setup- and run-time failures.
//!
//! A plain enum with a hand-written `Display` and `std::error::Error` impl,
//! no `thiserror`. Bad CLI sub-syntax (`-t`, `-l`, `-D`) also reports through
//! `CrackError::UsageError` rather than a separate error type, since `clap`
//! already owns top-level flag parsing and exits on its own malformed input.

use std::fmt;

/// Every fatal condition this crate can report, with the exit-code policy
/// from the error handling design table.
#[derive(Debug)]
pub enum CrackError {
    /// Bad CLI usage that slipped past `clap`'s own validation (e.g. a
    /// malformed `-t`/`-l`/`-D` sub-syntax). Exit code 2.
    UsageError(String),
    /// The statistics file or dictionary file could not be opened/read. Exit code 2.
    MissingFile { path: String, source: std::io::Error },
    /// The statistics file header or a record was truncated or malformed. Exit code 2.
    MalformedStats(String),
    /// The requested Markov model (classic/layered) has no record in the
    /// statistics file. Exit code 2.
    ModelNotFound,
    /// The dictionary contained zero insertable lines. Exit code 2.
    EmptyDictionary,
    /// A dictionary word is too long to fit the `u8` entry-length byte
    /// (`max_word_length + 2 > 256`). Exit code 2.
    WordTooLong { word_len: usize },
    /// `Π T[p]` over the selected length range would overflow `u64`. Exit code 2.
    ThresholdOverflow,
    /// A device backend failed to launch or execute its kernels. Exit code 2.
    DeviceError(String),
}

impl fmt::Display for CrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackError::UsageError(msg) => write!(f, "bad usage: {msg}"),
            CrackError::MissingFile { path, source } => {
                write!(f, "cannot read {path}: {source}")
            }
            CrackError::MalformedStats(msg) => write!(f, "malformed statistics file: {msg}"),
            CrackError::ModelNotFound => {
                write!(f, "statistics file doesn't contain the requested model")
            }
            CrackError::EmptyDictionary => write!(f, "dictionary contains no usable words"),
            CrackError::WordTooLong { word_len } => write!(
                f,
                "dictionary word of length {word_len} does not fit an 8-bit entry-length field"
            ),
            CrackError::ThresholdOverflow => write!(
                f,
                "product of per-position thresholds overflows 64 bits; use smaller thresholds or a shorter length range"
            ),
            CrackError::DeviceError(msg) => write!(f, "device error: {msg}"),
        }
    }
}

impl std::error::Error for CrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrackError::MissingFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Maps a [`CrackError`] to the exit code table in the error handling design.
pub fn exit_code(err: &CrackError) -> i32 {
    match err {
        CrackError::UsageError(_) => 2,
        CrackError::MissingFile { .. } => 2,
        CrackError::MalformedStats(_) => 2,
        CrackError::ModelNotFound => 2,
        CrackError::EmptyDictionary => 2,
        CrackError::WordTooLong { .. } => 2,
        CrackError::ThresholdOverflow => 2,
        CrackError::DeviceError(_) => 2,
    }
}

pub type Result<T> = std::result::Result<T, CrackError>;
