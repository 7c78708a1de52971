//! Compile-time configuration constants.
//!
//! Centralizes the knobs that would otherwise be scattered magic numbers:
//! table dimensions, default CLI values, and wire-format constants.

/// Maximum password length the Markov table and reservation logic support.
pub const MAX_PASS_LENGTH: usize = 64;

/// Number of distinct byte values a position's statistics/mask predicate covers.
pub const CHARSET_SIZE: usize = 256;

/// Header/record terminator byte for the statistics file format.
pub const ETX: u8 = 0x03;

/// Default global work size per device, used when `-g/--gws` is not given.
pub const DEFAULT_GWS: u32 = 1_024_000;

/// Default per-position threshold, used when `-t/--thresholds` is not given.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// Default maximum hash-table load factor, used when `--load-factor` is not given.
pub const DEFAULT_LOAD_FACTOR: f64 = 1.0;

/// Default candidate length range, used when `-l/--length` is not given.
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Number of reservation windows per `gws`: `reservation_size = RESERVATION_WINDOWS * gws`.
pub const RESERVATION_WINDOWS: u64 = 10_000;

/// Mask-boost added to a successor's raw (16-bit) probability when it satisfies
/// the mask at its position. Chosen so it exceeds the maximum possible raw
/// count (`u16::MAX`), guaranteeing mask-satisfying bytes outrank all others.
pub const MASK_BOOST: u32 = 65_536;
