//! Shared fixture builders for the end-to-end scenario tests.

use std::io::Write;
use tempfile::NamedTempFile;

pub const CHARSET_SIZE: usize = 256;

/// Builds a classic (single `256x256`) statistics payload wrapped in the
/// wire format: header, ETX, `{type=1, length, payload}`.
pub fn classic_stats_bytes(fill: impl Fn(u8, u8) -> u16) -> Vec<u8> {
    let mut payload = Vec::with_capacity(CHARSET_SIZE * CHARSET_SIZE * 2);
    for b in 0..256u16 {
        for c in 0..256u16 {
            payload.extend_from_slice(&fill(b as u8, c as u8).to_be_bytes());
        }
    }
    wrap_record(1, &payload)
}

/// Builds a layered (`max_length x 256 x 256`) statistics payload.
pub fn layered_stats_bytes(max_length: usize, fill: impl Fn(usize, u8, u8) -> u16) -> Vec<u8> {
    let mut payload = Vec::with_capacity(max_length * CHARSET_SIZE * CHARSET_SIZE * 2);
    for p in 0..max_length {
        for b in 0..256u16 {
            for c in 0..256u16 {
                payload.extend_from_slice(&fill(p, b as u8, c as u8).to_be_bytes());
            }
        }
    }
    wrap_record(2, &payload)
}

fn wrap_record(record_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![b'H', b'D', b'R', 0x03u8];
    data.push(record_type);
    data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    data.extend_from_slice(payload);
    data
}

/// Writes `bytes` to a fresh temp file and returns the handle (keep it alive
/// for the file to persist).
pub fn write_temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file
}

/// Writes a dictionary wordlist (one word per line) to a temp file.
pub fn write_dictionary(words: &[&str]) -> NamedTempFile {
    write_temp_file(words.join("\n").as_bytes())
}
