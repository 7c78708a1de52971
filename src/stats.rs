//! Statistics file reader.
//!
//! Rust port of `CLMarkovPassGen::findStatistics` (`CLMarkovPassGen.cc`):
//! skip an arbitrary header up to an ETX byte, then scan `{type, length,
//! payload}` records until the requested model's type is found.

use std::io::Read;

use crate::config::{CHARSET_SIZE, ETX};
use crate::error::{CrackError, Result};

/// Which Markov model a statistics payload represents.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Classic = 1,
    Layered = 2,
}

impl ModelKind {
    fn record_type(self) -> u8 {
        self as u8
    }

    /// Parses the `-M/--model` CLI value.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "classic" => Ok(ModelKind::Classic),
            "layered" => Ok(ModelKind::Layered),
            other => Err(CrackError::UsageError(format!(
                "unknown model '{other}', expected 'classic' or 'layered'"
            ))),
        }
    }
}

/// The decoded transition-count payload for a given model, in host byte
/// order. Classic statistics are a single `256 × 256` matrix; layered
/// statistics carry one such matrix per position, up to `max_length`.
pub struct Statistics {
    kind: ModelKind,
    /// `counts[p][b][c]`, flattened; for `Classic` there is a single `p = 0`
    /// plane and every position reads through it.
    counts: Vec<u16>,
    positions: usize,
}

impl Statistics {
    /// Observed count of the transition `prev -> next` at position `p`.
    #[inline]
    pub fn count(&self, p: usize, prev: u8, next: u8) -> u16 {
        let p = if self.kind == ModelKind::Classic { 0 } else { p };
        let p = p.min(self.positions.saturating_sub(1));
        let base = (p * CHARSET_SIZE * CHARSET_SIZE) + (prev as usize * CHARSET_SIZE);
        self.counts[base + next as usize]
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }
}

/// Scans `data` for the ETX-terminated header, then the record matching
/// `kind`, and decodes its payload.
pub fn read_statistics(data: &[u8], kind: ModelKind, max_length: usize) -> Result<Statistics> {
    let header_end = data
        .iter()
        .position(|&b| b == ETX)
        .ok_or_else(|| CrackError::MalformedStats("missing ETX header terminator".into()))?;
    let mut cursor = &data[header_end + 1..];

    loop {
        if cursor.is_empty() {
            return Err(CrackError::ModelNotFound);
        }
        if cursor.len() < 5 {
            return Err(CrackError::MalformedStats(
                "truncated record header".into(),
            ));
        }
        let record_type = cursor[0];
        let length = u32::from_be_bytes([cursor[1], cursor[2], cursor[3], cursor[4]]) as usize;
        cursor = &cursor[5..];
        if cursor.len() < length {
            return Err(CrackError::MalformedStats(
                "record payload shorter than declared length".into(),
            ));
        }
        let payload = &cursor[..length];
        if record_type == kind.record_type() {
            return decode_payload(payload, kind, max_length);
        }
        cursor = &cursor[length..];
    }
}

/// Convenience wrapper reading directly from a path.
pub fn read_statistics_file(
    path: &std::path::Path,
    kind: ModelKind,
    max_length: usize,
) -> Result<Statistics> {
    let mut file = std::fs::File::open(path).map_err(|source| CrackError::MissingFile {
        path: path.display().to_string(),
        source,
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|source| CrackError::MissingFile {
            path: path.display().to_string(),
            source,
        })?;
    read_statistics(&data, kind, max_length)
}

fn decode_payload(payload: &[u8], kind: ModelKind, max_length: usize) -> Result<Statistics> {
    let plane = CHARSET_SIZE * CHARSET_SIZE;
    let positions = match kind {
        ModelKind::Classic => 1,
        ModelKind::Layered => max_length,
    };
    let expected_bytes = positions * plane * 2;
    if payload.len() != expected_bytes {
        return Err(CrackError::MalformedStats(format!(
            "expected {expected_bytes} bytes of {kind:?} payload, got {}",
            payload.len()
        )));
    }

    let mut counts = Vec::with_capacity(positions * plane);
    for chunk in payload.chunks_exact(2) {
        counts.push(u16::from_be_bytes([chunk[0], chunk[1]]));
    }

    Ok(Statistics {
        kind,
        counts,
        positions,
    })
}

impl std::fmt::Debug for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Classic => write!(f, "classic"),
            ModelKind::Layered => write!(f, "layered"),
        }
    }
}
