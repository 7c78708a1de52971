//! Device backend seam: the trait a real OpenCL/CUDA backend would
//! implement, plus the one shipped CPU reference backend.

use crate::codec;
use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::markov::MarkovTable;

/// Executes the generate/match contract for one device.
pub trait DeviceBackend: Send + Sync {
    /// Fills `out` with the length-prefixed candidate encoding of every
    /// index in `indices`: byte 0 is the candidate length, followed by that
    /// many candidate bytes, then padding up to the per-slot stride. The
    /// caller sizes `out` to `indices.len() * (MAX_PASS_LENGTH + 1)`.
    fn generate(&self, indices: &[u64], table: &MarkovTable, out: &mut [u8]) -> Result<()>;

    /// Tests every candidate written by `generate` against `dict`, setting
    /// match flags in place.
    fn match_candidates(&self, candidates: &[u8], dict: &mut DictionaryIndex) -> Result<usize>;

    fn name(&self) -> &'static str;
}

/// The stride (in bytes) of one generated candidate slot: a length byte
/// followed by up to `MAX_PASS_LENGTH` candidate bytes.
pub fn slot_stride() -> usize {
    crate::config::MAX_PASS_LENGTH + 1
}

/// Reference backend: runs the generate/match algorithm on the calling OS
/// thread, standing in for what a GPU kernel would do.
pub struct CpuBackend;

impl DeviceBackend for CpuBackend {
    fn generate(&self, indices: &[u64], table: &MarkovTable, out: &mut [u8]) -> Result<()> {
        let stride = slot_stride();
        debug_assert!(out.len() >= indices.len() * stride);
        for (slot, &index) in indices.iter().enumerate() {
            let base = slot * stride;
            let word = codec::decode(table, index)?;
            out[base] = word.len() as u8;
            out[base + 1..base + 1 + word.len()].copy_from_slice(&word);
        }
        Ok(())
    }

    fn match_candidates(&self, candidates: &[u8], dict: &mut DictionaryIndex) -> Result<usize> {
        let stride = slot_stride();
        let mut new_matches = 0;
        for chunk in candidates.chunks_exact(stride) {
            let len = chunk[0] as usize;
            if len == 0 {
                continue;
            }
            let word = &chunk[1..1 + len];
            if dict.try_match(word) {
                new_matches += 1;
            }
        }
        Ok(new_matches)
    }

    fn name(&self) -> &'static str {
        "cpu"
    }
}

/// A registered compute platform, enumerated for `--list-platforms` and
/// selected with `-D/--devices`. Today there is exactly one: the CPU backend
/// presented as a platform with `available_parallelism()` devices.
pub struct Platform {
    pub index: usize,
    pub name: &'static str,
    pub device_count: usize,
}

/// Lists the platforms this build knows about.
pub fn list_platforms() -> Vec<Platform> {
    let device_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    vec![Platform {
        index: 0,
        name: "cpu",
        device_count,
    }]
}
