//! Markov table builder and the permutation prefix-sum it feeds.
//!
//! Rust port of `CLMarkovPassGen::initMemory` / `compareSortElements`
//! (`CLMarkovPassGen.cc`): per `(position, previous byte)` row, rank all 256
//! possible successors by mask-boosted probability and keep the top `T_max`.

use crate::config::{CHARSET_SIZE, MASK_BOOST};
use crate::error::{CrackError, Result};
use crate::mask::Mask;
use crate::stats::Statistics;

/// Per-position successor counts, clamped to each position's mask count.
#[derive(Debug, Clone)]
pub struct Thresholds {
    values: Vec<u32>,
}

impl Thresholds {
    /// Builds per-position thresholds from a single global default, optional
    /// per-position overrides, and the mask (which clamps every value).
    pub fn build(global: u32, overrides: &[(usize, u32)], mask: &Mask, max_length: usize) -> Self {
        let mut values = vec![global; max_length];
        for &(p, t) in overrides {
            if p < max_length {
                values[p] = t;
            }
        }
        for (p, v) in values.iter_mut().enumerate() {
            *v = (*v).min(mask.count(p)).max(1);
        }
        Thresholds { values }
    }

    pub fn get(&self, p: usize) -> u32 {
        self.values[p]
    }

    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Clone, Copy)]
struct SortElement {
    next: u8,
    probability: u32,
}

fn total_order(a: &SortElement, b: &SortElement) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    let a_valid = a.next >= 32;
    let b_valid = b.next >= 32;
    match (a_valid, b_valid) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.next.cmp(&a.next),
        (true, true) => b
            .probability
            .cmp(&a.probability)
            .then_with(|| b.next.cmp(&a.next)),
    }
}

/// The dense lookup table `M[p][b][k]`, its shape, and the prefix-sum array
/// `P[L]` over candidate lengths.
pub struct MarkovTable {
    /// Row-major `max_length * 256 * t_max` buffer.
    table: Vec<u8>,
    thresholds: Thresholds,
    t_max: usize,
    max_length: usize,
    /// `prefix[L]` for `L` in `0..=max_length`.
    prefix: Vec<u64>,
}

impl MarkovTable {
    /// Builds the ranked successor table and the per-length prefix-sum array.
    pub fn build(stats: &Statistics, mask: &Mask, thresholds: Thresholds) -> Result<Self> {
        let max_length = thresholds.len();
        let t_max = thresholds.max() as usize;
        let mut table = vec![0u8; max_length * CHARSET_SIZE * t_max];

        for p in 0..max_length {
            for b in 0..CHARSET_SIZE {
                let mut row: Vec<SortElement> = (0..CHARSET_SIZE)
                    .map(|next| {
                        let mut probability = stats.count(p, b as u8, next as u8) as u32;
                        if mask.satisfy(p, next as u8) {
                            probability += MASK_BOOST;
                        }
                        SortElement {
                            next: next as u8,
                            probability,
                        }
                    })
                    .collect();
                row.sort_by(total_order);

                let base = (p * CHARSET_SIZE + b) * t_max;
                for (k, elem) in row.iter().take(t_max).enumerate() {
                    table[base + k] = elem.next;
                }
            }
        }

        // p = 0 is identical for every `b`: broadcast row b=0 to the rest.
        for p_fix in [0usize] {
            let base0 = (p_fix * CHARSET_SIZE) * t_max;
            let (first, rest) = table[base0..base0 + CHARSET_SIZE * t_max].split_at_mut(t_max);
            for chunk in rest.chunks_mut(t_max) {
                chunk.copy_from_slice(first);
            }
        }

        let mut prefix = vec![0u64; max_length + 1];
        let mut running_product: u64 = 1;
        for l in 1..=max_length {
            let width = thresholds.get(l - 1) as u64;
            running_product = running_product
                .checked_mul(width)
                .ok_or(CrackError::ThresholdOverflow)?;
            prefix[l] = prefix[l - 1]
                .checked_add(running_product)
                .ok_or(CrackError::ThresholdOverflow)?;
        }

        Ok(MarkovTable {
            table,
            thresholds,
            t_max,
            max_length,
            prefix,
        })
    }

    /// The k-th most likely successor byte at position `p` given previous
    /// byte `prev`.
    #[inline]
    pub fn successor(&self, p: usize, prev: u8, k: usize) -> u8 {
        let base = (p * CHARSET_SIZE + prev as usize) * self.t_max;
        self.table[base + k]
    }

    pub fn threshold(&self, p: usize) -> u32 {
        self.thresholds.get(p)
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// `P[L]`, for `L` in `0..=max_length`.
    pub fn prefix(&self, length: usize) -> u64 {
        self.prefix[length]
    }

    pub fn t_max(&self) -> usize {
        self.t_max
    }
}
