//! Index <-> candidate-string codec.
//!
//! Rust port of `CLMarkovPassGen::getPassword` (`CLMarkovPassGen.cc`): given
//! a global index, find its length via the prefix-sum array, then walk the
//! Markov table one position at a time.

use crate::error::{CrackError, Result};
use crate::markov::MarkovTable;

/// Finds `L` such that `P[L-1] <= index < P[L]`, i.e. the candidate length
/// that owns `index`.
pub fn length_for_index(table: &MarkovTable, index: u64) -> Option<usize> {
    for l in 1..=table.max_length() {
        if index < table.prefix(l) {
            return Some(l);
        }
    }
    None
}

/// Decodes a global index into its candidate string.
///
/// `last` is always reset to `0` at the start of decoding: the mapping
/// index -> string must not depend on any prior candidate, since indices
/// are handed out in disjoint ranges to independent workers.
pub fn decode(table: &MarkovTable, index: u64) -> Result<Vec<u8>> {
    let length =
        length_for_index(table, index).ok_or_else(|| CrackError::UsageError(format!(
            "index {index} is outside the enumerated range"
        )))?;
    let mut i = index - table.prefix(length - 1);
    let mut last: u8 = 0;
    let mut out = Vec::with_capacity(length);
    for p in 0..length {
        let t_p = table.threshold(p) as u64;
        let k = (i % t_p) as usize;
        i /= t_p;
        let c = table.successor(p, last, k);
        out.push(c);
        last = c;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHARSET_SIZE;
    use crate::mask::Mask;
    use crate::markov::Thresholds;
    use crate::stats::{read_statistics, ModelKind};

    fn make_table(mask_str: &str, threshold: u32, max_length: usize) -> MarkovTable {
        let mut payload = Vec::with_capacity(CHARSET_SIZE * CHARSET_SIZE * 2);
        for _b in 0..256 {
            for _c in 0..256 {
                payload.extend_from_slice(&0u16.to_be_bytes());
            }
        }
        let mut data = vec![0x03u8, 1];
        data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        data.extend_from_slice(&payload);
        let stats = read_statistics(&data, ModelKind::Classic, max_length).unwrap();
        let mask = Mask::parse(mask_str).unwrap();
        let thresholds = Thresholds::build(threshold, &[], &mask, max_length);
        MarkovTable::build(&stats, &mask, thresholds).unwrap()
    }

    #[test]
    fn decodes_first_index_of_first_length() {
        let table = make_table("?l?l?l", 1, 3);
        let s = decode(&table, 0).unwrap();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn length_boundaries_match_prefix_sums() {
        let table = make_table("?l?l", 2, 2);
        assert_eq!(length_for_index(&table, 0), Some(1));
        assert_eq!(length_for_index(&table, table.prefix(1) - 1), Some(1));
        assert_eq!(length_for_index(&table, table.prefix(1)), Some(2));
        assert_eq!(length_for_index(&table, table.prefix(2) - 1), Some(2));
        assert_eq!(length_for_index(&table, table.prefix(2)), None);
    }

    #[test]
    fn decode_is_deterministic_given_index_alone() {
        let table = make_table("?l?l?l", 2, 3);
        let idx = table.prefix(1);
        let a = decode(&table, idx).unwrap();
        let b = decode(&table, idx).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let table = make_table("?l", 1, 1);
        let err = decode(&table, table.prefix(1)).unwrap_err();
        assert!(matches!(err, CrackError::UsageError(_)));
    }

    #[test]
    fn sequential_indices_enumerate_distinct_candidates_within_a_length() {
        let table = make_table("?l?l", 5, 2);
        let start = table.prefix(1);
        let end = table.prefix(2);
        let mut seen = std::collections::HashSet::new();
        for idx in start..end {
            let word = decode(&table, idx).unwrap();
            assert!(seen.insert(word));
        }
    }
}
