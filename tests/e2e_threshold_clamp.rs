//! Scenario 2 (threshold clamp): a requested threshold larger than the mask's
//! own character count is clamped down to that count.

mod common;

use mpcrack::{read_statistics, CpuBackend, DictionaryIndex, Mask, MarkovTable, ModelKind, ReservationState, Thresholds};

#[test]
fn threshold_is_clamped_to_mask_count() {
    let stats_bytes = common::classic_stats_bytes(|_, _| 0);
    let stats = read_statistics(&stats_bytes, ModelKind::Classic, 2).unwrap();
    let mask = Mask::parse("?d?d").unwrap();
    let thresholds = Thresholds::build(20, &[(0, 20), (1, 20)], &mask, 2);

    assert_eq!(thresholds.get(0), 10);
    assert_eq!(thresholds.get(1), 10);

    let table = MarkovTable::build(&stats, &mask, thresholds).unwrap();
    assert_eq!(table.prefix(2) - table.prefix(1), 100);

    let dict = DictionaryIndex::build(vec!["42"], 1.0).unwrap();
    let reservation = ReservationState::new(table.prefix(1), table.prefix(2), 1000);
    let backend = CpuBackend;
    let outcome =
        mpcrack::run_coordinator(&backend, &table, &dict, &reservation, 16, 1).unwrap();

    assert_eq!(outcome.candidates_generated, 100);
    assert_eq!(outcome.dictionary.found_count(), 1);
}
