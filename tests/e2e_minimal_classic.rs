//! Scenario 1 (minimal classic): a single boosted transition, tight mask and
//! thresholds, exactly one candidate at length 3.

mod common;

use mpcrack::{read_statistics, CpuBackend, DictionaryIndex, Mask, MarkovTable, ModelKind, ReservationState, Thresholds};

#[test]
fn minimal_classic_yields_one_candidate_and_one_match() {
    // Boosting every transition into 'a' (regardless of the previous byte)
    // makes 'a' the top-ranked successor at every position, independent of
    // what the previous byte happens to be -- so the single length-3
    // candidate is deterministically "aaa".
    let stats_bytes = common::classic_stats_bytes(|_b, c| if c == b'a' { 10 } else { 0 });
    let stats = read_statistics(&stats_bytes, ModelKind::Classic, 3).unwrap();
    let mask = Mask::parse("?l?l?l").unwrap();
    let thresholds = Thresholds::build(1, &[], &mask, 3);
    let table = MarkovTable::build(&stats, &mask, thresholds).unwrap();

    assert_eq!(table.prefix(3) - table.prefix(2), 1);

    let dict = DictionaryIndex::build(vec!["aaa"], 1.0).unwrap();
    let global_start = table.prefix(2);
    let global_stop = table.prefix(3);
    let reservation = ReservationState::new(global_start, global_stop, 1000);

    let backend = CpuBackend;
    let outcome =
        mpcrack::run_coordinator(&backend, &table, &dict, &reservation, 64, 1).unwrap();

    assert_eq!(outcome.candidates_generated, 1);
    assert_eq!(outcome.dictionary.found_count(), 1);
}
