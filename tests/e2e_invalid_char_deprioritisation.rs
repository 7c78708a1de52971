//! Scenario 5 (invalid-char deprioritisation): a high raw count on an
//! invalid (control) byte never outranks a valid byte, however low its count.

mod common;

use mpcrack::{read_statistics, Mask, MarkovTable, ModelKind, Thresholds};

#[test]
fn valid_byte_always_outranks_invalid_byte() {
    let stats_bytes = common::classic_stats_bytes(|_, c| {
        if c == 31 {
            65000
        } else if c == b'a' {
            1
        } else {
            0
        }
    });
    let stats = read_statistics(&stats_bytes, ModelKind::Classic, 1).unwrap();
    // A mask that matches neither byte keeps both out of the mask-boost
    // path, so the outcome below is driven purely by the valid/invalid
    // total-order rule rather than by mask satisfaction.
    let mask = Mask::parse("?d").unwrap();
    let thresholds = Thresholds::build(1, &[], &mask, 1);
    let table = MarkovTable::build(&stats, &mask, thresholds).unwrap();

    assert_eq!(table.successor(0, 0, 0), b'a');
}
