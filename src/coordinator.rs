//! Host coordinator: per-device worker loop, double-kernel pipelining,
//! reservation-driven termination.
//!
//! Each worker runs a generate stage and a match stage connected by a
//! bounded handoff channel used as a one-slot admission gate, adapted here
//! so that generate-(N+1) overlaps with match-N rather than the two stages
//! running strictly in lockstep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::bounded;

use crate::device::{self, DeviceBackend};
use crate::dictionary::DictionaryIndex;
use crate::error::Result;
use crate::markov::MarkovTable;
use crate::reservation::ReservationState;

/// Aggregate result of running every worker to completion.
pub struct CoordinatorOutcome {
    pub dictionary: DictionaryIndex,
    pub candidates_generated: u64,
}

/// Runs `num_workers` device workers against `reservation`, each generating
/// batches of `gws` candidates at a time via `backend` and matching them
/// into its own replica of `dictionary_template`, merging flags back into a
/// single canonical dictionary once every worker has joined.
pub fn run(
    backend: &dyn DeviceBackend,
    table: &MarkovTable,
    dictionary_template: &DictionaryIndex,
    reservation: &ReservationState,
    gws: usize,
    num_workers: usize,
) -> Result<CoordinatorOutcome> {
    let aborted = AtomicBool::new(false);

    let results: Vec<Result<(DictionaryIndex, u64)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..num_workers.max(1))
            .map(|_| {
                let dict = dictionary_template.clone();
                scope.spawn(move || run_worker(backend, table, reservation, gws, &aborted, dict))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("device worker panicked"))
            .collect()
    });

    let mut merged = dictionary_template.clone();
    let mut candidates_generated = 0u64;
    for result in results {
        let (dict, generated) = result?;
        merged.merge_flags_from(&dict);
        candidates_generated += generated;
    }

    Ok(CoordinatorOutcome {
        dictionary: merged,
        candidates_generated,
    })
}

/// One device's worker loop: `Uninitialised -> Generating -> Draining -> Done`.
fn run_worker(
    backend: &dyn DeviceBackend,
    table: &MarkovTable,
    reservation: &ReservationState,
    gws: usize,
    aborted: &AtomicBool,
    mut dict: DictionaryIndex,
) -> Result<(DictionaryIndex, u64)> {
    let stride = device::slot_stride();
    let (tx, rx) = bounded::<Option<(Vec<u8>, usize)>>(1);

    let generated = thread::scope(|scope| -> Result<u64> {
        let producer = scope.spawn(move || -> Result<()> {
            let mut local_start = 0u64;
            let mut local_stop = 0u64;
            loop {
                if aborted.load(Ordering::Acquire) {
                    let _ = tx.send(None);
                    return Ok(());
                }
                if local_start >= local_stop {
                    match reservation.reserve() {
                        Some(r) => {
                            local_start = r.start;
                            local_stop = r.stop;
                        }
                        None => {
                            let _ = tx.send(None);
                            return Ok(());
                        }
                    }
                }
                let batch_end = (local_start + gws as u64).min(local_stop);
                let indices: Vec<u64> = (local_start..batch_end).collect();
                let mut buffer = vec![0u8; indices.len() * stride];
                backend.generate(&indices, table, &mut buffer)?;
                let count = indices.len();
                if tx.send(Some((buffer, count))).is_err() {
                    return Ok(());
                }
                local_start = batch_end;
            }
        });

        let mut total_generated = 0u64;
        while let Ok(Some((buffer, count))) = rx.recv() {
            if let Err(e) = backend.match_candidates(&buffer, &mut dict) {
                aborted.store(true, Ordering::Release);
                let _ = producer.join();
                return Err(e);
            }
            total_generated += count as u64;
        }
        match producer.join().expect("generator thread panicked") {
            Ok(()) => Ok(total_generated),
            Err(e) => {
                aborted.store(true, Ordering::Release);
                Err(e)
            }
        }
    })?;

    Ok((dict, generated))
}
