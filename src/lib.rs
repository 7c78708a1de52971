//! Library surface for the Markov-driven password candidate generator and
//! dictionary matcher. `src/main.rs` is a thin CLI wrapper around this API.

pub mod cli;
pub mod codec;
pub mod config;
pub mod coordinator;
pub mod device;
pub mod dictionary;
pub mod error;
pub mod mask;
pub mod markov;
pub mod reservation;
pub mod stats;
pub mod util;

pub use coordinator::{run as run_coordinator, CoordinatorOutcome};
pub use device::{list_platforms, CpuBackend, DeviceBackend, Platform};
pub use dictionary::DictionaryIndex;
pub use error::{CrackError, Result};
pub use markov::{MarkovTable, Thresholds};
pub use mask::Mask;
pub use reservation::ReservationState;
pub use stats::{read_statistics, read_statistics_file, ModelKind, Statistics};
