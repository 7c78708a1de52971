//! Small cross-cutting helpers.

pub mod cores;

pub use cores::count_cores;
