//! The kernel set. Every public kernel function builds its own data, times
//! only the workload, and returns elapsed seconds.

pub mod memory;
pub mod strings;

pub const ITER_10K: u64 = 10_000;
pub const ITER_100K: u64 = 100_000;
pub const ITER_300K: u64 = 300_000;
pub const ITER_1000K: u64 = 1_000_000;

/// Filler stored by reference in the container kernels.
///
/// Not zero-sized, so each slot holds a real pointer to a real object.
#[derive(Debug, Default)]
pub struct Placeholder {
    _tag: u64,
}
