use std::io::{self, Write};
use std::time::Instant;

use crate::benches::{self, hanoi::Hanoi};
use crate::{Kernel, KERNEL_COUNT};

/// Full passes over the kernel set per invocation.
pub const RUNS: usize = 3;

/// Elapsed seconds for `workload`, read from the monotonic clock.
///
/// Kernels do all setup before calling this, so only the workload sits
/// between the two clock reads.
#[inline(always)]
pub fn time_secs(workload: impl FnOnce()) -> f64 {
    let start = Instant::now();
    workload();
    start.elapsed().as_secs_f64()
}

/// Durations (seconds) from one run, indexed by [`Kernel::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    durations: [f64; KERNEL_COUNT],
}

impl BenchmarkResult {
    pub fn new(durations: [f64; KERNEL_COUNT]) -> Self {
        Self { durations }
    }

    pub fn get(&self, kernel: Kernel) -> f64 {
        self.durations[kernel.index()]
    }

    pub fn durations(&self) -> &[f64; KERNEL_COUNT] {
        &self.durations
    }
}

/// Per-kernel mean over [`RUNS`] results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AveragedReport {
    means: [f64; KERNEL_COUNT],
}

impl AveragedReport {
    pub fn get(&self, kernel: Kernel) -> f64 {
        self.means[kernel.index()]
    }

    pub fn means(&self) -> &[f64; KERNEL_COUNT] {
        &self.means
    }
}

/// Plain arithmetic mean of exactly three runs, kernel by kernel.
pub fn average(
    r1: &BenchmarkResult,
    r2: &BenchmarkResult,
    r3: &BenchmarkResult,
) -> AveragedReport {
    let mut means = [0.0; KERNEL_COUNT];
    for (i, mean) in means.iter_mut().enumerate() {
        *mean = (r1.durations[i] + r2.durations[i] + r3.durations[i]) / 3.0;
    }
    AveragedReport { means }
}

/// One instance of the nine kernels. Build a fresh one per run.
#[derive(Debug, Default)]
pub struct KernelSet {
    hanoi: Hanoi,
}

impl KernelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measure(&self, kernel: Kernel) -> f64 {
        match kernel {
            Kernel::Alloc => benches::memory::alloc(),
            Kernel::ArrayWrite => benches::containers::array_write(),
            Kernel::DictionaryWrite => benches::containers::dictionary_write(),
            Kernel::FloatMath => benches::math::float_math(),
            Kernel::IntegerMath => benches::math::integer_math(),
            Kernel::CollectionIterate => benches::containers::collection_iterate(),
            Kernel::CollectionWrite => benches::containers::collection_write(),
            Kernel::StringCompare => benches::strings::string_compare(),
            Kernel::Hanoi => self.hanoi.time(),
        }
    }

    /// Run every kernel once, in [`Kernel::ALL`] order.
    pub fn run(&self) -> BenchmarkResult {
        let mut durations = [0.0; KERNEL_COUNT];
        for kernel in Kernel::ALL {
            durations[kernel.index()] = self.measure(kernel);
        }
        BenchmarkResult::new(durations)
    }
}

/// Run the kernel set [`RUNS`] times, writing progress lines to `progress`.
///
/// Memory from a finished run is already released when its locals drop, so
/// there is no reclamation step between runs.
pub fn run_suite<W: Write>(progress: &mut W) -> io::Result<[BenchmarkResult; RUNS]> {
    writeln!(progress, "Starting STIC benchmark...")?;

    let mut results = [BenchmarkResult::new([0.0; KERNEL_COUNT]); RUNS];
    for (n, slot) in results.iter_mut().enumerate() {
        writeln!(progress, "... test run {}", n + 1)?;
        progress.flush()?;
        *slot = KernelSet::new().run();
    }

    Ok(results)
}
