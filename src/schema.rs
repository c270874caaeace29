use serde::{Deserialize, Serialize};

use crate::harness::{average, BenchmarkResult, RUNS};
use crate::Kernel;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub runs: u32,
    pub timestamp_utc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub label: String,
    pub unit: String,

    pub mean_s: f64,
    pub samples_s: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SticReport {
    pub run: RunMeta,
    pub measurements: Vec<Measurement>,
}

impl SticReport {
    /// One measurement per kernel, in report order, with the raw samples kept.
    pub fn from_runs(runs: &[BenchmarkResult; RUNS], timestamp_utc: String) -> Self {
        let [r1, r2, r3] = runs;
        let means = average(r1, r2, r3);

        let measurements = Kernel::ALL
            .iter()
            .map(|&kernel| Measurement {
                name: kernel.as_str().to_string(),
                label: kernel.label().to_string(),
                unit: "s".to_string(),
                mean_s: means.get(kernel),
                samples_s: runs.iter().map(|r| r.get(kernel)).collect(),
            })
            .collect();

        SticReport {
            run: RunMeta {
                schema_version: SCHEMA_VERSION,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                runs: RUNS as u32,
                timestamp_utc,
            },
            measurements,
        }
    }
}
