//! Contains constants & the runtime configuration used throughout this crate

/// Number of operations performed inside each timed phase, unless told otherwise through [BenchmarkConfig]
pub const DEFAULT_REPETITIONS: u32 = 5000;

/// Parameters for one run of the benchmark battery -- see [crate::runners::battery::run_all()].\
/// Passed explicitly, so several configurations may coexist in the same process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// how many operations each phase performs inside its timed loop
    /// -- the same for every phase and every container variant, so their times are comparable
    pub repetitions: u32,
}

impl BenchmarkConfig {
    pub fn with_repetitions(repetitions: u32) -> Self {
        Self { repetitions }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { repetitions: DEFAULT_REPETITIONS }
    }
}
