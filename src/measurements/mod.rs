//! Defines the records produced by [crate::runners] and consumed by [crate::report]:
//!   - [BenchmarkOperation] names the seven timed phases;
//!   - [OperationResult] holds what was measured for one of them;
//!   - [presentable_measurements] knows how to show durations & byte counts to humans.

pub mod presentable_measurements;

use std::{
    fmt::{Display, Formatter},
    time::Duration,
};
use presentable_measurements::bytes_measurement;


/// The phases of the benchmark battery, in the order they are run.\
/// Later phases rely on the container state earlier phases leave behind, so the order is part of the contract.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BenchmarkOperation {
    AppendAtEnd,
    IndexedGet,
    InsertAtBeginning,
    RemoveFromBeginning,
    RemoveFromEnd,
    InsertAtMiddle,
    RemoveFromMiddle,
}
impl BenchmarkOperation {
    /// every phase, in battery order
    pub const ALL: [Self; 7] = [
        Self::AppendAtEnd,
        Self::IndexedGet,
        Self::InsertAtBeginning,
        Self::RemoveFromBeginning,
        Self::RemoveFromEnd,
        Self::InsertAtMiddle,
        Self::RemoveFromMiddle,
    ];

    /// name shown in the report's first column -- never longer than 14 characters
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppendAtEnd         => "push_back()",
            Self::IndexedGet          => "get(i)",
            Self::InsertAtBeginning   => "insert(0)",
            Self::RemoveFromBeginning => "remove(0)",
            Self::RemoveFromEnd       => "remove(len-1)",
            Self::InsertAtMiddle      => "insert(mid)",
            Self::RemoveFromMiddle    => "remove(mid)",
        }
    }
}
impl Display for BenchmarkOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What was observed when running one phase against one container variant.
#[derive(Debug, Clone, Copy)]
pub struct OperationResult {
    pub operation:   BenchmarkOperation,
    /// number of operations inside the timed loop
    pub repetitions: u32,
    /// wall-clock time of the timed loop only -- setup (clearing, repopulating) is excluded
    pub elapsed:     Duration,
    /// heap usage around the timed loop
    pub space:       SpaceMeasurements,
}
impl OperationResult {
    /// the figure shown in the report
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// memory usage measurements, in bytes, for a timed loop -- one per [OperationResult]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceMeasurements {
    /// heap memory in use just before starting the loop
    pub used_memory_before: usize,
    /// heap memory in use just after the loop
    pub used_memory_after:  usize,
    /// maximum heap memory in use during the loop
    pub max_used_memory:    usize,
    /// minimum heap memory in use during the loop
    pub min_used_memory:    usize,
}
impl SpaceMeasurements {
    /// >0 if memory was allocated and <0 if memory was freed
    pub fn used_memory_delta(&self) -> isize {
        self.used_memory_after as isize - self.used_memory_before as isize
    }
}
impl Display for SpaceMeasurements {
    // the biggest excursion from the starting point, signed by where the loop ended up
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let delta = self.used_memory_delta();
        let sign = if delta > 0 {"+"} else if delta < 0 {"-"} else {""};
        let excursion = std::cmp::max(self.max_used_memory.saturating_sub(self.used_memory_before),
                                      self.used_memory_before.saturating_sub(self.min_used_memory));
        write!(f, "{}{}", sign, bytes_measurement(excursion as f64))
    }
}
