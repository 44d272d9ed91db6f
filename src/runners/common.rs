//! Contains code shared between this module's submodules

use crate::{
    features,
    measurements::SpaceMeasurements,
};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};


/// Runs a pass on the given synchronous `algorithm` callback function or closure,
/// measuring (and returning) the time it took to run it, as well as the heap usage around it.
/// ```nocompile
///     /// Algorithm function under measurement.
///     /// Returns a(ny) computed number to avoid compiler call cancellation optimizations
///     fn algorithm() -> u32 {0}
/// ```
/// returns: tuple with ([PassResult], computed_number: u32)
pub(crate) fn run_sync_pass(mut algorithm: impl FnMut() -> u32)
                           -> (PassResult, u32) {

    let allocator_savepoint = features::ALLOC.save_point();
    let start = Instant::now();
    let r = black_box(algorithm());
    let duration = start.elapsed();
    let allocator_statistics = features::ALLOC.delta_statistics(&allocator_savepoint);

    (PassResult {
        time_measurements:  duration,
        space_measurements: SpaceMeasurements {
            used_memory_before: allocator_savepoint.metrics.current_used_memory,
            used_memory_after:  allocator_statistics.current_used_memory,
            min_used_memory:    allocator_statistics.min_used_memory,
            max_used_memory:    allocator_statistics.max_used_memory,
        },
    }, r)
}

/// contains the measurements for a pass done in [run_sync_pass()]
#[derive(Debug,Clone,Copy,Default)]
pub struct PassResult {
    pub time_measurements:  Duration,
    pub space_measurements: SpaceMeasurements,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn pass_returns_the_computed_number() {
        let mut calls = 0;
        let (_pass_result, r) = run_sync_pass(|| { calls += 1; 42 });
        assert_eq!(r, 42);
        assert_eq!(calls, 1, "the algorithm should run exactly once per pass");
    }

    #[test]
    #[serial]
    fn pass_time_covers_the_algorithm() {
        let delay = Duration::from_millis(5);
        let (pass_result, _r) = run_sync_pass(|| { spin_sleep::sleep(delay); 0 });
        assert!(pass_result.time_measurements >= delay, "measured {:?}, but the algorithm slept for {:?}", pass_result.time_measurements, delay);
    }

    #[cfg_attr(not(feature = "no_allocator_metrics"), test)]
    #[serial]
    fn pass_space_covers_the_algorithm() {
        let mut kept = Vec::<u64>::new();
        let (pass_result, _r) = run_sync_pass(|| { kept = Vec::with_capacity(8192); kept.len() as u32 });
        let space = pass_result.space_measurements;
        assert!(space.max_used_memory >= space.used_memory_before + 8192 * std::mem::size_of::<u64>() / 2,
                "the pass allocated 64KiB, but the peak memory usage was not affected: {space:?}");
        drop(kept);
    }
}
