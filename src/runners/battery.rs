//! Knows how to run & time the fixed battery of seven phases against any [SequenceContainer].\
//! Phases run strictly in [BenchmarkOperation::ALL] order: each one but the second prepares the container itself
//! (outside of the timed loop), while the second reuses whatever the first left behind.

use crate::{
    configs::BenchmarkConfig,
    containers::SequenceContainer,
    features::PROGRESS,
    measurements::{
        presentable_measurements::duration_measurement,
        BenchmarkOperation,
        OperationResult,
    },
    runners::common::*,
};


/// Runs every phase against `container`, in battery order, returning one [OperationResult] for each.\
/// A progress line is sent to [PROGRESS] after each phase.
pub fn run_all<C: SequenceContainer>(container: &mut C, config: &BenchmarkConfig) -> Vec<OperationResult> {
    let repetitions = config.repetitions;
    PROGRESS(&format!("Running the battery against '{}' ({} repetitions per phase):\n", C::VARIANT_NAME, repetitions));
    let mut r = repetitions;
    let results = BenchmarkOperation::ALL.into_iter()
        .map(|operation| {
            let (pass_result, phase_r) = run_phase(container, operation, repetitions);
            r ^= phase_r;
            PROGRESS(&format!("  {:<14} {:>12} / {:>10}\n",
                              operation.name(),
                              duration_measurement(pass_result.time_measurements).to_string(),
                              pass_result.space_measurements.to_string()));
            OperationResult {
                operation,
                repetitions,
                elapsed: pass_result.time_measurements,
                space:   pass_result.space_measurements,
            }
        })
        .collect();
    PROGRESS(&format!("  r={}\n\n", r));
    results
}

/// Runs the single phase identified by `operation`
pub fn run_phase<C: SequenceContainer>(container: &mut C, operation: BenchmarkOperation, repetitions: u32) -> (PassResult, u32) {
    match operation {
        BenchmarkOperation::AppendAtEnd         => append_at_end(container, repetitions),
        BenchmarkOperation::IndexedGet          => indexed_get(container, repetitions),
        BenchmarkOperation::InsertAtBeginning   => insert_at_beginning(container, repetitions),
        BenchmarkOperation::RemoveFromBeginning => remove_from_beginning(container, repetitions),
        BenchmarkOperation::RemoveFromEnd       => remove_from_end(container, repetitions),
        BenchmarkOperation::InsertAtMiddle      => insert_at_middle(container, repetitions),
        BenchmarkOperation::RemoveFromMiddle    => remove_from_middle(container, repetitions),
    }
}

/// Untimed setup: leaves `container` holding `0..repetitions`, in order
pub fn populate<C: SequenceContainer>(container: &mut C, repetitions: u32) {
    container.clear();
    for i in 0..repetitions {
        container.append(i);
    }
}

/// Clears, then times appending `0..repetitions` at the end
pub fn append_at_end<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    container.clear();
    run_sync_pass(|| {
        for i in 0..repetitions {
            container.append(i);
        }
        container.len() as u32
    })
}

/// Times `repetitions` reads at `i % len` -- on the elements already there.
/// Only an empty container gets populated first.
pub fn indexed_get<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    if container.is_empty() {
        populate(container, repetitions);
    }
    run_sync_pass(|| {
        let mut r = repetitions;
        for i in 0..repetitions as usize {
            r ^= container.get(i % container.len()).unwrap_or_default();
        }
        r
    })
}

/// Clears, then times inserting `0..repetitions`, each at index 0 -- leaving them in reverse order
pub fn insert_at_beginning<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    container.clear();
    run_sync_pass(|| {
        for i in 0..repetitions {
            container.insert_at(0, i);
        }
        container.len() as u32
    })
}

/// Repopulates, then times `repetitions` removals at index 0
pub fn remove_from_beginning<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    populate(container, repetitions);
    run_sync_pass(|| {
        let mut r = repetitions;
        for _ in 0..repetitions {
            if !container.is_empty() {
                r ^= container.remove_at(0).unwrap_or_default();
            }
        }
        r
    })
}

/// Repopulates, then times `repetitions` removals of the last element
pub fn remove_from_end<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    populate(container, repetitions);
    run_sync_pass(|| {
        let mut r = repetitions;
        for _ in 0..repetitions {
            if !container.is_empty() {
                let last = container.len() - 1;
                r ^= container.remove_at(last).unwrap_or_default();
            }
        }
        r
    })
}

/// Repopulates, then times `repetitions` insertions at `len / 2` -- the middle moves as the container grows
pub fn insert_at_middle<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    populate(container, repetitions);
    run_sync_pass(|| {
        for i in 0..repetitions {
            let middle = container.len() / 2;
            container.insert_at(middle, i);
        }
        container.len() as u32
    })
}

/// Repopulates, then times `repetitions` removals at `len / 2` -- the middle moves as the container shrinks
pub fn remove_from_middle<C: SequenceContainer>(container: &mut C, repetitions: u32) -> (PassResult, u32) {
    populate(container, repetitions);
    run_sync_pass(|| {
        let mut r = repetitions;
        for _ in 0..repetitions {
            if !container.is_empty() {
                let middle = container.len() / 2;
                r ^= container.remove_at(middle).unwrap_or_default();
            }
        }
        r
    })
}
