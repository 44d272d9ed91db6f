#![doc = include_str!("../README.md")]

pub mod containers;
pub mod measurements;
pub mod runners;
pub mod report;
pub mod metrics_allocator;
pub mod configs;
mod features;


// exported symbols
pub use {
    configs::{BenchmarkConfig, DEFAULT_REPETITIONS},
    containers::SequenceContainer,
    features::{ALLOC, OUTPUT, PROGRESS},
    measurements::{BenchmarkOperation, OperationResult, SpaceMeasurements},
    runners::battery::run_all,
    report::{render, print_banner, print_report},
};
