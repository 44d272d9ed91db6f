//! Contains executors of the benchmark phases, timing each one & gathering the metrics
//! [crate::report] presents

pub(crate) mod common;
pub mod battery;

pub use common::PassResult;
