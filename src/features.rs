//! Contains code for handling the Cargo features used to compile this crate.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};
use crate::metrics_allocator::MetricsAllocator;

#[cfg(all(feature = "report_stderr", not(feature = "no_report")))]
/// Function to output an `&str` -- used to sink the comparison report -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(all(feature = "report_stdout", not(feature = "report_stderr"), not(feature = "no_report")))]
/// Function to output an `&str` -- used to sink the comparison report -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(any(feature = "no_report", not(any(feature = "report_stdout", feature = "report_stderr"))))]
/// Function to output an `&str` -- used to sink the comparison report -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = null_write;

#[cfg(all(feature = "progress_stderr", not(feature = "no_progress")))]
/// Function to output an `&str` -- used to sink the per-phase progress lines -- controlled by the crate's features (progress_stderr, no_progress)
pub const PROGRESS: fn(&str) = stderr_write;

#[cfg(any(feature = "no_progress", not(feature = "progress_stderr")))]
/// Function to output an `&str` -- used to sink the per-phase progress lines -- controlled by the crate's features (progress_stderr, no_progress)
pub const PROGRESS: fn(&str) = null_write;

#[cfg_attr(not(feature = "no_allocator_metrics"), global_allocator)]
/// Allows access to the metrics allocator -- replacing the Global Allocator
/// unless the `no_allocator_metrics` feature is on, in which case it exists but never sees an allocation.
pub static ALLOC: MetricsAllocator = MetricsAllocator::new();


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
