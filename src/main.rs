//! Times the battery against `Vec` and then against `LinkedList`, printing both side by side.

use sequence_bench::{print_banner, print_report, run_all, BenchmarkConfig};
use std::collections::LinkedList;


fn main() {
    let config = BenchmarkConfig::default();
    print_banner();

    let mut contiguous = Vec::<u32>::new();
    let contiguous_results = run_all(&mut contiguous, &config);

    let mut linked = LinkedList::<u32>::new();
    let linked_results = run_all(&mut linked, &config);

    print_report(&contiguous_results, &linked_results);
}
