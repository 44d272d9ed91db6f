//! Renders the side-by-side comparison of two result lists -- one per container variant -- followed by
//! the usual observations about which variant wins for which access pattern.\
//! The observations are a fixed text: they are never derived from the measured numbers.

use crate::{
    features::OUTPUT,
    measurements::OperationResult,
};


/// Shown before any phase runs
pub const BANNER: &str = "\
Performance comparison of VEC and LINKEDLIST
==============================================================
";

/// Everything before the first table row
const TABLE_HEADER: &str = "
Results (in nanoseconds)
-----------------------------------------------------------
|   Operation    |   Count    |     Vec     | LinkedList  |
-------------------------------------------------------------
";

const TABLE_FOOTER: &str = "--------------------------------------------------------------\n";

/// Closes the report, whatever the measurements were
pub const CONCLUSIONS: &str = "
Conclusions:

 Vec is faster at:
   Reading by index (get(i))
   Appending at the end (push_back())
   Removing from the end (remove(len-1))
   Iterating over the elements

 LinkedList is faster at:
   Inserting at the beginning (insert(0))
   Removing from the beginning (remove(0))

 Which container to pick?
   Frequent reads and work at the end - Vec
   Frequent work at the beginning - LinkedList
";


/// Builds the comparison table for `contiguous_results` & `linked_results`, plus [CONCLUSIONS].\
/// Rows are paired by position: entry `i` of both lists is taken to be the same operation
/// (as [crate::runners::battery::run_all()] produces them) -- the name & count columns come from `contiguous_results`
/// and, should the lists differ in length, the extra entries of the longer one are left out.
pub fn render(contiguous_results: &[OperationResult], linked_results: &[OperationResult]) -> String {
    let rows = contiguous_results.iter()
        .zip(linked_results)
        .map(|(contiguous, linked)| format!("| {:<14} | {:<10} | {:<11} | {:<11} |\n",
                                            contiguous.operation.name(),
                                            contiguous.repetitions,
                                            contiguous.elapsed_nanos(),
                                            linked.elapsed_nanos()))
        .collect::<String>();
    format!("{TABLE_HEADER}{rows}{TABLE_FOOTER}{CONCLUSIONS}")
}

/// Sends [render()]'s outcome to [OUTPUT]
pub fn print_report(contiguous_results: &[OperationResult], linked_results: &[OperationResult]) {
    OUTPUT(&render(contiguous_results, linked_results));
}

/// Sends [BANNER] to [OUTPUT]
pub fn print_banner() {
    OUTPUT(BANNER);
}
