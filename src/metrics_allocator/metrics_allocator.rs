//! Resting place for [MetricsAllocator]

use std::{
    alloc::{GlobalAlloc, Layout, System},
    fmt::{Display, Formatter},
    sync::atomic::{AtomicUsize, Ordering::Relaxed},
};
use crate::measurements::presentable_measurements::bytes_measurement;


/// Delegates every request to [System], keeping counters along the way.\
/// `min_used_memory` & `max_used_memory` are tracked since the most recent [MetricsAllocator::save_point()]
/// -- the battery runs its phases one after the other, so only one save point is ever "open" at a time.
pub struct MetricsAllocator {
    allocations_count:   AtomicUsize,
    deallocations_count: AtomicUsize,
    reallocations_count: AtomicUsize,
    allocated_bytes:     AtomicUsize,
    deallocated_bytes:   AtomicUsize,
    current_used_memory: AtomicUsize,
    min_used_memory:     AtomicUsize,
    max_used_memory:     AtomicUsize,
}

impl MetricsAllocator {

    pub const fn new() -> Self {
        Self {
            allocations_count:   AtomicUsize::new(0),
            deallocations_count: AtomicUsize::new(0),
            reallocations_count: AtomicUsize::new(0),
            allocated_bytes:     AtomicUsize::new(0),
            deallocated_bytes:   AtomicUsize::new(0),
            current_used_memory: AtomicUsize::new(0),
            min_used_memory:     AtomicUsize::new(0),
            max_used_memory:     AtomicUsize::new(0),
        }
    }

    /// Snapshots the current metrics and restarts the (min, max) memory usage tracking
    pub fn save_point(&self) -> AllocatorSavePoint {
        let metrics = self.current_metrics();
        self.min_used_memory.store(metrics.current_used_memory, Relaxed);
        self.max_used_memory.store(metrics.current_used_memory, Relaxed);
        AllocatorSavePoint { metrics }
    }

    /// Returns what happened since `save_point` was taken: counters are deltas, while
    /// `current_used_memory`, `min_used_memory` & `max_used_memory` are absolute figures
    pub fn delta_statistics(&self, save_point: &AllocatorSavePoint) -> AllocatorMetrics {
        let now = self.current_metrics();
        let before = &save_point.metrics;
        AllocatorMetrics {
            allocations_count:   now.allocations_count.wrapping_sub(before.allocations_count),
            deallocations_count: now.deallocations_count.wrapping_sub(before.deallocations_count),
            reallocations_count: now.reallocations_count.wrapping_sub(before.reallocations_count),
            allocated_bytes:     now.allocated_bytes.wrapping_sub(before.allocated_bytes),
            deallocated_bytes:   now.deallocated_bytes.wrapping_sub(before.deallocated_bytes),
            current_used_memory: now.current_used_memory,
            min_used_memory:     now.min_used_memory,
            max_used_memory:     now.max_used_memory,
        }
    }

    /// Absolute figures, as seen since the program started
    pub fn current_metrics(&self) -> AllocatorMetrics {
        AllocatorMetrics {
            allocations_count:   self.allocations_count.load(Relaxed),
            deallocations_count: self.deallocations_count.load(Relaxed),
            reallocations_count: self.reallocations_count.load(Relaxed),
            allocated_bytes:     self.allocated_bytes.load(Relaxed),
            deallocated_bytes:   self.deallocated_bytes.load(Relaxed),
            current_used_memory: self.current_used_memory.load(Relaxed),
            min_used_memory:     self.min_used_memory.load(Relaxed),
            max_used_memory:     self.max_used_memory.load(Relaxed),
        }
    }

    fn account_growth(&self, size: usize) {
        self.allocated_bytes.fetch_add(size, Relaxed);
        let current = self.current_used_memory.fetch_add(size, Relaxed).wrapping_add(size);
        self.max_used_memory.fetch_max(current, Relaxed);
    }

    fn account_shrinkage(&self, size: usize) {
        self.deallocated_bytes.fetch_add(size, Relaxed);
        let current = self.current_used_memory.fetch_sub(size, Relaxed).wrapping_sub(size);
        self.min_used_memory.fetch_min(current, Relaxed);
    }
}

impl Default for MetricsAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for MetricsAllocator {

    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.account_growth(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.allocations_count.fetch_add(1, Relaxed);
            self.account_growth(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        self.deallocations_count.fetch_add(1, Relaxed);
        self.account_shrinkage(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.reallocations_count.fetch_add(1, Relaxed);
            let old_size = layout.size();
            if new_size > old_size {
                self.account_growth(new_size - old_size);
            } else {
                self.account_shrinkage(old_size - new_size);
            }
        }
        new_ptr
    }
}

/// Returned by [MetricsAllocator::save_point()] and consumed by [MetricsAllocator::delta_statistics()]
#[derive(Debug, Clone, Copy)]
pub struct AllocatorSavePoint {
    pub metrics: AllocatorMetrics,
}

/// Allocator counters & memory usage figures, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocatorMetrics {
    pub allocations_count:   usize,
    pub deallocations_count: usize,
    pub reallocations_count: usize,
    pub allocated_bytes:     usize,
    pub deallocated_bytes:   usize,
    pub current_used_memory: usize,
    pub min_used_memory:     usize,
    pub max_used_memory:     usize,
}

impl Display for AllocatorMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} allocations ({}), {} deallocations ({}), {} reallocations; in use: {} (min: {}, max: {})",
               self.allocations_count,   bytes_measurement(self.allocated_bytes as f64),
               self.deallocations_count, bytes_measurement(self.deallocated_bytes as f64),
               self.reallocations_count,
               bytes_measurement(self.current_used_memory as f64),
               bytes_measurement(self.min_used_memory as f64),
               bytes_measurement(self.max_used_memory as f64))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ALLOC;
    use serial_test::serial;

    /// a private allocator instance, fed by hand, so no other thread may disturb the figures
    #[test]
    fn standalone_accounting() {
        let allocator = MetricsAllocator::new();
        let save_point = allocator.save_point();
        let layout = Layout::from_size_align(1024, 8).unwrap();
        unsafe {
            let ptr = allocator.alloc(layout);
            assert!(!ptr.is_null());
            let ptr = allocator.realloc(ptr, layout, 4096);
            assert!(!ptr.is_null());
            allocator.dealloc(ptr, Layout::from_size_align(4096, 8).unwrap());
        }
        let metrics = allocator.delta_statistics(&save_point);
        assert_eq!(metrics.allocations_count,   1);
        assert_eq!(metrics.reallocations_count, 1);
        assert_eq!(metrics.deallocations_count, 1);
        assert_eq!(metrics.allocated_bytes,     4096);
        assert_eq!(metrics.deallocated_bytes,   4096);
        assert_eq!(metrics.current_used_memory, 0);
        assert_eq!(metrics.max_used_memory,     4096);
        assert_eq!(metrics.min_used_memory,     0);
    }

    #[test]
    fn save_point_restarts_peak_tracking() {
        let allocator = MetricsAllocator::new();
        let layout = Layout::from_size_align(2048, 8).unwrap();
        unsafe {
            let ptr = allocator.alloc(layout);
            allocator.dealloc(ptr, layout);
        }
        let save_point = allocator.save_point();
        let metrics = allocator.delta_statistics(&save_point);
        assert_eq!(metrics.max_used_memory, 0, "the peak from before the save point should have been forgotten");
        assert_eq!(metrics.allocated_bytes, 0);
    }

    #[cfg_attr(not(feature = "no_allocator_metrics"), test)]
    #[serial]
    fn global_allocator_sees_vec_allocations() {
        let save_point = ALLOC.save_point();
        let vec = Vec::<u64>::with_capacity(4096);
        let metrics = ALLOC.delta_statistics(&save_point);
        assert!(metrics.allocated_bytes >= 4096 * std::mem::size_of::<u64>(), "allocations were not seen: {metrics}");
        assert!(metrics.max_used_memory >= 4096 * std::mem::size_of::<u64>(), "peak memory usage doesn't account for the Vec: {metrics}");
        drop(vec);
    }
}
