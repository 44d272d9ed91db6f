//! Global allocator (wrapper around the System's default allocator) capable of gathering allocation/de-allocation/re-allocation metrics
//! and (min, max) memory usage between two points in time.
//!
//! Activate it with:
//! ```no_compile
//!     use sequence_bench::metrics_allocator::MetricsAllocator;
//!     #[global_allocator]
//!     static ALLOC: MetricsAllocator = MetricsAllocator::new();
//! ```
//!
//! Usage example:
//! ```rust
//!     use sequence_bench::ALLOC;
//!     let save_point = ALLOC.save_point();
//!     let _vec = Vec::<u32>::with_capacity(1024);
//!     let metrics = ALLOC.delta_statistics(&save_point);
//!     println!("Allocator Metrics for the Vec allocation: {}", metrics);
//! ```

mod metrics_allocator;
pub use metrics_allocator::*;
