//! The capability set the benchmark battery needs from a sequence container, plus its
//! implementations for the two variants being compared:
//!   - [contiguous]: `Vec<u32>`, backed by a contiguous array;
//!   - [linked]: `LinkedList<u32>`, backed by doubly-linked nodes.
//!
//! Any other type implementing [SequenceContainer] may be fed to [crate::runners::battery::run_all()].

pub mod contiguous;
pub mod linked;


/// A sequence of `u32`s addressable by position.
pub trait SequenceContainer {

    /// name for presentation purposes -- progress lines, report columns
    const VARIANT_NAME: &'static str;

    /// removes all elements
    fn clear(&mut self);

    /// adds `value` after the last element
    fn append(&mut self, value: u32);

    /// the element at `index`, if there is one
    fn get(&self, index: usize) -> Option<u32>;

    /// places `value` at `index`, shifting the element there (and all after it) one position towards the end.
    ///
    /// # Panics
    /// if `index > len()`
    fn insert_at(&mut self, index: usize, value: u32);

    /// takes out the element at `index`, shifting all after it one position towards the front
    /// -- `None` if `index` is out of bounds
    fn remove_at(&mut self, index: usize) -> Option<u32>;

    /// number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
