//! [SequenceContainer] for the contiguous-array-backed variant

use super::SequenceContainer;


impl SequenceContainer for Vec<u32> {

    const VARIANT_NAME: &'static str = "Vec";

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, value: u32) {
        self.push(value);
    }

    fn get(&self, index: usize) -> Option<u32> {
        self.as_slice().get(index).copied()
    }

    fn insert_at(&mut self, index: usize, value: u32) {
        self.insert(index, value);
    }

    fn remove_at(&mut self, index: usize) -> Option<u32> {
        (index < Vec::len(self)).then(|| self.remove(index))
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
