//! [SequenceContainer] for the doubly-linked-node-backed variant.\
//! Positional access walks the nodes from whichever end is nearer, so `get`, `insert_at` & `remove_at`
//! cost O(min(index, len-index)) -- except at the ends, which are O(1).

use super::SequenceContainer;
use std::collections::LinkedList;


impl SequenceContainer for LinkedList<u32> {

    const VARIANT_NAME: &'static str = "LinkedList";

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn append(&mut self, value: u32) {
        self.push_back(value);
    }

    fn get(&self, index: usize) -> Option<u32> {
        let len = LinkedList::len(self);
        if index >= len {
            None
        } else if index < len / 2 {
            self.iter().nth(index).copied()
        } else {
            self.iter().rev().nth(len - 1 - index).copied()
        }
    }

    fn insert_at(&mut self, index: usize, value: u32) {
        let len = LinkedList::len(self);
        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else {
            // `split_off()` panics when `index > len`
            let mut tail = self.split_off(index);
            self.push_back(value);
            LinkedList::append(self, &mut tail);
        }
    }

    fn remove_at(&mut self, index: usize) -> Option<u32> {
        let len = LinkedList::len(self);
        if index >= len {
            None
        } else if index == 0 {
            self.pop_front()
        } else if index == len - 1 {
            self.pop_back()
        } else {
            let mut tail = self.split_off(index);
            let removed = tail.pop_front();
            LinkedList::append(self, &mut tail);
            removed
        }
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}
