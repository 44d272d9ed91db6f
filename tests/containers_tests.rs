//! Model checks both container variants against a plain `Vec`, driven by random operation sequences

use sequence_bench::SequenceContainer;
use std::collections::LinkedList;
use rand::{rngs::StdRng, Rng, SeedableRng};


/// Applies the same `operations_count` random operations to `container` and to a `Vec` model,
/// asserting they agree after each one
fn model_check<C: SequenceContainer + Default>(seed: u64, operations_count: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut container = C::default();
    let mut model = Vec::<u32>::new();
    for step in 0..operations_count {
        let value = rng.gen::<u32>();
        match rng.gen_range(0..6) {
            0 => {
                container.append(value);
                model.push(value);
            },
            1 => {
                let index = rng.gen_range(0..=model.len());
                container.insert_at(index, value);
                model.insert(index, value);
            },
            2 => {
                // may be out of bounds, on purpose
                let index = rng.gen_range(0..=model.len());
                let expected = (index < model.len()).then(|| model.remove(index));
                assert_eq!(container.remove_at(index), expected, "{}: remove_at({index}) mismatch at step #{step}", C::VARIANT_NAME);
            },
            3 => {
                let index = rng.gen_range(0..=model.len());
                assert_eq!(container.get(index), model.as_slice().get(index).copied(), "{}: get({index}) mismatch at step #{step}", C::VARIANT_NAME);
            },
            4 if rng.gen_ratio(1, 50) => {
                container.clear();
                model.clear();
            },
            _ => {
                let middle = model.len() / 2;
                container.insert_at(middle, value);
                model.insert(middle, value);
            },
        }
        assert_eq!(container.len(), model.len(), "{}: length mismatch at step #{step}", C::VARIANT_NAME);
        assert_eq!(container.is_empty(), model.is_empty());
    }
    let contents: Vec<u32> = (0..container.len()).filter_map(|i| container.get(i)).collect();
    assert_eq!(contents, model, "{}: final contents differ from the model", C::VARIANT_NAME);
}

#[test]
fn contiguous_variant_matches_the_model() {
    for seed in 0..8 {
        model_check::<Vec<u32>>(seed, 2000);
    }
}

#[test]
fn linked_variant_matches_the_model() {
    for seed in 0..8 {
        model_check::<LinkedList<u32>>(seed, 2000);
    }
}

#[test]
fn removing_from_an_empty_container_yields_nothing() {
    let mut vec = Vec::<u32>::new();
    let mut list = LinkedList::<u32>::new();
    assert_eq!(SequenceContainer::remove_at(&mut vec, 0), None);
    assert_eq!(SequenceContainer::remove_at(&mut list, 0), None);
    assert_eq!(SequenceContainer::get(&vec, 0), None);
    assert_eq!(SequenceContainer::get(&list, 0), None);
}
