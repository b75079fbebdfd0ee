use super::mock::{is_sorted, MockItem};
use insertion_queue::Queue;
use quickcheck::{Arbitrary, Gen};
use std::vec::Vec;

const MAX_DECISIONS: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Push(i8),
    PopFront,
    PopBack,
    /// Overwrite the item at some index, then fix the queue.
    Overwrite(usize, i8),
}

#[derive(Clone, Debug)]
pub struct Decisions(pub Vec<Decision>);

impl Arbitrary for Decisions {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut ds = vec![];
        let mut size: usize = 0;
        let n: usize = usize::arbitrary(g) % MAX_DECISIONS;
        for _ in 0..n {
            if size == 0 {
                ds.push(Decision::Push(i8::arbitrary(g)));
                size += 1;
                continue;
            }
            match u8::arbitrary(g) % 6 {
                0 => {
                    ds.push(Decision::PopFront);
                    size -= 1;
                }
                1 => {
                    ds.push(Decision::PopBack);
                    size -= 1;
                }
                2 => ds.push(Decision::Overwrite(
                    usize::arbitrary(g) % size,
                    i8::arbitrary(g),
                )),
                _ => {
                    ds.push(Decision::Push(i8::arbitrary(g)));
                    size += 1;
                }
            }
        }
        Decisions(ds)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Only drop decisions from the end, so every prefix stays valid.
        let vec = self.0.clone();
        let len = vec.len();
        if len == 0 {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (1..=10)
                .map(move |pow| len - len / (1 << pow) - 1)
                .chain(std::iter::once(len - 1))
                .map(move |keep| Decisions(vec[..keep].to_vec())),
        )
    }
}

/// Replay `ds` against a queue and against a plain vector kept sorted by a stable sort, checking
/// after every step that they agree and that the queue is sorted.
pub fn qc_matches_model_common(ds: Decisions) -> bool {
    let mut q = Queue::new();
    let mut model: Vec<MockItem> = Vec::new();

    for (id, &d) in ds.0.iter().enumerate() {
        match d {
            Decision::Push(v) => {
                let item = MockItem::new(v.into(), id);
                let at = model.partition_point(|m| m.value <= item.value);
                model.insert(at, item.clone());
                q.push(item);
            }
            Decision::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                if q.pop_front() != expected {
                    println!("pop_front mismatch at decision {id}");
                    return false;
                }
            }
            Decision::PopBack => {
                if q.pop_back() != model.pop() {
                    println!("pop_back mismatch at decision {id}");
                    return false;
                }
            }
            Decision::Overwrite(i, v) => {
                let item = MockItem::new(v.into(), id);
                model[i] = item.clone();
                model.sort_by_key(|m| m.value);
                q[i] = item;
                q.fix();
            }
        }

        if !is_sorted(&q) || q.len() != model.len() {
            println!("queue diverged at decision {id}: {q:?}");
            return false;
        }
        if (0..q.len()).any(|i| q[i] != model[i]) {
            println!("queue {q:?} differs from model {model:?}");
            return false;
        }
    }
    true
}
