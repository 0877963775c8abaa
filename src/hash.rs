use std::num::NonZeroUsize;

pub trait SlotHasher {
    // Maps a key to a slot index in `0..capacity`
    fn slot(&self, key: &str, capacity: NonZeroUsize) -> usize;
}

/// Sums the code points of the key modulo the capacity.
///
/// Anagrams always land in the same slot ("Amy" and "May" collide),
/// and the empty key lands in slot 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSum;

impl SlotHasher for CharSum {
    fn slot(&self, key: &str, capacity: NonZeroUsize) -> usize {
        let capacity = capacity.get() as u64;

        // reducing as we go gives the same result as reducing the total
        let index = key
            .chars()
            .fold(0u64, |acc, c| (acc + u64::from(c as u32)) % capacity);

        log::trace!("hashed {key:?} to slot {index}");

        index as usize
    }
}

impl<F> SlotHasher for F
where
    F: Fn(&str, NonZeroUsize) -> usize,
{
    fn slot(&self, key: &str, capacity: NonZeroUsize) -> usize {
        self(key, capacity)
    }
}
