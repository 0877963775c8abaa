use super::contact::Contact;
use super::hash::{CharSum, SlotHasher};
use std::fmt::{Debug, Display};
use std::num::NonZeroUsize;
use thiserror::Error;

pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("capacity {0} is too large to allocate")]
    CapacityTooLarge(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    /// copy of `value.name`, compared on lookup
    key: String,
    value: Contact,
}

impl Node {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Contact {
        &self.value
    }
}

/// Fixed-capacity contact table using separate chaining.
///
/// Each slot is either empty (`None`) or holds a chain of nodes in the
/// order they were first inserted. Every node in `slots[i]` hashes to `i`.
pub struct ContactTable<H = CharSum> {
    capacity: NonZeroUsize,
    slots: Vec<Option<Vec<Node>>>,
    hasher: H,
    len: usize,
}

impl ContactTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, CharSum)
    }
}

impl Default for ContactTable {
    fn default() -> Self {
        let mut slots = Vec::new();
        slots.resize_with(DEFAULT_CAPACITY.get(), || None);

        ContactTable::from_slots(DEFAULT_CAPACITY, slots, CharSum)
    }
}

impl<H: SlotHasher> ContactTable<H> {
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, TableError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity(capacity))?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity.get())
            .map_err(|_| TableError::CapacityTooLarge(capacity.get()))?;
        slots.resize_with(capacity.get(), || None);

        Ok(Self::from_slots(capacity, slots, hasher))
    }

    fn from_slots(capacity: NonZeroUsize, slots: Vec<Option<Vec<Node>>>, hasher: H) -> Self {
        ContactTable {
            capacity,
            slots,
            hasher,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of distinct keys stored
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn slot_of(&self, key: &str) -> usize {
        let index = self.hasher.slot(key, self.capacity);
        debug_assert!(index < self.capacity.get(), "hasher returned {index}");

        index
    }

    /// Inserts a new contact or updates the number of an existing one
    pub fn insert(&mut self, key: &str, value: &str) {
        let index = self.slot_of(key);

        let chain = self.slots[index].get_or_insert_with(Vec::new);

        if let Some(node) = chain.iter_mut().find(|node| node.key == key) {
            log::debug!("insert {key:?}: updated in slot {index}");

            node.value.set_number(value);
            return;
        }

        if chain.is_empty() {
            log::debug!("insert {key:?}: new chain at slot {index}");
        } else {
            log::debug!(
                "insert {key:?}: appended to slot {index} behind {} node(s)",
                chain.len()
            );
        }

        chain.push(Node {
            key: key.to_owned(),
            value: Contact::new(key, value),
        });
        self.len += 1;
    }

    pub fn search(&self, key: &str) -> Option<&Contact> {
        let index = self.slot_of(key);

        self.slots[index]
            .as_deref()?
            .iter()
            .find(|node| node.key == key)
            .map(Node::value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Number of nodes in the chain at `index`, 0 when empty or out of range
    pub fn chain_len(&self, index: usize) -> usize {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .map_or(0, Vec::len)
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_>> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                None => SlotView::Empty { index },
                Some(chain) => SlotView::Chain { index, nodes: chain },
            })
    }

    /// One description per slot, in index order
    pub fn render(&self) -> Vec<String> {
        self.slots().map(|slot| slot.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SlotView<'a> {
    Empty { index: usize },
    Chain { index: usize, nodes: &'a [Node] },
}

impl Display for SlotView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotView::Empty { index } => write!(f, "Index {index}: Empty"),
            SlotView::Chain { index, nodes } => {
                write!(f, "Index {index}:")?;

                for node in nodes.iter() {
                    write!(f, " - {}", node.value)?;
                }

                Ok(())
            }
        }
    }
}

impl<H> Debug for ContactTable<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut dbg = f.debug_map();

        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(chain) = slot {
                let entries: Vec<_> = chain.iter().map(|node| node.value.to_string()).collect();
                dbg.entry(&index, &entries);
            }
        }

        dbg.finish()
    }
}
