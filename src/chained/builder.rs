use super::ChainedHashTable;
use crate::common::constants::DEFAULT_TABLE_CAPACITY;

use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

/// Builds a [`ChainedHashTable`][table-struct] with an initial capacity and an
/// optional custom hasher.
///
/// [table-struct]: ./struct.ChainedHashTable.html
///
/// # Examples
///
/// ```rust
/// use chainset::{ChainedHashTable, Poly37BuildHasher, TableBuilder};
///
/// // Rounded up to the prime 1009.
/// let table: ChainedHashTable<String> = TableBuilder::new().initial_capacity(1000).build();
/// assert_eq!(table.capacity(), 1009);
///
/// // Falls back to 101 buckets, with a seedless hasher.
/// let mut table = ChainedHashTable::builder().build_with_hasher(Poly37BuildHasher);
/// table.insert("Suspiria");
/// assert_eq!(table.capacity(), 101);
/// ```
///
pub struct TableBuilder<C> {
    initial_capacity: Option<usize>,
    table_type: PhantomData<C>,
}

impl<K> Default for TableBuilder<ChainedHashTable<K, RandomState>>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self {
            initial_capacity: None,
            table_type: PhantomData,
        }
    }
}

impl<K> TableBuilder<ChainedHashTable<K, RandomState>>
where
    K: Hash + Eq,
{
    /// Construct a new `TableBuilder` that will be used to build a
    /// `ChainedHashTable` with the default number of buckets (101).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `ChainedHashTable<K>`.
    pub fn build(self) -> ChainedHashTable<K, RandomState> {
        let build_hasher = RandomState::default();
        self.build_with_hasher(build_hasher)
    }

    /// Builds a `ChainedHashTable<K, S>`, with the given `hasher`.
    pub fn build_with_hasher<S>(self, hasher: S) -> ChainedHashTable<K, S>
    where
        S: BuildHasher,
    {
        ChainedHashTable::with_capacity_and_hasher(self.capacity(), hasher)
    }
}

impl<C> TableBuilder<C> {
    /// Sets the initial number of buckets of the table. It is rounded up to a
    /// prime, and zero is treated as one.
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: Some(capacity),
            ..self
        }
    }

    fn capacity(&self) -> usize {
        self.initial_capacity.unwrap_or(DEFAULT_TABLE_CAPACITY)
    }
}
