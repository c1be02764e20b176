use super::{Iter, TableBuilder};
use crate::{
    common::{constants::DEFAULT_TABLE_CAPACITY, prime::next_prime},
    stats::ChainStats,
};

use smallvec::SmallVec;
use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    fmt,
    hash::{BuildHasher, Hash, Hasher},
};

/// A chain of keys that hashed to the same bucket. Load factor stays at or below
/// one, so most chains fit inline.
pub(crate) type Chain<K> = SmallVec<[K; 2]>;

/// A set of unique keys backed by an array of buckets with separate chaining.
///
/// Every key is hashed into one of `capacity()` buckets, and keys that collide
/// share the bucket's chain, which is searched linearly. The number of buckets is
/// always prime.
///
/// The table grows on its own: when an insert pushes the number of keys above
/// the number of buckets (a load factor above 1.0), the bucket array is rebuilt
/// at the next prime at or above twice its size, and every key is inserted
/// again. The rebuild finishes before `insert` returns, so insert is amortized
/// O(1) with an occasional O(n) call. Removing keys never shrinks the table.
///
/// # Examples
///
/// ```rust
/// use chainset::ChainedHashTable;
///
/// let mut titles = ChainedHashTable::new();
/// assert_eq!(titles.capacity(), 101);
///
/// assert!(titles.insert("Alien".to_string()));
/// assert!(titles.insert("Psycho".to_string()));
/// // Duplicates are ignored.
/// assert!(!titles.insert("Alien".to_string()));
/// assert_eq!(titles.len(), 2);
///
/// // Lookups accept any borrowed form of the key.
/// assert!(titles.contains("Alien"));
/// assert!(titles.remove("Psycho"));
/// assert!(!titles.remove("Psycho"));
/// assert_eq!(titles.len(), 1);
/// ```
///
/// # Hashing Algorithm
///
/// By default, `ChainedHashTable` uses the same SipHash 1-3 hasher as
/// `std::collections::HashMap`, with a random seed per table. Use
/// [`TableBuilder::build_with_hasher`] to supply another `BuildHasher`, such as
/// [`Poly37BuildHasher`][crate::Poly37BuildHasher] for a layout that is the same
/// on every run.
#[derive(Clone)]
pub struct ChainedHashTable<K, S = RandomState> {
    buckets: Vec<Chain<K>>,
    len: usize,
    build_hasher: S,
}

impl<K> ChainedHashTable<K, RandomState>
where
    K: Hash + Eq,
{
    /// Constructs an empty table with 101 buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_CAPACITY)
    }

    /// Constructs an empty table with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a prime. A `capacity` of zero is treated
    /// as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }

    /// Returns a [`TableBuilder`], which can build a `ChainedHashTable` with an
    /// initial capacity and a custom hasher.
    pub fn builder() -> TableBuilder<ChainedHashTable<K, RandomState>> {
        TableBuilder::default()
    }
}

impl<K, S> ChainedHashTable<K, S> {
    /// Constructs an empty table with at least `capacity` buckets, which uses
    /// `build_hasher` to hash keys.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        Self {
            buckets: empty_buckets(next_prime(capacity.max(1))),
            len: 0,
            build_hasher,
        }
    }

    /// Returns the number of keys in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets. Always prime.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len() / capacity()`. At most `1.0` after any insert.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn hasher(&self) -> &S {
        &self.build_hasher
    }

    /// Returns an iterator over the keys, in bucket order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.buckets, self.len)
    }

    /// Removes every key. The number of buckets is kept.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Takes a snapshot of how the keys are spread over the buckets.
    pub fn chain_stats(&self) -> ChainStats {
        let mut stats = ChainStats::new(self.capacity(), self.len);
        for chain in &self.buckets {
            stats.record_chain(chain.len());
        }
        stats
    }
}

impl<K, S> ChainedHashTable<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts `key` if no equal key is present.
    ///
    /// Returns `true` if the key was added. Inserting a key that is already
    /// present leaves the table untouched and returns `false`; the stored key is
    /// not replaced.
    ///
    /// If the insert raises the load factor above 1.0, the table is rehashed into
    /// about twice as many buckets before this method returns.
    pub fn insert(&mut self, key: K) -> bool {
        if !self.push_if_absent(key) {
            return false;
        }

        // Load factor above 1.0.
        if self.len > self.capacity() {
            self.rehash();
        }
        true
    }

    /// Returns `true` if the table holds a key equal to `key`.
    ///
    /// The key may be any borrowed form of the table's key type, but `Hash` and
    /// `Eq` on the borrowed form _must_ match those for the key type.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].iter().any(|k| k.borrow() == key)
    }

    /// Removes the key equal to `key`, returning whether one was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        match chain.iter().position(|k| k.borrow() == key) {
            Some(pos) => {
                // Chains are unordered.
                chain.swap_remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

//
// private
//
impl<K, S> ChainedHashTable<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn hash<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        // An unsigned hash needs no adjustment for negative remainders.
        (self.hash(key) % self.buckets.len() as u64) as usize
    }

    fn push_if_absent(&mut self, key: K) -> bool {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];
        if chain.iter().any(|k| *k == key) {
            return false;
        }
        chain.push(key);
        self.len += 1;
        true
    }

    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(doubled) => next_prime(doubled),
            None => panic!("capacity overflow"),
        };

        log::debug!(
            "Rehashing {} keys from {old_capacity} to {new_capacity} buckets",
            self.len
        );

        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.len = 0;
        for key in old_buckets.into_iter().flatten() {
            // The new array is at least twice as large, so this cannot grow again.
            self.push_if_absent(key);
        }
    }
}

fn empty_buckets<K>(capacity: usize) -> Vec<Chain<K>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::new);
    buckets
}

impl<K> Default for ChainedHashTable<K, RandomState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> fmt::Debug for ChainedHashTable<K, S>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> Extend<K> for ChainedHashTable<K, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K, S> FromIterator<K> for ChainedHashTable<K, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut table = Self::with_capacity_and_hasher(DEFAULT_TABLE_CAPACITY, S::default());
        table.extend(keys);
        table
    }
}

impl<'i, K, S> IntoIterator for &'i ChainedHashTable<K, S> {
    type Item = &'i K;
    type IntoIter = Iter<'i, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
