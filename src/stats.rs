//! Distribution statistics of a table's chains.

use std::fmt::{self, Debug};

/// A snapshot of how the keys of a [`ChainedHashTable`][table-struct] are spread
/// over its buckets, taken by
/// [`ChainedHashTable::chain_stats`][chain-stats-method].
///
/// With a well-distributed hash, most occupied buckets hold a single key and
/// `longest_chain` stays small. A `longest_chain` close to `len` means the keys
/// collide, and lookups degrade to a linear scan.
///
/// [table-struct]: ./struct.ChainedHashTable.html
/// [chain-stats-method]: ./struct.ChainedHashTable.html#method.chain_stats
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChainStats {
    bucket_count: usize,
    len: usize,
    occupied_buckets: usize,
    longest_chain: usize,
}

impl Debug for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainStats")
            .field("bucket_count", &self.bucket_count)
            .field("len", &self.len)
            .field("load_factor", &self.load_factor())
            .field("occupied_buckets", &self.occupied_buckets)
            .field("empty_buckets", &self.empty_buckets())
            .field("longest_chain", &self.longest_chain)
            .field("average_chain_len", &self.average_chain_len())
            .finish()
    }
}

impl ChainStats {
    pub(crate) fn new(bucket_count: usize, len: usize) -> Self {
        Self {
            bucket_count,
            len,
            ..Default::default()
        }
    }

    pub(crate) fn record_chain(&mut self, chain_len: usize) {
        if chain_len > 0 {
            self.occupied_buckets += 1;
            self.longest_chain = self.longest_chain.max(chain_len);
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn occupied_buckets(&self) -> usize {
        self.occupied_buckets
    }

    pub fn empty_buckets(&self) -> usize {
        self.bucket_count - self.occupied_buckets
    }

    pub fn longest_chain(&self) -> usize {
        self.longest_chain
    }

    pub fn load_factor(&self) -> f64 {
        if self.bucket_count == 0 {
            0.0
        } else {
            self.len as f64 / self.bucket_count as f64
        }
    }

    /// Returns the mean number of keys in the buckets that hold at least one.
    pub fn average_chain_len(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.len as f64 / self.occupied_buckets as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChainStats;
    use crate::ChainedHashTable;

    #[test]
    fn empty_table() {
        let table: ChainedHashTable<u32> = ChainedHashTable::new();
        let stats = table.chain_stats();

        assert_eq!(stats.bucket_count(), 101);
        assert!(stats.is_empty());
        assert_eq!(stats.occupied_buckets(), 0);
        assert_eq!(stats.empty_buckets(), 101);
        assert_eq!(stats.longest_chain(), 0);
        assert_eq!(stats.average_chain_len(), 0.0);
    }

    #[test]
    fn records_chains() {
        let mut stats = ChainStats::new(5, 6);
        for chain_len in [0, 3, 1, 0, 2] {
            stats.record_chain(chain_len);
        }

        assert_eq!(stats.occupied_buckets(), 3);
        assert_eq!(stats.empty_buckets(), 2);
        assert_eq!(stats.longest_chain(), 3);
        assert_eq!(stats.average_chain_len(), 2.0);
        assert!((stats.load_factor() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn populated_table() {
        let table: ChainedHashTable<_> = (0..150u32).collect();
        let stats = table.chain_stats();

        assert_eq!(stats.len(), 150);
        assert_eq!(stats.bucket_count(), table.capacity());
        assert!(stats.occupied_buckets() > 0);
        assert!(stats.longest_chain() >= 1);
        assert!(stats.load_factor() <= 1.0);
        assert!(format!("{stats:?}").starts_with("ChainStats {"));
    }
}
