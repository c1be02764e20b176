#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! A separate-chaining hash set with prime-sized growth, and a small benchmark
//! driver for it.
//!
//! [`ChainedHashTable`] stores unique keys of any `Hash + Eq` type in an array of
//! buckets whose length is always prime. Keys that collide share a bucket's
//! chain. When the number of keys exceeds the number of buckets, the table
//! rehashes into about twice as many buckets, so the load factor never stays
//! above 1.0 after an insert.
//!
//! The [`bench`] module times insert, search and delete passes over the table for
//! sorted, shuffled and reversed inputs loaded by the [`workload`] module, and
//! appends the results to a CSV log.
//!
//! # Example
//!
//! ```rust
//! use chainset::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new();
//! for i in 0..102 {
//!     table.insert(format!("key-{i}"));
//! }
//!
//! // 102 keys in 101 buckets triggered a rehash to the next prime >= 202.
//! assert_eq!(table.capacity(), 211);
//! assert!(table.contains("key-0"));
//! ```

pub mod bench;
pub(crate) mod chained;
pub(crate) mod common;
pub(crate) mod stats;
pub mod workload;

pub use chained::{ChainedHashTable, Iter, TableBuilder};
pub use common::{
    error::{Error, Result},
    string_hash::{hash, Poly37BuildHasher, Poly37Hasher},
    time::Clock,
};
pub use stats::ChainStats;
