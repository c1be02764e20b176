//! The polynomial string hash, and a `BuildHasher` that applies the same
//! folding rule to arbitrary keys.

use super::constants::STRING_HASH_BASE;

use std::hash::{BuildHasher, Hasher};

/// Hashes `key` into a bucket index of a table with `table_size` buckets.
///
/// The hash is the polynomial `h = 37 * h + unit` over the UTF-16 code units of
/// `key`, computed in 32-bit signed arithmetic that wraps on overflow. The
/// result is reduced modulo `table_size`, and a negative remainder is shifted
/// up by `table_size`, so the returned index is always in `0..table_size`.
///
/// The function does not depend on any table instance, which makes it usable
/// for studying how a set of keys spreads over a given number of buckets.
///
/// # Panics
///
/// Panics if `table_size` is zero.
///
/// # Examples
///
/// ```rust
/// use chainset::hash;
///
/// assert_eq!(hash("test", 101), 0);
/// assert!(hash("Halloween", 211) < 211);
/// ```
pub fn hash(key: &str, table_size: usize) -> usize {
    assert!(table_size > 0, "table_size must be greater than zero");

    let h = polynomial(key);
    // `rem_euclid` is the signed remainder plus `table_size` when negative.
    (i128::from(h).rem_euclid(table_size as i128)) as usize
}

fn polynomial(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_mul(STRING_HASH_BASE)
            .wrapping_add(i32::from(unit))
    })
}

/// A [`Hasher`] that folds every written byte with the base-37 polynomial
/// rule, in wrapping 32-bit arithmetic.
///
/// It has no seed, so a table built with [`Poly37BuildHasher`] lays its keys out
/// identically on every run. It offers no protection against HashDoS.
///
/// Note that `str`'s `Hash` implementation writes a trailing `0xff` byte, so
/// the bucket a string lands in differs from what [`hash`] returns.
#[derive(Clone, Debug, Default)]
pub struct Poly37Hasher {
    state: i32,
}

impl Hasher for Poly37Hasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self
                .state
                .wrapping_mul(STRING_HASH_BASE)
                .wrapping_add(i32::from(byte));
        }
    }

    fn finish(&self) -> u64 {
        // Zero-extend so that the table's unsigned modulo never sees a sign.
        u64::from(self.state as u32)
    }
}

/// Builds [`Poly37Hasher`]s. Pass it to
/// [`TableBuilder::build_with_hasher`][crate::TableBuilder::build_with_hasher]
/// for a deterministic bucket layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Poly37BuildHasher;

impl BuildHasher for Poly37BuildHasher {
    type Hasher = Poly37Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Poly37Hasher::default()
    }
}
