use super::table::Chain;

use std::{iter::FusedIterator, slice};

/// An iterator over the keys of a [`ChainedHashTable`][table-struct].
///
/// Keys are yielded bucket by bucket; the order carries no meaning and changes
/// whenever the table is rehashed.
///
/// [table-struct]: ./struct.ChainedHashTable.html
pub struct Iter<'i, K> {
    buckets: slice::Iter<'i, Chain<K>>,
    chain: slice::Iter<'i, K>,
    remaining: usize,
}

impl<'i, K> Iter<'i, K> {
    pub(crate) fn new(buckets: &'i [Chain<K>], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            chain: <&[K]>::default().iter(),
            remaining: len,
        }
    }
}

impl<'i, K> Iterator for Iter<'i, K> {
    type Item = &'i K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.chain.next() {
                self.remaining -= 1;
                return Some(key);
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}
