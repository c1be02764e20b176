use std::{
    hash::{Hash, Hasher},
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

#[derive(Debug, Default)]
pub(crate) struct Counters {
    created: AtomicU32,
    dropped: AtomicU32,
}

impl Counters {
    pub(crate) fn created(&self) -> u32 {
        self.created.load(Ordering::Acquire)
    }

    pub(crate) fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Acquire)
    }

    pub(crate) fn incl_created(&self) {
        self.created.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn incl_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::AcqRel);
    }
}

/// A key that records its construction and destruction, so tests can check
/// that rehashing moves keys instead of cloning or leaking them.
#[derive(Debug)]
pub(crate) struct CountedKey {
    id: u32,
    counters: Arc<Counters>,
}

impl CountedKey {
    pub(crate) fn new(id: u32, counters: &Arc<Counters>) -> Self {
        counters.incl_created();
        Self {
            id,
            counters: Arc::clone(counters),
        }
    }
}

impl PartialEq for CountedKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CountedKey {}

impl Hash for CountedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Drop for CountedKey {
    fn drop(&mut self) {
        self.counters.incl_dropped();
    }
}

/// A key whose hash ignores its value, so every instance lands in one bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CollidingKey(pub(crate) u32);

impl Hash for CollidingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        0u8.hash(state);
    }
}

/// `n` distinct keys of the form `"<letter>-<index>"`.
pub(crate) fn distinct_keys(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("{}-{i}", (b'A' + (i % 26) as u8) as char))
        .collect()
}
