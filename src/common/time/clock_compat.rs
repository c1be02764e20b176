//! A `Clock` built on `std::time::Instant`, used when the `quanta` feature is
//! disabled.

pub(crate) type Instant = std::time::Instant;

#[cfg(test)]
use {parking_lot::RwLock, std::sync::Arc, std::time::Duration};

/// The source of time for benchmark passes.
#[derive(Clone, Default)]
pub struct Clock {
    #[cfg(test)]
    mock: Option<Arc<Mock>>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(not(test))]
    pub(crate) fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
impl Clock {
    /// Returns a clock that stands still until the returned handle moves it.
    pub(crate) fn mock() -> (Clock, Arc<Mock>) {
        let mock = Arc::new(Mock::new());
        let clock = Clock {
            mock: Some(Arc::clone(&mock)),
        };
        (clock, mock)
    }

    pub(crate) fn now(&self) -> Instant {
        self.mock.as_ref().map_or_else(Instant::now, |mock| mock.now())
    }
}

/// A time source that only advances through [`Mock::increment`].
#[cfg(test)]
pub(crate) struct Mock {
    origin: Instant,
    elapsed: RwLock<Duration>,
}

#[cfg(test)]
impl Mock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: RwLock::new(Duration::ZERO),
        }
    }

    fn now(&self) -> Instant {
        self.origin + *self.elapsed.read()
    }

    pub(crate) fn increment(&self, amount: Duration) {
        *self.elapsed.write() += amount;
    }
}
