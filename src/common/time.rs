use std::time::Duration;

#[cfg_attr(feature = "quanta", path = "time/clock_quanta.rs")]
#[cfg_attr(not(feature = "quanta"), path = "time/clock_compat.rs")]
pub(crate) mod clock;

pub use clock::Clock;

/// Measures how long `f` takes on `clock`, returning its output with the elapsed
/// time.
#[inline]
pub(crate) fn timed<T>(clock: &Clock, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = clock.now();
    let out = f();
    let end = clock.now();
    (out, end.saturating_duration_since(start))
}

#[cfg(test)]
mod tests {
    use super::{timed, Clock};

    use std::time::Duration;

    #[test]
    fn timed_reports_only_the_time_spent_in_f() {
        let (clock, mock) = Clock::mock();

        // Time passing between passes is not charged to either of them.
        let (out, first) = timed(&clock, || {
            mock.increment(Duration::from_millis(250));
            "insert"
        });
        mock.increment(Duration::from_secs(5));
        let (_, second) = timed(&clock, || mock.increment(Duration::from_millis(75)));
        let (_, third) = timed(&clock, || ());

        assert_eq!(out, "insert");
        assert_eq!(first, Duration::from_millis(250));
        assert_eq!(second, Duration::from_millis(75));
        assert_eq!(third, Duration::ZERO);
    }
}
