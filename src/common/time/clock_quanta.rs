/// The source of time for benchmark passes. With the `quanta` feature this is
/// the TSC-backed `quanta::Clock`.
pub type Clock = quanta::Clock;
