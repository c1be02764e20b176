/// The number of buckets a table starts with when no initial capacity is given.
pub(crate) const DEFAULT_TABLE_CAPACITY: usize = 101;

/// Multiplier of the polynomial string hash.
pub(crate) const STRING_HASH_BASE: i32 = 37;

// Column indexes in the horror movie dataset.
pub(crate) const TITLE_COLUMN: usize = 2;
pub(crate) const RATING_COLUMN: usize = 10;

pub(crate) const CSV_LOG_HEADER: &str = "N,case,insert_seconds,search_seconds,delete_seconds";

pub(crate) const DEFAULT_LOG_FILE: &str = "analysis.txt";
