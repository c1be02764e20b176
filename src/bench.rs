//! Timing insert, search and delete passes over a [`ChainedHashTable`] for the
//! three input orderings, and recording the results.

use crate::{
    common::{
        constants::{CSV_LOG_HEADER, DEFAULT_LOG_FILE},
        error::{Error, Result},
        time::{timed, Clock},
    },
    workload::{self, Movie},
    ChainedHashTable,
};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::{
    cmp::Ordering,
    fmt,
    fs::{self, OpenOptions},
    hash::Hash,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

/// The ordering the keys are fed to the table in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    AlreadySorted,
    Shuffled,
    Reversed,
}

impl Case {
    /// Every case, in the order they are run.
    pub const ALL: [Case; 3] = [Case::AlreadySorted, Case::Shuffled, Case::Reversed];

    pub fn name(self) -> &'static str {
        match self {
            Self::AlreadySorted => "already_sorted",
            Self::Shuffled => "shuffled",
            Self::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which kind of key to load from the dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum KeyKind {
    /// Movie titles as plain strings.
    #[default]
    Titles,
    /// `Movie` records, compared by title ignoring case.
    Movies,
}

/// The same keys in the three orderings of [`Case`].
#[derive(Clone, Debug)]
pub struct Workload<K> {
    sorted: Vec<K>,
    shuffled: Vec<K>,
    reversed: Vec<K>,
}

impl<K> Workload<K>
where
    K: Clone + Ord,
{
    /// Prepares the orderings of `keys`, sorting by `Ord`.
    ///
    /// The shuffle uses `seed` when given, so that runs can be repeated exactly.
    pub fn new(keys: Vec<K>, seed: Option<u64>) -> Self {
        Self::new_by(keys, seed, K::cmp)
    }
}

impl<K> Workload<K>
where
    K: Clone,
{
    /// Prepares the orderings of `keys`, sorting with `compare`.
    pub fn new_by(
        keys: Vec<K>,
        seed: Option<u64>,
        mut compare: impl FnMut(&K, &K) -> Ordering,
    ) -> Self {
        let mut shuffled = keys.clone();
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        shuffled.shuffle(&mut rng);

        let mut sorted = keys;
        sorted.sort_by(&mut compare);

        let mut reversed = sorted.clone();
        reversed.reverse();

        Self {
            sorted,
            shuffled,
            reversed,
        }
    }
}

impl<K> Workload<K> {
    pub fn keys(&self, case: Case) -> &[K] {
        match case {
            Case::AlreadySorted => &self.sorted,
            Case::Shuffled => &self.shuffled,
            Case::Reversed => &self.reversed,
        }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// The measured durations of one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingResult {
    case: Case,
    n: usize,
    insert: Duration,
    search: Duration,
    delete: Duration,
}

impl TimingResult {
    pub fn new(
        case: Case,
        n: usize,
        insert: Duration,
        search: Duration,
        delete: Duration,
    ) -> Self {
        Self {
            case,
            n,
            insert,
            search,
            delete,
        }
    }

    pub fn case(&self) -> Case {
        self.case
    }

    /// Returns the number of keys fed to the table.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn insert(&self) -> Duration {
        self.insert
    }

    pub fn search(&self) -> Duration {
        self.search
    }

    pub fn delete(&self) -> Duration {
        self.delete
    }

    /// Formats the result as a row of the CSV log.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.n,
            self.case,
            self.insert.as_secs_f64(),
            self.search.as_secs_f64(),
            self.delete.as_secs_f64()
        )
    }
}

/// Times the three passes of `case` over `keys` on a fresh default table: insert
/// every key, look every key up, then remove every key.
pub fn time_case<K>(case: Case, keys: &[K], clock: &Clock) -> TimingResult
where
    K: Hash + Eq,
{
    let mut table: ChainedHashTable<&K> = ChainedHashTable::new();

    let (_, insert) = timed(clock, || {
        for key in keys {
            table.insert(key);
        }
    });
    let (found, search) = timed(clock, || keys.iter().filter(|k| table.contains(*k)).count());
    let (_, delete) = timed(clock, || {
        for key in keys {
            table.remove(key);
        }
    });

    log::debug!(
        "{case}: {found} of {} keys found, capacity grew to {}",
        keys.len(),
        table.capacity()
    );
    if !table.is_empty() {
        log::warn!(
            "{case}: {} keys left in the table after the delete pass",
            table.len()
        );
    }

    TimingResult::new(case, keys.len(), insert, search, delete)
}

/// Times every [`Case`] of `workload`.
pub fn run<K>(workload: &Workload<K>, clock: &Clock) -> Vec<TimingResult>
where
    K: Hash + Eq,
{
    Case::ALL
        .iter()
        .map(|&case| time_case(case, workload.keys(case), clock))
        .collect()
}

/// Settings of a benchmark run.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    dataset: PathBuf,
    lines: usize,
    log_file: PathBuf,
    key_kind: KeyKind,
    seed: Option<u64>,
}

impl BenchConfig {
    /// Loads up to `lines` rows of `dataset`, as titles, logging to
    /// `analysis.txt`, with an unseeded shuffle.
    pub fn new(dataset: impl Into<PathBuf>, lines: usize) -> Self {
        Self {
            dataset: dataset.into(),
            lines,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            key_kind: KeyKind::default(),
            seed: None,
        }
    }

    pub fn log_file(self, log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            ..self
        }
    }

    pub fn key_kind(self, key_kind: KeyKind) -> Self {
        Self { key_kind, ..self }
    }

    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn log_path(&self) -> &Path {
        &self.log_file
    }
}

/// Loads the dataset described by `config` and times every case.
///
/// Fails if `config` asks for zero lines, if the dataset cannot be read, or if
/// it yields no rows.
pub fn execute(config: &BenchConfig, clock: &Clock) -> Result<Vec<TimingResult>> {
    if config.lines == 0 {
        return Err(Error::InvalidLineCount(config.lines));
    }

    let results = match config.key_kind {
        KeyKind::Titles => {
            let titles = workload::load_titles(&config.dataset, config.lines)?;
            ensure_loaded(config, titles.len())?;
            run(&Workload::new(titles, config.seed), clock)
        }
        KeyKind::Movies => {
            let movies = workload::load_movies(&config.dataset, config.lines)?;
            ensure_loaded(config, movies.len())?;
            run(&Workload::new_by(movies, config.seed, Movie::rank_cmp), clock)
        }
    };

    Ok(results)
}

fn ensure_loaded(config: &BenchConfig, loaded: usize) -> Result<()> {
    if loaded == 0 {
        return Err(Error::NoData {
            path: config.dataset.clone(),
        });
    }
    log::info!(
        "Loaded {loaded} of {} requested rows from {}",
        config.lines,
        config.dataset.display()
    );
    Ok(())
}

/// Writes the human-readable report of `result` to `out`.
pub fn write_result(out: &mut impl Write, result: &TimingResult) -> io::Result<()> {
    writeln!(out, "Case: {}", result.case)?;
    writeln!(out, "N = {}", result.n)?;
    writeln!(out, "  Insert:  {:.6} s", result.insert.as_secs_f64())?;
    writeln!(out, "  Search:  {:.6} s", result.search.as_secs_f64())?;
    writeln!(out, "  Delete:  {:.6} s", result.delete.as_secs_f64())?;
    writeln!(out)
}

/// Prints the human-readable report of `result` to standard output.
pub fn print_result(result: &TimingResult) -> io::Result<()> {
    write_result(&mut io::stdout().lock(), result)
}

/// Appends `results` to the CSV log at `path`, one row each.
///
/// The header row is written first when the file does not exist yet or is
/// empty.
pub fn append_csv(path: impl AsRef<Path>, results: &[TimingResult]) -> Result<()> {
    let path = path.as_ref();
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);

    let write = |out: &mut BufWriter<fs::File>| -> io::Result<()> {
        if needs_header {
            writeln!(out, "{CSV_LOG_HEADER}")?;
        }
        for result in results {
            writeln!(out, "{}", result.csv_row())?;
        }
        out.flush()
    };
    write(&mut out).map_err(|e| Error::io(path, e))
}
