use super::Movie;
use crate::common::{
    constants::{RATING_COLUMN, TITLE_COLUMN},
    error::{Error, Result},
};

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Loads up to `n` movie titles from the CSV file at `path`.
///
/// The first line is a header and is skipped, as are blank lines and rows with
/// an empty title. Titles are trimmed.
pub fn load_titles(path: impl AsRef<Path>, n: usize) -> Result<Vec<String>> {
    load_rows(path.as_ref(), n, |fields| {
        let title = field(fields, TITLE_COLUMN).trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Loads up to `n` movies (title and rating) from the CSV file at `path`.
///
/// Rows are skipped on the same rules as [`load_titles`]. A rating that is
/// missing or does not parse as a number becomes `0.0`.
pub fn load_movies(path: impl AsRef<Path>, n: usize) -> Result<Vec<Movie>> {
    load_rows(path.as_ref(), n, |fields| {
        let title = field(fields, TITLE_COLUMN).trim();
        if title.is_empty() {
            return None;
        }
        let rating = parse_rating(field(fields, RATING_COLUMN));
        Some(Movie::new(title, rating))
    })
}

fn load_rows<T>(
    path: &Path,
    n: usize,
    mut parse_row: impl FnMut(&[String]) -> Option<T>,
) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut lines = BufReader::new(file).split(b'\n');
    let mut rows = Vec::new();

    // Header.
    if let Some(header) = lines.next() {
        header.map_err(|e| Error::io(path, e))?;
    }

    for line in lines {
        if rows.len() >= n {
            break;
        }
        let line = line.map_err(|e| Error::io(path, e))?;
        let line = decode_line(&line);
        if line.trim().is_empty() {
            continue;
        }
        if let Some(row) = parse_row(&split_csv_line(&line)) {
            rows.push(row);
        }
    }

    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Decodes one raw line, dropping a trailing `\r`. Invalid UTF-8 sequences
/// become U+FFFD so that one badly encoded row does not fail the load.
fn decode_line(line: &[u8]) -> Cow<'_, str> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or_default()
}

fn parse_rating(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

/// Splits one CSV line into its fields, honoring double-quoted fields.
pub(crate) fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
