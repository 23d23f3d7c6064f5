//! Loading rating files and generating the bundled sample dataset.
//!
//! The on-disk format is the compatibility boundary: a delimited text
//! stream, optional `userId,itemId,rating` header, one rating per line.

use crate::error::Result;
use crate::store::{RatingStore, SkippedRow};
use std::fs;
use std::path::Path;

/// The reference dataset: users U1–U6, items I1–I8, ratings 1–5.
pub const SAMPLE_RATINGS: &str = "\
userId,itemId,rating
U1,I1,5
U1,I2,4
U1,I3,2
U1,I4,1
U2,I1,5
U2,I2,5
U2,I3,1
U2,I5,4
U3,I2,4
U3,I3,5
U3,I4,2
U3,I6,5
U4,I1,1
U4,I3,4
U4,I5,5
U4,I7,4
U5,I2,5
U5,I4,1
U5,I6,4
U5,I8,5
U6,I1,4
U6,I3,2
U6,I5,5
U6,I8,4
";

/// Read a rating file into raw `(line_number, text)` rows.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<(usize, String)>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect())
}

/// Load a rating file into a [`RatingStore`], returning the skipped-row
/// diagnostics alongside it.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Malformed rows are not
/// errors; they come back as [`SkippedRow`] values.
///
/// # Examples
///
/// ```no_run
/// use sugerir::dataset;
///
/// let (store, skipped) = dataset::load("ratings.csv").unwrap();
/// for row in &skipped {
///     eprintln!("skipped line {}: {}", row.line, row.text);
/// }
/// println!("{} ratings loaded", store.n_ratings());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<(RatingStore, Vec<SkippedRow>)> {
    let rows = read_rows(path)?;
    Ok(RatingStore::build(rows))
}

/// Write the bundled sample dataset to `path` if no file exists there.
///
/// Returns `true` if the file was created, `false` if it already existed.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn ensure_sample<P: AsRef<Path>>(path: P) -> Result<bool> {
    if path.as_ref().exists() {
        return Ok(false);
    }
    fs::write(path, SAMPLE_RATINGS)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_rows_numbers_from_one() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("rows.csv");
        fs::write(&path, "a,b,1\nc,d,2\n").expect("write");
        let rows = read_rows(&path).expect("read");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (1, "a,b,1".to_string()));
        assert_eq!(rows[1], (2, "c,d,2".to_string()));
    }

    #[test]
    fn test_load_sample_contents() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sample.csv");
        fs::write(&path, SAMPLE_RATINGS).expect("write");
        let (store, skipped) = load(&path).expect("load");
        assert!(skipped.is_empty());
        assert_eq!(store.n_users(), 6);
        assert_eq!(store.n_items(), 8);
        assert_eq!(store.n_ratings(), 24);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, crate::error::SugerirError::Io(_)));
    }

    #[test]
    fn test_ensure_sample_creates_once() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("ensure.csv");
        assert!(ensure_sample(&path).expect("create"));
        assert!(!ensure_sample(&path).expect("second call"));
        let (store, _) = load(&path).expect("load");
        assert_eq!(store.n_ratings(), 24);
    }
}
