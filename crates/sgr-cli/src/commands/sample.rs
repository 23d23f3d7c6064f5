//! `sgr sample` - write the bundled sample dataset.

use crate::error::{CliError, Result};
use crate::output;
use std::fs;
use std::path::Path;
use sugerir::dataset::SAMPLE_RATINGS;

pub(crate) fn run(path: &Path, force: bool, quiet: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::FileExists(path.to_path_buf()));
    }
    fs::write(path, SAMPLE_RATINGS)?;
    if !quiet {
        output::info(&format!("wrote sample dataset: {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_sample() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sample.csv");
        run(&path, false, true).expect("writes");
        let contents = fs::read_to_string(&path).expect("read back");
        assert!(contents.starts_with("userId,itemId,rating"));
        assert_eq!(contents.lines().count(), 25);
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sample.csv");
        fs::write(&path, "precious").expect("seed");
        let err = run(&path, false, true).unwrap_err();
        assert!(matches!(err, CliError::FileExists(_)));
        assert_eq!(fs::read_to_string(&path).expect("intact"), "precious");
    }

    #[test]
    fn test_force_overwrites() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sample.csv");
        fs::write(&path, "old").expect("seed");
        run(&path, true, true).expect("overwrites");
        assert!(fs::read_to_string(&path)
            .expect("read back")
            .starts_with("userId"));
    }
}
