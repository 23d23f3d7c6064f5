//! `sgr recommend` - run the pipeline for a target user.

use crate::error::{CliError, Result};
use crate::output;
use std::path::Path;
use sugerir::{dataset, Report, SugerirError, UserCf};

pub(crate) fn run(
    data: &Path,
    target: &str,
    k: usize,
    top_n: usize,
    json: bool,
    quiet: bool,
) -> Result<()> {
    // First run convenience: materialize the bundled sample dataset.
    if dataset::ensure_sample(data)? && !quiet {
        output::info(&format!("created sample dataset: {}", data.display()));
    }

    let (store, skipped) = dataset::load(data)?;
    if !quiet {
        for row in &skipped {
            output::warning(&format!("skipping malformed line {}: {}", row.line, row.text));
        }
    }

    let report = UserCf::new()
        .with_k(k)
        .with_top_n(top_n)
        .recommend(&store, target)
        .map_err(|e| match e {
            SugerirError::UnknownUser { user_id } => CliError::UnknownUser {
                user_id,
                available: store.users().collect::<Vec<_>>().join(", "),
            },
            other => other.into(),
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, data, k, top_n, quiet);
    Ok(())
}

fn print_report(report: &Report, data: &Path, k: usize, top_n: usize, quiet: bool) {
    if !quiet {
        output::section("User-Based CF Recommendations");
        output::kv("Target user", &report.target_user);
        output::kv("Neighbors K", k);
        output::kv("Top-N", top_n);
        output::kv("Data file", data.display());
    }

    output::section(&format!("Top neighbors for {}", report.target_user));
    if report.neighbors.is_empty() {
        println!("  (none)");
    }
    for (rank, n) in report.neighbors.iter().enumerate() {
        println!(
            "{}) {:<6}  similarity = {}",
            rank + 1,
            n.user_id,
            output::format_similarity(n.similarity)
        );
    }

    if !report.personalized && !quiet {
        output::info("no personalized recommendations (not enough overlap); showing popular items the user hasn't rated yet");
    }

    output::section(&format!("Top recommendations for {}", report.target_user));
    if report.recommendations.is_empty() {
        println!("  (none)");
    }
    for (rank, rec) in report.recommendations.iter().enumerate() {
        println!(
            "{}) {:<6}  predictedScore = {}",
            rank + 1,
            rec.item_id,
            output::format_score(rec.score)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_creates_sample_and_recommends() {
        let dir = tempdir().expect("tempdir");
        let data = dir.path().join("ratings.csv");
        run(&data, "U3", 3, 5, false, true).expect("pipeline runs");
        assert!(data.exists());
    }

    #[test]
    fn test_run_json_output() {
        let dir = tempdir().expect("tempdir");
        let data = dir.path().join("ratings.csv");
        run(&data, "U1", 3, 5, true, true).expect("json output runs");
    }

    #[test]
    fn test_unknown_user_lists_available() {
        let dir = tempdir().expect("tempdir");
        let data = dir.path().join("ratings.csv");
        let err = run(&data, "U99", 3, 5, false, true).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("U99"));
        assert!(msg.contains("U1"));
        assert!(msg.contains("U6"));
    }

    #[test]
    fn test_malformed_rows_do_not_abort() {
        let dir = tempdir().expect("tempdir");
        let data = dir.path().join("ratings.csv");
        std::fs::write(&data, "U1,I1,5\nbroken line\nU2,I1,4\nU2,I2,3\n").expect("write");
        run(&data, "U1", 3, 5, false, true).expect("skips malformed row");
    }
}
