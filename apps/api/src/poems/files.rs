//! Flat-file persistence for poems: the shared append-only log used by the
//! web app, and the one-file-per-name output of the batch CLI.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Timestamp format used in file headers, e.g. `2026-08-30 09:03:00.123456`.
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Header line prefixed to every persisted poem: `Poem for {name} - {ts}:`.
pub fn poem_header(name: &str, now: DateTime<Utc>) -> String {
    format!("Poem for {} - {}:", name, now.format(HEADER_TIMESTAMP_FORMAT))
}

/// Appends one poem entry to the shared log file, creating it on first use.
pub fn append_poem_log(path: &Path, name: &str, poem: &str, now: DateTime<Utc>) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open poem log {}", path.display()))?;

    writeln!(file, "{}\n{}\n", poem_header(name, now), poem)
        .with_context(|| format!("Failed to append to poem log {}", path.display()))?;

    Ok(())
}

/// The per-name output path for the batch flow: `<dir>/<lower(name)>_poem.txt`.
pub fn poem_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}_poem.txt", name.to_lowercase()))
}

/// Writes one poem to its own file under `dir`, creating the directory if
/// needed and overwriting any previous poem for the same name.
pub fn write_poem_file(dir: &Path, name: &str, poem: &str, now: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = poem_file_path(dir, name);
    fs::write(&path, format!("{}\n{}", poem_header(name, now), poem))
        .with_context(|| format!("Failed to write poem to {}", path.display()))?;

    Ok(path)
}

/// Reads a newline-delimited names file, skipping blank lines and trimming
/// surrounding whitespace.
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("File '{}' not found", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn header_starts_with_poem_for_name() {
        let header = poem_header("Ada", fixed_now());
        assert!(header.starts_with("Poem for Ada - "));
        assert!(header.ends_with(':'));
    }

    #[test]
    fn poem_file_name_is_lowercased() {
        let path = poem_file_path(Path::new("batch_poems"), "Ada Lovelace");
        assert_eq!(
            path,
            PathBuf::from("batch_poems/ada lovelace_poem.txt")
        );
    }

    #[test]
    fn write_poem_file_creates_dir_and_header() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("batch_poems");

        let path = write_poem_file(&dir, "Linus", "Roses are red", fixed_now()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert!(contents.starts_with("Poem for Linus - "));
        assert!(contents.ends_with("Roses are red"));
    }

    #[test]
    fn append_poem_log_accumulates_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("poems.txt");

        append_poem_log(&log, "Ada", "first", fixed_now()).unwrap();
        append_poem_log(&log, "Bob", "second", fixed_now()).unwrap();

        let contents = fs::read_to_string(&log).unwrap();
        assert!(contents.contains("Poem for Ada - "));
        assert!(contents.contains("Poem for Bob - "));
        let first = contents.find("first").unwrap();
        let second = contents.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn read_names_skips_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("names.txt");
        fs::write(&path, "Ada\n\n  Bob  \n\nCarol\n").unwrap();

        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["Ada", "Bob", "Carol"]);
    }

    #[test]
    fn read_names_missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_names(&tmp.path().join("nope.txt")).is_err());
    }
}
