//! Fixture stash: a directory of stored form submissions

use std::path::PathBuf;

use crate::error::{FormError, Result};
use crate::rules::FormReport;
use crate::submission::check_fixture;

/// Directory name the submission pipeline writes fixtures to
pub const DEFAULT_STASH_DIR: &str = "File_Stash";

/// Result of checking one fixture file
#[derive(Debug)]
pub struct FixtureOutcome {
    pub path: PathBuf,
    pub result: Result<FormReport>,
}

impl FixtureOutcome {
    /// Parsed and every rule passed
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(report) if report.is_valid())
    }
}

#[derive(Debug, Clone)]
pub struct FixtureStash {
    root: PathBuf,
}

impl FixtureStash {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Stash under the current directory (`./File_Stash`)
    pub fn in_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| FormError::Io {
            path: PathBuf::from("."),
            source: e,
        })?;
        Ok(Self::new(cwd.join(DEFAULT_STASH_DIR)))
    }

    /// Path of a fixture inside the stash
    pub fn fixture_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// All `*.json` files in the stash, sorted by path
    pub fn fixtures(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| FormError::Io {
            path: self.root.clone(),
            source: e,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FormError::Io {
                path: self.root.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Check every fixture one after another. Per-file failures are kept in
    /// the outcome; only an unreadable stash directory is an error.
    pub fn check_all(&self) -> Result<Vec<FixtureOutcome>> {
        let outcomes: Vec<FixtureOutcome> = self
            .fixtures()?
            .into_iter()
            .map(|path| {
                let result = check_fixture(&path);
                FixtureOutcome { path, result }
            })
            .collect();

        log::debug!(
            "Checked {} fixtures in {} ({} passed)",
            outcomes.len(),
            self.root.display(),
            outcomes.iter().filter(|o| o.passed()).count()
        );
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"name":"b","description":"b"}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"name":"a","description":"a"}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let stash = FixtureStash::new(dir.path());
        let names: Vec<String> = stash
            .fixtures()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_check_all_keeps_per_file_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("good.json"),
            r#"{"name":"ok","description":"fine"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        std::fs::write(
            dir.path().join("symbols.json"),
            r####"{"name":"###","description":"ok"}"####,
        )
        .unwrap();

        let outcomes = FixtureStash::new(dir.path()).check_all().unwrap();
        assert_eq!(outcomes.len(), 3);

        // sorted: broken, good, symbols
        assert!(matches!(outcomes[0].result, Err(FormError::Parse { .. })));
        assert!(outcomes[1].passed());
        assert!(!outcomes[2].passed());
        assert!(outcomes[2].result.is_ok());
    }

    #[test]
    fn test_in_current_dir() {
        let stash = FixtureStash::in_current_dir().unwrap();
        let expected = std::env::current_dir()
            .unwrap()
            .join(DEFAULT_STASH_DIR)
            .join("test2.json");
        assert_eq!(stash.fixture_path("test2.json"), expected);
    }

    #[test]
    fn test_missing_stash_directory() {
        let dir = tempfile::tempdir().unwrap();
        let stash = FixtureStash::new(dir.path().join(DEFAULT_STASH_DIR));
        assert!(matches!(stash.fixtures(), Err(FormError::Io { .. })));
    }
}
