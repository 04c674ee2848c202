//! Golden file lookup.
//!
//! Tests may run from anywhere inside a source checkout. The locator walks up
//! from the starting directory until it finds the configured source marker
//! and resolves golden files beneath that root.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{FixtureError, GoldenConfig};

#[derive(Debug, Clone, Default)]
pub struct GoldenFileLocator {
    config: GoldenConfig,
    start_dir: Option<PathBuf>,
}

impl GoldenFileLocator {
    pub fn new(config: GoldenConfig) -> Self {
        Self { config, start_dir: None }
    }

    /// Starts the upward search at `dir` instead of the working directory.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Nearest ancestor of the start directory (itself included) that
    /// contains the source marker.
    pub fn source_root(&self) -> Result<PathBuf, FixtureError> {
        let start = absolute_start(self.start_dir.as_deref())?;
        for dir in start.ancestors() {
            log::trace!("golden: probing {}", dir.display());
            if dir.join(&self.config.source_marker).is_dir() {
                return Ok(dir.to_path_buf());
            }
        }
        Err(FixtureError::not_found(format!(
            "no ancestor of {} contains {}; this test must be run from within the protobuf \
             source package",
            start.display(),
            self.config.source_marker.display()
        )))
    }

    /// Path of the golden file `name`, which must exist.
    pub fn locate(&self, name: &str) -> Result<PathBuf, FixtureError> {
        let path = self.source_root()?.join(&self.config.testdata_dir).join(name);
        if !path.is_file() {
            return Err(FixtureError::not_found(format!(
                "golden file {} does not exist",
                path.display()
            )));
        }
        log::debug!("golden: {name} -> {}", path.display());
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<Vec<u8>, FixtureError> {
        let path = self.locate(name)?;
        read_file(&path)
    }

    /// Compares `candidate` byte for byte with the golden file `name`.
    pub fn compare_golden(&self, name: &str, candidate: &[u8]) -> Result<(), FixtureError> {
        let path = self.locate(name)?;
        let expected = read_file(&path)?;
        if expected == candidate {
            return Ok(());
        }
        log::warn!("golden: {} does not match the candidate bytes", path.display());
        Err(FixtureError::GoldenMismatch { path, expected, actual: candidate.to_vec() })
    }
}

/// Locates `name` with the default protobuf layout, starting at the working
/// directory.
pub fn golden_file(name: &str) -> Result<PathBuf, FixtureError> {
    GoldenFileLocator::default().locate(name)
}

/// Absolute, lexically normalized start directory. Relative paths resolve
/// against the working directory so the walk reaches its real parents.
fn absolute_start(dir: Option<&Path>) -> Result<PathBuf, FixtureError> {
    let joined = match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        _ => {
            let cwd = env::current_dir()
                .map_err(|source| FixtureError::Io { path: PathBuf::from("."), source })?;
            match dir {
                Some(dir) => cwd.join(dir),
                None => cwd,
            }
        }
    };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

fn read_file(path: &Path) -> Result<Vec<u8>, FixtureError> {
    fs::read(path).map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_start_resolves_against_working_directory() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolute_start(Some(Path::new("."))).unwrap(), cwd);
        assert_eq!(absolute_start(None).unwrap(), cwd);
        assert_eq!(absolute_start(Some(Path::new("./a/../b"))).unwrap(), cwd.join("b"));
    }

    #[test]
    fn parent_segments_are_collapsed() {
        let start = absolute_start(Some(Path::new("/x/y/../z/./w"))).unwrap();
        assert_eq!(start, PathBuf::from("/x/z/w"));
        assert_eq!(start.parent(), Some(Path::new("/x/z")));
    }
}
