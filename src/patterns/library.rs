//! Candidate pattern files and uniform random selection

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, StudioError};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Pattern file references with an injectable random source
///
/// Paths are kept in insertion order and duplicates are allowed, so a file
/// added twice is twice as likely to be picked.
#[derive(Debug)]
pub struct PatternLibrary<R = StdRng> {
    paths: Vec<PathBuf>,
    rng: R,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLibrary {
    /// Create an empty library seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty library with a fixed seed for reproducible selection
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PatternLibrary<R> {
    /// Create an empty library drawing from `rng`
    pub const fn with_rng(rng: R) -> Self {
        Self {
            paths: Vec::new(),
            rng,
        }
    }

    /// Append pattern files; no deduplication
    pub fn add_assets<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
    }

    /// True when no pattern has been added
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of registered paths, counting duplicates
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Registered paths in insertion order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Uniformly pick one registered path, with replacement across calls
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::EmptyLibrary`] if no pattern has been added
    pub fn pick_random(&mut self) -> Result<&Path> {
        if self.paths.is_empty() {
            return Err(StudioError::EmptyLibrary);
        }

        let index = self.rng.random_range(0..self.paths.len());
        self.paths
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(StudioError::EmptyLibrary)
    }

    /// Forget every registered path
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

/// True when `path` carries one of the supported pattern extensions
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Expand files and directories into a list of pattern files
///
/// Files are kept as given. Directories contribute their supported image
/// files, non-recursively, in sorted order.
///
/// # Errors
///
/// Returns an error if a directory cannot be read, or if an input is neither a
/// file nor a directory
pub fn collect_pattern_files<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if input.is_file() {
            files.push(input.to_path_buf());
        } else if input.is_dir() {
            let read_error = |e| StudioError::FileSystem {
                path: input.to_path_buf(),
                operation: "read directory",
                source: e,
            };
            let mut found = Vec::new();
            for entry in std::fs::read_dir(input).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && has_supported_extension(&path) {
                    found.push(path);
                }
            }
            found.sort();
            files.extend(found);
        } else {
            return Err(StudioError::FileSystem {
                path: input.to_path_buf(),
                operation: "locate pattern",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not a file or directory",
                ),
            });
        }
    }

    Ok(files)
}
