//! Lazy metric iteration over a packrat log directory
//!
//! Packrat logs record one previously-seen metric per line, first token
//! being the metric name and the rest (value, timestamp) irrelevant here.
//! A directory of them acts as a batch input source for the tool.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{Result, SourceError};

/// Lazy, single-pass metric source over a directory of packrat logs
///
/// Lists entries with an exact `.log` extension (case-sensitive) and
/// yields the first whitespace-delimited token of every non-blank line,
/// file by file. Only one file is open at a time.
///
/// Files are visited in lexicographic file-name order. The OS directory
/// order would be platform arbitrary, and this output gets diffed in
/// operator pipelines, so the order is pinned.
#[derive(Debug)]
pub struct LogDirMetrics {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, Lines<BufReader<File>>)>,
}

impl LogDirMetrics {
    /// Open a packrat log directory
    ///
    /// The directory listing happens eagerly so an unreadable directory
    /// fails here; individual log files are opened lazily as iteration
    /// reaches them.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the directory cannot be listed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = Vec::new();

        let entries =
            fs::read_dir(dir).map_err(|e| SourceError::io(dir.display().to_string(), e))?;
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::io(dir.display().to_string(), e))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "log") {
                files.push(path);
            }
        }
        files.sort();

        Ok(Self {
            files: files.into_iter(),
            current: None,
        })
    }
}

impl Iterator for LogDirMetrics {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.current {
                Some((path, lines)) => match lines.next() {
                    Some(Ok(line)) => {
                        if let Some(token) = line.split_whitespace().next() {
                            return Some(Ok(token.to_string()));
                        }
                        // blank line, keep scanning
                    }
                    Some(Err(e)) => {
                        let path = path.display().to_string();
                        self.current = None;
                        return Some(Err(SourceError::io(path, e)));
                    }
                    None => self.current = None,
                },
                None => {
                    let path = self.files.next()?;
                    match File::open(&path) {
                        Ok(file) => {
                            self.current = Some((path, BufReader::new(file).lines()));
                        }
                        Err(e) => {
                            return Some(Err(SourceError::io(path.display().to_string(), e)));
                        }
                    }
                }
            }
        }
    }
}
