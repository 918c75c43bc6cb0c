//! Bulletin source backed by text files on disk

use super::BulletinSource;
use crate::config::SourceConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Reads bulletins from every file matching a glob pattern
#[derive(Debug, Clone)]
pub struct FileBulletinSource {
    name: String,
    pattern: String,
}

impl FileBulletinSource {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Matching files in path order
    fn matching_files(&self) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(&self.pattern).map_err(|e| {
            Error::bulletin_fetch(&self.name, format!("invalid pattern '{}': {}", self.pattern, e))
        })?;

        let mut paths = entries
            .map(|entry| entry.map_err(|e| Error::bulletin_fetch(&self.name, e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        paths.sort();

        if paths.is_empty() {
            return Err(Error::bulletin_fetch(
                &self.name,
                format!("no files match '{}'", self.pattern),
            ));
        }
        Ok(paths)
    }
}

impl From<&SourceConfig> for FileBulletinSource {
    fn from(config: &SourceConfig) -> Self {
        Self::new(&config.name, &config.pattern)
    }
}

#[async_trait]
impl BulletinSource for FileBulletinSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<String>> {
        let mut bulletins = Vec::new();
        for path in self.matching_files()? {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                Error::bulletin_fetch(&self.name, format!("{}: {}", path.display(), e))
            })?;
            let found = split_bulletins(&content);
            debug!("Read {} bulletins from {}", found.len(), path.display());
            bulletins.extend(found);
        }
        Ok(bulletins)
    }
}

/// Split a text dump into individual bulletins
///
/// A bulletin ends at a blank line or at a line ending with `=`.
pub fn split_bulletins(text: &str) -> Vec<String> {
    let mut bulletins = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current, &mut bulletins);
            continue;
        }
        current.push(trimmed);
        if trimmed.ends_with('=') {
            flush(&mut current, &mut bulletins);
        }
    }
    flush(&mut current, &mut bulletins);
    bulletins
}

fn flush(current: &mut Vec<&str>, bulletins: &mut Vec<String>) {
    if !current.is_empty() {
        bulletins.push(current.join("\n"));
        current.clear();
    }
}
