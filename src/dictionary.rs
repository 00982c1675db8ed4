//! Word list loading.
//!
//! The dictionary is read once per run and handed to the solver by
//! reference. Entries are kept exactly as stored: no case folding and no
//! trimming beyond the line terminator.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::{DEFAULT_WORDLIST, WORDLIST_ENV};

/// Failure to produce a dictionary. Either variant is fatal for a run.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("word list not found at {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    pub fn path(&self) -> &Path {
        match self {
            DictionaryError::NotFound { path, .. } | DictionaryError::Unreadable { path, .. } => path,
        }
    }
}

/// Ordered, read-only list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build from lines, skipping empty ones. Order and duplicates are kept.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = lines
            .into_iter()
            .map(Into::into)
            .filter(|line: &String| !line.is_empty())
            .collect();
        Self { words }
    }

    /// Parse newline-delimited text (`\n` or `\r\n`)
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Read a word list from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| {
            let path = path.to_path_buf();
            match source.kind() {
                io::ErrorKind::NotFound => DictionaryError::NotFound { path, source },
                _ => DictionaryError::Unreadable { path, source },
            }
        })?;

        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            warn!("{} is not valid UTF-8, undecodable bytes replaced", path.display());
        }

        let dictionary = Self::parse(&text);
        info!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Word list location: `WOF_WORDLIST` when set, otherwise `wordlist.txt`
pub fn resolve_wordlist_path() -> PathBuf {
    match std::env::var_os(WORDLIST_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_WORDLIST),
    }
}
