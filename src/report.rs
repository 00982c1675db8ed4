//! Per-word result lines.

use std::fmt;

use crate::REPORT_LIST_LIMIT;

/// The matches found for one puzzle word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReport {
    pub token: String,
    pub candidates: Vec<String>,
}

impl TokenReport {
    pub fn new<I, S>(token: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: token.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the display line spells out the matches
    pub fn lists_candidates(&self) -> bool {
        (1..=REPORT_LIST_LIMIT).contains(&self.count())
    }
}

/// `ca- : 3 possibilities : cat, car, can,`
impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} possibilities", self.token, self.count())?;
        if self.lists_candidates() {
            write!(f, " :")?;
            for word in &self.candidates {
                write!(f, " {},", word)?;
            }
        }
        Ok(())
    }
}
