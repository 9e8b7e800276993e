use std::fmt;

use crate::types::CategoryId;

/// The active retrieval strategy.
///
/// Page changes and post-delete refreshes reuse whichever variant is active,
/// with its parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    All,
    ByCategory(CategoryId),
    Search(String),
}

impl Mode {
    pub fn category(&self) -> Option<&CategoryId> {
        match self {
            Mode::ByCategory(id) => Some(id),
            _ => None,
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        match self {
            Mode::Search(term) => Some(term),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::All => write!(f, "all"),
            Mode::ByCategory(id) => write!(f, "category {id}"),
            Mode::Search(term) => write!(f, "search \"{term}\""),
        }
    }
}
