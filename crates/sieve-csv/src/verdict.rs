//! Outcomes of judging a single row.
//!
//! A [`Verdict`] says whether a row survives filtering. Dropped rows carry
//! a [`DropReason`], and [`DroppedRow`] pairs that reason with the row's
//! position so callers can report what was removed and why.
//!
//! # Examples
//!
//! ```
//! use sieve_csv::verdict::{DropReason, DroppedRow};
//!
//! let dropped = DroppedRow {
//!     index: 2,
//!     reason: DropReason::NullCell { column: 1 },
//! };
//!
//! assert_eq!(dropped.reason.kind(), "null_cell");
//! assert_eq!(dropped.to_string(), "row 2: NULL in column 1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a row was removed from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropReason {
    /// A cell was exactly the null sentinel.
    NullCell {
        /// 0-based column of the first sentinel cell.
        column: usize,
    },

    /// Every cell was empty or whitespace (header-aware rule only).
    Blank,
}

impl DropReason {
    /// Returns a static string identifying the reason kind.
    ///
    /// Useful for grouping without matching on the variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NullCell { .. } => "null_cell",
            Self::Blank => "blank",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullCell { column } => write!(f, "NULL in column {column}"),
            Self::Blank => write!(f, "all cells blank"),
        }
    }
}

/// Whether a row is kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The row is copied to the output.
    Keep,
    /// The row is removed for the given reason.
    Drop(DropReason),
}

impl Verdict {
    /// Returns `true` if the row survives.
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// The drop reason, if the row was dropped.
    #[must_use]
    pub fn reason(&self) -> Option<DropReason> {
        match self {
            Self::Keep => None,
            Self::Drop(reason) => Some(*reason),
        }
    }
}

/// A row removed by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroppedRow {
    /// 0-based position of the row in the input document.
    pub index: usize,
    /// Why the row was removed.
    pub reason: DropReason,
}

impl fmt::Display for DroppedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.index, self.reason)
    }
}
