//! Row retention rules.
//!
//! Two rule sets exist:
//!
//! - [`RetentionRule::Strict`] drops a row iff one of its cells is exactly
//!   the null sentinel.
//! - [`RetentionRule::HeaderAware`] also drops rows whose cells are all
//!   blank, but always keeps row 0 as the header.
//!
//! Every strategy judges rows through [`CellTally`], so the rules are
//! defined in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{is_blank_cell, is_null_cell};
use crate::error::{Error, Result};
use crate::verdict::{DropReason, Verdict};

/// Which rows survive filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetentionRule {
    /// Drop rows containing a cell exactly equal to `NULL`.
    #[default]
    Strict,

    /// Like `Strict`, and also drop all-blank rows; row 0 is always kept.
    HeaderAware,
}

impl RetentionRule {
    /// Every rule, in declaration order.
    pub const ALL: [Self; 2] = [Self::Strict, Self::HeaderAware];

    /// The rule's name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::HeaderAware => "header-aware",
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Strict => "drop rows with a cell exactly equal to NULL",
            Self::HeaderAware => {
                "drop NULL rows and all-blank rows; the first row is always kept"
            }
        }
    }

    /// Judges the row at `index` from its cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_csv::RetentionRule;
    ///
    /// let verdict = RetentionRule::Strict.judge(1, ["1", "NULL"]);
    /// assert!(!verdict.is_keep());
    ///
    /// let header = RetentionRule::HeaderAware.judge(0, ["NULL"]);
    /// assert!(header.is_keep());
    /// ```
    pub fn judge<'a, I>(self, index: usize, cells: I) -> Verdict
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = CellTally::new();
        for cell in cells {
            tally.push(cell);
        }
        self.verdict(index, &tally)
    }

    /// Turns a finished tally for the row at `index` into a verdict.
    pub(crate) fn verdict(self, index: usize, tally: &CellTally) -> Verdict {
        if self == Self::HeaderAware && index == 0 {
            return Verdict::Keep;
        }
        if let Some(column) = tally.null_column {
            return Verdict::Drop(DropReason::NullCell { column });
        }
        if self == Self::HeaderAware && tally.blank {
            return Verdict::Drop(DropReason::Blank);
        }
        Verdict::Keep
    }
}

impl fmt::Display for RetentionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RetentionRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| Error::UnknownRule(s.to_string()))
    }
}

/// Running summary of the cells seen so far in one row.
///
/// Lets the single-pass strategy judge a row without collecting its
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellTally {
    cells: usize,
    null_column: Option<usize>,
    blank: bool,
}

impl CellTally {
    pub(crate) fn new() -> Self {
        Self {
            cells: 0,
            null_column: None,
            blank: true,
        }
    }

    pub(crate) fn push(&mut self, cell: &str) {
        if self.null_column.is_none() && is_null_cell(cell) {
            self.null_column = Some(self.cells);
        }
        self.blank &= is_blank_cell(cell);
        self.cells += 1;
    }
}
