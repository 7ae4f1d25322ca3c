//! Interchangeable algorithms for removing rows.
//!
//! All strategies honour the same [`RetentionRule`] and return the same
//! output for the same input. They differ only in how they walk the text:
//!
//! - [`Strategy::SplitFilter`] splits into rows and cells, then rejoins
//!   the survivors.
//! - [`Strategy::SinglePass`] scans characters once, copying whole lines
//!   from the input without collecting cells.
//! - [`Strategy::Indexed`] materializes every row as an [`IndexedRow`]
//!   before judging it, trading speed for an explicit row structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::{
    cells, indexed_rows, rows, IndexedRow, CELL_DELIMITER, ROW_DELIMITER,
};
use crate::error::{Error, Result};
use crate::rule::{CellTally, RetentionRule};

/// Algorithm used to filter a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Split into rows and cells, keep qualifying rows, rejoin.
    #[default]
    SplitFilter,

    /// One character scan tracking cell and line starts.
    SinglePass,

    /// Build an [`IndexedRow`] per row, then keep qualifying rows.
    Indexed,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::SplitFilter, Self::SinglePass, Self::Indexed];

    /// The strategy's name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SplitFilter => "split-filter",
            Self::SinglePass => "single-pass",
            Self::Indexed => "indexed",
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::SplitFilter => "split rows and cells, keep qualifying rows, rejoin",
            Self::SinglePass => "scan characters once, copying qualifying lines",
            Self::Indexed => "materialize indexed rows, then keep qualifying rows",
        }
    }

    /// Filters `document` under `rule`.
    #[must_use]
    pub fn apply(self, document: &str, rule: RetentionRule) -> String {
        match self {
            Self::SplitFilter => split_filter(document, rule),
            Self::SinglePass => single_pass(document, rule),
            Self::Indexed => indexed(document, rule),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

fn split_filter(document: &str, rule: RetentionRule) -> String {
    let mut output = String::with_capacity(document.len());
    let kept = rows(document)
        .enumerate()
        .filter(|&(index, row)| rule.judge(index, cells(row)).is_keep());

    for (position, (_, row)) in kept.enumerate() {
        if position > 0 {
            output.push(ROW_DELIMITER);
        }
        output.push_str(row);
    }
    output
}

fn single_pass(document: &str, rule: RetentionRule) -> String {
    if document.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(document.len());
    let mut line_start = 0;
    let mut cell_start = 0;
    let mut line_index = 0;
    let mut tally = CellTally::new();

    for (position, ch) in document.char_indices() {
        if ch == CELL_DELIMITER {
            tally.push(&document[cell_start..position]);
            cell_start = position + 1;
        } else if ch == ROW_DELIMITER {
            tally.push(&document[cell_start..position]);
            if rule.verdict(line_index, &tally).is_keep() {
                output.push_str(&document[line_start..position]);
                output.push(ROW_DELIMITER);
            }
            line_start = position + 1;
            cell_start = line_start;
            line_index += 1;
            tally = CellTally::new();
        }
    }

    // End of input closes the last line, which is empty after a trailing newline.
    tally.push(&document[cell_start..]);
    if rule.verdict(line_index, &tally).is_keep() {
        output.push_str(&document[line_start..]);
        output.push(ROW_DELIMITER);
    }

    if output.ends_with(ROW_DELIMITER) {
        output.pop();
    }
    output
}

fn indexed(document: &str, rule: RetentionRule) -> String {
    let table: Vec<IndexedRow<'_>> = indexed_rows(document).collect();
    let mut output = String::with_capacity(document.len());

    let kept = table
        .iter()
        .filter(|row| rule.judge(row.index(), row.cells().iter().copied()).is_keep());

    for (position, row) in kept.enumerate() {
        if position > 0 {
            output.push(ROW_DELIMITER);
        }
        row.write_cells(&mut output);
    }
    output
}
