//! Row and cell structure of a CSV document.
//!
//! A document is split into rows on [`ROW_DELIMITER`] and each row into
//! cells on [`CELL_DELIMITER`]. There is no quoting or escaping: every
//! delimiter character is structural. All views borrow from the input
//! text, so splitting and rejoining a row reproduces it byte for byte.

/// Separator between rows.
pub const ROW_DELIMITER: char = '\n';

/// Separator between cells within a row.
pub const CELL_DELIMITER: char = ',';

/// The literal cell value that marks a missing value.
pub const NULL_SENTINEL: &str = "NULL";

/// Returns `true` if the cell is exactly the null sentinel.
///
/// The comparison is case-sensitive and untrimmed, so `"null"`,
/// `"NULL "` and `" NULL"` are ordinary values.
///
/// # Examples
///
/// ```
/// use sieve_csv::document::is_null_cell;
///
/// assert!(is_null_cell("NULL"));
/// assert!(!is_null_cell("null"));
/// assert!(!is_null_cell("NULL "));
/// ```
#[must_use]
pub fn is_null_cell(cell: &str) -> bool {
    cell == NULL_SENTINEL
}

/// Returns `true` if the cell is empty or whitespace only.
#[must_use]
pub fn is_blank_cell(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Iterates over the rows of a document.
///
/// An empty document has no rows. Otherwise the document is split on
/// every [`ROW_DELIMITER`], so a trailing newline yields a final empty
/// row and two consecutive newlines yield an empty row between them.
///
/// # Examples
///
/// ```
/// use sieve_csv::document::rows;
///
/// assert_eq!(rows("a,b\nc").collect::<Vec<_>>(), ["a,b", "c"]);
/// assert_eq!(rows("a\n").collect::<Vec<_>>(), ["a", ""]);
/// assert_eq!(rows("").count(), 0);
/// ```
pub fn rows(document: &str) -> impl Iterator<Item = &str> {
    (!document.is_empty())
        .then(|| document.split(ROW_DELIMITER))
        .into_iter()
        .flatten()
}

/// Iterates over the cells of a single row.
///
/// A row always has at least one cell; the empty row has one empty cell.
pub fn cells(row: &str) -> impl Iterator<Item = &str> {
    row.split(CELL_DELIMITER)
}

/// A row of a document together with its 0-based position.
///
/// This is the materialized form used by the indexed strategy. The cells
/// borrow from the original text and are never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRow<'a> {
    index: usize,
    text: &'a str,
    cells: Vec<&'a str>,
}

impl<'a> IndexedRow<'a> {
    /// Splits `text` into cells and pairs it with `index`.
    #[must_use]
    pub fn new(index: usize, text: &'a str) -> Self {
        Self {
            index,
            text,
            cells: cells(text).collect(),
        }
    }

    /// Position of the row in its document.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The row exactly as it appeared in the document.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The row's cells in order.
    #[must_use]
    pub fn cells(&self) -> &[&'a str] {
        &self.cells
    }

    /// Returns `true` for the first row of the document.
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.index == 0
    }

    /// Column of the first cell equal to the null sentinel, if any.
    #[must_use]
    pub fn null_column(&self) -> Option<usize> {
        self.cells.iter().position(|cell| is_null_cell(cell))
    }

    /// Returns `true` if every cell is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| is_blank_cell(cell))
    }

    /// Appends the cells, rejoined with [`CELL_DELIMITER`], to `out`.
    pub fn write_cells(&self, out: &mut String) {
        for (column, cell) in self.cells.iter().enumerate() {
            if column > 0 {
                out.push(CELL_DELIMITER);
            }
            out.push_str(cell);
        }
    }
}

/// Iterates over the rows of a document as [`IndexedRow`] values.
pub fn indexed_rows(document: &str) -> impl Iterator<Item = IndexedRow<'_>> {
    rows(document)
        .enumerate()
        .map(|(index, text)| IndexedRow::new(index, text))
}
