//! The NULL-row filter.
//!
//! [`NullRowFilter`] pairs a [`Strategy`] with a [`RetentionRule`]. It is
//! a small `Copy` value with no state between calls, so one instance can
//! be shared freely across threads.

use serde::{Deserialize, Serialize};

use crate::document::{cells, rows};
use crate::rule::RetentionRule;
use crate::strategy::Strategy;
use crate::verdict::DroppedRow;

/// Removes rows that contain a NULL cell from CSV text.
///
/// The default filter uses [`Strategy::SplitFilter`] with
/// [`RetentionRule::Strict`].
///
/// # Examples
///
/// ```
/// use sieve_csv::{NullRowFilter, RetentionRule, Strategy};
///
/// let filter = NullRowFilter::new(Strategy::SinglePass, RetentionRule::HeaderAware);
/// let output = filter.filter("id,name\n1,NULL\n , \n2,Betty");
/// assert_eq!(output, "id,name\n2,Betty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NullRowFilter {
    strategy: Strategy,
    rule: RetentionRule,
}

impl NullRowFilter {
    /// Creates a filter with the given strategy and rule.
    #[must_use]
    pub const fn new(strategy: Strategy, rule: RetentionRule) -> Self {
        Self { strategy, rule }
    }

    /// Returns a copy using `strategy`.
    #[must_use]
    pub const fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Returns a copy using `rule`.
    #[must_use]
    pub const fn with_rule(self, rule: RetentionRule) -> Self {
        Self { rule, ..self }
    }

    /// The algorithm this filter runs.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The rule this filter applies.
    #[must_use]
    pub const fn rule(&self) -> RetentionRule {
        self.rule
    }

    /// Returns `document` with disqualified rows removed.
    ///
    /// Retained rows are copied unchanged and joined by `\n`. An empty
    /// document yields an empty string.
    #[must_use]
    pub fn filter(&self, document: &str) -> String {
        let output = self.strategy.apply(document, self.rule);
        tracing::trace!(
            strategy = %self.strategy,
            rule = %self.rule,
            input_bytes = document.len(),
            output_bytes = output.len(),
            "filtered document"
        );
        output
    }

    /// Like [`filter`](Self::filter), treating an absent document as empty.
    #[must_use]
    pub fn filter_opt(&self, document: Option<&str>) -> String {
        document.map_or_else(String::new, |document| self.filter(document))
    }

    /// Lists the rows this filter removes from `document`, in order.
    ///
    /// The result does not depend on the strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_csv::NullRowFilter;
    /// use sieve_csv::verdict::DropReason;
    ///
    /// let dropped = NullRowFilter::default().explain("a,b\n1,NULL\n2,3");
    /// assert_eq!(dropped.len(), 1);
    /// assert_eq!(dropped[0].index, 1);
    /// assert_eq!(dropped[0].reason, DropReason::NullCell { column: 1 });
    /// ```
    #[must_use]
    pub fn explain(&self, document: &str) -> Vec<DroppedRow> {
        let dropped: Vec<DroppedRow> = rows(document)
            .enumerate()
            .filter_map(|(index, row)| {
                self.rule
                    .judge(index, cells(row))
                    .reason()
                    .map(|reason| DroppedRow { index, reason })
            })
            .collect();
        tracing::debug!(rule = %self.rule, dropped = dropped.len(), "explained document");
        dropped
    }
}

/// Removes every row containing a cell exactly equal to `NULL`.
///
/// Shorthand for the default [`NullRowFilter`].
///
/// # Examples
///
/// ```
/// use sieve_csv::filter_null_rows;
///
/// let output = filter_null_rows("id,name,age,score\n1,Jack,NULL,12\n17,Betty,28,11");
/// assert_eq!(output, "id,name,age,score\n17,Betty,28,11");
/// ```
#[must_use]
pub fn filter_null_rows(document: &str) -> String {
    NullRowFilter::default().filter(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::DropReason;

    #[test]
    fn default_is_strict_split_filter() {
        let filter = NullRowFilter::default();
        assert_eq!(filter.strategy(), Strategy::SplitFilter);
        assert_eq!(filter.rule(), RetentionRule::Strict);
    }

    #[test]
    fn builders_replace_one_field() {
        let filter = NullRowFilter::default()
            .with_strategy(Strategy::Indexed)
            .with_rule(RetentionRule::HeaderAware);
        assert_eq!(
            filter,
            NullRowFilter::new(Strategy::Indexed, RetentionRule::HeaderAware)
        );
    }

    #[test]
    fn absent_document_yields_empty_output() {
        assert_eq!(NullRowFilter::default().filter_opt(None), "");
        assert_eq!(NullRowFilter::default().filter_opt(Some("a\nNULL")), "a");
    }

    #[test]
    fn explain_lists_null_and_blank_rows() {
        let filter = NullRowFilter::default().with_rule(RetentionRule::HeaderAware);
        let dropped = filter.explain("h1,h2\n , \nNULL,x\n1,2\n");
        assert_eq!(
            dropped,
            vec![
                DroppedRow {
                    index: 1,
                    reason: DropReason::Blank
                },
                DroppedRow {
                    index: 2,
                    reason: DropReason::NullCell { column: 0 }
                },
                DroppedRow {
                    index: 4,
                    reason: DropReason::Blank
                },
            ]
        );
    }

    #[test]
    fn explain_empty_document() {
        assert!(NullRowFilter::default().explain("").is_empty());
    }

    #[test]
    fn explain_agrees_with_filter() {
        let document = "a,b\n1,NULL\n\n2,3\nNULL";
        let filter = NullRowFilter::default();
        let dropped = filter.explain(document);
        let kept: Vec<&str> = document
            .split('\n')
            .enumerate()
            .filter(|(index, _)| dropped.iter().all(|row| row.index != *index))
            .map(|(_, row)| row)
            .collect();
        assert_eq!(kept.join("\n"), filter.filter(document));
    }
}
