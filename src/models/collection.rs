//! Ordered collection of spec results

use serde::Serialize;
use std::fmt;

use super::spec_result::{SpecResult, SpecStatus};

/// Results in the order the runner reported them
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultCollection {
    results: Vec<SpecResult>,
}

impl ResultCollection {
    pub fn new(results: Vec<SpecResult>) -> Self {
        Self { results }
    }

    /// Total number of specs, whatever their status
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpecResult> {
        self.results.iter()
    }

    pub fn passed(&self) -> impl Iterator<Item = &SpecResult> + '_ {
        self.filter_status(SpecStatus::Passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &SpecResult> + '_ {
        self.filter_status(SpecStatus::Failed)
    }

    pub fn pending(&self) -> impl Iterator<Item = &SpecResult> + '_ {
        self.filter_status(SpecStatus::Pending)
    }

    fn filter_status(&self, status: SpecStatus) -> impl Iterator<Item = &SpecResult> + '_ {
        self.results.iter().filter(move |r| r.has_status(&status))
    }

    pub fn counts(&self) -> StatusCounts {
        let passed = self.passed().count();
        let failed = self.failed().count();
        let pending = self.pending().count();

        StatusCounts {
            total: self.len(),
            passed,
            failed,
            pending,
            other: self.len() - passed - failed - pending,
        }
    }
}

impl From<Vec<SpecResult>> for ResultCollection {
    fn from(results: Vec<SpecResult>) -> Self {
        Self::new(results)
    }
}

impl FromIterator<SpecResult> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = SpecResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a SpecResult;
    type IntoIter = std::slice::Iter<'a, SpecResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-status tallies of a collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    /// Specs whose status is absent or not one of the three above
    pub other: usize,
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Passed: {} | Failed: {} | Pending: {} | Other: {}",
            self.total, self.passed, self.failed, self.pending, self.other
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expectation;

    fn sample() -> ResultCollection {
        ResultCollection::new(vec![
            SpecResult::passed("A one").with_id("spec0"),
            SpecResult::failed("A two", vec![Expectation::new("nope", "Error: nope")])
                .with_id("spec1"),
            SpecResult::pending("A three").with_id("spec2"),
            SpecResult::new().with_status("excluded").with_id("spec3"),
            SpecResult::passed("A five").with_id("spec4"),
        ])
    }

    fn ids<'a>(results: impl Iterator<Item = &'a SpecResult>) -> Vec<&'a str> {
        results.filter_map(SpecResult::id).collect()
    }

    #[test]
    fn test_filters_preserve_order() {
        let results = sample();
        assert_eq!(ids(results.passed()), vec!["spec0", "spec4"]);
        assert_eq!(ids(results.failed()), vec!["spec1"]);
        assert_eq!(ids(results.pending()), vec!["spec2"]);
    }

    #[test]
    fn test_filters_are_repeatable() {
        let results = sample();
        assert_eq!(ids(results.passed()), ids(results.passed()));
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_other_status_counts_toward_total_only() {
        let counts = sample().counts();
        assert_eq!(counts.total, 5);
        assert_eq!(counts.passed + counts.failed + counts.pending, 4);
        assert_eq!(counts.other, 1);
    }

    #[test]
    fn test_missing_status_matches_no_filter() {
        let results = ResultCollection::new(vec![SpecResult::new()]);
        assert_eq!(results.passed().count(), 0);
        assert_eq!(results.failed().count(), 0);
        assert_eq!(results.pending().count(), 0);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_empty_collection() {
        let results = ResultCollection::default();
        assert!(results.is_empty());
        assert_eq!(results.counts(), StatusCounts::default());
    }
}
