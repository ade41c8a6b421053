//! Per-kind import results.

use crate::models::EntityKind;
use crate::store::StoreError;
use std::fmt;

/// A bulk insert that the store refused for one entity kind.
#[derive(Debug)]
pub struct InsertFailure {
    pub kind: EntityKind,
    pub error: StoreError,
}

impl fmt::Display for InsertFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

/// Result of one import run.
///
/// Counts are kept for each kind whose insert succeeded and `errors` gets one
/// entry per kind whose insert failed, both in processing order. A run where
/// every insert succeeded has three counts and no errors.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    loaded: Vec<(EntityKind, usize)>,
    pub errors: Vec<InsertFailure>,
}

impl ImportOutcome {
    pub fn record_success(&mut self, kind: EntityKind, count: usize) {
        self.loaded.push((kind, count));
    }

    pub fn record_failure(&mut self, kind: EntityKind, error: StoreError) {
        self.errors.push(InsertFailure { kind, error });
    }

    /// Records inserted per successfully loaded kind, in processing order.
    pub fn counts(&self) -> Vec<usize> {
        self.loaded.iter().map(|&(_, count)| count).collect()
    }

    /// Records inserted for `kind`, or `None` if its insert failed or never ran.
    pub fn count_for(&self, kind: EntityKind) -> Option<usize> {
        self.loaded
            .iter()
            .find(|(loaded, _)| *loaded == kind)
            .map(|&(_, count)| count)
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Counts rendered as a tuple, e.g. `(2, 1, 1)`.
    pub fn counts_tuple(&self) -> String {
        format_tuple(self.counts().as_slice())
    }

    /// Errors rendered as a tuple, `()` when there were none.
    pub fn errors_tuple(&self) -> String {
        format_tuple(&self.errors)
    }
}

fn format_tuple<T: fmt::Display>(items: &[T]) -> String {
    match items {
        [] => "()".to_string(),
        [only] => format!("({only},)"),
        _ => {
            let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_render_like_sequences() {
        assert_eq!(format_tuple::<usize>(&[]), "()");
        assert_eq!(format_tuple(&[4]), "(4,)");
        assert_eq!(format_tuple(&[2, 1, 1]), "(2, 1, 1)");
    }

    #[test]
    fn counts_skip_failed_kinds() {
        let mut outcome = ImportOutcome::default();
        outcome.record_success(EntityKind::Product, 2);
        outcome.record_failure(
            EntityKind::Customer,
            StoreError::insert("customer_data", "boom"),
        );
        outcome.record_success(EntityKind::Rental, 1);

        assert_eq!(outcome.counts(), [2, 1]);
        assert_eq!(outcome.count_for(EntityKind::Rental), Some(1));
        assert_eq!(outcome.count_for(EntityKind::Customer), None);
        assert!(!outcome.is_clean());
        assert_eq!(
            outcome.errors_tuple(),
            "(customer: bulk insert into customer_data failed: boom,)"
        );
    }

    #[test]
    fn fresh_outcome_has_no_counts() {
        let outcome = ImportOutcome::default();
        assert!(outcome.counts().is_empty());
        assert_eq!(outcome.count_for(EntityKind::Product), None);
        assert_eq!(outcome.counts_tuple(), "()");
    }
}
