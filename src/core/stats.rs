use crate::domain::model::{Condition, ConditionPercentages, Record};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionCounts {
    pub total: usize,
    pub by_label: BTreeMap<Condition, usize>,
}

impl ConditionCounts {
    /// Every record adds to `total`; only recognized labels add to `by_label`.
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut counts = Self {
            total: 0,
            by_label: Condition::ALL.into_iter().map(|c| (c, 0)).collect(),
        };

        for record in records {
            counts.total += 1;
            match record.condition().and_then(Condition::from_label) {
                Some(condition) => *counts.by_label.entry(condition).or_insert(0) += 1,
                None => tracing::debug!(
                    "Item {:?} has unrecognized condition {:?}",
                    record.id().unwrap_or(""),
                    record.condition().unwrap_or("")
                ),
            }
        }

        counts
    }

    /// `None` when nothing was tallied.
    pub fn percentages(&self) -> Option<ConditionPercentages> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        Some(
            self.by_label
                .iter()
                .map(|(condition, count)| (*condition, *count as f64 / total * 100.0))
                .collect(),
        )
    }
}
