use crate::adapters::csv_source::CsvSource;
use crate::core::pagination::{Page, PageRequest};
use crate::core::stats::ConditionCounts;
use crate::domain::model::{
    columns_of, ConditionPercentages, EmptyScopePolicy, NameMatch, Record, Scope,
};
use crate::domain::ports::RecordSource;
use crate::utils::error::{CatalogError, Result};
use std::path::Path;

/// Read-only view over the items of one source, in source order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<Record>,
    columns: Vec<String>,
    name_match: NameMatch,
    empty_scope: EmptyScopePolicy,
}

impl ItemCatalog {
    /// Columns are every field name seen across `items`.
    pub fn new(items: Vec<Record>) -> Self {
        Self {
            columns: columns_of(&items),
            items,
            ..Self::default()
        }
    }

    /// Builds a catalog from a source; a failed load never yields a catalog.
    pub fn load<S: RecordSource>(source: &S) -> Result<Self> {
        let (columns, items) = source.load_with_columns()?;
        tracing::debug!("Catalog built from {} ({} items)", source.describe(), items.len());
        Ok(Self::new(items).with_columns(columns))
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(&CsvSource::new(path))
    }

    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn with_empty_scope_policy(mut self, policy: EmptyScopePolicy) -> Self {
        self.empty_scope = policy;
        self
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// Column names for display, in source header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn name_match(&self) -> NameMatch {
        self.name_match
    }

    /// First item whose `ID` equals `id` exactly.
    pub fn get_by_id(&self, id: &str) -> Option<&Record> {
        // exact match, first in source order
        let found = self.items.iter().find(|item| item.id() == Some(id));
        tracing::debug!("get_by_id({:?}): {}", id, if found.is_some() { "hit" } else { "miss" });
        found
    }

    /// Every item whose `ID` equals `id` exactly, for sources with duplicate ids.
    pub fn find_all_by_id(&self, id: &str) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|item| item.id() == Some(id))
            .collect()
    }

    pub fn search_by_name(&self, name: &str) -> Vec<&Record> {
        self.search_by_name_with(name, self.name_match)
    }

    pub fn search_by_name_with(&self, name: &str, mode: NameMatch) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .items
            .iter()
            .filter(|item| item.name().is_some_and(|n| mode.matches(n, name)))
            .collect();
        tracing::debug!("search_by_name({:?}, {:?}): {} results", name, mode, results.len());
        results
    }

    pub fn page(&self, size: usize, number: usize) -> Result<Page<'_>> {
        let request = PageRequest::new(size, number)?;
        Ok(Page::new(request, &self.items))
    }

    /// Items whose `field` equals `value`, ignoring case. Items without the field never match.
    pub fn filter_by_field(&self, field: &str, value: &str) -> Vec<&Record> {
        // lower-case once, not per item
        let wanted = value.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.get(field).is_some_and(|v| v.to_lowercase() == wanted))
            .collect()
    }

    pub fn condition_percentages(&self, scope: Scope<'_>) -> Result<ConditionPercentages> {
        match scope {
            // an empty catalog has no denominator; the policy decides
            Scope::AllItems => match ConditionCounts::tally(&self.items).percentages() {
                Some(percentages) => Ok(percentages),
                None => match self.empty_scope {
                    EmptyScopePolicy::Fail => Err(CatalogError::EmptyScopeError),
                    EmptyScopePolicy::Empty => Ok(ConditionPercentages::new()),
                },
            },
            // no matching name yields an empty mapping, never zeros
            Scope::FilteredByName(name) => Ok(ConditionCounts::tally(self.search_by_name(name))
                .percentages()
                .unwrap_or_default()),
        }
    }
}

impl From<Vec<Record>> for ItemCatalog {
    fn from(items: Vec<Record>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Condition;

    fn item(id: &str, name: &str, condition: &str) -> Record {
        [
            ("ID", id),
            ("Name", name),
            ("Type", "Material"),
            ("Condition", condition),
            ("Amount", "1"),
        ]
        .into_iter()
        .collect()
    }

    fn sample() -> ItemCatalog {
        ItemCatalog::new(vec![
            item("1", "Nails", "Mint"),
            item("2", "Box of Nails", "Good"),
            item("2", "Hammer", "Good"),
            item("3", "Plank", "Bad"),
        ])
    }

    #[test]
    fn test_get_by_id_returns_first_match() {
        let catalog = sample();
        assert_eq!(catalog.get_by_id("2").and_then(|r| r.name()), Some("Box of Nails"));
        assert_eq!(catalog.get_by_id("2"), catalog.get_by_id("2"));
        assert!(catalog.get_by_id("99").is_none());
    }

    #[test]
    fn test_get_by_id_is_case_and_whitespace_exact() {
        let catalog = ItemCatalog::new(vec![item("a1", "Rope", "Good")]);
        assert!(catalog.get_by_id("A1").is_none());
        assert!(catalog.get_by_id(" a1").is_none());
        assert!(catalog.get_by_id("a1").is_some());
    }

    #[test]
    fn test_find_all_by_id_keeps_duplicates_in_order() {
        let catalog = sample();
        let names: Vec<_> = catalog
            .find_all_by_id("2")
            .iter()
            .map(|r| r.name().unwrap())
            .collect();
        assert_eq!(names, vec!["Box of Nails", "Hammer"]);
        assert!(catalog.find_all_by_id("99").is_empty());
    }

    #[test]
    fn test_search_exact_vs_substring() {
        let catalog = sample();
        let exact = catalog.search_by_name_with("NAILS", NameMatch::Exact);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id(), Some("1"));

        let substring = catalog.search_by_name_with("nails", NameMatch::Substring);
        assert_eq!(substring.len(), 2);

        let substring_catalog = sample().with_name_match(NameMatch::Substring);
        assert_eq!(substring_catalog.search_by_name("nail").len(), 2);
        assert!(catalog.search_by_name("Saw").is_empty());
    }

    #[test]
    fn test_filter_by_field_ignores_case() {
        let catalog = sample();
        assert_eq!(catalog.filter_by_field("Condition", "good").len(), 2);
        assert_eq!(catalog.filter_by_field("ID", "2").len(), 2);
        assert!(catalog.filter_by_field("Weight", "1").is_empty());
    }

    #[test]
    fn test_filtered_percentages_use_active_name_mode() {
        let catalog = sample().with_name_match(NameMatch::Substring);
        let percentages = catalog
            .condition_percentages(Scope::FilteredByName("nails"))
            .unwrap();
        assert_eq!(percentages[&Condition::Mint], 50.0);
        assert_eq!(percentages[&Condition::Good], 50.0);
    }

    #[test]
    fn test_columns_follow_header_not_first_record() {
        let short: Record = [("ID", "1"), ("Name", "Nails")].into_iter().collect();
        let catalog = ItemCatalog::from(vec![short, item("2", "Hammer", "Mint")]);
        assert_eq!(catalog.columns(), ["ID", "Name", "Type", "Condition", "Amount"]);

        let source = CsvSource::new("inline");
        let (columns, records) = source
            .read_table_from("ID,Name,Type,Condition,Amount\n1,Nails\n".as_bytes())
            .unwrap();
        let loaded = ItemCatalog::new(records).with_columns(columns);
        assert_eq!(loaded.columns().len(), 5);
        assert_eq!(loaded.items()[0].len(), 2);
    }

    #[test]
    fn test_empty_catalog_policies() {
        let failing = ItemCatalog::default();
        assert!(matches!(
            failing.condition_percentages(Scope::AllItems),
            Err(CatalogError::EmptyScopeError)
        ));

        let lenient = ItemCatalog::default().with_empty_scope_policy(EmptyScopePolicy::Empty);
        assert!(lenient.condition_percentages(Scope::AllItems).unwrap().is_empty());
    }
}
