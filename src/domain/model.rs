use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

pub const FIELD_ID: &str = "ID";
pub const FIELD_NAME: &str = "Name";
pub const FIELD_TYPE: &str = "Type";
pub const FIELD_CONDITION: &str = "Condition";
pub const FIELD_AMOUNT: &str = "Amount";

/// Fields every inventory source must name in its header row.
pub const REQUIRED_FIELDS: [&str; 5] = [FIELD_ID, FIELD_NAME, FIELD_TYPE, FIELD_CONDITION, FIELD_AMOUNT];

/// One data row: field names from the header, values exactly as decoded.
///
/// Fields keep header order. When a header repeats a name, lookups return the
/// rightmost value, the same as a dict built row by row would keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get(FIELD_ID)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(FIELD_NAME)
    }

    pub fn item_type(&self) -> Option<&str> {
        self.get(FIELD_TYPE)
    }

    pub fn condition(&self) -> Option<&str> {
        self.get(FIELD_CONDITION)
    }

    pub fn amount(&self) -> Option<&str> {
        self.get(FIELD_AMOUNT)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Every field name across `records`, in first-seen order.
pub fn columns_of(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

/// The closed set of condition labels that aggregation recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Deserialize)]
pub enum Condition {
    Mint,
    Good,
    Average,
    Bad,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Mint,
        Condition::Good,
        Condition::Average,
        Condition::Bad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::Good => "Good",
            Condition::Average => "Average",
            Condition::Bad => "Bad",
        }
    }

    /// Exact, case-sensitive match against the label text.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of in-scope records per condition label, unrounded.
pub type ConditionPercentages = BTreeMap<Condition, f64>;

/// How `searchByName` compares a query against the `Name` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum NameMatch {
    /// Lower-cased name equals the lower-cased query.
    #[default]
    Exact,
    /// Lower-cased name contains the lower-cased query.
    Substring,
}

impl NameMatch {
    pub fn matches(&self, name: &str, query: &str) -> bool {
        let name = name.to_lowercase();
        let query = query.to_lowercase();
        match self {
            NameMatch::Exact => name == query,
            NameMatch::Substring => name.contains(&query),
        }
    }
}

/// What aggregation over all items does when the catalog is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum EmptyScopePolicy {
    #[default]
    Fail,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    AllItems,
    FilteredByName(&'a str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulb() -> Record {
        [
            ("ID", "7"),
            ("Name", "Bulb"),
            ("Type", "Electrical"),
            ("Condition", "Good"),
            ("Amount", "3"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_record_accessors() {
        let record = bulb();
        assert_eq!(record.id(), Some("7"));
        assert_eq!(record.name(), Some("Bulb"));
        assert_eq!(record.item_type(), Some("Electrical"));
        assert_eq!(record.condition(), Some("Good"));
        assert_eq!(record.amount(), Some("3"));
        assert_eq!(record.get("Weight"), None);
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            vec!["ID", "Name", "Type", "Condition", "Amount"]
        );
    }

    #[test]
    fn test_record_serializes_in_header_order() {
        let json = serde_json::to_string(&bulb()).unwrap();
        assert_eq!(
            json,
            r#"{"ID":"7","Name":"Bulb","Type":"Electrical","Condition":"Good","Amount":"3"}"#
        );
    }

    #[test]
    fn test_repeated_field_name_returns_rightmost_value() {
        let record: Record = [("ID", "1"), ("Name", "Old"), ("Name", "New")]
            .into_iter()
            .collect();
        assert_eq!(record.name(), Some("New"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_columns_of_collects_first_seen_order() {
        let short: Record = [("ID", "1"), ("Name", "Nails")].into_iter().collect();
        let records = vec![short, bulb()];
        assert_eq!(
            columns_of(&records),
            vec!["ID", "Name", "Type", "Condition", "Amount"]
        );
        assert!(columns_of(&[]).is_empty());
    }

    #[test]
    fn test_condition_labels_are_case_sensitive() {
        assert_eq!(Condition::from_label("Mint"), Some(Condition::Mint));
        assert_eq!(Condition::from_label("Average"), Some(Condition::Average));
        assert_eq!(Condition::from_label("mint"), None);
        assert_eq!(Condition::from_label("Broken"), None);
    }

    #[test]
    fn test_name_match_modes() {
        assert!(NameMatch::Exact.matches("Nails", "nails"));
        assert!(!NameMatch::Exact.matches("Box of Nails", "nails"));
        assert!(NameMatch::Substring.matches("Box of Nails", "NAILS"));
        assert!(!NameMatch::Substring.matches("Hammer", "nails"));
    }
}
