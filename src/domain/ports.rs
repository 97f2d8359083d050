use crate::domain::model::{columns_of, Record};
use crate::utils::error::Result;

/// Anything that can produce the ordered record sequence a catalog wraps.
///
/// Implementations must return rows in source order and must fail as a
/// whole; a partially loaded sequence is never returned.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<Record>>;

    /// Records plus the column names to display them under.
    ///
    /// The default collects every field name in first-seen order; sources
    /// with a header row should return the header instead.
    fn load_with_columns(&self) -> Result<(Vec<String>, Vec<Record>)> {
        let records = self.load()?;
        Ok((columns_of(&records), records))
    }

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}

impl RecordSource for Vec<Record> {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.len())
    }
}
