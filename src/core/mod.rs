pub mod catalog;
pub mod pagination;
pub mod stats;

pub use crate::domain::model::{ConditionPercentages, NameMatch, Record, Scope};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
