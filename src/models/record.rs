use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The atomic extracted fact: one field value for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub model: String,
    pub field: String,
    pub value: String,
}

impl Triple {
    pub fn new(
        model: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// All fields extracted for one model.
pub type Record = BTreeMap<String, String>;

/// Final artifact: model name to record. BTreeMap keeps JSON output
/// deterministic across runs.
pub type ResultSet = BTreeMap<String, Record>;

/// Merge per-page results in page order. Later pages win per field, the
/// same policy the aggregator applies to later tables within a page.
pub fn merge_result_sets<I>(pages: I) -> ResultSet
where
    I: IntoIterator<Item = ResultSet>,
{
    let mut merged = ResultSet::new();
    for page in pages {
        for (model, record) in page {
            merged.entry(model).or_default().extend(record);
        }
    }
    merged
}
