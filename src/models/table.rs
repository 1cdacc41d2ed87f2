use serde::{Deserialize, Serialize};

/// A single cell as it appears in the markup, span attributes included.
/// Spans below 1 are clamped at construction; malformed vendor markup
/// routinely carries `rowspan="0"` or garbage values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    pub text: String,
    pub colspan: u32,
    pub rowspan: u32,
}

impl RawCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    pub fn spanned(text: impl Into<String>, colspan: u32, rowspan: u32) -> Self {
        Self {
            text: text.into(),
            colspan: colspan.max(1),
            rowspan: rowspan.max(1),
        }
    }
}

/// Ordered rows of ordered cells, straight from one `<table>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = RawCell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }
}

/// Dense rectangular grid after span resolution: every row has the same
/// length and every position holds an explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Structural table kinds recognized on vendor spec pages. Assigned once
/// per table by the classifier; unmatched tables are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    MultiModelHardware,
    Poe,
    SoftwareFeature,
    Performance,
    Protocol,
}

impl TableKind {
    pub fn key(&self) -> &'static str {
        match self {
            TableKind::MultiModelHardware => "hardware_specs",
            TableKind::Poe => "poe_power",
            TableKind::SoftwareFeature => "software_features",
            TableKind::Performance => "performance",
            TableKind::Protocol => "protocols",
        }
    }
}
