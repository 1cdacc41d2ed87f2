use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{RawTable, TableKind};
use crate::parsers::normalize;

/// Signature vocabulary per kind, most distinctive kind first. The first
/// signature whose vocabulary appears in the header text wins, so the order
/// of this table IS the tie-break policy:
/// Poe > Performance > Protocol > SoftwareFeature > MultiModelHardware.
const SIGNATURES: &[(TableKind, &[&str])] = &[
    (
        TableKind::Poe,
        &[
            "poe",
            "802.3af",
            "802.3at",
            "802.3bt",
            "power capacity",
            "pse power",
        ],
    ),
    (
        TableKind::Performance,
        &[
            "mac address table",
            "routing table",
            "arp entries",
            "acl",
            "forwarding rate",
            "switching capacity",
            "table size",
        ],
    ),
    (
        TableKind::Protocol,
        &["ieee", "rfc", "standards", "compliance"],
    ),
    (
        TableKind::SoftwareFeature,
        &["feature", "vlan", "qos", "multicast", "security", "management"],
    ),
];

/// Model designations as they appear in column headers: `S5130S-28S-EI`,
/// `H3C S5590-28S-EI`, and short series forms.
static MODEL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:H3C\s+)?S\d+[0-9A-Za-z]*(?:-[0-9A-Za-z]+)*$").expect("Invalid model regex")
});

/// Header vocabulary that marks a generic hardware spec table when model
/// columns are present.
const HARDWARE_HINTS: &[&str] = &[
    "item",
    "model",
    "specification",
    "cpu",
    "memory",
    "flash",
    "port",
    "dimension",
    "weight",
    "power",
    "mtbf",
    "型号",
];

/// Assign a table one of the five structural kinds, or `None` when no
/// signature matches. Unmatched tables are skipped downstream; that is a
/// silent recoverable skip, never an error.
pub fn classify(table: &RawTable) -> Option<TableKind> {
    let header = header_text(table);
    if header.is_empty() {
        return None;
    }

    for (kind, vocabulary) in SIGNATURES {
        if vocabulary.iter().any(|keyword| header.contains(keyword)) {
            return Some(*kind);
        }
    }

    // Multi-model hardware has the least distinctive vocabulary; require
    // model-designation column headers over spec rows instead.
    let models = model_header_count(table);
    if models >= 2 || (models >= 1 && HARDWARE_HINTS.iter().any(|hint| header.contains(hint))) {
        return Some(TableKind::MultiModelHardware);
    }

    None
}

/// Normalized, lowercased text of the first two rows, the classification
/// window. Deeper rows are data, not signature.
fn header_text(table: &RawTable) -> String {
    let mut text = String::new();
    for row in table.rows.iter().take(2) {
        for cell in row {
            text.push_str(&normalize(&cell.text).to_lowercase());
            text.push(' ');
        }
    }
    text.trim().to_string()
}

/// Count model-designation cells in the first row, excluding column 0
/// (the field-label column).
fn model_header_count(table: &RawTable) -> usize {
    let Some(first_row) = table.rows.first() else {
        return 0;
    };
    first_row
        .iter()
        .skip(1)
        .filter(|cell| MODEL_NAME_RE.is_match(&normalize(&cell.text)))
        .count()
}
