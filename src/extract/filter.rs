use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Triple;

/// Removable power-supply module codes (PSR/LSVM/LSPM/LSWM families),
/// matched only when the code is the entire field or value.
static POWER_MODULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:PSR|LS[VPW]M)[0-9A-Z]+(?:-[0-9A-Z]+)*$").expect("Invalid part code regex")
});

/// Bare transceiver part codes (SFP/SFP28/QSFP/XFP families).
static TRANSCEIVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Q?SFP(?:28|\+)?|XFP)-[0-9A-Z+-]+$").expect("Invalid transceiver regex")
});

/// Board-support indicator labels; these rows describe compatibility
/// matrices, not model specs. Summary extraction consults this too, since
/// there the row label would otherwise leak into a concatenated value out
/// of this filter's reach.
pub(crate) fn is_board_support_label(label: &str) -> bool {
    let lowered = label.to_lowercase();
    lowered.contains("是否支持") || lowered.contains("supported?")
}

/// Filler-panel rows describe blank slot covers, not switch capability.
const FILLER_PANEL_TERMS: &[&str] = &["假面板", "filler panel", "blank panel"];

/// Drop triples matching the exclusion rules. Pure and order-preserving:
/// surviving triples keep their original relative order.
pub fn filter(triples: Vec<Triple>, include_transceivers: bool) -> Vec<Triple> {
    triples
        .into_iter()
        .filter(|triple| !is_excluded(triple, include_transceivers))
        .collect()
}

fn is_excluded(triple: &Triple, include_transceivers: bool) -> bool {
    let field = triple.field.to_lowercase();
    let value = triple.value.to_lowercase();

    if is_board_support_label(&triple.field) {
        return true;
    }
    if FILLER_PANEL_TERMS
        .iter()
        .any(|term| field.contains(term) || value.contains(term))
    {
        return true;
    }
    if POWER_MODULE_RE.is_match(triple.field.trim()) || POWER_MODULE_RE.is_match(triple.value.trim())
    {
        return true;
    }
    if !include_transceivers
        && (TRANSCEIVER_RE.is_match(triple.field.trim())
            || TRANSCEIVER_RE.is_match(triple.value.trim()))
    {
        return true;
    }
    false
}
