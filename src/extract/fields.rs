use crate::extract::filter::is_board_support_label;
use crate::models::{Grid, TableKind, Triple};
use crate::parsers::{normalize, parse_port_groups};

/// Aggregate field name carrying the concatenated feature list per model.
pub const SOFTWARE_SUMMARY_FIELD: &str = "Software features summary";
/// Aggregate field name carrying the concatenated standards list per model.
pub const PROTOCOL_SUMMARY_FIELD: &str = "Protocols and standards";

/// Map grid rows/columns to (model, field, value) triples according to the
/// table kind's layout rules. Every emitted label and value has passed
/// through the text normalizer.
pub fn extract(grid: &Grid, kind: TableKind) -> Vec<Triple> {
    let rows = &grid.rows;

    // Skip leading title rows: a full-width spanned cell resolves to a row
    // of identical values.
    let mut start = 0;
    while start < rows.len() && is_title_row(&rows[start]) {
        start += 1;
    }
    let Some(header) = rows.get(start) else {
        return Vec::new();
    };

    // Model names from header columns >= 1; column 0 labels the fields.
    let models: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(col, cell)| (col, normalize(cell)))
        .filter(|(_, model)| !model.is_empty())
        .collect();
    if models.is_empty() {
        return Vec::new();
    }

    let body = &rows[start + 1..];
    match kind {
        TableKind::MultiModelHardware => extract_hardware(body, &models),
        TableKind::Poe => extract_poe(body, &models),
        TableKind::Performance => extract_performance(body, &models),
        TableKind::SoftwareFeature => extract_summary(body, &models, SOFTWARE_SUMMARY_FIELD),
        TableKind::Protocol => extract_summary(body, &models, PROTOCOL_SUMMARY_FIELD),
    }
}

fn is_title_row(row: &[String]) -> bool {
    row.len() > 1 && row.windows(2).all(|pair| pair[0] == pair[1])
}

fn extract_hardware(body: &[Vec<String>], models: &[(usize, String)]) -> Vec<Triple> {
    let mut triples = Vec::new();
    for row in body {
        let field = normalize(&row[0]);
        if field.is_empty() {
            continue;
        }
        for (col, model) in models {
            let value = normalize(&row[*col]);
            if value.is_empty() {
                continue;
            }
            triples.push(Triple::new(model, &field, &value));
            if is_port_field(&field) {
                for group in parse_port_groups(&value) {
                    triples.push(Triple::new(
                        model,
                        format!("{} ports", group.port_type),
                        group.display_count(),
                    ));
                }
            }
        }
    }
    triples
}

fn is_port_field(field: &str) -> bool {
    let lowered = field.to_lowercase();
    lowered.contains("port") || field.contains("端口") || field.contains("接口")
}

/// Canonical POE field for a row label; rows outside the recognized POE
/// vocabulary contribute nothing.
fn poe_field(label: &str) -> Option<&'static str> {
    let lowered = label.to_lowercase();
    if lowered.contains("802.3bt") {
        if lowered.contains("90") {
            return Some("802.3bt (90 W) ports");
        }
        return Some("802.3bt (60 W) ports");
    }
    if lowered.contains("802.3at") {
        return Some("802.3at ports");
    }
    if lowered.contains("802.3af") {
        return Some("802.3af ports");
    }
    let power = lowered.contains("poe") || lowered.contains("power");
    if power
        && (lowered.contains("budget") || lowered.contains("capacity") || lowered.contains("total"))
    {
        return Some("PoE power budget");
    }
    None
}

fn extract_poe(body: &[Vec<String>], models: &[(usize, String)]) -> Vec<Triple> {
    let mut triples = Vec::new();
    for row in body {
        let label = normalize(&row[0]);
        let Some(field) = poe_field(&label) else {
            continue;
        };
        for (col, model) in models {
            let value = normalize(&row[*col]);
            if value.is_empty() {
                continue;
            }
            triples.push(Triple::new(model, field, value));
        }
    }
    triples
}

/// Canonical performance field for a row label.
fn performance_field(label: &str) -> Option<&'static str> {
    let lowered = label.to_lowercase();
    if lowered.contains("mac") {
        Some("MAC address table size")
    } else if lowered.contains("vlan") {
        Some("VLAN entries")
    } else if lowered.contains("arp") {
        Some("ARP entries")
    } else if lowered.contains("acl") {
        Some("ACL rules")
    } else if lowered.contains("rout") {
        Some("Routing entries")
    } else {
        None
    }
}

fn extract_performance(body: &[Vec<String>], models: &[(usize, String)]) -> Vec<Triple> {
    let mut triples = Vec::new();
    for row in body {
        let label = normalize(&row[0]);
        let Some(field) = performance_field(&label) else {
            continue;
        };
        for (col, model) in models {
            let value = normalize(&row[*col]);
            if value.is_empty() {
                continue;
            }
            triples.push(Triple::new(model, field, value));
        }
    }
    triples
}

const NEGATION_MARKS: &[&str] = &["-", "—", "×", "x", "n/a", "no", "none", "不支持"];
const AFFIRMATION_MARKS: &[&str] = &["√", "✓", "•", "y", "yes", "supported", "支持"];

fn is_negation(value: &str) -> bool {
    let lowered = value.to_lowercase();
    NEGATION_MARKS.iter().any(|mark| lowered == *mark)
}

fn is_affirmation_mark(value: &str) -> bool {
    let lowered = value.to_lowercase();
    AFFIRMATION_MARKS.iter().any(|mark| lowered == *mark)
}

/// Software-feature and protocol tables collapse to one summary triple per
/// model: row labels in row order, joined with "; ". Cells carrying
/// descriptive text (not a bare affirmation mark) keep it as `label: text`
/// so quantitative limits survive.
fn extract_summary(
    body: &[Vec<String>],
    models: &[(usize, String)],
    field: &str,
) -> Vec<Triple> {
    let mut parts: Vec<Vec<String>> = vec![Vec::new(); models.len()];
    for row in body {
        let label = normalize(&row[0]);
        if label.is_empty() || is_board_support_label(&label) {
            continue;
        }
        for (slot, (col, _)) in models.iter().enumerate() {
            let value = normalize(&row[*col]);
            if value.is_empty() || is_negation(&value) {
                continue;
            }
            if is_affirmation_mark(&value) {
                parts[slot].push(label.clone());
            } else {
                parts[slot].push(format!("{}: {}", label, value));
            }
        }
    }

    models
        .iter()
        .zip(parts)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|((_, model), entries)| Triple::new(model, field, entries.join("; ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: Vec<Vec<&str>>) -> Grid {
        Grid {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn hardware_triples_per_model_column() {
        let g = grid(vec![
            vec!["Model", "S1", "S2"],
            vec!["Ports", "24", "48"],
        ]);

        let triples = extract(&g, TableKind::MultiModelHardware);

        assert_eq!(
            triples,
            vec![
                Triple::new("S1", "Ports", "24"),
                Triple::new("S2", "Ports", "48"),
            ]
        );
    }

    #[test]
    fn hardware_skips_empty_values() {
        let g = grid(vec![
            vec!["Model", "S1", "S2"],
            vec!["Weight", "3 kg", ""],
        ]);

        let triples = extract(&g, TableKind::MultiModelHardware);

        assert_eq!(triples, vec![Triple::new("S1", "Weight", "3 kg")]);
    }

    #[test]
    fn hardware_title_row_is_skipped() {
        let g = grid(vec![
            vec!["Specifications", "Specifications", "Specifications"],
            vec!["Model", "S1", "S2"],
            vec!["Ports", "24", "48"],
        ]);

        let triples = extract(&g, TableKind::MultiModelHardware);

        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0], Triple::new("S1", "Ports", "24"));
    }

    #[test]
    fn hardware_port_rows_emit_derived_counts() {
        let g = grid(vec![
            vec!["Item", "S5130S-28S-EI"],
            vec!["Fixed ports", "24*10/100/1000Base-T, 4*10G SFP+"],
        ]);

        let triples = extract(&g, TableKind::MultiModelHardware);

        assert_eq!(
            triples,
            vec![
                Triple::new(
                    "S5130S-28S-EI",
                    "Fixed ports",
                    "24*10/100/1000Base-T, 4*10G SFP+"
                ),
                Triple::new("S5130S-28S-EI", "10/100/1000Base-T ports", "24"),
                Triple::new("S5130S-28S-EI", "10G SFP+ ports", "4"),
            ]
        );
    }

    #[test]
    fn poe_rows_map_to_canonical_labels() {
        let g = grid(vec![
            vec!["Item", "S5130S-28S-HPWR-EI", "S5130S-52S-HPWR-EI"],
            vec!["PoE power capacity", "370 W", "740 W"],
            vec!["802.3af ports", "24", "48"],
            vec!["802.3at ports", "24", "48"],
            vec!["802.3bt (60 W) ports", "12", "24"],
            vec!["802.3bt (90 W) ports", "8", "16"],
            vec!["Fan count", "2", "2"],
        ]);

        let triples = extract(&g, TableKind::Poe);

        let fields: Vec<&str> = triples
            .iter()
            .filter(|t| t.model == "S5130S-28S-HPWR-EI")
            .map(|t| t.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec![
                "PoE power budget",
                "802.3af ports",
                "802.3at ports",
                "802.3bt (60 W) ports",
                "802.3bt (90 W) ports",
            ]
        );
        // Unrecognized rows contribute nothing.
        assert!(triples.iter().all(|t| !t.field.contains("Fan")));
        // Values stay attached to their model column.
        assert!(triples
            .iter()
            .any(|t| t.model == "S5130S-52S-HPWR-EI" && t.field == "802.3af ports" && t.value == "48"));
    }

    #[test]
    fn performance_rows_map_to_fixed_vocabulary() {
        let g = grid(vec![
            vec!["Item", "S5590-28S-EI"],
            vec!["MAC address table", "32K"],
            vec!["VLAN table", "4094"],
            vec!["IPv4 routing entries", "12K"],
            vec!["ARP table", "8K"],
            vec!["Ingress ACL", "1536"],
            vec!["Packet buffer", "4 MB"],
        ]);

        let triples = extract(&g, TableKind::Performance);

        let fields: Vec<&str> = triples.iter().map(|t| t.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "MAC address table size",
                "VLAN entries",
                "Routing entries",
                "ARP entries",
                "ACL rules",
            ]
        );
    }

    #[test]
    fn software_features_collapse_to_summary() {
        let g = grid(vec![
            vec!["Feature", "S1", "S2"],
            vec!["Static routing", "√", "√"],
            vec!["RIP", "×", "√"],
            vec!["VLAN", "4K VLANs", "4K VLANs"],
        ]);

        let triples = extract(&g, TableKind::SoftwareFeature);

        assert_eq!(
            triples,
            vec![
                Triple::new("S1", SOFTWARE_SUMMARY_FIELD, "Static routing; VLAN: 4K VLANs"),
                Triple::new(
                    "S2",
                    SOFTWARE_SUMMARY_FIELD,
                    "Static routing; RIP; VLAN: 4K VLANs"
                ),
            ]
        );
    }

    #[test]
    fn protocols_collapse_in_row_order() {
        let g = grid(vec![
            vec!["Standard", "S1"],
            vec!["IEEE 802.1Q", "Supported"],
            vec!["IEEE 802.3ad", "Supported"],
            vec!["RFC 2328 OSPFv2", "Supported"],
        ]);

        let triples = extract(&g, TableKind::Protocol);

        assert_eq!(
            triples,
            vec![Triple::new(
                "S1",
                PROTOCOL_SUMMARY_FIELD,
                "IEEE 802.1Q; IEEE 802.3ad; RFC 2328 OSPFv2"
            )]
        );
    }

    #[test]
    fn board_support_rows_never_reach_a_summary() {
        let g = grid(vec![
            vec!["Feature", "S1"],
            vec!["Static routing", "√"],
            vec!["是否支持", "是"],
        ]);

        let triples = extract(&g, TableKind::SoftwareFeature);

        assert_eq!(
            triples,
            vec![Triple::new("S1", SOFTWARE_SUMMARY_FIELD, "Static routing")]
        );
    }

    #[test]
    fn header_only_grid_yields_nothing() {
        let g = grid(vec![vec!["Model", "S1"]]);
        assert!(extract(&g, TableKind::MultiModelHardware).is_empty());
    }

    #[test]
    fn grid_without_model_columns_yields_nothing() {
        let g = grid(vec![vec!["Model"], vec!["Ports"]]);
        assert!(extract(&g, TableKind::MultiModelHardware).is_empty());
    }
}
