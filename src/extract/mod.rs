pub mod aggregate;
pub mod classify;
pub mod fields;
pub mod filter;
pub mod grid;

pub use aggregate::aggregate;
pub use classify::classify;
pub use fields::extract as extract_fields;
pub use filter::filter;
pub use grid::resolve;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::models::{RawCell, RawTable, ResultSet, Triple};
use crate::parsers::clean_text;

/// Options recognized by the extraction core. The politeness delay lives
/// with the fetch collaborator, not here.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub include_transceivers: bool,
    pub min_table_text_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            include_transceivers: false,
            min_table_text_len: 100,
        }
    }
}

/// Extract every spec table on a page into one mapping from model name to
/// field/value record. Stateless; callable repeatedly. `source_url` is
/// provenance for logging only and is never parsed for content.
///
/// Structural anomalies never interrupt the run: malformed spans degrade
/// to padding, unclassified tables are skipped, and whatever valid triples
/// were found are always aggregated.
pub fn extract_tables(html: &str, source_url: &str, config: &ExtractConfig) -> ResultSet {
    let tables = collect_tables(html, config.min_table_text_len);
    info!("Found {} candidate tables on {}", tables.len(), source_url);

    let mut triples: Vec<Triple> = Vec::new();
    for (index, table) in tables.iter().enumerate() {
        let Some(kind) = classify(table) else {
            debug!(
                "Table {} on {} matched no kind signature, skipping",
                index, source_url
            );
            continue;
        };
        let grid = resolve(table);
        let extracted = fields::extract(&grid, kind);
        debug!(
            "Table {} classified as {}: {} triples",
            index,
            kind.key(),
            extracted.len()
        );
        triples.extend(extracted);
    }

    let survivors = filter(triples, config.include_transceivers);
    aggregate(survivors)
}

/// Collect every `<table>` element into a RawTable, entity-decoded and
/// whitespace-cleaned per cell, spans taken from the markup attributes.
/// Tables whose total text is shorter than `min_text_len` are navigation
/// or layout chrome and are dropped.
pub fn collect_tables(html: &str, min_text_len: usize) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let mut tables = Vec::new();
    for table in document.select(&table_selector) {
        let mut raw = RawTable::default();
        let mut text_len = 0usize;

        for row in table.select(&row_selector) {
            let mut cells = Vec::new();
            for cell in row.select(&cell_selector) {
                let text = clean_text(&cell.text().collect::<String>());
                text_len += text.chars().count();
                cells.push(RawCell::spanned(
                    text,
                    span_attr(cell, "colspan"),
                    span_attr(cell, "rowspan"),
                ));
            }
            if !cells.is_empty() {
                raw.rows.push(cells);
            }
        }

        if raw.rows.is_empty() || text_len < min_text_len {
            continue;
        }
        tables.push(raw);
    }
    tables
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> u32 {
    cell.value()
        .attr(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&span| span >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HARDWARE_PAGE: &str = r#"
        <html><body>
        <table>
          <tr><td>Home</td><td>About</td></tr>
        </table>
        <table>
          <tr><th>Item</th><th>S5130S-28S-EI</th><th>S5130S-52S-EI</th></tr>
          <tr><td>Fixed ports</td><td>24*10/100/1000Base-T</td><td>48*10/100/1000Base-T</td></tr>
          <tr><td rowspan="2">Power</td><td>AC input</td><td>AC input</td></tr>
          <tr><td>100 V to 240 V</td><td>100 V to 240 V</td></tr>
          <tr><td>Dimensions</td><td>440 Ã— 260 Ã— 43.6 mm</td><td>440 Ã— 260 Ã— 43.6 mm</td></tr>
          <tr><td>Weight</td><td>3.1 kg</td><td>3.9 kg</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn collects_spec_tables_and_skips_navigation_chrome() {
        let tables = collect_tables(HARDWARE_PAGE, 100);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 6);
        assert_eq!(tables[0].rows[2][0].rowspan, 2);
    }

    #[test]
    fn garbage_span_attributes_default_to_one() {
        let html = r#"<table><tr>
            <td colspan="banana" rowspan="0">a</td>
            <td colspan="2">b</td>
        </tr></table>"#;
        let tables = collect_tables(html, 0);
        assert_eq!(tables[0].rows[0][0].colspan, 1);
        assert_eq!(tables[0].rows[0][0].rowspan, 1);
        assert_eq!(tables[0].rows[0][1].colspan, 2);
    }

    #[test]
    fn end_to_end_extraction_over_a_page() {
        let result = extract_tables(HARDWARE_PAGE, "https://example.test/s5130", &ExtractConfig::default());

        assert_eq!(result.len(), 2);
        let small = &result["S5130S-28S-EI"];
        assert_eq!(small["Fixed ports"], "24*10/100/1000Base-T");
        assert_eq!(small["10/100/1000Base-T ports"], "24");
        // rowspan label applies to both power rows; later row wins the field
        assert_eq!(small["Power"], "100 V to 240 V");
        // mojibake repaired on the way through
        assert_eq!(small["Dimensions"], "440 × 260 × 43.6 mm");
        assert_eq!(result["S5130S-52S-EI"]["Weight"], "3.9 kg");
    }

    #[test]
    fn page_without_spec_tables_yields_empty_result() {
        let html = "<html><body><p>No tables here</p></body></html>";
        let result = extract_tables(html, "https://example.test/empty", &ExtractConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn unclassified_table_contributes_nothing() {
        let html = r#"<table>
          <tr><td>Quick links and site navigation for visitors</td><td>Overview pages</td></tr>
          <tr><td>Documentation downloads and knowledge base</td><td>Community forum</td></tr>
        </table>"#;
        let result = extract_tables(html, "https://example.test/nav", &ExtractConfig::default());
        assert!(result.is_empty());
    }
}
