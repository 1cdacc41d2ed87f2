use std::collections::HashMap;

use crate::models::{Grid, RawTable};

struct PendingSpan {
    remaining: u32,
    value: String,
}

/// Expand a raw table into a dense rectangular grid. Spanning cells are
/// replicated into every position they cover; under-filled rows are padded
/// with empty strings instead of failing, since malformed vendor markup is
/// common. Pure function: the input table is never mutated.
pub fn resolve(table: &RawTable) -> Grid {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    // Columns still owned by a rowspan from an earlier row.
    let mut pending: HashMap<usize, PendingSpan> = HashMap::new();

    for raw_row in &table.rows {
        let mut row: Vec<String> = Vec::new();
        let mut cells = raw_row.iter();
        let mut next_cell = cells.next();
        let mut col = 0usize;

        loop {
            if let Some(span) = pending.get_mut(&col) {
                row.push(span.value.clone());
                span.remaining -= 1;
                if span.remaining == 0 {
                    pending.remove(&col);
                }
                col += 1;
                continue;
            }

            if let Some(cell) = next_cell {
                next_cell = cells.next();
                let width = cell.colspan.max(1) as usize;
                for offset in 0..width {
                    row.push(cell.text.clone());
                    if cell.rowspan > 1 {
                        pending.insert(
                            col + offset,
                            PendingSpan {
                                remaining: cell.rowspan - 1,
                                value: cell.text.clone(),
                            },
                        );
                    }
                }
                col += width;
                continue;
            }

            // Raw cells exhausted; pad gaps up to any rowspan still owed
            // further right, then stop.
            if pending.keys().any(|&owned| owned > col) {
                row.push(String::new());
                col += 1;
                continue;
            }
            break;
        }

        rows.push(row);
    }

    // Rectangularize: every row padded to the widest resolved row.
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }

    Grid { rows }
}
