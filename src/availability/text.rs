//! Plain-text rendering of a projection, used by `--once`.

use std::fmt::Write;

use crate::availability::dates;
use crate::availability::eligibility::EligibilityRule;
use crate::availability::projection::{Cell, Projection};

const HEADERS: [&str; 3] = ["Locality", "Name", "PIN"];

pub fn render_text(projection: &Projection, rule: &EligibilityRule) -> String {
    let Some(grid) = projection.grid() else {
        return format!("{}\n", rule.empty_message());
    };

    let mut table: Vec<Vec<String>> = Vec::with_capacity(grid.rows.len() + 1);
    let mut header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    header.extend(grid.dates.iter().map(|d| dates::column_label(*d)));
    table.push(header);

    for row in &grid.rows {
        let mut line = vec![
            row.block_name.clone(),
            row.name.clone(),
            row.pincode.to_string(),
        ];
        line.extend(row.cells.iter().map(cell_text));
        table.push(line);
    }

    let columns = table[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            table
                .iter()
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &table {
        let mut rendered = String::new();
        for (col, value) in line.iter().enumerate() {
            if col > 0 {
                rendered.push_str("  ");
            }
            // Numbers right-aligned, text left-aligned.
            if col >= 2 {
                let _ = write!(rendered, "{:>width$}", value, width = widths[col]);
            } else {
                let _ = write!(rendered, "{:<width$}", value, width = widths[col]);
            }
        }
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Absent => String::new(),
        Cell::Slots { capacity, .. } => capacity.to_string(),
    }
}
