//! Human-readable description of a validated model.

use record_core::Model;
use record_generator::setter_name;

/// One line per field: name, canonical type string, kind and setter name.
pub fn model_report(model: &Model) -> String {
    let rows: Vec<[String; 4]> = model
        .iter()
        .map(|(name, spec)| {
            [
                name.to_string(),
                spec.to_string(),
                spec.kind().to_string(),
                setter_name(name),
            ]
        })
        .collect();

    let header = ["FIELD", "TYPE", "KIND", "SETTER"].map(String::from);
    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut report = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        report.push_str(line.trim_end());
        report.push('\n');
    }
    report
}
