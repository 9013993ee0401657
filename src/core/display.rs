use crate::domain::model::{Classement, Match};
use crate::utils::error::Result;
use serde_json::Value;

/// Text rendering of the table de marque for the terminal. Stands in for the
/// original display surface.
pub fn render_matches(matches: &[Match]) -> String {
    let headers = ["Id", "Équipe A", "Équipe B", "Date", "Statut"];
    let rows: Vec<Vec<String>> = matches
        .iter()
        .map(|m| {
            vec![
                m.id.clone(),
                m.team_a.clone(),
                m.team_b.clone(),
                m.date.clone(),
                m.status.label().to_string(),
            ]
        })
        .collect();
    render_table(&headers.map(String::from), &rows)
}

pub fn render_match(m: &Match) -> String {
    render_matches(std::slice::from_ref(m))
}

/// Classement shape is opaque: an array of flat objects renders as a table
/// with columns taken from the first entry, anything else as pretty JSON.
pub fn render_classement(classement: &Classement) -> Result<String> {
    if let Some(rows) = classement.as_array() {
        if !rows.is_empty() && rows.iter().all(Value::is_object) {
            let columns: Vec<String> = rows[0]
                .as_object()
                .map(|obj| obj.keys().cloned().collect())
                .unwrap_or_default();
            let body: Vec<Vec<String>> = rows
                .iter()
                .filter_map(Value::as_object)
                .map(|obj| {
                    columns
                        .iter()
                        .map(|c| obj.get(c).map(cell_text).unwrap_or_default())
                        .collect()
                })
                .collect();
            return Ok(render_table(&columns, &body));
        }
    }
    Ok(serde_json::to_string_pretty(classement)?)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render_row(row));
    }
    lines.join("\n")
}
