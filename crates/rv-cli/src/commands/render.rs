//! Text rendering of a table model, the CLI's display widget

use rv_db::TableModel;

/// Render up to `max_rows` rows of `model` as an aligned text table.
///
/// Numeric columns are right-aligned. Absent cells render empty.
pub(crate) fn render_table(model: &dyn TableModel, max_rows: usize) -> String {
    let column_count = model.column_count();
    let row_count = model.row_count();
    let shown = row_count.min(max_rows);

    let headers: Vec<String> = (0..column_count).map(|c| model.column_name(c)).collect();
    let numeric: Vec<bool> = (0..column_count)
        .map(|c| model.column_type(c).is_numeric())
        .collect();
    let cells: Vec<Vec<String>> = (0..shown)
        .map(|r| {
            (0..column_count)
                .map(|c| model.value_at(r, c).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..column_count)
        .map(|c| {
            cells
                .iter()
                .map(|row| row[c].chars().count())
                .chain(std::iter::once(headers[c].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    if column_count > 0 {
        let header_line: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{h:<w$}"))
            .collect();
        out.push_str(header_line.join(" | ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(&numeric)
                .map(|((cell, w), is_numeric)| {
                    if *is_numeric {
                        format!("{cell:>w$}")
                    } else {
                        format!("{cell:<w$}")
                    }
                })
                .collect();
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }
    }

    out.push_str(&row_footer(row_count, shown));
    out.push('\n');
    out
}

fn row_footer(row_count: usize, shown: usize) -> String {
    let noun = if row_count == 1 { "row" } else { "rows" };
    if shown < row_count {
        format!("({row_count} {noun}, showing first {shown})")
    } else {
        format!("({row_count} {noun})")
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
