//! Table rendering for `--output table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use svet_model::{MatchOutcome, MatchResult, MatchSummary, OpaqueId, ScoredMatch};

/// One row per scored match; unmatched queries get a single dimmed row.
pub fn results_table(results: &[MatchResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("AI name"),
        header_cell("Catalog name"),
        header_cell("Equipment"),
        header_cell("Clinic"),
        header_cell("Similarity"),
        header_cell("Exact"),
        header_cell("Custom"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);

    for result in results {
        if result.matches.is_empty() {
            table.add_row(vec![
                query_cell(result),
                dim_cell("no match"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (idx, scored) in result.matches.iter().enumerate() {
            let query = if idx == 0 {
                query_cell(result)
            } else {
                dim_cell("")
            };
            table.add_row(vec![
                query,
                Cell::new(&scored.name),
                Cell::new(&scored.equipment_id),
                clinic_cell(scored.clinic_id.as_ref()),
                similarity_cell(scored),
                flag_cell(scored.is_exact_match),
                flag_cell(scored.is_custom),
            ]);
        }
    }
    table
}

/// One-line tally printed under the table.
pub fn summary_line(summary: &MatchSummary) -> String {
    format!(
        "{} queries: {} exact, {} fuzzy, {} unmatched",
        summary.total, summary.exact, summary.fuzzy, summary.unmatched
    )
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn query_cell(result: &MatchResult) -> Cell {
    let color = match result.outcome() {
        MatchOutcome::Exact => Color::Green,
        MatchOutcome::Fuzzy => Color::Yellow,
        MatchOutcome::Unmatched => Color::Red,
    };
    Cell::new(&result.ai_name)
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn clinic_cell(clinic_id: Option<&OpaqueId>) -> Cell {
    match clinic_id {
        Some(id) => Cell::new(id),
        None => dim_cell("global"),
    }
}

fn similarity_cell(scored: &ScoredMatch) -> Cell {
    let cell = Cell::new(format!("{:.3}", scored.similarity));
    if scored.is_exact_match {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
