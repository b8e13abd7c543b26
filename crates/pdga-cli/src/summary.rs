use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("{}", summary_table(summary));
    print_failure_table(summary);
}

fn summary_table(summary: &RunSummary) -> Table {
    let report = &summary.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Rows"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Names fixed"),
        header_cell("Zero-filled"),
        header_cell("Social URLs"),
        header_cell("URLs dropped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.kind)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total()),
        count_cell(summary.accepted, Color::Green),
        count_cell(summary.rejected(), Color::Red),
        count_cell(report.names_substituted, Color::Cyan),
        count_cell(report.zero_filled, Color::Yellow),
        count_cell(report.social_websites, Color::Cyan),
        count_cell(report.urls_rejected + report.checks_failed, Color::Yellow),
    ]);
    table
}

fn print_failure_table(summary: &RunSummary) {
    if !summary.has_errors() {
        return;
    }
    println!();
    println!("Rejected rows:");
    println!("{}", failure_table(summary));
}

fn failure_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Key"),
        header_cell("Field"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in &summary.failures {
        let key = failure.row.label(summary.label_fields);
        for (position, error) in failure.error.errors.iter().enumerate() {
            let (row_cell, key_cell) = if position == 0 {
                (
                    Cell::new(failure.row.index + 1),
                    key.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
                )
            } else {
                (dim_cell(""), dim_cell(""))
            };
            table.add_row(vec![
                row_cell,
                key_cell,
                Cell::new(error.field()).fg(Color::Red),
                Cell::new(error.to_string()),
            ]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
