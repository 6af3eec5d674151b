use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvcheck_validate::{FileReport, FileStatus, RunReport};

pub fn print_summary(report: &RunReport) {
    println!();
    println!("{}", summary_table(report));
}

/// Per-file rows, violations and status, with a total row.
pub fn summary_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Missing"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in &report.files {
        table.add_row(file_row(file));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_rows()).add_attribute(Attribute::Bold),
        count_cell(report.total_violations()).add_attribute(Attribute::Bold),
        total_status_cell(report),
    ]);
    table
}

fn file_row(file: &FileReport) -> Vec<Cell> {
    match &file.status {
        FileStatus::Checked(outcome) => vec![
            Cell::new(&file.file),
            Cell::new(outcome.rows),
            count_cell(outcome.violations),
            if outcome.is_clean() {
                Cell::new("ok").fg(Color::Green)
            } else {
                Cell::new("missing values").fg(Color::Yellow)
            },
        ],
        FileStatus::Failed(error) => vec![
            Cell::new(&file.file),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(format!("failed: {error}")).fg(Color::Red),
        ],
    }
}

fn total_status_cell(report: &RunReport) -> Cell {
    let failed = report.failed_count();
    if failed > 0 {
        Cell::new(format!("{failed} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if report.has_violations() {
        Cell::new("missing values")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("ok")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
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

fn count_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
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
