use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cms_model::{ImportOutcome, RowStatus};

use crate::commands::ImportRunResult;

pub fn print_import_summary(result: &ImportRunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Status"),
        header_cell("Content id"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for outcome in &result.outcomes {
        table.add_row(outcome_row(outcome));
    }
    println!("{table}");

    let failed = result
        .outcomes
        .iter()
        .filter(|outcome| outcome.is_failed())
        .count();
    let created = result.outcomes.len() - failed;
    println!("Created: {created}  Failed: {failed}");
    if let Some(path) = &result.output {
        println!("Records: {}", path.display());
    }
}

fn outcome_row(outcome: &ImportOutcome) -> Vec<Cell> {
    match &outcome.status {
        RowStatus::Created { content_id, title } => vec![
            Cell::new(outcome.row_index),
            Cell::new("created").fg(Color::Green),
            Cell::new(content_id),
            Cell::new(title.clone()),
        ],
        RowStatus::Failed { message } => vec![
            Cell::new(outcome.row_index),
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            Cell::new(message.clone()).fg(Color::Red),
        ],
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
