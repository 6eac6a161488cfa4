use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pheno_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Reference: {}", result.reference.display());
    println!(
        "Participants: {} rows, {} distinct",
        result.reference_rows, result.distinct_participants
    );
    println!("Output mode: {}", result.mode.as_str());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Phenotype"),
        header_cell("Source"),
        header_cell("Listed"),
        header_cell("Matched"),
        header_cell("Unmatched"),
        header_cell("Cases"),
        header_cell("Controls"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in &result.phenotypes {
        let source = summary
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| summary.source.display().to_string());
        table.add_row(vec![
            Cell::new(summary.name.as_str()).add_attribute(Attribute::Bold),
            dim_cell(source),
            Cell::new(summary.listed),
            Cell::new(summary.matched),
            count_cell(summary.unmatched, Color::Yellow),
            Cell::new(summary.cases).fg(Color::Green),
            Cell::new(summary.controls),
        ]);
    }
    println!("{table}");

    let mut outputs = Table::new();
    outputs.set_header(vec![header_cell("Output"), header_cell("Rows")]);
    apply_table_style(&mut outputs);
    align_column(&mut outputs, 1, CellAlignment::Right);
    for file in &result.outputs {
        outputs.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.rows),
        ]);
    }
    println!("{outputs}");

    if !result.skipped.is_empty() {
        let mut skipped = Table::new();
        skipped.set_header(vec![header_cell("Skipped file"), header_cell("Reason")]);
        apply_table_style(&mut skipped);
        for file in &result.skipped {
            skipped.add_row(vec![
                Cell::new(file.path.display()).fg(Color::Red),
                Cell::new(&file.reason),
            ]);
        }
        println!("{skipped}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
