//! Table formatting utilities using comfy-table.

use comfy_table::{Cell, Table};

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(*h).add_attribute(comfy_table::Attribute::Bold))
                .collect::<Vec<_>>(),
        )
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

/// Prints a table of packages with their paths and build counts.
pub fn print_package_table(packages: &[(String, String, usize)]) {
    let mut table = new_table(&["Package", "Path", "Builds"]);

    for (name, path, builds) in packages {
        table.add_row(vec![
            Cell::new(name).fg(comfy_table::Color::White),
            Cell::new(path).fg(comfy_table::Color::DarkGrey),
            Cell::new(builds),
        ]);
    }

    println!("{}", table);
}

/// Prints the outputs of one package's build plan.
///
/// Rows are `(build, format, file, notes)`.
pub fn print_plan_table(rows: &[(String, String, String, String)]) {
    let mut table = new_table(&["Build", "Format", "File", "Options"]);

    for (build, format, file, notes) in rows {
        table.add_row(vec![
            Cell::new(build).fg(comfy_table::Color::Cyan),
            Cell::new(format),
            Cell::new(file).fg(comfy_table::Color::White),
            Cell::new(notes).fg(comfy_table::Color::DarkGrey),
        ]);
    }

    println!("{}", table);
}
