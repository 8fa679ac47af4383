//! Table output.

use prettytable::{Table, format, row};

use crate::manifest::ImageRecord;

/// Format records as a table, one row per image.
pub fn format_records(records: &[ImageRecord]) -> String {
    let mut table = new_table();
    table.set_titles(row!["KIND", "NAME", "IMAGE"]);

    for record in records {
        for image in &record.images {
            table.add_row(row![record.kind, record.name, image]);
        }
    }

    table.to_string()
}

/// Format a flat image list as a single-column table.
pub fn format_images(images: &[String]) -> String {
    let mut table = new_table();
    table.set_titles(row!["IMAGE"]);

    for image in images {
        table.add_row(row![image]);
    }

    table.to_string()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table
}
