//! Turns lookup records into console lines.
//!
//! Pure: no environment reads, no I/O. Whether ANSI styling is wanted is
//! decided by the caller and passed in as a [`Styling`].

pub mod style;
pub mod wrap;

pub use style::{Style, Styling};

use models::ErrorRecord;

use unicode_width::UnicodeWidthStr;

/// Total width of a wrapped description line, indent included.
pub const WRAP_WIDTH: usize = 70;
pub const DESCRIPTION_INDENT: &str = "    ";

/// Format `records` for display, one header line per record.
///
/// With `verbose`, a record with a non-empty description is followed by one
/// extra entry holding the wrapped, indented description (lines joined by
/// `\n`). Record order is preserved.
pub fn format_records(records: &[ErrorRecord], verbose: bool, styling: Styling) -> Vec<String> {
    let width = name_column_width(records);

    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        lines.push(header_line(record, width, styling));

        if verbose && !record.description.is_empty() {
            let wrapped =
                wrap::wrap_indented(&record.description, WRAP_WIDTH, DESCRIPTION_INDENT);
            if !wrapped.is_empty() {
                lines.push(wrapped.join("\n"));
            }
        }
    }
    lines
}

/// Widest `name` among `records`, in terminal columns. 0 when empty.
pub fn name_column_width(records: &[ErrorRecord]) -> usize {
    records
        .iter()
        .map(|record| record.name.width())
        .max()
        .unwrap_or(0)
}

/// `<name padded to width> <framework>(<header_file>)`
fn header_line(record: &ErrorRecord, width: usize, styling: Styling) -> String {
    let padding = width.saturating_sub(record.name.width());
    let name = format!("{}{}", record.name, " ".repeat(padding));
    let framework = format!(" {}", record.framework);
    let header_file = format!("({})", record.header_file);

    let mut line = styling.paint(Style::Name, &name);
    line.push_str(&styling.paint(Style::Framework, &framework));
    line.push_str(&styling.paint(Style::HeaderFile, &header_file));
    line
}
