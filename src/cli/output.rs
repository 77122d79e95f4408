//! Plain text rendering of boards and researchers.

use std::io::{self, Write};

use labboard_board::Lane;
use labboard_protocol::{BoardItem, Researcher, format_due_date};

/// Writes one block per lane: a heading with the count, then one line per
/// item.
///
/// ```text
/// To Do (2)
///   #2   Coral reef bleaching  due 2025-12-01
///   #3   Urban heat islands
/// ```
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_lanes<T: BoardItem>(out: &mut impl Write, lanes: &[Lane<'_, T>]) -> io::Result<()> {
    for (index, lane) in lanes.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} ({})", lane.name(), lane.len())?;
        if lane.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for item in &lane.items {
            write_item_line(out, *item)?;
        }
    }
    Ok(())
}

/// Writes a single indented item line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_item_line<T: BoardItem>(out: &mut impl Write, item: &T) -> io::Result<()> {
    let id = format!("#{}", item.id());
    write!(out, "  {id:<4} {}", item.title())?;
    if item.due_date().is_some() {
        write!(out, "  due {}", format_due_date(item.due_date()))?;
    }
    writeln!(out)
}

/// Writes the researcher directory, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_researchers(out: &mut impl Write, researchers: &[Researcher]) -> io::Result<()> {
    if researchers.is_empty() {
        return writeln!(out, "No researchers");
    }
    for researcher in researchers {
        writeln!(out, "{researcher}")?;
    }
    Ok(())
}
