//! Rendering helpers shared by the test modules.

use ratatui::buffer::Buffer;

/// Returns the buffer as text, one line per row, trailing blanks trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y).trim_end().to_string() + "\n")
        .collect()
}

/// Returns the text of one buffer row.
#[must_use]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
        .map(|cell| cell.symbol())
        .collect()
}
