//! Printable storage labels.
//!
//! A label is a boxed text card with the storage name, its location and the
//! id to type at `binz scan`. It stands in for a QR code: nothing is encoded,
//! the id is simply printed large enough to read. Widths are measured in
//! terminal columns so wide characters line up.

use crate::model::Storage;
use unicode_width::UnicodeWidthStr;

const MIN_INNER_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub storage_id: String,
    pub lines: Vec<String>,
}

impl Label {
    pub fn width(&self) -> usize {
        self.lines.first().map(|l| l.width()).unwrap_or(0)
    }
}

pub fn render_label(storage: &Storage) -> Label {
    let mut body = vec![storage.name.clone()];
    if let Some(location) = storage.location() {
        body.push(format!("@ {}", location));
    }
    body.push(String::new());
    body.push(format!("ID  {}", storage.id));
    body.push(format!("binz scan {}", storage.id));

    let inner = body
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(MIN_INNER_WIDTH);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{}┐", "─".repeat(inner + 2)));
    for line in &body {
        let pad = inner - line.width();
        lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner + 2)));

    Label {
        storage_id: storage.id.clone(),
        lines,
    }
}
