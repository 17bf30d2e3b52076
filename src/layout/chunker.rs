use crate::core::{
    utils::collapse_whitespace,
    Cluster,
};

/// Cells per handwriting row on a printed sheet.
pub const ROW_WIDTH: usize = 15;

fn is_carried_punctuation(c: char) -> bool {
    c == '.' || c == ','
}

/// Splits `text` into rows of at most [`ROW_WIDTH`] clusters.
pub fn segment(text: &str) -> Vec<Vec<Cluster>> {
    segment_with_width(text, ROW_WIDTH)
}

/// Greedy row filling. A period or comma arriving when the row is already full is glued
/// onto the row's last cluster instead of opening a new row.
///
/// Empty input still produces one row holding a single empty cluster.
pub fn segment_with_width(text: &str, width: usize) -> Vec<Vec<Cluster>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<Cluster>> = Vec::new();
    let mut current: Vec<Cluster> = Vec::with_capacity(width);

    for c in text.chars() {
        if current.len() == width {
            if is_carried_punctuation(c) {
                if let Some(last) = current.last_mut() {
                    last.push(c);
                }
                continue;
            }
            rows.push(std::mem::replace(&mut current, Vec::with_capacity(width)));
        }
        current.push(c.to_string());
    }

    if !current.is_empty() {
        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(vec![Cluster::new()]);
    }

    rows
}

/// Collapses whitespace and prefixes the single leading space every practice text starts
/// with, so the first cell of a sheet is always left blank.
pub fn prepare_practice_text(text: &str) -> String {
    format!(" {}", collapse_whitespace(text))
}
