use super::chunker::{
    prepare_practice_text,
    segment_with_width,
    ROW_WIDTH,
};
use crate::core::{
    Cell,
    Cluster,
    Grid,
    GridRow,
};

/// Pads `clusters` to [`ROW_WIDTH`] and turns each one into a [`Cell`].
pub fn build_row(clusters: &[Cluster]) -> GridRow {
    build_row_with_width(clusters, ROW_WIDTH)
}

/// Rows longer than `width` are kept whole; padding never drops clusters.
pub fn build_row_with_width(clusters: &[Cluster], width: usize) -> GridRow {
    let mut cells: Vec<Cell> = clusters.iter().map(|cluster| Cell::from_cluster(cluster)).collect();
    if cells.len() < width {
        cells.resize(width, Cell::default());
    }
    GridRow { cells }
}

/// Normalizes `text`, segments it and pads every row: the full pipeline for one practice text.
pub fn build_grid(text: &str, width: usize) -> Grid {
    segment_with_width(&prepare_practice_text(text), width)
        .iter()
        .map(|clusters| build_row_with_width(clusters, width))
        .collect()
}
