//! Handwriting grids: text is cut into fixed-width rows of cells.

pub mod chunker;
pub mod grid;

pub use chunker::{
    prepare_practice_text,
    segment,
    segment_with_width,
    ROW_WIDTH,
};
pub use grid::{
    build_grid,
    build_row,
    build_row_with_width,
};
