//! Worksheet layout and quiz generation for vocabulary study sheets.
//!
//! Vocabulary entries go in; handwriting grids, hanja cards or quiz items come out, ready
//! for a markup renderer.

pub mod core;
pub mod hanja;
pub mod layout;
pub mod persistence;
pub mod quiz;
pub mod settings;
pub mod sheet;
pub mod vocab;

pub use crate::{
    core::{
        SheetError,
        VocabularyEntry,
        Worksheet,
        WorksheetKind,
    },
    settings::SheetSettings,
    sheet::SheetAssembler,
    vocab::VocabularyDb,
};
