pub mod errors;
pub mod models;
pub mod utils;

pub use errors::SheetError;
pub use models::{
    Cell,
    Cluster,
    Grid,
    GridRow,
    HanjaCard,
    HanjaDetail,
    Numbered,
    QuizBlankItem,
    QuizMcItem,
    QuizOption,
    QuizSheet,
    SectionHeader,
    SentenceSection,
    TraceSection,
    VocabularyEntry,
    Worksheet,
    WorksheetKind,
};
