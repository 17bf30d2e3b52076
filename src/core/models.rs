use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    utils::{
        deserialize_id,
        null_as_default,
        strip_to_hanja,
    },
    SheetError,
};

/// One vocabulary item as supplied by the vocabulary source. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hanja: String, // May be empty, a placeholder ("-", "─") or decorated
    #[serde(default, deserialize_with = "null_as_default")]
    pub meaning: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: u32,
}

impl VocabularyEntry {
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            hanja: String::new(),
            meaning: String::new(),
            examples: Vec::new(),
            grade: 0,
        }
    }

    pub fn with_hanja(mut self, hanja: impl Into<String>) -> Self {
        self.hanja = hanja.into();
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade = grade;
        self
    }

    /// The hanja annotation reduced to CJK ideographs only.
    pub fn stripped_hanja(&self) -> String {
        strip_to_hanja(&self.hanja)
    }
}

/// A raw unit produced by the row chunker: one character, or two when punctuation was carried.
pub type Cluster = String;

/// One grid position. `sub_glyph` is only set when punctuation was carried into the cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    pub main_glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_glyph: Option<String>,
}

impl Cell {
    pub fn from_cluster(cluster: &str) -> Self {
        let mut chars = cluster.chars();
        match chars.next() {
            Some(first) => {
                let rest: String = chars.collect();
                Cell {
                    main_glyph: first.to_string(),
                    sub_glyph: if rest.is_empty() { None } else { Some(rest) },
                }
            }
            None => Cell::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main_glyph.is_empty()
    }

    /// A period or comma that was never merged; renderers anchor it near the baseline.
    pub fn is_standalone_punctuation(&self) -> bool {
        self.sub_glyph.is_none() && matches!(self.main_glyph.as_str(), "." | ",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GridRow {
    pub cells: Vec<Cell>,
}

impl GridRow {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Concatenation of every glyph in the row, padding excluded.
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .flat_map(|cell| {
                std::iter::once(cell.main_glyph.as_str()).chain(cell.sub_glyph.as_deref())
            })
            .collect()
    }
}

/// Every row of one segmented text, padded for rendering.
pub type Grid = Vec<GridRow>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanjaDetail {
    pub character: char,
    pub reading: String, // eum
    pub gloss: String,   // hun
    pub related_words: Vec<String>,
    pub first_seen_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub entry: VocabularyEntry,
    pub masked_meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizMcItem {
    pub target: VocabularyEntry,
    pub options: Vec<QuizOption>,
}

impl QuizMcItem {
    /// Zero-based position of the correct option.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.entry.id == self.target.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizBlankItem {
    pub target: VocabularyEntry,
    pub blanked_sentence: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Numbered<T> {
    pub number: usize,
    #[serde(flatten)]
    pub item: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuizSheet {
    pub multiple_choice: Vec<Numbered<QuizMcItem>>,
    pub fill_in_blank: Vec<Numbered<QuizBlankItem>>,
}

/// Header fields shared by the meaning and sentence sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub word: String,
    pub hanja: String,
    pub meaning: String,
}

impl From<&VocabularyEntry> for SectionHeader {
    fn from(entry: &VocabularyEntry) -> Self {
        SectionHeader {
            word: entry.word.clone(),
            hanja: entry.hanja.clone(),
            meaning: entry.meaning.clone(),
        }
    }
}

/// Meaning sheet section: the same grid traced once per pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSection {
    pub header: SectionHeader,
    pub passes: Vec<Grid>,
}

/// Sentence sheet section: one grid per example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceSection {
    pub header: SectionHeader,
    pub sentences: Vec<Grid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanjaCard {
    pub detail: HanjaDetail,
    pub writer_id: String,
    pub stroke_order_id: String,
    pub practice_boxes: usize,
}

impl HanjaCard {
    pub fn new(detail: HanjaDetail, practice_boxes: usize) -> Self {
        let index = detail.first_seen_index;
        HanjaCard {
            detail,
            writer_id: format!("hanzi-writer-{}", index),
            stroke_order_id: format!("stroke-order-{}", index),
            practice_boxes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorksheetKind {
    Meaning,
    Sentence,
    Hanja,
    Quiz,
}

impl WorksheetKind {
    pub const ALL: [WorksheetKind; 4] = [
        WorksheetKind::Meaning,
        WorksheetKind::Sentence,
        WorksheetKind::Hanja,
        WorksheetKind::Quiz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorksheetKind::Meaning => "meaning",
            WorksheetKind::Sentence => "sentence",
            WorksheetKind::Hanja => "hanja",
            WorksheetKind::Quiz => "quiz",
        }
    }
}

impl fmt::Display for WorksheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorksheetKind {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        WorksheetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| SheetError::UnknownWorksheetKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Worksheet {
    Meaning(Vec<TraceSection>),
    Sentence(Vec<SentenceSection>),
    Hanja(Vec<HanjaCard>),
    Quiz(QuizSheet),
}

impl Worksheet {
    pub fn kind(&self) -> WorksheetKind {
        match self {
            Worksheet::Meaning(_) => WorksheetKind::Meaning,
            Worksheet::Sentence(_) => WorksheetKind::Sentence,
            Worksheet::Hanja(_) => WorksheetKind::Hanja,
            Worksheet::Quiz(_) => WorksheetKind::Quiz,
        }
    }
}
