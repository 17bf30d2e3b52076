use rand::Rng;

use crate::{
    core::{
        HanjaCard,
        QuizSheet,
        SectionHeader,
        SentenceSection,
        TraceSection,
        VocabularyEntry,
        Worksheet,
        WorksheetKind,
    },
    hanja::{
        CharDictionary,
        CompoundTable,
        HanjaExtractor,
    },
    layout::build_grid,
    quiz::QuizComposer,
    settings::SheetSettings,
};

/// Turns a list of entries into the payload of one worksheet.
///
/// The vocabulary, dictionary and compound table are borrowed read-only; without a
/// vocabulary the worksheet's own entries serve as cross-reference and distractor pool.
/// Settings are normalized on construction.
pub struct SheetAssembler<'a> {
    settings: SheetSettings,
    vocabulary: Option<&'a [VocabularyEntry]>,
    dictionary: Option<&'a CharDictionary>,
    compounds: Option<&'a CompoundTable>,
}

impl<'a> SheetAssembler<'a> {
    pub fn new(settings: &SheetSettings) -> Self {
        let settings = settings.clone().normalized();
        Self { settings, vocabulary: None, dictionary: None, compounds: None }
    }

    pub fn with_vocabulary(mut self, vocabulary: &'a [VocabularyEntry]) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn with_dictionary(mut self, dictionary: &'a CharDictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn with_compounds(mut self, compounds: &'a CompoundTable) -> Self {
        self.compounds = Some(compounds);
        self
    }

    pub fn generate(&self, kind: WorksheetKind, entries: &[VocabularyEntry]) -> Worksheet {
        self.generate_with_rng(kind, entries, &mut rand::rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        kind: WorksheetKind,
        entries: &[VocabularyEntry],
        rng: &mut R,
    ) -> Worksheet {
        let worksheet = match kind {
            WorksheetKind::Meaning => Worksheet::Meaning(self.meaning_sheet(entries)),
            WorksheetKind::Sentence => Worksheet::Sentence(self.sentence_sheet(entries)),
            WorksheetKind::Hanja => Worksheet::Hanja(self.hanja_sheet(entries)),
            WorksheetKind::Quiz => Worksheet::Quiz(self.quiz_sheet(entries, rng)),
        };
        log::debug!("Generated {} worksheet for {} entries", kind, entries.len());
        worksheet
    }

    /// Each meaning is traced `trace_passes` times.
    pub fn meaning_sheet(&self, entries: &[VocabularyEntry]) -> Vec<TraceSection> {
        entries
            .iter()
            .map(|entry| {
                let grid = build_grid(&entry.meaning, self.settings.row_width);
                TraceSection {
                    header: SectionHeader::from(entry),
                    passes: vec![grid; self.settings.trace_passes],
                }
            })
            .collect()
    }

    /// One grid per example sentence, no repetition.
    pub fn sentence_sheet(&self, entries: &[VocabularyEntry]) -> Vec<SentenceSection> {
        entries
            .iter()
            .map(|entry| SentenceSection {
                header: SectionHeader::from(entry),
                sentences: entry
                    .examples
                    .iter()
                    .map(|example| build_grid(example, self.settings.row_width))
                    .collect(),
            })
            .collect()
    }

    pub fn hanja_sheet(&self, entries: &[VocabularyEntry]) -> Vec<HanjaCard> {
        let empty = CharDictionary::new();
        let dictionary = self.dictionary.unwrap_or(&empty);

        HanjaExtractor::new(dictionary, self.pool(entries))
            .with_compounds(self.compounds)
            .with_related_word_cap(self.settings.related_word_cap)
            .extract(entries)
            .into_iter()
            .map(|detail| HanjaCard::new(detail, self.settings.practice_boxes))
            .collect()
    }

    pub fn quiz_sheet<R: Rng + ?Sized>(
        &self,
        entries: &[VocabularyEntry],
        rng: &mut R,
    ) -> QuizSheet {
        QuizComposer::from(&self.settings).compose(entries, self.pool(entries), rng)
    }

    fn pool<'e>(&self, entries: &'e [VocabularyEntry]) -> &'e [VocabularyEntry]
    where
        'a: 'e,
    {
        self.vocabulary.unwrap_or(entries)
    }
}
