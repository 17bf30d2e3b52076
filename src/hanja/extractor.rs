use std::collections::HashSet;

use super::dictionary::{
    CharDictionary,
    CompoundTable,
};
use crate::{
    core::{
        HanjaDetail,
        VocabularyEntry,
    },
    settings::DEFAULT_RELATED_WORD_CAP,
};

/// Resolves hanja characters against the vocabulary and the character dictionary.
pub struct HanjaExtractor<'a> {
    dictionary: &'a CharDictionary,
    compounds: Option<&'a CompoundTable>,
    // (stripped hanja, entry) for every cross-reference entry, computed once
    references: Vec<(Vec<char>, &'a VocabularyEntry)>,
    related_word_cap: usize,
}

impl<'a> HanjaExtractor<'a> {
    pub fn new(dictionary: &'a CharDictionary, all_entries: &'a [VocabularyEntry]) -> Self {
        let references = all_entries
            .iter()
            .map(|entry| (entry.stripped_hanja().chars().collect::<Vec<char>>(), entry))
            .filter(|(hanja, _)| !hanja.is_empty())
            .collect();

        Self { dictionary, compounds: None, references, related_word_cap: DEFAULT_RELATED_WORD_CAP }
    }

    pub fn with_compounds(mut self, compounds: Option<&'a CompoundTable>) -> Self {
        self.compounds = compounds;
        self
    }

    /// Never above [`DEFAULT_RELATED_WORD_CAP`].
    pub fn with_related_word_cap(mut self, cap: usize) -> Self {
        self.related_word_cap = cap.min(DEFAULT_RELATED_WORD_CAP);
        self
    }

    /// Unique characters across `entries`, in order of first appearance.
    pub fn extract(&self, entries: &[VocabularyEntry]) -> Vec<HanjaDetail> {
        let mut seen = HashSet::new();
        let mut details = Vec::new();

        for entry in entries {
            for character in entry.stripped_hanja().chars() {
                if !seen.insert(character) {
                    continue;
                }
                details.push(self.resolve(character, details.len()));
            }
        }

        log::debug!("Extracted {} unique hanja from {} entries", details.len(), entries.len());
        details
    }

    fn resolve(&self, character: char, first_seen_index: usize) -> HanjaDetail {
        let (reading, gloss) = self.reading_and_gloss(character);

        HanjaDetail {
            character,
            reading,
            gloss,
            related_words: self.related_words(character),
            first_seen_index,
        }
    }

    /// Reading of the syllable that sits at the same position in the first entry using
    /// `character`. Words whose hangul and hanja lengths differ give no reading.
    fn positional_reading(&self, character: char) -> Option<String> {
        let (hanja, entry) = self.references.iter().find(|(hanja, _)| hanja.contains(&character))?;
        let index = hanja.iter().position(|c| *c == character)?;
        entry.word.chars().nth(index).map(|c| c.to_string())
    }

    fn reading_and_gloss(&self, character: char) -> (String, String) {
        let senses = self.dictionary.lookup(character);

        match self.positional_reading(character) {
            Some(reading) => {
                let gloss = senses
                    .iter()
                    .find(|sense| sense.reading == reading)
                    .or_else(|| senses.first())
                    .map(|sense| sense.definition.clone())
                    .unwrap_or_default();
                (reading, gloss)
            }
            // Nothing in the vocabulary to align with: trust the dictionary's first sense
            None => senses
                .first()
                .map(|sense| (sense.reading.clone(), sense.definition.clone()))
                .unwrap_or_default(),
        }
    }

    fn related_words(&self, character: char) -> Vec<String> {
        let from_vocabulary = self
            .references
            .iter()
            .filter(|(hanja, _)| hanja.contains(&character))
            .map(|(_, entry)| format!("{} ({})", entry.word, entry.hanja.trim()));

        let from_compounds = self
            .compounds
            .map(|table| table.compounds(character))
            .unwrap_or(&[])
            .iter()
            .cloned();

        let mut seen = HashSet::new();
        from_vocabulary
            .chain(from_compounds)
            .filter(|word| seen.insert(word.clone()))
            .take(self.related_word_cap)
            .collect()
    }
}

/// Convenience wrapper over [`HanjaExtractor`] with the default related-word cap.
pub fn extract(
    entries: &[VocabularyEntry],
    dictionary: &CharDictionary,
    all_entries: &[VocabularyEntry],
    compounds: Option<&CompoundTable>,
) -> Vec<HanjaDetail> {
    HanjaExtractor::new(dictionary, all_entries).with_compounds(compounds).extract(entries)
}
