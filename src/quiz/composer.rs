use std::collections::HashSet;

use rand::{
    seq::SliceRandom,
    Rng,
};

use crate::{
    core::{
        utils::{
            take_chars,
            ReplaceLiteral,
        },
        Numbered,
        QuizBlankItem,
        QuizMcItem,
        QuizOption,
        QuizSheet,
        VocabularyEntry,
    },
    settings::SheetSettings,
};

pub const HINT_ELLIPSIS: &str = "...";

/// Distractors per multiple-choice item, so four options when the pool allows.
pub const DISTRACTOR_COUNT: usize = 3;

// Tried in order when a configured token shares a character with the hidden word
const FALLBACK_TOKENS: &[&str] = &["[?]", "###", "***", "~~~"];

/// Builds multiple-choice and fill-in-the-blank items from vocabulary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizComposer {
    pub hint_length: usize,
    pub mask_token: String,
    pub blank_token: String,
}

impl Default for QuizComposer {
    fn default() -> Self {
        QuizComposer::from(&SheetSettings::default())
    }
}

impl From<&SheetSettings> for QuizComposer {
    fn from(settings: &SheetSettings) -> Self {
        QuizComposer {
            hint_length: settings.hint_length,
            mask_token: settings.mask_token.clone(),
            blank_token: settings.blank_token.clone(),
        }
    }
}

/// `token` unless it shares a character with one of `words`; then the first fallback that
/// shares none.
///
/// A token made of the word's own characters would let the word survive replacement.
fn token_avoiding<'t>(token: &'t str, words: &[&str]) -> &'t str {
    let clashes = |candidate: &str| {
        candidate
            .to_lowercase()
            .chars()
            .any(|c| words.iter().any(|word| word.to_lowercase().contains(c)))
    };

    if !clashes(token) {
        return token;
    }
    match FALLBACK_TOKENS.iter().copied().find(|fallback| !clashes(*fallback)) {
        Some(fallback) => {
            log::warn!("Token {:?} overlaps {:?}, using {:?} instead", token, words, fallback);
            fallback
        }
        None => {
            log::warn!("Every token overlaps {:?}, the word may stay visible", words);
            token
        }
    }
}

impl QuizComposer {
    /// One correct option plus sampled distractors, in random order.
    ///
    /// Distractors are drawn from `candidate_pool` minus the target. A pool that is too
    /// small yields fewer options rather than an error.
    pub fn multiple_choice<R: Rng + ?Sized>(
        &self,
        target: &VocabularyEntry,
        candidate_pool: &[VocabularyEntry],
        rng: &mut R,
    ) -> QuizMcItem {
        let mut seen_ids = HashSet::new();
        let mut distractors: Vec<&VocabularyEntry> = candidate_pool
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .filter(|candidate| seen_ids.insert(candidate.id.as_str()))
            .collect();

        if distractors.len() < DISTRACTOR_COUNT {
            log::warn!(
                "Only {} distractors available for {:?}, wanted {}",
                distractors.len(),
                target.word,
                DISTRACTOR_COUNT
            );
        }

        distractors.shuffle(rng);
        distractors.truncate(DISTRACTOR_COUNT);

        let mut choices: Vec<&VocabularyEntry> = Vec::with_capacity(distractors.len() + 1);
        choices.push(target);
        choices.extend(distractors);
        choices.shuffle(rng);

        let options = choices
            .into_iter()
            .map(|entry| QuizOption {
                masked_meaning: self.mask_meaning(entry, target),
                entry: entry.clone(),
            })
            .collect();

        QuizMcItem { target: target.clone(), options }
    }

    /// Hides the option's own word and the target word inside the option's meaning.
    pub fn mask_meaning(&self, option: &VocabularyEntry, target: &VocabularyEntry) -> String {
        let token = token_avoiding(&self.mask_token, &[option.word.as_str(), target.word.as_str()]);
        option
            .meaning
            .replace_literal(&option.word, token, true)
            .replace_literal(&target.word, token, true)
    }

    /// Fill-in-the-blank item from the first example sentence, or the meaning when there
    /// is none.
    pub fn blank(&self, target: &VocabularyEntry) -> QuizBlankItem {
        let source = target.examples.first().unwrap_or(&target.meaning);
        let word = target.word.as_str();
        let token = token_avoiding(&self.blank_token, &[word]);

        let blanked_sentence = if source.trim().is_empty() {
            token.to_string()
        } else if word.is_empty() {
            format!("{} : {}", token, source)
        } else {
            let sentence = if source.contains(word) {
                source.to_string()
            } else {
                format!("{} : {}", word, source)
            };
            sentence.replace_literal(word, token, false)
        };

        QuizBlankItem {
            target: target.clone(),
            blanked_sentence,
            hint: format!("{}{}", take_chars(&target.meaning, self.hint_length), HINT_ELLIPSIS),
        }
    }

    /// Both quiz sections for `entries`, each numbered from 1 in input order.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        entries: &[VocabularyEntry],
        candidate_pool: &[VocabularyEntry],
        rng: &mut R,
    ) -> QuizSheet {
        let multiple_choice = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Numbered {
                number: i + 1,
                item: self.multiple_choice(entry, candidate_pool, rng),
            })
            .collect();

        let fill_in_blank = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Numbered { number: i + 1, item: self.blank(entry) })
            .collect();

        QuizSheet { multiple_choice, fill_in_blank }
    }
}

pub fn compose_multiple_choice<R: Rng + ?Sized>(
    target: &VocabularyEntry,
    candidate_pool: &[VocabularyEntry],
    rng: &mut R,
) -> QuizMcItem {
    QuizComposer::default().multiple_choice(target, candidate_pool, rng)
}

pub fn compose_blank(target: &VocabularyEntry) -> QuizBlankItem {
    QuizComposer::default().blank(target)
}

pub fn compose_quiz<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    candidate_pool: &[VocabularyEntry],
    rng: &mut R,
) -> QuizSheet {
    QuizComposer::default().compose(entries, candidate_pool, rng)
}
