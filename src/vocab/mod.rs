use std::{
    collections::{
        BTreeMap,
        HashMap,
        HashSet,
    },
    path::Path,
};

use crate::{
    core::{
        SheetError,
        VocabularyEntry,
    },
    persistence::read_json_file,
};

/// Markers that stand for "no hanja" in the vocabulary data.
pub const HANJA_PLACEHOLDERS: &[&str] = &["-", "─"];

/// The full vocabulary: cross-reference and distractor pool for every worksheet.
#[derive(Debug, Clone, Default)]
pub struct VocabularyDb {
    entries: Vec<VocabularyEntry>,
    index_by_id: HashMap<String, usize>,
}

impl VocabularyDb {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        let mut index_by_id = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index_by_id.contains_key(&entry.id) {
                log::warn!("Duplicate vocabulary id {}, keeping the first entry", entry.id);
                continue;
            }
            index_by_id.insert(entry.id.clone(), i);
        }

        Self { entries, index_by_id }
    }

    /// Loads a JSON array of entries.
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let entries: Vec<VocabularyEntry> = read_json_file(path)?;
        log::info!("Loaded {} vocabulary entries from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.index_by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Resolves `ids` in the given order.
    pub fn select<I, S>(&self, ids: I) -> Result<Vec<VocabularyEntry>, SheetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.as_ref().trim();
                self.get(id).cloned().ok_or_else(|| SheetError::UnknownEntry(id.to_string()))
            })
            .collect()
    }

    pub fn by_grade(&self, grade: u32) -> Vec<VocabularyEntry> {
        self.entries.iter().filter(|entry| entry.grade == grade).cloned().collect()
    }

    /// `"word(hanja)"` labels grouped by grade, ascending, without repeats.
    pub fn hanja_by_grade(&self) -> BTreeMap<u32, Vec<String>> {
        let mut by_grade: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        let mut seen: HashSet<(u32, String)> = HashSet::new();

        for entry in &self.entries {
            let hanja = entry.hanja.trim();
            if hanja.is_empty() || HANJA_PLACEHOLDERS.contains(&hanja) {
                continue;
            }

            let label = format!("{}({})", entry.word, hanja);
            if seen.insert((entry.grade, label.clone())) {
                by_grade.entry(entry.grade).or_default().push(label);
            }
        }

        by_grade
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn db() -> VocabularyDb {
        VocabularyDb::new(vec![
            VocabularyEntry::new("1", "학교").with_hanja("學校").with_grade(3),
            VocabularyEntry::new("2", "바다").with_hanja("─").with_grade(3),
            VocabularyEntry::new("3", "학생").with_hanja("學生").with_grade(1),
            VocabularyEntry::new("4", "학교").with_hanja("學校").with_grade(3),
            VocabularyEntry::new("5", "하늘").with_grade(1),
            VocabularyEntry::new("1", "중복").with_grade(9),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let db = db();
        assert_eq!(db.get("3").unwrap().word, "학생");
        assert_eq!(db.get("1").unwrap().word, "학교");
        assert!(db.get("42").is_none());
    }

    #[test]
    fn test_select_keeps_order() {
        let db = db();
        let selected = db.select(["3", " 1 "]).unwrap();
        let words: Vec<&str> = selected.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["학생", "학교"]);

        assert!(matches!(db.select(["1", "99"]), Err(SheetError::UnknownEntry(id)) if id == "99"));
    }

    #[test]
    fn test_by_grade() {
        let ids: Vec<String> = db().by_grade(1).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["3", "5"]);
    }

    #[test]
    fn test_hanja_by_grade() {
        let index = db().hanja_by_grade();

        assert_eq!(index.keys().copied().collect::<Vec<u32>>(), vec![1, 3]);
        assert_eq!(index[&1], vec!["학생(學生)"]);
        assert_eq!(index[&3], vec!["학교(學校)"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(
            &path,
            r#"[
                {
                    "id": 1, "word": "학교", "hanja": "學校", "meaning": "배우는 곳",
                    "examples": ["학교에 간다."], "grade": 3
                },
                {
                    "id": "x2", "word": "바다", "hanja": "-", "meaning": "짠물",
                    "examples": null, "grade": 4
                }
            ]"#,
        )
        .unwrap();

        let db = VocabularyDb::load(&path).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("1").unwrap().examples, vec!["학교에 간다."]);
        assert!(db.get("x2").unwrap().examples.is_empty());
    }
}
