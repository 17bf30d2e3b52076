use std::{
    collections::HashMap,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::SheetError,
    persistence::read_json_file,
};

fn char_key(c: char, buffer: &mut [u8; 4]) -> &str {
    c.encode_utf8(buffer)
}

/// One sense of a character: its eum and hun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharReading {
    #[serde(alias = "kor")]
    pub reading: String,
    #[serde(alias = "def")]
    pub definition: String,
}

impl CharReading {
    pub fn new(reading: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { reading: reading.into(), definition: definition.into() }
    }
}

/// Character -> ordered readings. Loaded once, then only read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharDictionary {
    entries: HashMap<String, Vec<CharReading>>, // Map character -> multiple readings
}

impl CharDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let dictionary: CharDictionary = read_json_file(path)?;
        log::info!("Loaded {} dictionary characters from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    pub fn insert(&mut self, character: char, reading: CharReading) {
        self.entries.entry(character.to_string()).or_default().push(reading);
    }

    /// Every reading of `character`, in dictionary order; empty on a miss.
    pub fn lookup(&self, character: char) -> &[CharReading] {
        let mut buffer = [0; 4];
        self.entries.get(char_key(character, &mut buffer)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(char, CharReading)> for CharDictionary {
    fn from_iter<I: IntoIterator<Item = (char, CharReading)>>(iter: I) -> Self {
        let mut dictionary = CharDictionary::new();
        for (character, reading) in iter {
            dictionary.insert(character, reading);
        }
        dictionary
    }
}

/// Character -> compound words that use it, beyond those in the vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundTable {
    compounds: HashMap<String, Vec<String>>,
}

impl CompoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let table: CompoundTable = read_json_file(path)?;
        log::info!("Loaded compounds for {} characters from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, character: char, compound: impl Into<String>) {
        self.compounds.entry(character.to_string()).or_default().push(compound.into());
    }

    pub fn compounds(&self, character: char) -> &[String] {
        let mut buffer = [0; 4];
        self.compounds.get(char_key(character, &mut buffer)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}
