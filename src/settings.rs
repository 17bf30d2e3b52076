use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::SheetError,
    layout::ROW_WIDTH,
    persistence::{
        load_json_at_or_default,
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_TRACE_PASSES: usize = 3;
pub const DEFAULT_RELATED_WORD_CAP: usize = 10;
pub const DEFAULT_HINT_LENGTH: usize = 10;
pub const DEFAULT_PRACTICE_BOXES: usize = 10;
pub const DEFAULT_MASK_TOKEN: &str = "○○";
pub const DEFAULT_BLANK_TOKEN: &str = "_____";

/// Layout and quiz constants. Every field falls back to its default when absent from
/// the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub row_width: usize,
    pub trace_passes: usize,
    /// Upper bound is [`DEFAULT_RELATED_WORD_CAP`]; larger values are clamped.
    pub related_word_cap: usize,
    pub hint_length: usize,
    pub practice_boxes: usize,
    pub mask_token: String,
    pub blank_token: String,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            row_width: ROW_WIDTH,
            trace_passes: DEFAULT_TRACE_PASSES,
            related_word_cap: DEFAULT_RELATED_WORD_CAP,
            hint_length: DEFAULT_HINT_LENGTH,
            practice_boxes: DEFAULT_PRACTICE_BOXES,
            mask_token: DEFAULT_MASK_TOKEN.to_string(),
            blank_token: DEFAULT_BLANK_TOKEN.to_string(),
        }
    }
}

impl SheetSettings {
    /// Settings from the per-user data directory, or defaults.
    pub fn load() -> Self {
        load_json_or_default::<SheetSettings>(SETTINGS_FILE).normalized()
    }

    pub fn load_from(path: &Path) -> Self {
        load_json_at_or_default::<SheetSettings>(path).normalized()
    }

    /// Writes these settings to the per-user data directory.
    pub fn save(&self) -> Result<(), SheetError> {
        save_json(self, SETTINGS_FILE)
    }

    /// Clamps values that would make layout impossible or break sheet invariants.
    pub fn normalized(mut self) -> Self {
        if self.row_width == 0 {
            log::warn!("row_width of 0 is not usable, using 1");
            self.row_width = 1;
        }
        if self.trace_passes == 0 {
            log::warn!("trace_passes of 0 would leave nothing to trace, using 1");
            self.trace_passes = 1;
        }
        if self.related_word_cap > DEFAULT_RELATED_WORD_CAP {
            log::warn!(
                "related_word_cap of {} is above the limit, using {}",
                self.related_word_cap,
                DEFAULT_RELATED_WORD_CAP
            );
            self.related_word_cap = DEFAULT_RELATED_WORD_CAP;
        }
        self
    }
}
