//! Host string lookup.
//!
//! The media center owns translations; the client only asks for strings by id.

use std::collections::HashMap;

/// String id of the description shown for videos that have none.
pub const DEFAULT_DESCRIPTION_ID: u32 = 30000;

const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Source of localized host strings.
pub trait Localize {
    /// Look up the string registered under `id`.
    fn localized_string(&self, id: u32) -> String;
}

/// In-memory string table, usually filled from the config file.
///
/// Ids missing from the table fall back to built-in English text, or to an
/// empty string for ids the client does not know.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<u32, String>,
}

impl StringTable {
    pub fn new(strings: HashMap<u32, String>) -> Self {
        Self { strings }
    }
}

impl Localize for StringTable {
    fn localized_string(&self, id: u32) -> String {
        if let Some(s) = self.strings.get(&id) {
            return s.clone();
        }
        match id {
            DEFAULT_DESCRIPTION_ID => DEFAULT_DESCRIPTION.to_string(),
            _ => String::new(),
        }
    }
}
