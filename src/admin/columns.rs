//! Column resizing with widths persisted per page.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::admin::{error::AdminError, table::AdminTable};

/// Widths at or below this many pixels are never applied.
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

const STORAGE_KEY_PREFIX: &str = "admin_column_widths_";

/// Storage key for a page path, e.g. `/admin/x/` becomes `admin_column_widths__admin_x_`.
pub fn storage_key(path: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{}", path.replace('/', "_"))
}

/// String key-value storage, the way a browser's local storage behaves.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), AdminError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), AdminError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// One persisted column width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedWidth {
    pub name: String,
    pub width: String,
}

pub struct ColumnResizer {
    key: String,
}

impl ColumnResizer {
    pub fn new(path: &str) -> Self {
        Self {
            key: storage_key(path),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add a resize handle and tooltip to each header lacking one.
    ///
    /// Returns how many handles were installed.
    pub fn install(&self, table: &mut AdminTable) -> usize {
        let mut installed = 0;

        for header in &mut table.headers {
            let name = header.text.trim();
            if !name.is_empty() && header.title.is_none() {
                header.title = Some(name.to_string());
            }

            if !header.has_resizer {
                header.has_resizer = true;
                installed += 1;
            }
        }

        installed
    }

    /// Apply a drag to the header at `index`. Only widths above [`MIN_COLUMN_WIDTH`] apply.
    pub fn drag(&self, table: &mut AdminTable, index: usize, start_width: f64, delta: f64) -> bool {
        let width = start_width + delta;
        if width <= MIN_COLUMN_WIDTH {
            return false;
        }

        match table.headers.get_mut(index) {
            Some(header) => {
                header.width = Some(format!("{width}px"));
                true
            }
            None => false,
        }
    }

    /// Persist every named header that has a width.
    pub fn save(&self, table: &AdminTable, store: &mut impl KeyValueStore) -> Result<(), AdminError> {
        let widths: BTreeMap<String, SavedWidth> = table
            .headers
            .iter()
            .enumerate()
            .filter_map(|(index, header)| {
                let name = header.text.trim();
                let width = header.width.as_ref()?;
                if name.is_empty() {
                    return None;
                }

                Some((
                    index.to_string(),
                    SavedWidth {
                        name: name.to_string(),
                        width: width.clone(),
                    },
                ))
            })
            .collect();

        store.set(&self.key, serde_json::to_string(&widths)?)
    }

    /// Reapply persisted widths verbatim. Returns how many headers were updated.
    pub fn restore(&self, table: &mut AdminTable, store: &impl KeyValueStore) -> Result<usize, AdminError> {
        let Some(saved) = store.get(&self.key) else {
            return Ok(0);
        };

        let widths: BTreeMap<String, SavedWidth> = serde_json::from_str(&saved)?;
        let mut restored = 0;

        for (index, header) in table.headers.iter_mut().enumerate() {
            if let Some(saved) = widths.get(&index.to_string()) {
                if !saved.width.is_empty() {
                    header.width = Some(saved.width.clone());
                    restored += 1;
                }
            }
        }

        Ok(restored)
    }
}
