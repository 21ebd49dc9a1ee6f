//! Print settings store
//!
//! Holds the active session's calibration state: selected printer, label
//! stock and head offsets. Reads hand out snapshots; writes merge partial
//! patches. Nothing survives the session - every store starts from
//! defaults.

use shared::{PrintSettings, PrintSettingsPatch, QuickAlign};
use std::sync::RwLock;
use tracing::info;

/// Session-scoped settings store
#[derive(Debug)]
pub struct SettingsStore {
    inner: RwLock<PrintSettings>,
}

impl SettingsStore {
    /// Create a store with default settings (no printer selected)
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PrintSettings::default()),
        }
    }

    /// Create a store seeded with the given settings
    pub fn with_settings(settings: PrintSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Current settings snapshot (a copy, never a shared reference)
    pub fn get(&self) -> PrintSettings {
        self.inner.read().expect("settings lock poisoned").clone()
    }

    /// Merge a partial update and return the new snapshot
    pub fn update(&self, patch: PrintSettingsPatch) -> PrintSettings {
        let mut guard = self.inner.write().expect("settings lock poisoned");
        *guard = guard.clone().apply(patch);
        guard.clone()
    }

    /// Derive `offset_x` from the current label width using the alignment
    /// presets, and return the new snapshot
    pub fn quick_align(&self, alignment: QuickAlign) -> PrintSettings {
        let mut guard = self.inner.write().expect("settings lock poisoned");
        guard.offset_x = alignment.offset_x(guard.label_size.width_dots);
        info!(offset_x = guard.offset_x, ?alignment, "Quick-aligned");
        guard.clone()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce operator input into an offset value.
///
/// Offsets arrive as free-form text from the calibration form; anything
/// that does not parse as an integer becomes 0.
pub fn parse_offset(input: &str) -> i32 {
    input.trim().parse().unwrap_or(0)
}
