//! Persisted user choices: tap volume and the card image.
//!
//! Volume and image live under separate keys so a multi-megabyte image that
//! hits the storage quota never blocks volume saves.

use crate::error::{CaseError, CaseResult};
use crate::volume::Volume;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

pub const SETTINGS_VERSION: u32 = 1;
pub const VOLUME_KEY: &str = "card-case.volume.v1";
pub const IMAGE_KEY: &str = "card-case.image.v1";

/// Current values as seen by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub volume: Volume,
    /// Data URL or remote URL; opaque to the core.
    pub image: Option<String>,
}

/// Stored form of the volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub version: u32,
    pub volume: Volume,
}

impl VolumeRecord {
    pub fn new(volume: Volume) -> Self {
        Self {
            version: SETTINGS_VERSION,
            volume,
        }
    }

    /// Parse a stored record; anything unreadable or from another version
    /// yields `fallback`.
    pub fn parse(raw: &str, fallback: Volume) -> Volume {
        match serde_json::from_str::<VolumeRecord>(raw) {
            Ok(r) if r.version == SETTINGS_VERSION => r.volume,
            Ok(r) => {
                log::warn!(
                    "[settings] volume version {} != {}; using default",
                    r.version,
                    SETTINGS_VERSION
                );
                fallback
            }
            Err(e) => {
                log::warn!("[settings] unreadable volume: {}", e);
                fallback
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Minimal string key/value storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Fails when the value cannot be stored, e.g. quota exceeded.
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str);
}

/// Settings collaborator used by the front-end.
pub trait SettingsStore {
    fn volume(&self) -> Volume;
    /// Take a volume into use without persisting it (slider dragging).
    fn preview_volume(&self, volume: Volume);
    /// Take a volume into use and persist it.
    fn set_volume(&self, volume: Volume);
    fn image(&self) -> Option<String>;
    /// Persist a new card image. On failure the previous image stays.
    fn set_image(&self, image: String) -> CaseResult<()>;
    fn clear_image(&self);
}

/// Settings cached in memory and written through to an optional store.
/// Without a store they last for the page only.
pub struct PersistedSettings<S> {
    storage: Option<S>,
    cache: RefCell<Settings>,
}

impl<S: KeyValueStore> PersistedSettings<S> {
    pub fn load(storage: Option<S>, default_volume: Volume) -> Self {
        let volume = storage
            .as_ref()
            .and_then(|s| s.get_item(VOLUME_KEY))
            .filter(|raw| !raw.is_empty())
            .map(|raw| VolumeRecord::parse(&raw, default_volume))
            .unwrap_or(default_volume);
        let image = storage
            .as_ref()
            .and_then(|s| s.get_item(IMAGE_KEY))
            .filter(|raw| !raw.is_empty());
        Self {
            storage,
            cache: RefCell::new(Settings { volume, image }),
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.cache.borrow().clone()
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }
}

impl<S: KeyValueStore> SettingsStore for PersistedSettings<S> {
    fn volume(&self) -> Volume {
        self.cache.borrow().volume
    }

    fn preview_volume(&self, volume: Volume) {
        self.cache.borrow_mut().volume = volume;
    }

    fn set_volume(&self, volume: Volume) {
        self.preview_volume(volume);
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.set_item(VOLUME_KEY, &VolumeRecord::new(volume).to_json()) {
            log::warn!("[settings] volume save failed: {}", e);
        }
    }

    fn image(&self) -> Option<String> {
        self.cache.borrow().image.clone()
    }

    fn set_image(&self, image: String) -> CaseResult<()> {
        if let Some(storage) = &self.storage {
            storage.set_item(IMAGE_KEY, &image).map_err(|e| {
                CaseError::InvalidImageSource(format!("image could not be saved: {}", e))
            })?;
        }
        self.cache.borrow_mut().image = Some(image);
        Ok(())
    }

    fn clear_image(&self) {
        if let Some(storage) = &self.storage {
            storage.remove_item(IMAGE_KEY);
        }
        self.cache.borrow_mut().image = None;
    }
}
