use card_core::{KeyValueStore, PersistedSettings, Volume};
use web_sys as web;

/// `window.localStorage` as a key/value store.
pub struct BrowserStorage(web::Storage);

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        // large data URLs can exceed the quota
        self.0.set_item(key, value).map_err(|e| format!("{:?}", e))
    }

    fn remove_item(&self, key: &str) {
        if let Err(e) = self.0.remove_item(key) {
            log::warn!("[settings] remove {} failed: {:?}", key, e);
        }
    }
}

pub type BrowserSettings = PersistedSettings<BrowserStorage>;

/// Load settings from localStorage; without it they last for this page only.
pub fn load(default_volume: Volume) -> BrowserSettings {
    let storage = web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(BrowserStorage);
    if storage.is_none() {
        log::warn!("[settings] localStorage unavailable; settings last for this page only");
    }
    let settings = PersistedSettings::load(storage, default_volume);
    let snapshot = settings.snapshot();
    log::info!(
        "[settings] volume={:.2} image={}",
        snapshot.volume.get(),
        snapshot.image.is_some()
    );
    settings
}
