use crate::constants::{VOLUME_ID, VOLUME_MAX, VOLUME_MIN, VOLUME_STEP};
use crate::dom;
use card_core::{SettingsStore, Volume};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Range input bound to the persisted volume.
pub fn wire_volume_slider(document: &web::Document, settings: Rc<dyn SettingsStore>) {
    let Some(input) = document
        .get_element_by_id(VOLUME_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("missing #{}; volume stays at {:?}", VOLUME_ID, settings.volume());
        return;
    };
    input.set_type("range");
    input.set_min(&VOLUME_MIN.to_string());
    input.set_max(&VOLUME_MAX.to_string());
    input.set_step(&VOLUME_STEP.to_string());
    input.set_value(&settings.volume().get().to_string());

    // dragging only previews; the value is saved once on release
    for (name, commit) in [("input", false), ("change", true)] {
        let slider = input.clone();
        let settings = settings.clone();
        dom::add_listener(&input, name, move |_ev: web::Event| {
            let raw = slider.value_as_number();
            if raw.is_nan() {
                return;
            }
            let volume = Volume::new(raw as f32);
            if commit {
                settings.set_volume(volume);
            } else {
                settings.preview_volume(volume);
            }
        });
    }
}
