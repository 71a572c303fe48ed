#![cfg(target_arch = "wasm32")]
use card_core::{CaseConfig, CaseController, SettingsStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod image;
mod input;
mod overlay;
mod settings;
mod view;

pub(crate) type WebCase = CaseController<audio::WebTapOutput>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-case starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    for id in constants::ALL_IDS {
        if document.get_element_by_id(id).is_none() {
            log::debug!("optional #{} not present", id);
        }
    }
    let case_el = dom::html_element(&document, constants::CASE_ID)?;
    let card_el = dom::html_element(&document, constants::CARD_ID)?;

    let config = CaseConfig::from_attributes(|name| case_el.get_attribute(name));
    log::info!(
        "[config] sound={} curve={:?} reset={:?} orientation={:?}",
        config.sound_url,
        config.volume_curve,
        config.hit_reset,
        config.orientation
    );

    let settings: Rc<dyn SettingsStore> =
        Rc::new(settings::load(config.default_volume));

    view::apply_orientation(&case_el, &card_el, config.orientation);
    view::apply_image(&document, settings.image().as_deref());

    let player = audio::build_player(config.volume_curve);
    let case = Rc::new(RefCell::new(CaseController::new(player, config.hit_reset)));
    audio::prepare(&case, &config.sound_url);

    let activated = Rc::new(Cell::new(false));

    events::wire_input_handlers(events::CaseWiring {
        case_el: case_el.clone(),
        card_el: card_el.clone(),
        case: case.clone(),
        settings: settings.clone(),
        touches: Rc::new(RefCell::new(input::TouchTracker::default())),
    });
    events::wire_volume_slider(&document, settings.clone());
    events::wire_device_change(case.clone(), config.sound_url.clone(), activated.clone());
    events::wire_page_lifecycle(case.clone(), activated.clone());

    overlay::wire_start(&document, case.clone(), activated);
    image::wire_image_inputs(&document, &card_el, settings);

    Ok(())
}
