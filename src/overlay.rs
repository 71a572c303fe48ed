use crate::audio;
use crate::constants::{REVEAL_ON_START, START_BUTTON_ID, START_OVERLAY_ID, STATUS_ID};
use crate::dom;
use crate::WebCase;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Audio can only start from a user gesture, so the case stays hidden behind
/// a start button (with a loudness warning) until the first click.
pub fn wire_start(document: &web::Document, case: Rc<RefCell<WebCase>>, activated: Rc<Cell<bool>>) {
    if document.get_element_by_id(START_BUTTON_ID).is_none() {
        log::warn!("missing #{}; starting without overlay", START_BUTTON_ID);
        activate(document, &case, &activated);
        return;
    }
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        activate(&doc, &case, &activated);
    });
}

fn activate(document: &web::Document, case: &Rc<RefCell<WebCase>>, activated: &Rc<Cell<bool>>) {
    if activated.replace(true) {
        return;
    }
    audio::resume(case);
    hide(document);
    for id in REVEAL_ON_START {
        dom::set_hidden(document, id, false);
    }
    if case.borrow().player().is_unsupported() {
        show_status(document, "Sound is not available in this browser.");
    }
    log::info!("[overlay] activated");
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_hidden(document, START_OVERLAY_ID, true);
}

/// Non-blocking message line under the case.
pub fn show_status(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(message));
        dom::set_hidden(document, STATUS_ID, false);
    }
}

pub fn clear_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(None);
        dom::set_hidden(document, STATUS_ID, true);
    }
}
