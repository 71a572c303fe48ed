use crate::audio;
use crate::dom;
use crate::WebCase;
use card_core::{LifecycleAction, PageTransition};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Headphones plugged in or out: rebuild the audio context.
pub fn wire_device_change(case: Rc<RefCell<WebCase>>, sound_url: String, activated: Rc<Cell<bool>>) {
    let Some(devices) = web::window().and_then(|w| w.navigator().media_devices().ok()) else {
        log::info!("[audio] mediaDevices unavailable; device changes not tracked");
        return;
    };
    dom::add_listener(&devices, "devicechange", move |_ev: web::Event| {
        audio::rebuild(&case, &sound_url, activated.get());
    });
}

/// Close audio only when the page is really unloading; a page parked in the
/// back/forward cache keeps its player and resumes on `pageshow`.
pub fn wire_page_lifecycle(case: Rc<RefCell<WebCase>>, activated: Rc<Cell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };

    let hide_case = case.clone();
    dom::add_listener(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        let transition = PageTransition::Hidden {
            persisted: ev.persisted(),
        };
        apply(&hide_case, transition, false);
    });

    dom::add_listener(&window, "pageshow", move |ev: web::PageTransitionEvent| {
        let transition = PageTransition::Shown {
            persisted: ev.persisted(),
        };
        apply(&case, transition, activated.get());
    });
}

fn apply(case: &Rc<RefCell<WebCase>>, transition: PageTransition, activated: bool) {
    match transition.action() {
        LifecycleAction::Teardown => {
            audio::teardown(case);
            log::info!("[audio] torn down");
        }
        LifecycleAction::Resume if activated => {
            audio::resume(case);
            log::info!("[audio] resumed after back/forward navigation");
        }
        LifecycleAction::Resume | LifecycleAction::Nothing => {
            log::debug!("[page] {:?}", transition);
        }
    }
}
