use crate::dom;
use crate::input::TouchTracker;
use crate::view;
use crate::WebCase;
use card_core::SettingsStore;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct CaseWiring {
    pub case_el: web::HtmlElement,
    pub card_el: web::HtmlElement,
    pub case: Rc<RefCell<WebCase>>,
    pub settings: Rc<dyn SettingsStore>,
    pub touches: Rc<RefCell<TouchTracker>>,
}

/// Presses start on the card; moves and releases are window-wide so a
/// release outside the card still ends the drag.
pub fn wire_input_handlers(w: CaseWiring) {
    wire_mouse(&w);
    wire_touch(&w);
}

fn press(w: &CaseWiring, client: Vec2) {
    let origin = dom::offset_origin(&w.card_el);
    w.case.borrow_mut().press(client, origin);
    log::debug!("[drag] begin at ({:.0},{:.0})", client.x, client.y);
}

fn drag(w: &CaseWiring, client: Vec2) -> bool {
    // Sizes are read on every move so resizes mid-drag are honored.
    let container = dom::offset_extent(&w.case_el);
    let card = dom::offset_extent(&w.card_el);
    let volume = w.settings.volume();
    let frame = w.case.borrow_mut().drag(client, container, card, volume);
    match frame {
        Some(frame) => {
            view::apply_frame(&w.case_el, &w.card_el, &frame);
            true
        }
        None => false,
    }
}

fn release(w: &CaseWiring) {
    let volume = w.settings.volume();
    let frame = w.case.borrow_mut().release(volume);
    if let Some(frame) = frame {
        view::apply_frame(&w.case_el, &w.card_el, &frame);
        log::debug!("[drag] end, highlight {:?}", frame.highlight);
    }
}

fn wire_mouse(w: &CaseWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wd = w.clone();
    dom::add_listener(&w.card_el, "mousedown", move |ev: web::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        press(&wd, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        ev.prevent_default();
    });

    let wm = w.clone();
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        drag(&wm, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });

    let wu = w.clone();
    dom::add_listener(&window, "mouseup", move |_ev: web::MouseEvent| {
        release(&wu);
    });
}

fn touches_of(list: &web::TouchList) -> impl Iterator<Item = web::Touch> + '_ {
    (0..list.length()).filter_map(move |i| list.get(i))
}

fn touch_point(t: &web::Touch) -> Vec2 {
    Vec2::new(t.client_x() as f32, t.client_y() as f32)
}

fn wire_touch(w: &CaseWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let ws = w.clone();
    dom::add_active_listener(&w.card_el, "touchstart", move |ev: web::TouchEvent| {
        let Some(first) = ev.changed_touches().get(0) else {
            return;
        };
        // a second finger on the card while dragging is ignored
        if !ws.touches.borrow_mut().begin(first.identifier()) {
            return;
        }
        press(&ws, touch_point(&first));
        ev.prevent_default();
    });

    let wm = w.clone();
    dom::add_active_listener(&window, "touchmove", move |ev: web::TouchEvent| {
        let list = ev.touches();
        let index = {
            let tracker = wm.touches.borrow();
            tracker.position_in(touches_of(&list).map(|t| t.identifier()))
        };
        let Some(touch) = index.and_then(|i| touches_of(&list).nth(i)) else {
            return;
        };
        if drag(&wm, touch_point(&touch)) {
            ev.prevent_default();
        }
    });

    // focus lost mid-drag (alt-tab, system dialog): no release will arrive
    let wb = w.clone();
    dom::add_listener(&window, "blur", move |_ev: web::Event| {
        if wb.touches.borrow().active().is_some() {
            wb.touches.borrow_mut().cancel();
        }
        release(&wb);
    });

    for name in ["touchend", "touchcancel"] {
        let we = w.clone();
        dom::add_listener(&window, name, move |ev: web::TouchEvent| {
            let lifted = ev.changed_touches();
            let ended = we
                .touches
                .borrow_mut()
                .end(touches_of(&lifted).map(|t| t.identifier()));
            if ended {
                release(&we);
            }
        });
    }
}
