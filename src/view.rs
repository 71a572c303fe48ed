use crate::constants::{CARD_HINT_ID, CARD_IMAGE_ID, HIDDEN_CLASS};
use crate::input::px;
use card_core::{CaseFrame, Highlight, Orientation};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Position the card and recolor the case border.
pub fn apply_frame(case_el: &web::HtmlElement, card_el: &web::HtmlElement, frame: &CaseFrame) {
    let style = card_el.style();
    _ = style.set_property("left", &px(frame.position.x));
    _ = style.set_property("top", &px(frame.position.y));
    apply_highlight(case_el, frame.highlight);
}

pub fn apply_highlight(case_el: &web::Element, highlight: Highlight) {
    let cl = case_el.class_list();
    for other in Highlight::ALL {
        if other != highlight {
            _ = cl.remove_1(other.css_class());
        }
    }
    _ = cl.add_1(highlight.css_class());
}

pub fn apply_orientation(case_el: &web::Element, card_el: &web::Element, orientation: Orientation) {
    for el in [case_el, card_el] {
        let cl = el.class_list();
        _ = cl.remove_2(
            Orientation::Landscape.css_class(),
            Orientation::Portrait.css_class(),
        );
        _ = cl.add_1(orientation.css_class());
    }
    apply_highlight(case_el, Highlight::default());
}

/// Show the card image, or the "double-click to set" hint when there is none.
pub fn apply_image(document: &web::Document, src: Option<&str>) {
    let img = document
        .get_element_by_id(CARD_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
    let hint = document.get_element_by_id(CARD_HINT_ID);
    match (img, src) {
        (Some(img), Some(src)) => {
            img.set_src(src);
            _ = img.class_list().remove_1(HIDDEN_CLASS);
            if let Some(hint) = hint {
                _ = hint.class_list().add_1(HIDDEN_CLASS);
            }
        }
        (img, _) => {
            if let Some(img) = img {
                img.remove_attribute("src").ok();
                _ = img.class_list().add_1(HIDDEN_CLASS);
            }
            if let Some(hint) = hint {
                _ = hint.class_list().remove_1(HIDDEN_CLASS);
            }
        }
    }
}
