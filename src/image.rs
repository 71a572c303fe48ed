use crate::constants::{CARD_IMAGE_ID, IMAGE_INPUT_ID, IMAGE_RETRY_HINT, IMAGE_SAVE_HINT, IMAGE_URL_ID};
use crate::dom;
use crate::overlay;
use crate::view;
use card_core::{validate_mime, CaseError, CaseResult, ImageSource, SettingsStore};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn invalid(what: &str, e: JsValue) -> CaseError {
    CaseError::InvalidImageSource(format!("{}: {:?}", what, e))
}

/// Read a blob into a `data:` URL.
async fn read_data_url(blob: &web::Blob) -> CaseResult<String> {
    let reader = web::FileReader::new().map_err(|e| invalid("FileReader", e))?;
    let r = reader.clone();
    let done = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let onload = Closure::once_into_js(move |_ev: web::ProgressEvent| {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |ev: web::ProgressEvent| {
            _ = reject.call1(&JsValue::NULL, &ev);
        });
        r.set_onload(Some(onload.unchecked_ref()));
        r.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader
        .read_as_data_url(blob)
        .map_err(|e| invalid("read", e))?;
    JsFuture::from(done).await.map_err(|e| invalid("read", e))?;
    reader
        .result()
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| CaseError::InvalidImageSource("file could not be read".into()))
}

/// Download a remote image and embed it so it survives reloads offline.
async fn fetch_data_url(url: &str) -> CaseResult<String> {
    let window = web::window().ok_or_else(|| CaseError::InvalidImageSource("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| invalid("fetch", e))?
        .dyn_into()
        .map_err(|e| invalid("fetch", e))?;
    if !resp.ok() {
        return Err(CaseError::InvalidImageSource(format!(
            "HTTP {} for {}",
            resp.status(),
            url
        )));
    }
    let blob: web::Blob = JsFuture::from(resp.blob().map_err(|e| invalid("body", e))?)
        .await
        .map_err(|e| invalid("body", e))?
        .dyn_into()
        .map_err(|e| invalid("body", e))?;
    validate_mime(&blob.type_())?;
    read_data_url(&blob).await
}

fn apply_picked(document: &web::Document, settings: &Rc<dyn SettingsStore>, picked: CaseResult<String>) {
    let src = match picked.and_then(|raw| ImageSource::parse(&raw)) {
        Ok(src) => src,
        Err(e) => {
            log::warn!("[image] {}", e);
            overlay::show_status(document, IMAGE_RETRY_HINT);
            return;
        }
    };
    match settings.set_image(src.as_str().to_string()) {
        Ok(()) => {
            view::apply_image(document, Some(src.as_str()));
            overlay::clear_status(document);
            log::info!("[image] card image updated");
        }
        Err(e) => {
            // the previous image stays on the card and in storage
            log::warn!("[image] {} (retryable={})", e, e.is_retryable());
            overlay::show_status(document, IMAGE_SAVE_HINT);
        }
    }
}

async fn load_file(file: web::File) -> CaseResult<String> {
    validate_mime(&file.type_())?;
    read_data_url(&file).await
}

pub fn wire_image_inputs(
    document: &web::Document,
    card_el: &web::HtmlElement,
    settings: Rc<dyn SettingsStore>,
) {
    let file_input = document
        .get_element_by_id(IMAGE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());

    if let Some(input) = &file_input {
        input.set_type("file");
        input.set_accept("image/*");

        // double-click or long-press/context menu on the card opens the picker
        for name in ["dblclick", "contextmenu"] {
            let picker = input.clone();
            dom::add_listener(card_el, name, move |ev: web::MouseEvent| {
                ev.prevent_default();
                picker.click();
            });
        }

        let picker = input.clone();
        let doc = document.clone();
        let s = settings.clone();
        dom::add_listener(input, "change", move |_ev: web::Event| {
            let Some(file) = picker.files().and_then(|f| f.get(0)) else {
                return;
            };
            // allow re-picking the same file
            picker.set_value("");
            let doc = doc.clone();
            let s = s.clone();
            spawn_local(async move {
                let picked = load_file(file).await;
                apply_picked(&doc, &s, picked);
            });
        });
    } else {
        log::warn!("missing #{}; card image cannot be changed", IMAGE_INPUT_ID);
    }

    if let Some(url_input) = document
        .get_element_by_id(IMAGE_URL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let field = url_input.clone();
        let doc = document.clone();
        let s = settings.clone();
        dom::add_listener(&url_input, "change", move |_ev: web::Event| {
            let url = field.value().trim().to_string();
            if url.is_empty() {
                return;
            }
            let doc = doc.clone();
            let s = s.clone();
            spawn_local(async move {
                let picked = match ImageSource::parse(&url) {
                    Ok(ImageSource::Remote(remote)) => fetch_data_url(&remote).await,
                    Ok(embedded) => Ok(embedded.as_str().to_string()),
                    Err(e) => Err(e),
                };
                apply_picked(&doc, &s, picked);
            });
        });
    }

    // a persisted image that no longer decodes is dropped
    if let Some(img) = document.get_element_by_id(CARD_IMAGE_ID) {
        let doc = document.clone();
        dom::add_listener(&img, "error", move |_ev: web::Event| {
            if settings.image().is_none() {
                return;
            }
            log::warn!("[image] stored card image failed to load; clearing");
            settings.clear_image();
            view::apply_image(&doc, None);
            overlay::show_status(&doc, IMAGE_RETRY_HINT);
        });
    }
}
