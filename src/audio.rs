use crate::WebCase;
use card_core::{CaseError, CaseResult, LoadTicket, TapOutput, TapPlayer, VolumeCurve};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// WebAudio sink: every tap gets its own buffer source and gain node.
#[derive(Clone)]
pub struct WebTapOutput {
    ctx: Option<web::AudioContext>,
}

impl WebTapOutput {
    pub fn new(ctx: Option<web::AudioContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> Option<&web::AudioContext> {
        self.ctx.as_ref()
    }
}

impl TapOutput for WebTapOutput {
    type Buffer = web::AudioBuffer;

    fn emit(&self, buffer: &web::AudioBuffer, gain: f32) -> CaseResult<()> {
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| CaseError::AudioUnsupported("no audio context".into()))?;
        play_one_shot(ctx, buffer, gain)
    }
}

fn audio_err(what: &str, e: JsValue) -> CaseError {
    CaseError::AudioUnsupported(format!("{}: {:?}", what, e))
}

fn create_gain(ctx: &web::AudioContext, value: f32) -> CaseResult<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| audio_err("GainNode", e))?;
    g.gain().set_value(value);
    Ok(g)
}

// source -> gain -> destination, started immediately and dropped once ended
fn play_one_shot(ctx: &web::AudioContext, buffer: &web::AudioBuffer, gain: f32) -> CaseResult<()> {
    let src = ctx
        .create_buffer_source()
        .map_err(|e| audio_err("AudioBufferSourceNode", e))?;
    src.set_buffer(Some(buffer));
    let g = create_gain(ctx, gain)?;
    src.connect_with_audio_node(&g)
        .map_err(|e| audio_err("connect source", e))?;
    g.connect_with_audio_node(&ctx.destination())
        .map_err(|e| audio_err("connect gain", e))?;

    let g_done = g.clone();
    let on_ended = Closure::once_into_js(move || {
        _ = g_done.disconnect();
    });
    src.set_onended(Some(on_ended.unchecked_ref()));

    src.start().map_err(|e| audio_err("start", e))
}

fn webkit_context() -> Option<web::AudioContext> {
    let window = web::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("webkitAudioContext")).ok()?;
    let ctor = ctor.dyn_into::<js_sys::Function>().ok()?;
    js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .ok()
        .map(JsCast::unchecked_into)
}

pub fn create_context() -> CaseResult<web::AudioContext> {
    match web::AudioContext::new() {
        Ok(ctx) => Ok(ctx),
        Err(e) => webkit_context().ok_or_else(|| audio_err("AudioContext", e)),
    }
}

pub fn build_player(curve: VolumeCurve) -> TapPlayer<WebTapOutput> {
    match create_context() {
        Ok(ctx) => TapPlayer::new(WebTapOutput::new(Some(ctx)), curve),
        Err(e) => TapPlayer::unsupported(WebTapOutput::new(None), curve, e),
    }
}

/// Fetch and decode the tap sound.
pub async fn load_sound(ctx: &web::AudioContext, url: &str) -> CaseResult<web::AudioBuffer> {
    let fail = |what: &str, e: JsValue| CaseError::asset(url, format!("{}: {:?}", what, e));

    let window = web::window().ok_or_else(|| CaseError::asset(url, "no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail("fetch", e))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| fail("response", e))?;
    if !resp.ok() {
        return Err(CaseError::asset(url, format!("HTTP {}", resp.status())));
    }
    let body = resp.array_buffer().map_err(|e| fail("body", e))?;
    let bytes: js_sys::ArrayBuffer = JsFuture::from(body)
        .await
        .map_err(|e| fail("body", e))?
        .dyn_into()
        .map_err(|e| fail("body", e))?;
    let decoding = ctx
        .decode_audio_data(&bytes)
        .map_err(|e| fail("decode", e))?;
    JsFuture::from(decoding)
        .await
        .map_err(|e| fail("decode", e))?
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| fail("decode", e))
}

fn spawn_load(case: Rc<RefCell<WebCase>>, ticket: LoadTicket, ctx: web::AudioContext, url: String) {
    spawn_local(async move {
        let started = Instant::now();
        let result = load_sound(&ctx, &url).await;
        if let Ok(buf) = &result {
            log::info!(
                "[audio] decoded {} ({:.3}s, {} Hz) in {} ms",
                url,
                buf.duration(),
                buf.sample_rate(),
                started.elapsed().as_millis()
            );
        }
        case.borrow_mut().player_mut().on_loaded(ticket, result);
    });
}

/// Start loading the tap buffer into the player's current context.
pub fn prepare(case: &Rc<RefCell<WebCase>>, sound_url: &str) {
    let (ticket, ctx) = {
        let mut c = case.borrow_mut();
        let player = c.player_mut();
        let Some(ctx) = player.output().context().cloned() else {
            return;
        };
        let Some(ticket) = player.prepare() else {
            return;
        };
        (ticket, ctx)
    };
    spawn_load(case.clone(), ticket, ctx, sound_url.to_string());
}

/// Output device changed: move to a fresh context and reload the buffer.
pub fn rebuild(case: &Rc<RefCell<WebCase>>, sound_url: &str, resume: bool) {
    // closed or unsupported players would reject the context and leak it
    if !case.borrow().player().accepts_output() {
        return;
    }
    let ctx = match create_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            case.borrow_mut().player_mut().mark_unsupported(e);
            return;
        }
    };
    if resume {
        _ = ctx.resume();
    }
    let (old, ticket) = {
        let mut c = case.borrow_mut();
        let player = c.player_mut();
        let old = player.output().context().cloned();
        (old, player.rebind(WebTapOutput::new(Some(ctx.clone()))))
    };
    if let Some(old) = old {
        _ = old.close();
    }
    if let Some(ticket) = ticket {
        log::info!("[audio] output device changed; reloading tap");
        spawn_load(case.clone(), ticket, ctx, sound_url.to_string());
    }
}

pub fn resume(case: &Rc<RefCell<WebCase>>) {
    if let Some(ctx) = case.borrow().player().output().context() {
        _ = ctx.resume();
    }
}

/// Page going away: stop accepting taps and release the context. A decode
/// still in flight is discarded when it lands.
pub fn teardown(case: &Rc<RefCell<WebCase>>) {
    let ctx = {
        let mut c = case.borrow_mut();
        let ctx = c.player().output().context().cloned();
        c.player_mut().close();
        ctx
    };
    if let Some(ctx) = ctx {
        _ = ctx.close();
    }
}
