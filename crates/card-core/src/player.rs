//! Edge-triggered tap player.
//!
//! The player owns the decoded tap buffer and a pair of hit-episode edge
//! detectors. Playback itself goes through [`TapOutput`], so the web front-end
//! can build WebAudio nodes while host tests record emissions.

use crate::drag::BoundaryHits;
use crate::error::{CaseError, CaseResult};
use crate::trigger::{Axis, HitEpisodes};
use crate::volume::{Volume, VolumeCurve};
use std::fmt;
use std::rc::Rc;

/// One-shot playback sink: source(buffer) -> gain -> destination, started now.
pub trait TapOutput {
    type Buffer;

    fn emit(&self, buffer: &Self::Buffer, gain: f32) -> CaseResult<()>;
}

/// Audio capability carried by the player instead of a flag plus an
/// optional buffer.
pub enum AudioCapability<B> {
    Unprepared,
    Loading,
    Ready(Rc<B>),
    Unsupported(CaseError),
    Closed,
}

impl<B> AudioCapability<B> {
    pub fn label(&self) -> &'static str {
        match self {
            AudioCapability::Unprepared => "unprepared",
            AudioCapability::Loading => "loading",
            AudioCapability::Ready(_) => "ready",
            AudioCapability::Unsupported(_) => "unsupported",
            AudioCapability::Closed => "closed",
        }
    }
}

impl<B> fmt::Debug for AudioCapability<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCapability::Unsupported(e) => write!(f, "Unsupported({e})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Identifies one `prepare` call; completions carrying an older ticket are
/// discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u32);

pub struct TapPlayer<O: TapOutput> {
    output: O,
    capability: AudioCapability<O::Buffer>,
    curve: VolumeCurve,
    episodes: HitEpisodes,
    generation: u32,
    emitted: usize,
}

impl<O: TapOutput> TapPlayer<O> {
    pub fn new(output: O, curve: VolumeCurve) -> Self {
        Self {
            output,
            capability: AudioCapability::Unprepared,
            curve,
            episodes: HitEpisodes::default(),
            generation: 0,
            emitted: 0,
        }
    }

    /// Player that never makes a sound, e.g. when no audio context exists.
    pub fn unsupported(output: O, curve: VolumeCurve, err: CaseError) -> Self {
        let mut player = Self::new(output, curve);
        player.mark_unsupported(err);
        player
    }

    pub fn capability(&self) -> &AudioCapability<O::Buffer> {
        &self.capability
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn curve(&self) -> VolumeCurve {
        self.curve
    }

    pub fn set_curve(&mut self, curve: VolumeCurve) {
        self.curve = curve;
    }

    pub fn episodes(&self) -> &HitEpisodes {
        &self.episodes
    }

    /// Number of taps actually handed to the output.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.capability, AudioCapability::Ready(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.capability, AudioCapability::Unsupported(_))
    }

    /// Whether a new output (audio context) would be taken by [`rebind`].
    /// False once unsupported or closed, so callers can skip building one.
    ///
    /// [`rebind`]: TapPlayer::rebind
    pub fn accepts_output(&self) -> bool {
        !matches!(
            self.capability,
            AudioCapability::Unsupported(_) | AudioCapability::Closed
        )
    }

    /// Begin loading the tap buffer. Returns `None` once unsupported or
    /// closed; those states are permanent for the session.
    pub fn prepare(&mut self) -> Option<LoadTicket> {
        match self.capability {
            AudioCapability::Unsupported(_) | AudioCapability::Closed => None,
            _ => {
                self.generation = self.generation.wrapping_add(1);
                self.capability = AudioCapability::Loading;
                Some(LoadTicket(self.generation))
            }
        }
    }

    /// Swap the output (new audio device/context) and start a fresh load.
    /// Unsupported and closed players stay as they are.
    pub fn rebind(&mut self, output: O) -> Option<LoadTicket> {
        if !self.accepts_output() {
            return None;
        }
        self.output = output;
        self.prepare()
    }

    /// Deliver the result of a load. Stale or post-teardown completions are
    /// dropped. Returns whether the result was applied.
    pub fn on_loaded(&mut self, ticket: LoadTicket, result: CaseResult<O::Buffer>) -> bool {
        if ticket.0 != self.generation || !matches!(self.capability, AudioCapability::Loading) {
            log::debug!(
                "[audio] discarding load result (ticket {} state {})",
                ticket.0,
                self.capability.label()
            );
            return false;
        }
        match result {
            Ok(buffer) => {
                self.capability = AudioCapability::Ready(Rc::new(buffer));
                log::info!("[audio] tap buffer ready");
            }
            Err(e) => self.mark_unsupported(e),
        }
        true
    }

    pub fn mark_unsupported(&mut self, err: CaseError) {
        log::warn!("[audio] sound disabled: {}", err);
        self.capability = AudioCapability::Unsupported(err);
    }

    /// Emit one tap now. No-op (not an error) until the buffer is ready, and
    /// for gains that would be inaudible.
    pub fn trigger(&mut self, volume: Volume) -> bool {
        let AudioCapability::Ready(buffer) = &self.capability else {
            return false;
        };
        let gain = self.curve.gain(volume);
        if gain <= 0.0 {
            return false;
        }
        match self.output.emit(buffer, gain) {
            Ok(()) => {
                self.emitted += 1;
                true
            }
            Err(e) => {
                log::warn!("[audio] tap failed: {}", e);
                false
            }
        }
    }

    /// Run edge detection on the latest hit flags and tap once per newly
    /// started contact episode. Returns the axes that started an episode.
    pub fn observe(&mut self, hits: BoundaryHits, volume: Volume) -> Vec<Axis> {
        let edges: Vec<Axis> = self.episodes.observe(hits).collect();
        for axis in &edges {
            let played = self.trigger(volume);
            log::debug!("[audio] {:?} contact, tap played={}", axis, played);
        }
        edges
    }

    /// Stop for good; later loads and triggers are ignored.
    pub fn close(&mut self) {
        self.capability = AudioCapability::Closed;
        self.episodes.reset();
    }
}
