use serde::{Deserialize, Serialize};

pub const DEFAULT_VOLUME: f32 = 0.5;

/// Playback volume in [0, 1]. Applied per tap, never baked into the buffer.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Volume(f32);

impl Volume {
    pub const MUTE: Volume = Volume(0.0);
    pub const FULL: Volume = Volume(1.0);

    /// Clamp into range; NaN is treated as silence.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::MUTE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl From<f32> for Volume {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Volume> for f32 {
    fn from(v: Volume) -> Self {
        v.0
    }
}

/// Volume-to-gain policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VolumeCurve {
    #[default]
    Linear,
    /// `log10(v + 1)`: gentler top end, roughly following loudness perception.
    Logarithmic,
}

impl VolumeCurve {
    pub fn gain(self, volume: Volume) -> f32 {
        let v = volume.get();
        match self {
            VolumeCurve::Linear => v,
            VolumeCurve::Logarithmic => (v + 1.0).log10(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "log" | "logarithmic" => Some(Self::Logarithmic),
            _ => None,
        }
    }
}
