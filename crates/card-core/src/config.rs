use crate::drag::HitReset;
use crate::highlight::Orientation;
use crate::volume::{Volume, VolumeCurve};

pub const DEFAULT_SOUND_URL: &str = "/sounds/hit.mp3";

pub const ATTR_SOUND_URL: &str = "data-sound-url";
pub const ATTR_VOLUME_CURVE: &str = "data-volume-curve";
pub const ATTR_HIT_RESET: &str = "data-hit-reset";
pub const ATTR_ORIENTATION: &str = "data-orientation";
pub const ATTR_DEFAULT_VOLUME: &str = "data-default-volume";

/// Page-level configuration, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseConfig {
    pub sound_url: String,
    /// Used when nothing has been persisted yet.
    pub default_volume: Volume,
    pub volume_curve: VolumeCurve,
    pub hit_reset: HitReset,
    pub orientation: Orientation,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            sound_url: DEFAULT_SOUND_URL.to_string(),
            default_volume: Volume::default(),
            volume_curve: VolumeCurve::default(),
            hit_reset: HitReset::default(),
            orientation: Orientation::default(),
        }
    }
}

impl CaseConfig {
    /// Build from `data-*` attributes; missing or malformed values keep
    /// their defaults.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = lookup(ATTR_SOUND_URL).filter(|u| !u.trim().is_empty()) {
            cfg.sound_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ATTR_VOLUME_CURVE) {
            match VolumeCurve::parse(&raw) {
                Some(curve) => cfg.volume_curve = curve,
                None => log::warn!("[config] unknown volume curve {:?}", raw),
            }
        }
        if let Some(raw) = lookup(ATTR_HIT_RESET) {
            match raw.trim() {
                "clear" => cfg.hit_reset = HitReset::Clear,
                "keep" => cfg.hit_reset = HitReset::Keep,
                other => log::warn!("[config] unknown hit reset {:?}", other),
            }
        }
        if let Some(raw) = lookup(ATTR_ORIENTATION) {
            match Orientation::parse(&raw) {
                Some(o) => cfg.orientation = o,
                None => log::warn!("[config] unknown orientation {:?}", raw),
            }
        }
        if let Some(raw) = lookup(ATTR_DEFAULT_VOLUME) {
            match raw.trim().parse::<f32>() {
                Ok(v) => cfg.default_volume = Volume::new(v),
                Err(_) => log::warn!("[config] bad default volume {:?}", raw),
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn attributes_override_defaults() {
        let attrs: HashMap<&str, &str> = [
            (ATTR_SOUND_URL, "/sfx/tap.ogg"),
            (ATTR_VOLUME_CURVE, "log"),
            (ATTR_HIT_RESET, "keep"),
            (ATTR_ORIENTATION, "portrait"),
            (ATTR_DEFAULT_VOLUME, "0.8"),
        ]
        .into_iter()
        .collect();
        let cfg = CaseConfig::from_attributes(|k| attrs.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.sound_url, "/sfx/tap.ogg");
        assert_eq!(cfg.volume_curve, VolumeCurve::Logarithmic);
        assert_eq!(cfg.hit_reset, HitReset::Keep);
        assert_eq!(cfg.orientation, Orientation::Portrait);
        assert_eq!(cfg.default_volume, Volume::new(0.8));
    }

    #[test]
    fn malformed_attributes_keep_defaults() {
        let cfg = CaseConfig::from_attributes(|k| match k {
            ATTR_VOLUME_CURVE => Some("cubic".into()),
            ATTR_DEFAULT_VOLUME => Some("loud".into()),
            ATTR_SOUND_URL => Some("  ".into()),
            _ => None,
        });
        assert_eq!(cfg, CaseConfig::default());
    }
}
