// Element ids and classes the page is expected to provide.

pub const CASE_ID: &str = "case";
pub const CARD_ID: &str = "card";
pub const CARD_IMAGE_ID: &str = "card-image";
pub const CARD_HINT_ID: &str = "card-hint";

pub const VOLUME_ID: &str = "volume";
pub const IMAGE_INPUT_ID: &str = "image-input";
pub const IMAGE_URL_ID: &str = "image-url";

pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-button";
pub const STATUS_ID: &str = "status";

pub const HIDDEN_CLASS: &str = "hidden";

/// Elements revealed once the user has activated sound.
pub const REVEAL_ON_START: &[&str] = &[CASE_ID, VOLUME_ID];

pub const ALL_IDS: &[&str] = &[
    CASE_ID,
    CARD_ID,
    CARD_IMAGE_ID,
    CARD_HINT_ID,
    VOLUME_ID,
    IMAGE_INPUT_ID,
    IMAGE_URL_ID,
    START_OVERLAY_ID,
    START_BUTTON_ID,
    STATUS_ID,
];

// Volume slider
pub const VOLUME_MIN: f32 = 0.0;
pub const VOLUME_MAX: f32 = 1.0;
pub const VOLUME_STEP: f32 = 0.01;

// Shown when a picked image cannot be used
pub const IMAGE_RETRY_HINT: &str = "Could not use that image. Double-click the card to pick another.";
// Shown when a picked image is fine but too large to keep
pub const IMAGE_SAVE_HINT: &str = "That image is too large to keep. Try a smaller one.";
