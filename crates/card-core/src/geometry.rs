use glam::Vec2;

/// Width/height of a rendered box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest origin that keeps `inner` fully inside `self`.
    ///
    /// Negative on an axis where `inner` is larger than `self`; clamping has
    /// no valid answer there.
    #[inline]
    pub fn max_origin(self, inner: Extent) -> Vec2 {
        self.as_vec2() - inner.as_vec2()
    }
}
