//! Drag session: grab offset bookkeeping and clamping of the card inside the
//! case, with per-axis boundary-hit reporting.

use crate::geometry::Extent;
use glam::Vec2;

/// Boundary saturation per axis pair, from the last move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryHits {
    /// Left or right wall.
    pub horizontal: bool,
    /// Top or bottom wall.
    pub vertical: bool,
}

impl BoundaryHits {
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    #[inline]
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

/// What happens to the hit flags when a drag ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitReset {
    /// Flags drop to false on release so no stale highlight remains.
    #[default]
    Clear,
    /// Flags keep their last computed value.
    Keep,
}

/// Result of one move while dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    /// Pointer minus grab offset, before clamping.
    pub proposed: Vec2,
    /// Clamped card origin relative to the case.
    pub position: Vec2,
    pub hits: BoundaryHits,
}

/// Clamp one axis of the card origin.
///
/// Returns the clamped value and whether the proposed value fell outside
/// `[0, container - card]`.
#[inline]
pub fn clamp_axis(proposed: f32, card: f32, container: f32) -> (f32, bool) {
    if proposed < 0.0 {
        (0.0, true)
    } else if proposed + card > container {
        (container - card, true)
    } else {
        (proposed, false)
    }
}

/// Clamp a proposed origin into the case on both axes independently.
pub fn clamp_to_case(proposed: Vec2, card: Extent, container: Extent) -> (Vec2, BoundaryHits) {
    let (x, horizontal) = clamp_axis(proposed.x, card.width, container.width);
    let (y, vertical) = clamp_axis(proposed.y, card.height, container.height);
    (
        Vec2::new(x, y),
        BoundaryHits {
            horizontal,
            vertical,
        },
    )
}

/// Owned input session replacing ad-hoc listener state: one drag gesture at
/// a time, grab offset fixed for its duration.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    grab: Option<Vec2>,
    origin: Vec2,
    hits: BoundaryHits,
    reset: HitReset,
}

impl DragSession {
    pub fn new(reset: HitReset) -> Self {
        Self {
            reset,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Current (clamped) card origin.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn hits(&self) -> BoundaryHits {
        self.hits
    }

    #[inline]
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.grab
    }

    /// Start a gesture. A second press before release replaces the offset,
    /// so the latest press always wins.
    pub fn begin(&mut self, pointer: Vec2, card_origin: Vec2) {
        if self.grab.is_some() {
            log::debug!("[drag] re-entrant begin; resetting grab offset");
        }
        self.origin = card_origin;
        self.grab = Some(pointer - card_origin);
    }

    /// Move the card. `None` when no gesture is active.
    ///
    /// Extents are read by the caller on every move, never cached, so a
    /// resize mid-drag is picked up immediately.
    pub fn update(&mut self, pointer: Vec2, container: Extent, card: Extent) -> Option<DragFrame> {
        let grab = self.grab?;
        let proposed = pointer - grab;
        let (position, hits) = clamp_to_case(proposed, card, container);
        self.origin = position;
        self.hits = hits;
        Some(DragFrame {
            proposed,
            position,
            hits,
        })
    }

    /// Finish the gesture and return the hit flags that now apply.
    pub fn end(&mut self) -> BoundaryHits {
        self.grab = None;
        if self.reset == HitReset::Clear {
            self.hits = BoundaryHits::NONE;
        }
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE: Extent = Extent::new(300.0, 400.0);
    const CARD: Extent = Extent::new(100.0, 100.0);

    #[test]
    fn clamp_axis_edges() {
        assert_eq!(clamp_axis(-1.0, 100.0, 300.0), (0.0, true));
        assert_eq!(clamp_axis(0.0, 100.0, 300.0), (0.0, false));
        assert_eq!(clamp_axis(200.0, 100.0, 300.0), (200.0, false));
        assert_eq!(clamp_axis(200.5, 100.0, 300.0), (200.0, true));
    }

    #[test]
    fn move_without_begin_is_noop() {
        let mut s = DragSession::default();
        assert!(s.update(Vec2::new(10.0, 10.0), CASE, CARD).is_none());
        assert_eq!(s.origin(), Vec2::ZERO);
    }

    #[test]
    fn reentrant_begin_resets_offset() {
        let mut s = DragSession::default();
        s.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
        s.begin(Vec2::new(30.0, 20.0), Vec2::ZERO);
        assert_eq!(s.grab_offset(), Some(Vec2::new(30.0, 20.0)));
    }

    #[test]
    fn end_clears_or_keeps_hits() {
        let mut s = DragSession::new(HitReset::Clear);
        s.begin(Vec2::ZERO, Vec2::ZERO);
        s.update(Vec2::new(-5.0, 0.0), CASE, CARD);
        assert!(s.hits().horizontal);
        assert_eq!(s.end(), BoundaryHits::NONE);
        assert!(!s.is_dragging());

        let mut s = DragSession::new(HitReset::Keep);
        s.begin(Vec2::ZERO, Vec2::ZERO);
        s.update(Vec2::new(-5.0, 0.0), CASE, CARD);
        assert!(s.end().horizontal);
    }
}
