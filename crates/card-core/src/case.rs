//! The case as a whole: drag session feeding the tap player, in event order.

use crate::drag::{BoundaryHits, DragSession, HitReset};
use crate::geometry::Extent;
use crate::highlight::Highlight;
use crate::player::{TapOutput, TapPlayer};
use crate::volume::Volume;
use glam::Vec2;

/// Everything the render side needs after one input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseFrame {
    pub position: Vec2,
    pub hits: BoundaryHits,
    pub highlight: Highlight,
    /// Taps emitted while handling this event.
    pub taps: usize,
}

pub struct CaseController<O: TapOutput> {
    session: DragSession,
    player: TapPlayer<O>,
}

impl<O: TapOutput> CaseController<O> {
    pub fn new(player: TapPlayer<O>, hit_reset: HitReset) -> Self {
        Self {
            session: DragSession::new(hit_reset),
            player,
        }
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn player(&self) -> &TapPlayer<O> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut TapPlayer<O> {
        &mut self.player
    }

    pub fn highlight(&self) -> Highlight {
        Highlight::from_hits(self.session.hits())
    }

    pub fn press(&mut self, pointer: Vec2, card_origin: Vec2) {
        self.session.begin(pointer, card_origin);
    }

    /// Handle one move. Hit flags go to the player before the next event is
    /// looked at, so every false -> true edge is seen exactly once.
    pub fn drag(
        &mut self,
        pointer: Vec2,
        container: Extent,
        card: Extent,
        volume: Volume,
    ) -> Option<CaseFrame> {
        let frame = self.session.update(pointer, container, card)?;
        let before = self.player.emitted();
        self.player.observe(frame.hits, volume);
        Some(CaseFrame {
            position: frame.position,
            hits: frame.hits,
            highlight: Highlight::from_hits(frame.hits),
            taps: self.player.emitted() - before,
        })
    }

    /// End the gesture. `None` when nothing was being dragged.
    pub fn release(&mut self, volume: Volume) -> Option<CaseFrame> {
        if !self.session.is_dragging() {
            return None;
        }
        let hits = self.session.end();
        let before = self.player.emitted();
        self.player.observe(hits, volume);
        Some(CaseFrame {
            position: self.session.origin(),
            hits,
            highlight: Highlight::from_hits(hits),
            taps: self.player.emitted() - before,
        })
    }
}
