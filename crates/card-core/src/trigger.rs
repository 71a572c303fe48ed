use crate::drag::BoundaryHits;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EpisodeState {
    #[default]
    Idle,
    /// Contact in progress; the tap for this episode was already requested.
    Sounding,
}

/// Edge detector for one axis pair: fires once per contiguous run of hits.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeTrigger {
    state: EpisodeState,
}

impl EdgeTrigger {
    #[inline]
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// Feed the latest hit flag. Returns true only on the false -> true edge.
    pub fn observe(&mut self, hit: bool) -> bool {
        match (self.state, hit) {
            (EpisodeState::Idle, true) => {
                self.state = EpisodeState::Sounding;
                true
            }
            (EpisodeState::Sounding, false) => {
                self.state = EpisodeState::Idle;
                false
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = EpisodeState::Idle;
    }
}

/// Independent edge detectors for the two axis pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HitEpisodes {
    pub horizontal: EdgeTrigger,
    pub vertical: EdgeTrigger,
}

impl HitEpisodes {
    /// Rising edges for this update, horizontal first.
    pub fn observe(&mut self, hits: BoundaryHits) -> impl Iterator<Item = Axis> {
        let h = self.horizontal.observe(hits.horizontal);
        let v = self.vertical.observe(hits.vertical);
        [(h, Axis::Horizontal), (v, Axis::Vertical)]
            .into_iter()
            .filter_map(|(fired, axis)| fired.then_some(axis))
    }

    pub fn reset(&mut self) {
        self.horizontal.reset();
        self.vertical.reset();
    }
}
