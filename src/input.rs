// Pointer/touch bookkeeping that does not need the DOM.

/// Follows exactly one touch point per drag: the one that started it.
#[derive(Default, Clone, Copy, Debug)]
pub struct TouchTracker {
    active: Option<i32>,
}

impl TouchTracker {
    #[inline]
    pub fn active(&self) -> Option<i32> {
        self.active
    }

    /// Claim `id` for a new drag. Extra fingers while one is tracked are
    /// refused.
    pub fn begin(&mut self, id: i32) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Index of the tracked touch among the current touch points.
    pub fn position_in(&self, ids: impl IntoIterator<Item = i32>) -> Option<usize> {
        let active = self.active?;
        ids.into_iter().position(|id| id == active)
    }

    /// Returns true when the tracked touch is among the lifted ones.
    pub fn end(&mut self, lifted: impl IntoIterator<Item = i32>) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if lifted.into_iter().any(|id| id == active) {
            self.active = None;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}
