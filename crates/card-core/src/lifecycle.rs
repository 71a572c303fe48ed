/// Page visibility transitions the front-end listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    /// `pagehide`; `persisted` is true when the page enters the back/forward cache.
    Hidden { persisted: bool },
    /// `pageshow`; `persisted` is true when restored from the back/forward cache.
    Shown { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Nothing,
    /// The page is really going away: close the player and its context.
    Teardown,
    /// Back from the cache: wake the audio context up again.
    Resume,
}

impl PageTransition {
    pub fn action(self) -> LifecycleAction {
        match self {
            PageTransition::Hidden { persisted: false } => LifecycleAction::Teardown,
            PageTransition::Hidden { persisted: true } => LifecycleAction::Nothing,
            PageTransition::Shown { persisted: true } => LifecycleAction::Resume,
            PageTransition::Shown { persisted: false } => LifecycleAction::Nothing,
        }
    }
}
