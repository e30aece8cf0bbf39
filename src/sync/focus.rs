/// Edge detector for "this view became visible".
///
/// Starts out hidden, so the first `observe(true)` (the mount) fires too.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FocusTracker {
    visible: bool,
}

impl FocusTracker {
    /// Record the current visibility; true only on a hidden -> visible transition.
    pub fn observe(&mut self, visible: bool) -> bool {
        let became_visible = visible && !self.visible;
        self.visible = visible;
        became_visible
    }
}
