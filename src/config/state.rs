// src/config/state.rs
use super::options::AppOptions;
use crate::runner::Notice;

/// Live form state. Nothing here outlives the window; no run data is kept.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,

    /// Raw field contents, read verbatim on trigger
    pub url: String,
    pub tag: String,

    /// Modal notice waiting to be dismissed. Blocks the form while set.
    pub notice: Option<Notice>,

    /// One-line summary of the last run
    pub status: String,
}

impl AppState {
    #[inline]
    pub fn form_locked(&self) -> bool {
        self.notice.is_some()
    }
}
