use log::Level;

use crate::state::form::SubmissionPolicy;

pub const SITE_NAME: &str = "Peace Initiative";

/// Vertical offset, in CSS pixels, past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Every section stacked on one page, nav scrolls to anchors.
    Scroll,
    /// One content section at a time, nav switches tabs.
    Tabs,
}

// The two layouts have always disagreed on required fields; keep each one's behaviour.
pub fn submission_policy(layout: Layout) -> SubmissionPolicy {
    match layout {
        Layout::Scroll => SubmissionPolicy::RequireAllFields,
        Layout::Tabs => SubmissionPolicy::AcceptAny,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
