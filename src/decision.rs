//!
//! The outcome handed to the view layer for one settings group.

use serde::{Deserialize, Serialize};

/// Result of evaluating a settings group. Recomputed on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityDecision {
    /// Whether the group's markup is rendered at all.
    pub should_render: bool,
    /// Whether a learn-more affordance is shown.
    pub show_learn_more: bool,
    pub learn_more_url: Option<String>,
    /// Whether the faded (disabled) treatment applies.
    pub is_faded: bool,
    /// Whether the nested-child structural style applies.
    pub has_child_styling: bool,
}

impl VisibilityDecision {
    /// Decision for a group the capability gate hides. Only the structural
    /// flag survives.
    pub fn suppressed(has_child_styling: bool) -> Self {
        VisibilityDecision { has_child_styling, ..Default::default() }
    }
}
