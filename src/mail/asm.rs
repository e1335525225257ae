//! Unsubscribe group references.

use serde::{Deserialize, Serialize};

/// Unsubscribe group reference ("advanced suppression manager").
///
/// `group_id` selects the suppression group the message belongs to;
/// `groups_to_display` lists the groups offered on the preferences page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asm {
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub group_id: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups_to_display: Vec<i64>,
}

impl Asm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group_id(mut self, group_id: i64) -> Self {
        self.group_id = group_id;
        self
    }

    /// Append groups to display, keeping call order.
    pub fn add_groups_to_display(mut self, groups: impl IntoIterator<Item = i64>) -> Self {
        self.groups_to_display.extend(groups);
        self
    }
}
