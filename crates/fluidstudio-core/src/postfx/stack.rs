//! Read model the post-FX panel renders from.

use super::effect::{EffectKind, PostFxEffectId};
use super::is_active;
use crate::config::RenderConfigSlice;

/// One row of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackEntry {
    pub id: PostFxEffectId,
    pub kind: EffectKind,
    pub active: bool,
    pub position: usize,
    /// Optional effects only; core rows are never moved from the panel.
    pub can_move_up: bool,
    pub can_move_down: bool,
}

impl StackEntry {
    pub fn is_toggleable(&self) -> bool {
        matches!(self.kind, EffectKind::Optional(_))
    }
}

/// Snapshot of the effect stack derived from one config.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFxStack {
    entries: Vec<StackEntry>,
}

impl PostFxStack {
    pub fn from_config(config: &RenderConfigSlice) -> Self {
        let order = &config.post_fx_order;
        let last = order.len().saturating_sub(1);
        let entries = order
            .iter()
            .enumerate()
            .map(|(position, id)| {
                let kind = id.kind();
                let movable = matches!(kind, EffectKind::Optional(_));
                StackEntry {
                    id,
                    kind,
                    active: is_active(id, config),
                    position,
                    can_move_up: movable && position > 0,
                    can_move_down: movable && position < last,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Effects that contribute to the frame, in application order.
    pub fn active_ids(&self) -> Vec<PostFxEffectId> {
        self.entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.id)
            .collect()
    }

    pub fn entry(&self, id: PostFxEffectId) -> Option<&StackEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
