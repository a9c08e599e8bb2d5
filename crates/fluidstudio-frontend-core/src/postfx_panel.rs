//! Row model for the post-FX panel.
//!
//! Core effects render as pinned rows with no toggle and no move buttons;
//! refusing those actions happens by never offering them.

use fluidstudio_core::postfx::{EffectKind, PostFxStack};
use fluidstudio_core::{Direction, PostFxEffectId, RenderConfigSlice};

use crate::ipc::PanelToStore;

/// Affordances offered on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControls {
    /// Core effect: always on, fixed position.
    Pinned,
    Optional {
        can_move_up: bool,
        can_move_down: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub id: PostFxEffectId,
    pub label: &'static str,
    pub active: bool,
    pub controls: RowControls,
}

impl PanelRow {
    /// Message for the row's on/off switch, if it has one.
    pub fn toggle_message(&self) -> Option<PanelToStore> {
        match self.controls {
            RowControls::Pinned => None,
            RowControls::Optional { .. } => Some(PanelToStore::ToggleEffect {
                effect: self.id.as_str().to_string(),
            }),
        }
    }

    /// Message for the row's up/down button, if that button is enabled.
    pub fn move_message(&self, direction: Direction) -> Option<PanelToStore> {
        let RowControls::Optional {
            can_move_up,
            can_move_down,
        } = self.controls
        else {
            return None;
        };
        let allowed = match direction {
            Direction::Decrease => can_move_up,
            Direction::Increase => can_move_down,
        };
        allowed.then(|| PanelToStore::MoveEffect {
            effect: self.id.as_str().to_string(),
            direction,
        })
    }
}

/// Rows for the current config, in stack order.
pub fn post_fx_rows(config: &RenderConfigSlice) -> Vec<PanelRow> {
    PostFxStack::from_config(config)
        .entries()
        .iter()
        .map(|entry| PanelRow {
            id: entry.id,
            label: entry.id.label(),
            active: entry.active,
            controls: match entry.kind {
                EffectKind::Core(_) => RowControls::Pinned,
                EffectKind::Optional(_) => RowControls::Optional {
                    can_move_up: entry.can_move_up,
                    can_move_down: entry.can_move_down,
                },
            },
        })
        .collect()
}
