//! Message contract between the panels and the studio store.
//!
//! Messages use the `#[serde(tag = "type", content = "data")]` layout so the
//! web panels and native hosts share one JSON shape. Each panel message
//! becomes exactly one partial update; a rejected message writes nothing.

use serde::{Deserialize, Serialize};

use fluidstudio_core::color::hex_to_color3;
use fluidstudio_core::postfx::{self, EffectKind};
use fluidstudio_core::{
    ConfigDelta, ConfigStore, Direction, ParamId, PostFxEffectId, RenderConfigDelta,
    RenderConfigSlice, SimConfigSlice,
};

use crate::PanelError;

/// Messages from a panel to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelToStore {
    /// Slider or number field committed a value.
    SetParam { param: ParamId, value: f32 },

    /// Flip an optional post-FX effect.
    ToggleEffect { effect: String },

    /// Swap an optional post-FX effect with its neighbour.
    MoveEffect { effect: String, direction: Direction },

    /// Restore the canonical post-FX order.
    ResetPostFxOrder,

    /// Swatch or hex field committed a grading tint.
    SetTint { hex: String },

    /// Raw partial update from a panel that builds its own deltas.
    ApplyDelta { delta: ConfigDelta },
}

/// Messages from the store back to the panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StoreToPanel {
    /// Snapshot after a handled message.
    ConfigUpdated {
        render: RenderConfigSlice,
        sim: SimConfigSlice,
    },

    /// The message was rejected; nothing was written.
    Error { message: String },
}

impl PanelToStore {
    /// Parse a JSON message from a panel.
    pub fn from_json(text: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Turn one panel message into a store write.
pub fn dispatch<S: ConfigStore + ?Sized>(store: &S, message: PanelToStore) -> Result<(), PanelError> {
    match message {
        PanelToStore::SetParam { param, value } => {
            let delta = param
                .delta(value)
                .ok_or(PanelError::InvalidValue { param, value })?;
            store.apply(delta);
        }
        PanelToStore::ToggleEffect { effect } => {
            let id = optional_effect(&effect)?;
            store.set_post_config(postfx::toggle(id, &store.config()));
        }
        PanelToStore::MoveEffect { effect, direction } => {
            let id = optional_effect(&effect)?;
            let current = store.config().post_fx_order;
            let moved = postfx::move_effect(&current, id, direction);
            if moved != current {
                store.set_post_config(RenderConfigDelta {
                    post_fx_order: Some(moved),
                    ..Default::default()
                });
            }
        }
        PanelToStore::ResetPostFxOrder => {
            store.set_post_config(RenderConfigDelta {
                post_fx_order: Some(postfx::reset_order()),
                ..Default::default()
            });
        }
        PanelToStore::SetTint { hex } => {
            let tint = hex_to_color3(&hex)?;
            store.set_config(RenderConfigDelta {
                tint: Some(tint),
                ..Default::default()
            });
        }
        PanelToStore::ApplyDelta { delta } => store.apply(delta),
    }
    Ok(())
}

/// [`dispatch`], answering with a fresh snapshot or the rejection reason.
pub fn handle_message<S: ConfigStore + ?Sized>(store: &S, message: PanelToStore) -> StoreToPanel {
    match dispatch(store, message) {
        Ok(()) => StoreToPanel::ConfigUpdated {
            render: store.config(),
            sim: store.sim_config(),
        },
        Err(err) => {
            tracing::warn!(%err, "panel message rejected");
            StoreToPanel::Error {
                message: err.to_string(),
            }
        }
    }
}

fn optional_effect(name: &str) -> Result<PostFxEffectId, PanelError> {
    let id: PostFxEffectId = name.parse()?;
    match id.kind() {
        EffectKind::Core(_) => Err(PanelError::CoreEffect(id)),
        EffectKind::Optional(_) => Ok(id),
    }
}
