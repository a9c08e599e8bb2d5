//! Seams to the external studio state.
//!
//! The control core never owns config. Panels read a snapshot through
//! [`ConfigStore`] and hand back partial updates; the store merges them
//! last-writer-wins and the solver picks up the result on its next tick.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDelta, RenderConfigDelta, RenderConfigSlice, SimConfigDelta, SimConfigSlice};

/// Access to the shared studio config.
pub trait ConfigStore {
    /// Snapshot of the render config.
    fn config(&self) -> RenderConfigSlice;

    /// Snapshot of the simulation config.
    fn sim_config(&self) -> SimConfigSlice;

    /// Merge a render update.
    fn set_config(&self, delta: RenderConfigDelta);

    /// Merge a simulation update.
    fn set_sim_config(&self, delta: SimConfigDelta);

    /// Merge a post-FX update (toggles and order). Stores that keep post-FX
    /// state separately override this.
    fn set_post_config(&self, delta: RenderConfigDelta) {
        self.set_config(delta);
    }

    /// Route a [`ConfigDelta`] to the matching setter. Empty deltas are dropped.
    fn apply(&self, delta: ConfigDelta) {
        if delta.is_empty() {
            return;
        }
        match delta {
            ConfigDelta::Render(delta) => self.set_config(delta),
            ConfigDelta::Sim(delta) => self.set_sim_config(delta),
        }
    }
}

#[derive(Debug, Default)]
struct StoreState {
    render: RenderConfigSlice,
    sim: SimConfigSlice,
    revision: u64,
}

/// In-process [`ConfigStore`].
///
/// Reads clone a snapshot under a shared lock, so any number of panels can
/// read the same state concurrently.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new(render: RenderConfigSlice, sim: SimConfigSlice) -> Self {
        Self {
            state: RwLock::new(StoreState {
                render,
                sim,
                revision: 0,
            }),
        }
    }

    /// Number of writes that changed at least one field.
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }
}

impl ConfigStore for MemoryStore {
    fn config(&self) -> RenderConfigSlice {
        self.state.read().render.clone()
    }

    fn sim_config(&self) -> SimConfigSlice {
        self.state.read().sim.clone()
    }

    fn set_config(&self, delta: RenderConfigDelta) {
        let mut state = self.state.write();
        if delta.apply_to(&mut state.render) > 0 {
            state.revision += 1;
            tracing::debug!(revision = state.revision, "render config updated");
        }
    }

    fn set_sim_config(&self, delta: SimConfigDelta) {
        let mut state = self.state.write();
        if delta.apply_to(&mut state.sim) > 0 {
            state.revision += 1;
            tracing::debug!(revision = state.revision, "simulation config updated");
        }
    }
}

/// Emitter shapes the preset catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmitterKind {
    Point,
    Line,
    Circle,
    Curve,
    Text,
    Svg,
    Brush,
}

/// Named emitter presets, provided by the studio.
pub trait PresetCatalog {
    type Preset;

    fn preset_names(&self, kind: EmitterKind) -> Vec<String>;

    fn preset(&self, kind: EmitterKind, name: &str) -> Option<Self::Preset>;
}
