//! Config slices owned by the external store, and the partial updates the
//! panels send back.
//!
//! A slice is only ever read by the control core. Writes are expressed as a
//! delta with one `Option` per field; the store merges it last-writer-wins.

use serde::{Deserialize, Serialize};

use crate::color::Color3;
use crate::postfx::PostFxOrder;

/// Values a delta may carry. Non-finite numbers are never written.
pub trait DeltaValue: Clone {
    fn is_writable(&self) -> bool {
        true
    }
}

impl DeltaValue for f32 {
    fn is_writable(&self) -> bool {
        self.is_finite()
    }
}

impl DeltaValue for bool {}

impl DeltaValue for u32 {}

impl DeltaValue for PostFxOrder {}

impl DeltaValue for Color3 {
    fn is_writable(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

/// Generates a delta struct mirroring `$target` field for field, with
/// `is_empty`, `merge` and `apply_to`.
macro_rules! config_delta {
    (
        $(#[$meta:meta])*
        pub struct $name:ident for $target:ty {
            $( $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Fold `other` into `self`; fields set in `other` win.
            pub fn merge(&mut self, other: Self) {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            }

            /// Write every set field into `target`, skipping values that are
            /// not writable. Returns the number of fields written.
            pub fn apply_to(&self, target: &mut $target) -> usize {
                let mut written = 0;
                $(
                    if let Some(value) = &self.$field {
                        if DeltaValue::is_writable(value) {
                            target.$field = value.clone();
                            written += 1;
                        } else {
                            tracing::debug!(
                                field = stringify!($field),
                                "dropping non-finite config write"
                            );
                        }
                    }
                )*
                written
            }
        }
    };
}

mod render;
mod sim;

pub use render::{RenderConfigDelta, RenderConfigSlice};
pub use sim::{SimConfigDelta, SimConfigSlice};

/// A partial update addressed to either half of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", content = "delta", rename_all = "camelCase")]
pub enum ConfigDelta {
    Render(RenderConfigDelta),
    Sim(SimConfigDelta),
}

impl ConfigDelta {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Render(delta) => delta.is_empty(),
            Self::Sim(delta) => delta.is_empty(),
        }
    }
}

impl From<RenderConfigDelta> for ConfigDelta {
    fn from(delta: RenderConfigDelta) -> Self {
        Self::Render(delta)
    }
}

impl From<SimConfigDelta> for ConfigDelta {
    fn from(delta: SimConfigDelta) -> Self {
        Self::Sim(delta)
    }
}
