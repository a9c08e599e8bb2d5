//! Persisted effect order: every effect exactly once.
//!
//! Stored orders drift (older sessions, renamed effects, partial writes), so
//! anything coming back from persistence goes through [`sanitize_order`]
//! before it is used.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::effect::PostFxEffectId;
use crate::controls::Direction;

/// Canonical order: the fallback for sanitize and the target of "reset order".
pub const DEFAULT_POST_FX_ORDER: [PostFxEffectId; 11] = PostFxEffectId::ALL;

/// Ordered sequence containing each [`PostFxEffectId`] exactly once.
///
/// Deserializing accepts any JSON value and repairs it, so a persisted order
/// always loads into a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "Vec<PostFxEffectId>")]
pub struct PostFxOrder(Vec<PostFxEffectId>);

impl Default for PostFxOrder {
    fn default() -> Self {
        Self(DEFAULT_POST_FX_ORDER.to_vec())
    }
}

impl PostFxOrder {
    pub fn as_slice(&self) -> &[PostFxEffectId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = PostFxEffectId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, id: PostFxEffectId) -> Option<usize> {
        self.0.iter().position(|&e| e == id)
    }

    /// Identifiers as persisted strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|id| id.as_str().to_string()).collect()
    }

    /// Load a persisted order from JSON text. Anything that is not an array
    /// falls back to the canonical order; entries that are not known effect
    /// names are dropped.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(err) => {
                tracing::debug!(%err, "stored post-fx order is not valid JSON, using default");
                Self::default()
            }
        }
    }

    /// Same repair as [`PostFxOrder::from_json`] for an already parsed value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let stored: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                sanitize_order(&stored, &Self::default())
            }
            other => {
                tracing::debug!(?other, "stored post-fx order is not an array, using default");
                Self::default()
            }
        }
    }
}

impl From<Value> for PostFxOrder {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<PostFxOrder> for Vec<PostFxEffectId> {
    fn from(order: PostFxOrder) -> Self {
        order.0
    }
}

/// Repair a stored order against `canonical`.
///
/// 1. Keep known ids in their stored relative order, dropping unknown ids and
///    every duplicate after the first occurrence.
/// 2. Append the known ids still missing, in `canonical` order.
///
/// Pure and idempotent.
pub fn sanitize_order<S: AsRef<str>>(stored: &[S], canonical: &PostFxOrder) -> PostFxOrder {
    let mut out: Vec<PostFxEffectId> = Vec::with_capacity(canonical.len());
    let mut dropped = 0usize;

    for raw in stored {
        match raw.as_ref().parse::<PostFxEffectId>() {
            Ok(id) if !out.contains(&id) => out.push(id),
            _ => dropped += 1,
        }
    }

    let kept = out.len();
    for id in canonical.iter() {
        if !out.contains(&id) {
            out.push(id);
        }
    }

    if dropped > 0 || kept != out.len() {
        tracing::debug!(
            dropped,
            appended = out.len() - kept,
            "repaired stored post-fx order"
        );
    }

    PostFxOrder(out)
}

/// Swap `id` with its neighbour in `direction`.
///
/// Moving the first entry up or the last entry down returns the order
/// unchanged. Core effects are not special here; the panel decides what it
/// offers to move.
pub fn move_effect(order: &PostFxOrder, id: PostFxEffectId, direction: Direction) -> PostFxOrder {
    let Some(index) = order.position(id) else {
        return order.clone();
    };
    let Some(target) = index.checked_add_signed(direction.offset()) else {
        return order.clone();
    };
    if target >= order.len() {
        return order.clone();
    }

    let mut next = order.clone();
    next.0.swap(index, target);
    next
}

/// The canonical order, for the "reset order" action.
pub fn reset_order() -> PostFxOrder {
    PostFxOrder::default()
}
