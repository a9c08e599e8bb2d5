//! Interactive wrapper around the stepped value model.
//!
//! [`SliderInteraction`] owns only transient UI state: dragging, hovering,
//! tooltip visibility and pointer capture. The value itself lives in the
//! store; every handler returns the new value to forward, or `None`.
//!
//! Pressing the track applies the press position immediately and captures
//! the pointer, so a drag keeps tracking after leaving the element. Release
//! or cancel ends the drag and schedules the tooltip to hide after
//! [`InteractionConfig::tooltip_hide_delay`]. Dropping the interaction
//! (unmount) releases any capture and discards the pending hide.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use fluidstudio_core::Direction;
use fluidstudio_core::controls::{self, NumericControlSpec};

use crate::{KeyboardEvent, MouseButton, MouseEvent};

/// Opacity multiplier for disabled controls.
pub const DISABLED_EMPHASIS: f32 = 0.4;

/// Steps taken per arrow key when shift is held.
const SHIFT_STEP_MULTIPLIER: u32 = 10;

// ── Configuration ───────────────────────────────────────────────────────────

/// Timing knobs for slider interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    /// Delay between releasing a drag and hiding the value tooltip.
    pub tooltip_hide_delay_ms: u64,
    /// Max gap between two presses to treat them as a double-click reset.
    pub double_click_gap_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tooltip_hide_delay_ms: 800,
            double_click_gap_ms: 350,
        }
    }
}

impl InteractionConfig {
    pub fn tooltip_hide_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_delay_ms)
    }

    pub fn double_click_gap(&self) -> Duration {
        Duration::from_millis(self.double_click_gap_ms)
    }
}

// ── Host seams ──────────────────────────────────────────────────────────────

/// Pointer capture provided by the host UI.
pub trait CaptureHost {
    fn capture_pointer(&self, pointer_id: u32);

    fn release_pointer(&self, pointer_id: u32);
}

/// Horizontal extent of the track in event coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

impl TrackGeometry {
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the track under `x`, pinned to `[0, 1]` so a drag past
    /// either end holds the thumb at the boundary. `None` for a collapsed
    /// track or non-finite input.
    pub fn fraction(&self, x: f32) -> Option<f32> {
        if !(self.width.is_finite() && self.width > 0.0) || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

// ── View ────────────────────────────────────────────────────────────────────

/// Everything a renderer needs to draw one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    /// Fill and thumb position, `0..=100`.
    pub percent: f32,
    pub label: String,
    pub tooltip_visible: bool,
    pub dragging: bool,
    pub hovered: bool,
    /// 1.0 normally, [`DISABLED_EMPHASIS`] when disabled.
    pub emphasis: f32,
}

// ── Interaction ─────────────────────────────────────────────────────────────

pub struct SliderInteraction<H: CaptureHost> {
    host: H,
    config: InteractionConfig,
    geometry: TrackGeometry,
    /// Restored on double-click when set.
    reset_value: Option<f32>,
    dragging: bool,
    hovered: bool,
    tooltip_visible: bool,
    captured: Option<u32>,
    tooltip_hide_at: Option<Instant>,
    last_press_at: Option<Instant>,
}

impl<H: CaptureHost> SliderInteraction<H> {
    pub fn new(host: H, geometry: TrackGeometry, config: InteractionConfig) -> Self {
        Self {
            host,
            config,
            geometry,
            reset_value: None,
            dragging: false,
            hovered: false,
            tooltip_visible: false,
            captured: None,
            tooltip_hide_at: None,
            last_press_at: None,
        }
    }

    /// Enable double-click reset to `value`.
    pub fn with_reset_value(mut self, value: f32) -> Self {
        self.reset_value = Some(value);
        self
    }

    /// Update the track extent after a layout change.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    pub fn captured_pointer(&self) -> Option<u32> {
        self.captured
    }

    pub fn tooltip_hide_at(&self) -> Option<Instant> {
        self.tooltip_hide_at
    }

    /// Apply one pointer event. Returns the value to forward to the store.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        spec: &NumericControlSpec,
        now: Instant,
    ) -> Option<f32> {
        if spec.disabled {
            if self.dragging {
                self.end_drag(now);
            }
            return None;
        }

        match *event {
            MouseEvent::Enter { .. } => {
                self.hovered = true;
                self.show_tooltip();
                None
            }
            MouseEvent::Leave => {
                self.hovered = false;
                if !self.dragging {
                    self.schedule_hide(now);
                }
                None
            }
            MouseEvent::ButtonDown {
                button: MouseButton::Left,
                pointer_id,
                x,
                ..
            } => self.press(pointer_id, x, spec, now),
            MouseEvent::Move { x, .. } if self.dragging => self.value_at(x, spec),
            MouseEvent::ButtonUp {
                button: MouseButton::Left,
                pointer_id,
                ..
            }
            | MouseEvent::Cancel { pointer_id } => {
                // Only the pointer holding the capture may end the drag.
                if self.dragging && self.captured == Some(pointer_id) {
                    self.end_drag(now);
                }
                None
            }
            MouseEvent::Scroll { delta_y, .. } => {
                // Wheel up reports a negative delta and should increase.
                let direction = Direction::from_wheel(-delta_y)?;
                controls::value_from_delta(spec.value, direction, spec)
            }
            _ => None,
        }
    }

    /// Apply one key event to a focused slider.
    pub fn handle_key(&mut self, event: &KeyboardEvent, spec: &NumericControlSpec) -> Option<f32> {
        if spec.disabled || !event.pressed {
            return None;
        }

        let direction = match event.key.as_str() {
            "ArrowRight" | "ArrowUp" => Direction::Increase,
            "ArrowLeft" | "ArrowDown" => Direction::Decrease,
            "Home" => return Some(spec.min),
            "End" => return Some(spec.max),
            _ => return None,
        };

        let steps = if event.modifiers.shift {
            SHIFT_STEP_MULTIPLIER
        } else {
            1
        };
        let mut value = spec.value;
        for _ in 0..steps {
            value = controls::value_from_delta(value, direction, spec)?;
        }
        Some(value)
    }

    /// Advance timers. Returns `true` when the tooltip was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.tooltip_hide_at {
            Some(deadline) if now >= deadline => {
                self.tooltip_hide_at = None;
                self.tooltip_visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn view(&self, spec: &NumericControlSpec) -> SliderView {
        SliderView {
            percent: controls::percent(spec.value, spec),
            label: spec.formatted(),
            tooltip_visible: self.tooltip_visible,
            dragging: self.dragging,
            hovered: self.hovered,
            emphasis: if spec.disabled { DISABLED_EMPHASIS } else { 1.0 },
        }
    }

    fn press(
        &mut self,
        pointer_id: u32,
        x: f32,
        spec: &NumericControlSpec,
        now: Instant,
    ) -> Option<f32> {
        let gap = self.config.double_click_gap();
        let is_double_click = self
            .last_press_at
            .is_some_and(|last| now.duration_since(last) <= gap);

        if is_double_click && let Some(default) = self.reset_value {
            // Consume this pair so a rapid third press starts a drag.
            self.last_press_at = None;
            return spec.reset_value(default);
        }
        self.last_press_at = Some(now);

        self.dragging = true;
        self.acquire(pointer_id);
        self.show_tooltip();
        self.value_at(x, spec)
    }

    fn value_at(&self, x: f32, spec: &NumericControlSpec) -> Option<f32> {
        let fraction = self.geometry.fraction(x)?;
        controls::value_from_pointer(fraction, spec)
    }

    fn end_drag(&mut self, now: Instant) {
        self.dragging = false;
        self.release();
        self.schedule_hide(now);
    }

    fn show_tooltip(&mut self) {
        self.tooltip_visible = true;
        self.tooltip_hide_at = None;
    }

    fn schedule_hide(&mut self, now: Instant) {
        if self.tooltip_visible {
            self.tooltip_hide_at = Some(now + self.config.tooltip_hide_delay());
        }
    }

    fn acquire(&mut self, pointer_id: u32) {
        if self.captured == Some(pointer_id) {
            return;
        }
        self.release();
        self.host.capture_pointer(pointer_id);
        self.captured = Some(pointer_id);
    }

    fn release(&mut self) {
        if let Some(pointer_id) = self.captured.take() {
            self.host.release_pointer(pointer_id);
        }
    }
}

impl<H: CaptureHost> Drop for SliderInteraction<H> {
    fn drop(&mut self) {
        if self.captured.is_some() {
            tracing::debug!("slider dropped mid-drag, releasing pointer capture");
        }
        self.release();
        self.tooltip_hide_at = None;
    }
}
