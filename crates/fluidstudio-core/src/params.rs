//! Catalog of slider-driven parameters on the physics and render panels.
//!
//! Each parameter knows its range, step and neutral default, builds the
//! [`NumericControlSpec`] for its slider, and turns a new value into the
//! matching partial update.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDelta, RenderConfigDelta, RenderConfigSlice, SimConfigDelta, SimConfigSlice};
use crate::controls::NumericControlSpec;
use crate::error::ControlError;

/// Identifies one slider parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamId {
    // Simulation
    Viscosity,
    Vorticity,
    DensityDissipation,
    VelocityDissipation,
    PressureIterations,
    SplatRadius,
    SplatForce,
    // Render
    Exposure,
    Contrast,
    Saturation,
    VignetteIntensity,
    BloomIntensity,
    ChromaticAberration,
    Clarity,
    NoiseIntensity,
}

/// Which half of the store a parameter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    Simulation,
    Render,
}

impl ParamId {
    pub const ALL: [Self; 15] = [
        Self::Viscosity,
        Self::Vorticity,
        Self::DensityDissipation,
        Self::VelocityDissipation,
        Self::PressureIterations,
        Self::SplatRadius,
        Self::SplatForce,
        Self::Exposure,
        Self::Contrast,
        Self::Saturation,
        Self::VignetteIntensity,
        Self::BloomIntensity,
        Self::ChromaticAberration,
        Self::Clarity,
        Self::NoiseIntensity,
    ];

    pub const fn group(self) -> ParamGroup {
        match self {
            Self::Viscosity
            | Self::Vorticity
            | Self::DensityDissipation
            | Self::VelocityDissipation
            | Self::PressureIterations
            | Self::SplatRadius
            | Self::SplatForce => ParamGroup::Simulation,
            _ => ParamGroup::Render,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Viscosity => "Viscosity",
            Self::Vorticity => "Vorticity",
            Self::DensityDissipation => "Dye Dissipation",
            Self::VelocityDissipation => "Velocity Dissipation",
            Self::PressureIterations => "Pressure Iterations",
            Self::SplatRadius => "Splat Radius",
            Self::SplatForce => "Splat Force",
            Self::Exposure => "Exposure",
            Self::Contrast => "Contrast",
            Self::Saturation => "Saturation",
            Self::VignetteIntensity => "Vignette",
            Self::BloomIntensity => "Bloom",
            Self::ChromaticAberration => "Chromatic Aberration",
            Self::Clarity => "Clarity",
            Self::NoiseIntensity => "Film Grain",
        }
    }

    /// Slider `(min, max)`.
    pub const fn range(self) -> (f32, f32) {
        match self {
            Self::Viscosity => (0.0, 1.0),
            Self::Vorticity => (0.0, 50.0),
            Self::DensityDissipation | Self::VelocityDissipation => (0.0, 4.0),
            Self::PressureIterations => (1.0, 80.0),
            Self::SplatRadius => (0.01, 1.0),
            Self::SplatForce => (0.0, 20000.0),
            Self::Exposure | Self::Contrast | Self::Saturation => (0.0, 2.0),
            Self::VignetteIntensity | Self::BloomIntensity | Self::Clarity => (0.0, 1.0),
            Self::ChromaticAberration => (0.0, 5.0),
            Self::NoiseIntensity => (0.0, 0.5),
        }
    }

    pub const fn step(self) -> f32 {
        match self {
            Self::Vorticity | Self::PressureIterations => 1.0,
            Self::SplatForce => 100.0,
            Self::DensityDissipation | Self::VelocityDissipation | Self::ChromaticAberration => 0.05,
            Self::Viscosity
            | Self::SplatRadius
            | Self::Exposure
            | Self::Contrast
            | Self::Saturation
            | Self::VignetteIntensity
            | Self::BloomIntensity
            | Self::Clarity => 0.01,
            Self::NoiseIntensity => 0.005,
        }
    }

    /// Value restored by a double-click reset.
    pub fn default_value(self) -> f32 {
        let value = match self.group() {
            ParamGroup::Simulation => self.read_sim(&SimConfigSlice::default()),
            ParamGroup::Render => self.read_render(&RenderConfigSlice::default()),
        };
        value.unwrap_or(0.0)
    }

    /// Current value from whichever slice the parameter belongs to.
    pub fn read(self, render: &RenderConfigSlice, sim: &SimConfigSlice) -> f32 {
        self.read_sim(sim)
            .or_else(|| self.read_render(render))
            .unwrap_or(0.0)
    }

    fn read_sim(self, sim: &SimConfigSlice) -> Option<f32> {
        Some(match self {
            Self::Viscosity => sim.viscosity,
            Self::Vorticity => sim.vorticity,
            Self::DensityDissipation => sim.density_dissipation,
            Self::VelocityDissipation => sim.velocity_dissipation,
            Self::PressureIterations => sim.pressure_iterations as f32,
            Self::SplatRadius => sim.splat_radius,
            Self::SplatForce => sim.splat_force,
            _ => return None,
        })
    }

    fn read_render(self, render: &RenderConfigSlice) -> Option<f32> {
        Some(match self {
            Self::Exposure => render.exposure,
            Self::Contrast => render.contrast,
            Self::Saturation => render.saturation,
            Self::VignetteIntensity => render.vignette_intensity,
            Self::BloomIntensity => render.bloom_intensity,
            Self::ChromaticAberration => render.chromatic_aberration,
            Self::Clarity => render.clarity,
            Self::NoiseIntensity => render.noise_intensity,
            _ => return None,
        })
    }

    /// Slider spec for the parameter at `current`.
    pub fn control_spec(self, current: f32) -> Result<NumericControlSpec, ControlError> {
        let (min, max) = self.range();
        Ok(NumericControlSpec::new(min, max)?
            .step(self.step())?
            .value(current))
    }

    /// Partial update setting this parameter to `value`. Non-finite values
    /// produce `None` so nothing is written.
    pub fn delta(self, value: f32) -> Option<ConfigDelta> {
        if !value.is_finite() {
            tracing::debug!(param = ?self, value, "ignoring non-finite parameter value");
            return None;
        }
        let (min, max) = self.range();
        let value = value.clamp(min, max);

        let delta = match self {
            Self::Viscosity => sim(|d| d.viscosity = Some(value)),
            Self::Vorticity => sim(|d| d.vorticity = Some(value)),
            Self::DensityDissipation => sim(|d| d.density_dissipation = Some(value)),
            Self::VelocityDissipation => sim(|d| d.velocity_dissipation = Some(value)),
            Self::PressureIterations => sim(|d| d.pressure_iterations = Some(value.round() as u32)),
            Self::SplatRadius => sim(|d| d.splat_radius = Some(value)),
            Self::SplatForce => sim(|d| d.splat_force = Some(value)),
            Self::Exposure => render(|d| d.exposure = Some(value)),
            Self::Contrast => render(|d| d.contrast = Some(value)),
            Self::Saturation => render(|d| d.saturation = Some(value)),
            Self::VignetteIntensity => render(|d| d.vignette_intensity = Some(value)),
            Self::BloomIntensity => render(|d| d.bloom_intensity = Some(value)),
            Self::ChromaticAberration => render(|d| d.chromatic_aberration = Some(value)),
            Self::Clarity => render(|d| d.clarity = Some(value)),
            Self::NoiseIntensity => render(|d| d.noise_intensity = Some(value)),
        };
        Some(delta)
    }
}

fn sim(edit: impl FnOnce(&mut SimConfigDelta)) -> ConfigDelta {
    let mut delta = SimConfigDelta::default();
    edit(&mut delta);
    ConfigDelta::Sim(delta)
}

fn render(edit: impl FnOnce(&mut RenderConfigDelta)) -> ConfigDelta {
    let mut delta = RenderConfigDelta::default();
    edit(&mut delta);
    ConfigDelta::Render(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_param_builds_a_valid_spec() {
        for id in ParamId::ALL {
            let spec = id.control_spec(id.default_value()).unwrap();
            assert!(spec.min < spec.max, "{id:?}");
            assert!(
                spec.value >= spec.min && spec.value <= spec.max,
                "{id:?} default {} outside range",
                spec.value
            );
        }
    }

    #[test]
    fn test_defaults_match_slices() {
        assert_eq!(ParamId::Vorticity.default_value(), 30.0);
        assert_eq!(ParamId::Exposure.default_value(), 1.0);
        assert_eq!(ParamId::BloomIntensity.default_value(), 0.0);
    }

    #[test]
    fn test_delta_routes_to_the_right_slice() {
        match ParamId::Viscosity.delta(0.5) {
            Some(ConfigDelta::Sim(d)) => assert_eq!(d.viscosity, Some(0.5)),
            other => panic!("unexpected {other:?}"),
        }
        match ParamId::Clarity.delta(0.2) {
            Some(ConfigDelta::Render(d)) => assert_eq!(d.clarity, Some(0.2)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_delta_clamps_and_rounds() {
        match ParamId::PressureIterations.delta(500.4) {
            Some(ConfigDelta::Sim(d)) => assert_eq!(d.pressure_iterations, Some(80)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_delta_rejects_non_finite() {
        assert_eq!(ParamId::Contrast.delta(f32::NAN), None);
        assert_eq!(ParamId::SplatForce.delta(f32::NEG_INFINITY), None);
    }

    #[test]
    fn test_read_picks_the_owning_slice() {
        let mut render = RenderConfigSlice::default();
        let mut sim = SimConfigSlice::default();
        render.clarity = 0.7;
        sim.pressure_iterations = 33;
        assert_eq!(ParamId::Clarity.read(&render, &sim), 0.7);
        assert_eq!(ParamId::PressureIterations.read(&render, &sim), 33.0);
    }
}
