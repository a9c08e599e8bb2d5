//! Fluid solver parameters exposed on the physics panel.

use serde::{Deserialize, Serialize};

use super::DeltaValue;

/// Solver fields the physics panel reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfigSlice {
    /// Kinematic viscosity. 0.0 = inviscid.
    pub viscosity: f32,
    /// Vorticity confinement strength.
    pub vorticity: f32,
    /// Dye fade rate per second.
    pub density_dissipation: f32,
    /// Velocity fade rate per second.
    pub velocity_dissipation: f32,
    /// Jacobi iterations for the pressure solve.
    pub pressure_iterations: u32,
    /// Emitter splat radius as a fraction of the canvas.
    pub splat_radius: f32,
    /// Force applied by pointer and emitter splats.
    pub splat_force: f32,
    pub paused: bool,
}

impl Default for SimConfigSlice {
    fn default() -> Self {
        Self {
            viscosity: 0.0,
            vorticity: 30.0,
            density_dissipation: 1.0,
            velocity_dissipation: 0.2,
            pressure_iterations: 20,
            splat_radius: 0.25,
            splat_force: 6000.0,
            paused: false,
        }
    }
}

config_delta! {
    /// Partial update to a [`SimConfigSlice`].
    pub struct SimConfigDelta for SimConfigSlice {
        viscosity: f32,
        vorticity: f32,
        density_dissipation: f32,
        velocity_dissipation: f32,
        pressure_iterations: u32,
        splat_radius: f32,
        splat_force: f32,
        paused: bool,
    }
}
