//! Single-formula physics helpers for an underwater vehicle.
//!
//! Nothing in here carries ambient state: physical constants live in
//! [`FluidProperties`] and are passed to the formulas that need them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod auv;
pub mod hydrostatics;
pub mod mechanics;

pub use auv::{AuvRotationParameters, auv_acceleration, auv_angular_acceleration};
pub use hydrostatics::{buoyancy, pressure, will_it_float};
pub use mechanics::{acceleration, angular_acceleration, moment_of_inertia, torque};

/// Standard gravity used by the formula layer (m/s^2).
pub const GRAVITY: f64 = 9.81;
/// Density of fresh water (kg/m^3).
pub const WATER_DENSITY: f64 = 1000.0;
/// Sea level atmospheric pressure (Pa).
pub const ATMOSPHERIC_PRESSURE: f64 = 101325.0;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum PhysicsErrors {
    #[error("atmospheric pressure cannot be negative, got {0}")]
    NegativeAtmosphericPressure(f64),
    #[error("depth cannot be negative, got {0}")]
    NegativeDepth(f64),
    #[error("force magnitude cannot be negative, got {0}")]
    NegativeForce(f64),
    #[error("lever arm cannot be negative, got {0}")]
    NegativeLeverArm(f64),
    #[error("radius cannot be negative, got {0}")]
    NegativeRadius(f64),
    #[error("volume cannot be negative, got {0}")]
    NegativeVolume(f64),
    #[error("density must be greater than zero, got {0}")]
    DensityLessThanOrEqualToZero(f64),
    #[error("gravity must be greater than zero, got {0}")]
    GravityLessThanOrEqualToZero(f64),
    #[error("moment of inertia must be greater than zero, got {0}")]
    InertiaLessThanOrEqualToZero(f64),
    #[error("mass must be greater than zero, got {0}")]
    MassLessThanOrEqualToZero(f64),
}

/// Properties of the surrounding fluid and environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// m/s^2
    pub gravity: f64,
    /// kg/m^3
    pub density: f64,
    /// Pa, added to the hydrostatic pressure at any depth
    pub atmospheric_pressure: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            density: WATER_DENSITY,
            atmospheric_pressure: ATMOSPHERIC_PRESSURE,
        }
    }
}

impl FluidProperties {
    pub fn new(
        gravity: f64,
        density: f64,
        atmospheric_pressure: f64,
    ) -> Result<Self, PhysicsErrors> {
        Ok(Self {
            gravity: require_positive(gravity, PhysicsErrors::GravityLessThanOrEqualToZero)?,
            density: require_positive(density, PhysicsErrors::DensityLessThanOrEqualToZero)?,
            atmospheric_pressure: require_non_negative(
                atmospheric_pressure,
                PhysicsErrors::NegativeAtmosphericPressure,
            )?,
        })
    }
}

// NaN fails both of these checks. Positive quantities must also be finite.
pub(crate) fn require_positive(
    value: f64,
    err: fn(f64) -> PhysicsErrors,
) -> Result<f64, PhysicsErrors> {
    if value.is_finite() && value > 0.0 { Ok(value) } else { Err(err(value)) }
}

pub(crate) fn require_non_negative(
    value: f64,
    err: fn(f64) -> PhysicsErrors,
) -> Result<f64, PhysicsErrors> {
    if value >= 0.0 { Ok(value) } else { Err(err(value)) }
}
