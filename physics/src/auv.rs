use serde::{Deserialize, Serialize};

use crate::{PhysicsErrors, mechanics, require_non_negative, require_positive};

/// Rotational properties of a single-thruster AUV model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuvRotationParameters {
    /// kg m^2
    pub inertia: f64,
    /// distance from the center of mass to the thruster (m)
    pub thruster_distance: f64,
}

impl Default for AuvRotationParameters {
    fn default() -> Self {
        Self {
            inertia: 1.0,
            thruster_distance: 0.5,
        }
    }
}

impl AuvRotationParameters {
    pub fn new(inertia: f64, thruster_distance: f64) -> Result<Self, PhysicsErrors> {
        Ok(Self {
            inertia: require_positive(inertia, PhysicsErrors::InertiaLessThanOrEqualToZero)?,
            thruster_distance: require_non_negative(
                thruster_distance,
                PhysicsErrors::NegativeLeverArm,
            )?,
        })
    }
}

/// Linear acceleration of an AUV driven by one thruster of magnitude `force`.
pub fn auv_acceleration(force: f64, mass: f64) -> Result<f64, PhysicsErrors> {
    let force = require_non_negative(force, PhysicsErrors::NegativeForce)?;
    mechanics::acceleration(force, mass)
}

/// Angular acceleration of an AUV from one thruster firing at `angle` degrees
/// off the body axis.
pub fn auv_angular_acceleration(
    force: f64,
    angle: f64,
    parameters: &AuvRotationParameters,
) -> Result<f64, PhysicsErrors> {
    let torque = mechanics::torque(force, angle, parameters.thruster_distance)?;
    mechanics::angular_acceleration(torque, parameters.inertia)
}
