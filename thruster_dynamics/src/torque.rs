//! Torque aggregation: four thruster forces to an angular acceleration about z.

use nalgebra::Vector4;

use crate::{BodyParameters, DynamicsErrors, ThrusterCommand, ThrusterLayout, validation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorqueAggregator {
    lever_arms: Vector4<f64>,
    inertia: f64,
}

impl TorqueAggregator {
    pub fn new(layout: &ThrusterLayout, inertia: f64) -> Result<Self, DynamicsErrors> {
        Ok(Self {
            lever_arms: layout.lever_arms(),
            inertia: validation::validate_inertia(inertia)?,
        })
    }

    pub fn from_layout(layout: &ThrusterLayout, body: &BodyParameters) -> Self {
        Self {
            lever_arms: layout.lever_arms(),
            inertia: body.inertia(),
        }
    }

    /// Net torque about z (N m). With the standard layout this is
    /// (T0 - T1 + T2 - T3) * (L sin a + l cos a).
    pub fn net_torque(&self, command: &ThrusterCommand) -> f64 {
        self.lever_arms.dot(&command.vector())
    }

    pub fn angular_acceleration(&self, command: &ThrusterCommand) -> Result<f64, DynamicsErrors> {
        Ok(physics::angular_acceleration(
            self.net_torque(command),
            self.inertia,
        )?)
    }
}
