use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

use crate::{DynamicsErrors, validation};

pub const THRUSTER_COUNT: usize = 4;

/// Force (N) commanded on each thruster, in [`Mount::ORDER`](crate::Mount::ORDER).
///
/// The order is significant: swapping two entries moves a force to a
/// different corner of the hull and changes the sign of its torque.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrusterCommand([f64; THRUSTER_COUNT]);

impl ThrusterCommand {
    pub fn new(thrust: &[f64]) -> Result<Self, DynamicsErrors> {
        validation::validate_thruster_count(thrust.len())?;
        let mut forces = [0.0; THRUSTER_COUNT];
        forces.copy_from_slice(thrust);
        Ok(Self(forces))
    }

    pub fn forces(&self) -> &[f64; THRUSTER_COUNT] {
        &self.0
    }

    pub fn vector(&self) -> Vector4<f64> {
        Vector4::from(self.0)
    }
}

impl From<[f64; THRUSTER_COUNT]> for ThrusterCommand {
    fn from(forces: [f64; THRUSTER_COUNT]) -> Self {
        Self(forces)
    }
}

impl TryFrom<&[f64]> for ThrusterCommand {
    type Error = DynamicsErrors;

    fn try_from(thrust: &[f64]) -> Result<Self, Self::Error> {
        Self::new(thrust)
    }
}
