//! Thrust allocation: four thruster forces to a world-frame acceleration.

use nalgebra::{Matrix2x4, Rotation2, Vector2};

use crate::{
    BodyParameters, DynamicsErrors, ThrusterCommand,
    layout::{ThrusterLayout, projection_matrix},
    validation,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrustAllocator {
    projection: Matrix2x4<f64>,
    mass: f64,
}

impl ThrustAllocator {
    pub fn new(cant_angle: f64, mass: f64) -> Result<Self, DynamicsErrors> {
        Ok(Self {
            projection: projection_matrix(cant_angle),
            mass: validation::validate_mass(mass)?,
        })
    }

    pub fn from_layout(layout: &ThrusterLayout, body: &BodyParameters) -> Self {
        Self {
            projection: layout.force_matrix(),
            mass: body.mass(),
        }
    }

    /// Net force in the body frame.
    pub fn body_force(&self, command: &ThrusterCommand) -> Vector2<f64> {
        self.projection * command.vector()
    }

    /// Net force rotated into the world frame by the heading `theta`.
    pub fn world_force(&self, command: &ThrusterCommand, theta: f64) -> Vector2<f64> {
        Rotation2::new(theta) * self.body_force(command)
    }

    pub fn acceleration(&self, command: &ThrusterCommand, theta: f64) -> Vector2<f64> {
        self.world_force(command, theta) / self.mass
    }
}
