//! Where the four thrusters sit on the hull and which way they push.
//!
//! Body frame: x forward, y to port, z up. All four thrusters share one cant
//! angle, measured from the longitudinal axis. Fore thrusters push forward,
//! aft thrusters push backward, and the cant alternates so that a
//! diagonal pair (0 and 2, or 1 and 3) turns the hull the same way.
//!
//! | index | mount          | position  | line of force      |
//! |-------|----------------|-----------|--------------------|
//! | 0     | fore starboard | ( L, -l)  | ( cos a,  sin a)   |
//! | 1     | fore port      | ( L,  l)  | ( cos a, -sin a)   |
//! | 2     | aft port       | (-L,  l)  | (-cos a, -sin a)   |
//! | 3     | aft starboard  | (-L, -l)  | (-cos a,  sin a)   |

use nalgebra::{Matrix2x4, Vector2, Vector4};
use serde::{Deserialize, Serialize};

use crate::{DynamicsErrors, command::THRUSTER_COUNT, validation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mount {
    ForeStarboard,
    ForePort,
    AftPort,
    AftStarboard,
}

impl Mount {
    /// Index order of [`ThrusterCommand`](crate::ThrusterCommand) entries.
    pub const ORDER: [Mount; THRUSTER_COUNT] = [
        Mount::ForeStarboard,
        Mount::ForePort,
        Mount::AftPort,
        Mount::AftStarboard,
    ];

    // (x, y) signs of the mounting position
    fn position_signs(&self) -> (f64, f64) {
        match self {
            Mount::ForeStarboard => (1.0, -1.0),
            Mount::ForePort => (1.0, 1.0),
            Mount::AftPort => (-1.0, 1.0),
            Mount::AftStarboard => (-1.0, -1.0),
        }
    }

    // (x, y) signs of the line of force
    fn direction_signs(&self) -> (f64, f64) {
        match self {
            Mount::ForeStarboard => (1.0, 1.0),
            Mount::ForePort => (1.0, -1.0),
            Mount::AftPort => (-1.0, -1.0),
            Mount::AftStarboard => (-1.0, 1.0),
        }
    }

    pub fn position(&self, half_length: f64, half_width: f64) -> Vector2<f64> {
        let (sx, sy) = self.position_signs();
        Vector2::new(sx * half_length, sy * half_width)
    }

    /// Unit vector along which a positive command pushes the hull.
    pub fn direction(&self, cant_angle: f64) -> Vector2<f64> {
        let (sx, sy) = self.direction_signs();
        Vector2::new(sx * cant_angle.cos(), sy * cant_angle.sin())
    }
}

/// Cant angle and lever arm geometry shared by all four thrusters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrusterGeometry {
    cant_angle: f64,  // rad
    half_length: f64, // m
    half_width: f64,  // m
}

impl ThrusterGeometry {
    pub fn new(
        cant_angle: f64,
        half_length: f64,
        half_width: f64,
    ) -> Result<Self, DynamicsErrors> {
        Ok(Self {
            cant_angle,
            half_length: validation::validate_half_length(half_length)?,
            half_width: validation::validate_half_width(half_width)?,
        })
    }

    pub fn cant_angle(&self) -> f64 {
        self.cant_angle
    }

    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thruster {
    pub mount: Mount,
    /// body frame, relative to the center of mass
    pub position: Vector2<f64>,
    pub direction: Vector2<f64>,
}

impl Thruster {
    pub fn new(mount: Mount, geometry: &ThrusterGeometry) -> Self {
        Self {
            mount,
            position: mount.position(geometry.half_length, geometry.half_width),
            direction: mount.direction(geometry.cant_angle),
        }
    }

    /// Torque about z per unit of commanded force, r x d.
    pub fn lever_arm(&self) -> f64 {
        self.position.x * self.direction.y - self.position.y * self.direction.x
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrusterLayout {
    geometry: ThrusterGeometry,
    thrusters: [Thruster; THRUSTER_COUNT],
}

impl ThrusterLayout {
    pub fn new(geometry: &ThrusterGeometry) -> Self {
        Self {
            geometry: *geometry,
            thrusters: Mount::ORDER.map(|mount| Thruster::new(mount, geometry)),
        }
    }

    pub fn geometry(&self) -> &ThrusterGeometry {
        &self.geometry
    }

    pub fn thrusters(&self) -> &[Thruster; THRUSTER_COUNT] {
        &self.thrusters
    }

    /// Body-frame force per unit command, one column per thruster.
    pub fn force_matrix(&self) -> Matrix2x4<f64> {
        projection_matrix(self.geometry.cant_angle)
    }

    /// Torque about z per unit command, one entry per thruster.
    pub fn lever_arms(&self) -> Vector4<f64> {
        Vector4::from(self.thrusters.map(|thruster| thruster.lever_arm()))
    }
}

/// Force projection for a cant angle alone; the mounting positions do not
/// enter the net force.
pub(crate) fn projection_matrix(cant_angle: f64) -> Matrix2x4<f64> {
    let directions = Mount::ORDER.map(|mount| mount.direction(cant_angle));
    Matrix2x4::from_columns(&directions)
}
