use crate::{PhysicsErrors, require_non_negative, require_positive};

/// Newton's second law, a = F / m.
pub fn acceleration(force: f64, mass: f64) -> Result<f64, PhysicsErrors> {
    let mass = require_positive(mass, PhysicsErrors::MassLessThanOrEqualToZero)?;
    Ok(force / mass)
}

/// Rotational form of Newton's second law, alpha = tau / I.
/// The torque keeps its sign.
pub fn angular_acceleration(torque: f64, inertia: f64) -> Result<f64, PhysicsErrors> {
    let inertia = require_positive(inertia, PhysicsErrors::InertiaLessThanOrEqualToZero)?;
    Ok(torque / inertia)
}

/// Torque (N m) of a force applied at `angle` degrees to a lever arm.
pub fn torque(force: f64, angle: f64, lever_arm: f64) -> Result<f64, PhysicsErrors> {
    let force = require_non_negative(force, PhysicsErrors::NegativeForce)?;
    let lever_arm = require_non_negative(lever_arm, PhysicsErrors::NegativeLeverArm)?;
    Ok(force * lever_arm * angle.to_radians().sin())
}

/// Point mass at `radius` from the axis of rotation, I = m r^2.
pub fn moment_of_inertia(mass: f64, radius: f64) -> Result<f64, PhysicsErrors> {
    let mass = require_positive(mass, PhysicsErrors::MassLessThanOrEqualToZero)?;
    let radius = require_non_negative(radius, PhysicsErrors::NegativeRadius)?;
    Ok(mass * radius * radius)
}
