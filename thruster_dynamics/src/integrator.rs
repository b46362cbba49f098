//! Fixed-step explicit-Euler integration of the planar vehicle.
//!
//! Each step, in order:
//! 1. angular acceleration from the torque aggregator
//! 2. omega[i] = omega[i-1] + alpha * dt
//! 3. theta[i] = theta[i-1] + omega[i] * dt
//! 4. linear acceleration from the thrust allocator at theta[i]
//! 5. v[i] = a[i] * dt + v[i-1]
//! 6. p[i] = v[i] * dt + p[i-1]

use nalgebra::Vector2;

use crate::{
    BodyState, DynamicsErrors, ParameterErrors, SimulationConfig, ThrustAllocator,
    ThrusterCommand, ThrusterLayout, TorqueAggregator, Trajectory,
};

/// Relative distance from an integer below which t_final / dt counts as
/// landing exactly on the last grid point.
const GRID_TOLERANCE: f64 = 1e-9;

/// Largest time grid a single simulation will allocate.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Clone, Copy, Debug)]
pub struct KinematicIntegrator {
    allocator: ThrustAllocator,
    aggregator: TorqueAggregator,
    config: SimulationConfig,
    samples: usize,
}

impl KinematicIntegrator {
    pub fn new(layout: &ThrusterLayout, config: &SimulationConfig) -> Result<Self, DynamicsErrors> {
        let body = config.validate()?;
        Ok(Self {
            allocator: ThrustAllocator::from_layout(layout, &body),
            aggregator: TorqueAggregator::from_layout(layout, &body),
            config: *config,
            samples: sample_count(config.dt, config.t_final)?,
        })
    }

    /// Number of samples on the half-open grid [0, t_final).
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn simulate(&self, command: &ThrusterCommand) -> Result<Trajectory, DynamicsErrors> {
        let dt = self.config.dt;
        let n = self.sample_count();
        tracing::debug!(
            samples = n,
            dt,
            t_final = self.config.t_final,
            "starting trajectory integration"
        );

        let mut trajectory = Trajectory::with_capacity(n);
        let mut state = self.initial_state(command)?;
        trajectory.push(0.0, state);

        for i in 1..n {
            state = self.step(command, &state)?;
            let t = i as f64 * dt;
            tracing::trace!(
                t,
                x = state.position.x,
                y = state.position.y,
                theta = state.heading,
                "integrated step"
            );
            trajectory.push(t, state);
        }

        tracing::debug!(
            samples = trajectory.len(),
            x = state.position.x,
            y = state.position.y,
            theta = state.heading,
            "finished trajectory integration"
        );
        Ok(trajectory)
    }

    fn initial_state(&self, command: &ThrusterCommand) -> Result<BodyState, DynamicsErrors> {
        let heading = self.config.theta0;
        Ok(BodyState {
            position: Vector2::new(self.config.x0, self.config.y0),
            heading,
            velocity: Vector2::zeros(),
            acceleration: self.allocator.acceleration(command, heading),
            omega: 0.0,
            angular_acceleration: self.aggregator.angular_acceleration(command)?,
        })
    }

    fn step(
        &self,
        command: &ThrusterCommand,
        previous: &BodyState,
    ) -> Result<BodyState, DynamicsErrors> {
        let dt = self.config.dt;
        let angular_acceleration = self.aggregator.angular_acceleration(command)?;
        let omega = previous.omega + angular_acceleration * dt;
        let heading = previous.heading + omega * dt;

        let acceleration = self.allocator.acceleration(command, heading);
        let velocity = acceleration * dt + previous.velocity;
        let position = velocity * dt + previous.position;

        Ok(BodyState {
            position,
            heading,
            velocity,
            acceleration,
            omega,
            angular_acceleration,
        })
    }
}

/// Grid size for [0, t_final) with step dt. Always at least one sample, the
/// initial condition, and never more than [`MAX_SAMPLES`].
pub fn sample_count(dt: f64, t_final: f64) -> Result<usize, DynamicsErrors> {
    let ratio = t_final / dt;
    if !ratio.is_finite() || ratio > MAX_SAMPLES as f64 {
        let err = ParameterErrors::TooManySamples(ratio);
        tracing::debug!(%err, "rejected time grid");
        return Err(err.into());
    }
    let nearest = ratio.round();
    let n = if (ratio - nearest).abs() <= GRID_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    Ok((n as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ThrusterGeometry, simulate_trajectory};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

    const TOL: f64 = 1e-12;

    fn integrator(config: &SimulationConfig) -> KinematicIntegrator {
        let geometry = ThrusterGeometry::new(FRAC_PI_3, 3.0, 2.0).unwrap();
        KinematicIntegrator::new(&ThrusterLayout::new(&geometry), config).unwrap()
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.1, 0.4).unwrap(), 4);
        assert_eq!(sample_count(0.1, 0.3).unwrap(), 3);
        assert_eq!(sample_count(0.1, 10.0).unwrap(), 100);
        assert_eq!(sample_count(0.1, 0.35).unwrap(), 4);
        assert_eq!(sample_count(1.0, 0.5).unwrap(), 1);
        assert_eq!(sample_count(1.0, 1e-12).unwrap(), 1);
        assert_eq!(sample_count(1.0, MAX_SAMPLES as f64).unwrap(), MAX_SAMPLES);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        assert!(matches!(
            sample_count(1e-300, 10.0),
            Err(DynamicsErrors::InvalidParameter(
                ParameterErrors::TooManySamples(_)
            ))
        ));
        assert!(matches!(
            sample_count(1.0, MAX_SAMPLES as f64 + 1.0),
            Err(DynamicsErrors::InvalidParameter(
                ParameterErrors::TooManySamples(_)
            ))
        ));
        // f64::MAX / tiny dt overflows to infinity
        assert!(sample_count(1e-10, f64::MAX).is_err());
    }

    #[test]
    fn test_tiny_step_fails_before_allocating() {
        let result = simulate_trajectory(
            &[1.0, 2.0, 3.0, 4.0],
            0.3,
            1.0,
            1.0,
            &SimulationConfig::default().with_dt(1e-300).with_t_final(10.0),
        );
        assert!(matches!(
            result,
            Err(DynamicsErrors::InvalidParameter(
                ParameterErrors::TooManySamples(_)
            ))
        ));
    }

    #[test]
    fn test_default_horizon_has_one_hundred_samples() {
        let trajectory = integrator(&SimulationConfig::default())
            .simulate(&ThrusterCommand::from([40.0, 80.0, 120.0, 160.0]))
            .unwrap();
        assert_eq!(trajectory.len(), 100);
        assert_abs_diff_eq!(*trajectory.time().last().unwrap(), 9.9, epsilon = TOL);
        for (i, t) in trajectory.time().iter().enumerate() {
            assert_eq!(*t, i as f64 * 0.1);
        }
    }

    #[test]
    fn test_initial_state_is_initial_pose() {
        let config = SimulationConfig::default().with_initial_pose(5.0, -3.0, 0.75);
        let command = ThrusterCommand::from([40.0, 80.0, 120.0, 160.0]);
        let integrator = integrator(&config);
        let trajectory = integrator.simulate(&command).unwrap();
        let initial = trajectory.initial().unwrap();
        assert_eq!(initial.position, Vector2::new(5.0, -3.0));
        assert_eq!(initial.heading, 0.75);
        assert_eq!(initial.velocity, Vector2::zeros());
        assert_eq!(initial.omega, 0.0);
        assert_eq!(
            initial.acceleration,
            integrator.allocator.acceleration(&command, 0.75)
        );
    }

    #[test]
    fn test_pure_surge_moves_along_heading() {
        // fore pair only, zero cant: no torque, constant acceleration along x
        let geometry = ThrusterGeometry::new(0.0, 1.0, 1.0).unwrap();
        let config = SimulationConfig::default()
            .with_mass(2.0)
            .with_dt(0.5)
            .with_t_final(2.0);
        let integrator = KinematicIntegrator::new(&ThrusterLayout::new(&geometry), &config).unwrap();
        let trajectory = integrator
            .simulate(&ThrusterCommand::from([1.0, 1.0, 0.0, 0.0]))
            .unwrap();

        // a = 1, v[i] = i * 0.5, x[i] = sum of v * dt
        assert_eq!(trajectory.x(), vec![0.0, 0.25, 0.75, 1.5]);
        assert_eq!(trajectory.y(), vec![0.0; 4]);
        assert_eq!(trajectory.theta(), vec![0.0; 4]);
        assert_eq!(trajectory.omega(), vec![0.0; 4]);
        for velocity in trajectory.velocity().iter().zip([0.0, 0.5, 1.0, 1.5]) {
            assert_eq!(velocity.0.x, velocity.1);
        }
    }

    #[test]
    fn test_heading_follows_single_integration() {
        // one dt per integration: omega grows by alpha * dt, heading by omega * dt
        let config = SimulationConfig::default().with_dt(0.1).with_t_final(0.4);
        let command = ThrusterCommand::from([40.0, 80.0, 120.0, 160.0]);
        let integrator = integrator(&config);
        let alpha = integrator.aggregator.angular_acceleration(&command).unwrap();
        let trajectory = integrator.simulate(&command).unwrap();

        let omega = trajectory.omega();
        let theta = trajectory.theta();
        for i in 1..trajectory.len() {
            assert_abs_diff_eq!(omega[i], i as f64 * alpha * 0.1, epsilon = TOL);
            assert_abs_diff_eq!(theta[i], theta[i - 1] + omega[i] * 0.1, epsilon = TOL);
        }
        // heading after 3 steps: alpha dt^2 (1 + 2 + 3)
        assert_abs_diff_eq!(theta[3], 6.0 * alpha * 0.01, epsilon = TOL);
    }

    #[test]
    fn test_histories_are_fully_populated() {
        let config = SimulationConfig::default().with_t_final(1.0);
        let trajectory = integrator(&config)
            .simulate(&ThrusterCommand::from([10.0, 20.0, 5.0, 1.0]))
            .unwrap();
        assert_eq!(trajectory.velocity().len(), trajectory.len());
        assert_eq!(trajectory.acceleration().len(), trajectory.len());
        assert_eq!(trajectory.angular_acceleration().len(), trajectory.len());
        assert!(trajectory.velocity()[1..].iter().all(|v| v.norm() > 0.0));
    }

    #[test]
    fn test_euler_update_order() {
        let config = SimulationConfig::default().with_t_final(0.5);
        let command = ThrusterCommand::from([25.0, 5.0, 10.0, 30.0]);
        let integrator = integrator(&config);
        let trajectory = integrator.simulate(&command).unwrap();
        let states = &trajectory.states;
        for i in 1..states.len() {
            let (prev, curr) = (&states[i - 1], &states[i]);
            assert_eq!(curr.acceleration, integrator.allocator.acceleration(&command, curr.heading));
            assert_eq!(curr.velocity, curr.acceleration * 0.1 + prev.velocity);
            assert_eq!(curr.position, curr.velocity * 0.1 + prev.position);
        }
    }

    #[test]
    fn test_balanced_command_keeps_heading() {
        // T0 - T1 + T2 - T3 = 0: fore pair and aft pair each balanced
        let trajectory = simulate_trajectory(
            &[30.0, 30.0, 10.0, 10.0],
            FRAC_PI_4,
            3.0,
            2.0,
            &SimulationConfig::default().with_initial_pose(0.0, 0.0, 0.3),
        )
        .unwrap();
        for theta in trajectory.theta() {
            assert_abs_diff_eq!(theta, 0.3, epsilon = TOL);
        }
    }

    #[test]
    fn test_diagonal_command_turns() {
        let trajectory = simulate_trajectory(
            &[30.0, 10.0, 30.0, 10.0],
            FRAC_PI_4,
            3.0,
            2.0,
            &SimulationConfig::default().with_t_final(1.0),
        )
        .unwrap();
        assert!(trajectory.theta().iter().skip(1).all(|theta| *theta > 0.0));
    }

    #[test]
    fn test_simulation_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let trajectory = simulate_trajectory(
                &[1.0, 2.0, 3.0, 4.0],
                0.2,
                1.0,
                0.5,
                &SimulationConfig::default().with_t_final(0.3),
            )
            .unwrap();
            assert_eq!(trajectory.len(), 3);
        });
    }
}
