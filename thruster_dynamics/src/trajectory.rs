use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Kinematic state of the vehicle at one time sample. World frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub position: Vector2<f64>,     // m
    pub heading: f64,               // rad
    pub velocity: Vector2<f64>,     // m/s
    pub acceleration: Vector2<f64>, // m/s^2
    pub omega: f64,                 // rad/s
    pub angular_acceleration: f64,  // rad/s^2
}

/// Time history of a simulation: `states[i]` is the state at `t[i]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub states: Vec<BodyState>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            states: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, t: f64, state: BodyState) {
        self.t.push(t);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn initial(&self) -> Option<&BodyState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&BodyState> {
        self.states.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &BodyState)> {
        self.t.iter().copied().zip(self.states.iter())
    }

    pub fn time(&self) -> &[f64] {
        &self.t
    }

    pub fn x(&self) -> Vec<f64> {
        self.column(|state| state.position.x)
    }

    pub fn y(&self) -> Vec<f64> {
        self.column(|state| state.position.y)
    }

    pub fn theta(&self) -> Vec<f64> {
        self.column(|state| state.heading)
    }

    pub fn velocity(&self) -> Vec<Vector2<f64>> {
        self.column(|state| state.velocity)
    }

    pub fn omega(&self) -> Vec<f64> {
        self.column(|state| state.omega)
    }

    pub fn acceleration(&self) -> Vec<Vector2<f64>> {
        self.column(|state| state.acceleration)
    }

    pub fn angular_acceleration(&self) -> Vec<f64> {
        self.column(|state| state.angular_acceleration)
    }

    fn column<T>(&self, f: impl Fn(&BodyState) -> T) -> Vec<T> {
        self.states.iter().map(f).collect()
    }
}
