//! Runtime-mutable simulation parameters.
//!
//! Every setter validates its input so the integrator never sees a negative
//! step size or softening length.

use thiserror::Error;

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("softening length must be finite and >= 0, got {0}")]
    Softening(f64),
    #[error("time step must be finite and >= 0, got {0}")]
    TimeStep(f64),
    #[error("gravitational constant must be finite, got {0}")]
    GravitationalConstant(f64),
    #[error("new-body mass must be finite and >= 0, got {0}")]
    BodyMass(f64),
    #[error("new-body radius must be finite and >= 0, got {0}")]
    BodyRadius(f64),
}

fn non_negative(value: f64, err: fn(f64) -> ConfigError) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Parameters read by a single step; only built through `new` or
/// `SimulationConfig::step_params`, so always valid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    dt: f64,
    k: f64,
    softening: f64,
    trail_capacity: usize,
}

impl StepParams {
    pub fn new(dt: f64, k: f64, softening: f64, trail_capacity: usize) -> Result<Self, ConfigError> {
        let dt = non_negative(dt, ConfigError::TimeStep)?;
        let softening = non_negative(softening, ConfigError::Softening)?;
        if !k.is_finite() {
            return Err(ConfigError::GravitationalConstant(k));
        }
        Ok(Self {
            dt,
            k,
            softening,
            trail_capacity,
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn softening(&self) -> f64 {
        self.softening
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }
}

/// Simulation settings held by a `World`
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    gravitational_constant: f64,
    softening: f64,
    time_step: f64,
    steps_per_frame: usize,
    trail_capacity: usize,
    new_body_mass: f64,
    new_body_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.05,
            softening: 0.001,
            time_step: 0.01,
            steps_per_frame: 1,
            trail_capacity: 500,
            new_body_mass: 0.0,
            new_body_radius: 0.02,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn softening(&self) -> f64 {
        self.softening
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    pub fn new_body_mass(&self) -> f64 {
        self.new_body_mass
    }

    pub fn new_body_radius(&self) -> f64 {
        self.new_body_radius
    }

    pub fn set_gravitational_constant(&mut self, k: f64) -> Result<(), ConfigError> {
        if !k.is_finite() {
            return Err(ConfigError::GravitationalConstant(k));
        }
        self.gravitational_constant = k;
        Ok(())
    }

    pub fn set_softening(&mut self, softening: f64) -> Result<(), ConfigError> {
        self.softening = non_negative(softening, ConfigError::Softening)?;
        Ok(())
    }

    pub fn set_time_step(&mut self, dt: f64) -> Result<(), ConfigError> {
        self.time_step = non_negative(dt, ConfigError::TimeStep)?;
        Ok(())
    }

    /// Zero pauses a frame-driven loop
    pub fn set_steps_per_frame(&mut self, steps: usize) {
        self.steps_per_frame = steps;
    }

    /// Takes effect on each body's next trail push
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.trail_capacity = capacity;
    }

    pub fn set_new_body_mass(&mut self, mass: f64) -> Result<(), ConfigError> {
        self.new_body_mass = non_negative(mass, ConfigError::BodyMass)?;
        Ok(())
    }

    pub fn set_new_body_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        self.new_body_radius = non_negative(radius, ConfigError::BodyRadius)?;
        Ok(())
    }

    pub fn with_gravitational_constant(mut self, k: f64) -> Result<Self, ConfigError> {
        self.set_gravitational_constant(k)?;
        Ok(self)
    }

    pub fn with_softening(mut self, softening: f64) -> Result<Self, ConfigError> {
        self.set_softening(softening)?;
        Ok(self)
    }

    pub fn with_time_step(mut self, dt: f64) -> Result<Self, ConfigError> {
        self.set_time_step(dt)?;
        Ok(self)
    }

    pub fn with_steps_per_frame(mut self, steps: usize) -> Self {
        self.set_steps_per_frame(steps);
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.set_trail_capacity(capacity);
        self
    }

    pub fn step_params(&self) -> StepParams {
        StepParams {
            dt: self.time_step,
            k: self.gravitational_constant,
            softening: self.softening,
            trail_capacity: self.trail_capacity,
        }
    }
}
