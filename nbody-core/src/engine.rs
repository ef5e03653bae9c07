use crate::body::{Body, BodyId, Color};
use crate::config::{SimulationConfig, StepParams};
use crate::error::SimError;
use crate::integrator;
use crate::preset::Preset;
use crate::vector::{self, Vector2};

/// Acceleration on `bodies[index]` from every other body.
///
/// The softening length is added to the raw distance, `d = |Δ| + ε`, and
/// `k * m_j / d²` is scaled by `Δ / d`. That factor is the unit vector only
/// when `ε == 0`; for `ε > 0` it is slightly shorter, which weakens the pull
/// at close range. With `ε == 0` two coincident bodies produce NaN, which is
/// left to propagate.
pub fn acceleration_on(bodies: &[Body], index: usize, k: f64, softening: f64) -> Vector2 {
    let body = &bodies[index];
    let mut accel = Vector2::ZERO;

    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        let delta = other.position - body.position;
        let d = delta.length() + softening;
        let magnitude = k * other.mass / (d * d);
        accel += delta * (magnitude / d);
    }

    accel
}

/// Force pass: overwrite every body's acceleration.
///
/// Only accelerations are written, so each body sees its neighbours'
/// positions from before the step regardless of iteration order.
pub fn compute_accelerations(bodies: &mut [Body], k: f64, softening: f64) {
    for i in 0..bodies.len() {
        bodies[i].reset_acceleration();
        let accel = acceleration_on(bodies, i, k, softening);
        bodies[i].acceleration = accel;
    }
}

/// Mass must be finite and non-negative, position and velocity finite
fn validate_body(body: &Body) -> Result<(), SimError> {
    if !body.mass.is_finite() || body.mass < 0.0 {
        return Err(SimError::InvalidBody(format!(
            "mass must be finite and >= 0, got {}",
            body.mass
        )));
    }
    if !vector::is_finite(body.position) || !vector::is_finite(body.velocity) {
        return Err(SimError::InvalidBody(format!(
            "non-finite state: position {}, velocity {}",
            body.position, body.velocity
        )));
    }
    Ok(())
}

/// The simulated universe: bodies plus the settings every step reads
#[derive(Debug, Clone, Default)]
pub struct World {
    bodies: Vec<Body>,
    config: SimulationConfig,
    next_id: u64,
    step_count: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Setters on the returned config validate; changes apply from the next step
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.config.set_trail_capacity(capacity);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Steps run since the world was created
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// One step with the held configuration
    pub fn step(&mut self) {
        let params = self.config.step_params();
        self.step_with(&params);
    }

    /// One step with explicit parameters
    pub fn step_with(&mut self, params: &StepParams) {
        integrator::step(&mut self.bodies, params);
        self.step_count += 1;

        log::trace!("step {} over {} bodies", self.step_count, self.bodies.len());
        if let Some(body) = self.bodies.iter().find(|b| !vector::is_finite(b.position)) {
            log::warn!(
                "body {:?} has a non-finite position after step {}",
                body.id,
                self.step_count
            );
        }
    }

    /// Run `steps_per_frame` steps; returns how many ran
    pub fn advance_frame(&mut self) -> usize {
        let steps = self.config.steps_per_frame();
        let params = self.config.step_params();
        for _ in 0..steps {
            self.step_with(&params);
        }
        steps
    }

    /// Append a new body with an empty trail
    pub fn add_body(
        &mut self,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
        radius: f64,
        color: Color,
    ) -> Result<BodyId, SimError> {
        let body = Body::new(mass, position, velocity, radius, color);
        validate_body(&body)?;
        Ok(self.insert_body(body))
    }

    /// Body with the configured default mass and radius
    pub fn add_default_body(
        &mut self,
        position: Vector2,
        velocity: Vector2,
        color: Color,
    ) -> Result<BodyId, SimError> {
        let mass = self.config.new_body_mass();
        let radius = self.config.new_body_radius();
        self.add_body(mass, position, velocity, radius, color)
    }

    /// Take ownership of `body` as-is (trail included) and assign it an id.
    ///
    /// Unlike `add_body` this does not validate; the caller guarantees a
    /// finite, non-negative mass and finite position and velocity.
    pub fn insert_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = Some(id);
        body.reset_acceleration();

        log::debug!(
            "added body {} mass={} at ({}, {})",
            id,
            body.mass,
            body.position.x,
            body.position.y
        );
        self.bodies.push(body);
        id
    }

    /// Remove every body, returning them in insertion order
    pub fn clear(&mut self) -> Vec<Body> {
        let removed = std::mem::take(&mut self.bodies);
        log::info!("cleared {} bodies", removed.len());
        removed
    }

    pub fn remove_all(&mut self) -> Vec<Body> {
        self.clear()
    }

    /// Clear, then insert a fresh copy (empty trail) of each template.
    ///
    /// Every template is checked first; on error the world is left untouched.
    pub fn load_bodies(&mut self, templates: &[Body]) -> Result<Vec<BodyId>, SimError> {
        templates.iter().try_for_each(validate_body)?;
        Ok(self.replace_bodies(templates))
    }

    fn replace_bodies(&mut self, templates: &[Body]) -> Vec<BodyId> {
        self.clear();
        templates
            .iter()
            .map(|t| self.insert_body(t.spawn_copy()))
            .collect()
    }

    pub fn load_preset(&mut self, preset: Preset) -> Vec<BodyId> {
        // Built-in templates are known to be valid
        let ids = self.replace_bodies(&preset.bodies());
        log::info!("loaded preset '{}' ({} bodies)", preset.name(), ids.len());
        ids
    }

    pub fn load_preset_named(&mut self, name: &str) -> Result<Vec<BodyId>, SimError> {
        let preset: Preset = name.parse()?;
        Ok(self.load_preset(preset))
    }
}
