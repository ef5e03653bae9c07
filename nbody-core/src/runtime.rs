use crate::body::{Body, BodyId};
use crate::config::SimulationConfig;
use crate::engine::World;
use crate::error::SimError;
use crate::observables;
use crate::preset::Preset;
use crate::vector::Vector2;

/// Snapshot of one body for output
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub id: Option<BodyId>,
    pub mass: f64,
    pub position: Vector2,
    pub velocity: Vector2,
    pub trail_len: usize,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            mass: body.mass,
            position: body.position,
            velocity: body.velocity,
            trail_len: body.trail().len(),
        }
    }
}

/// Final result of a headless run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub steps: u64,
    pub bodies: Vec<BodyState>,
    pub momentum: Vector2,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
}

impl SimulationResult {
    pub fn from_world(world: &World) -> Self {
        let config = world.config();
        let bodies = world.bodies();
        Self {
            steps: world.step_count(),
            bodies: bodies.iter().map(BodyState::from).collect(),
            momentum: observables::total_momentum(bodies),
            kinetic_energy: observables::kinetic_energy(bodies),
            potential_energy: observables::potential_energy(
                bodies,
                config.gravitational_constant(),
                config.softening(),
            ),
        }
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

/// Main entry point: load the named preset, run `steps` steps, report the final state
pub fn run_preset(
    name: &str,
    steps: u64,
    config: SimulationConfig,
) -> Result<SimulationResult, SimError> {
    let preset: Preset = name.parse()?;
    let mut world = World::with_config(config);
    world.load_preset(preset);

    let params = world.config().step_params();
    for _ in 0..steps {
        world.step_with(&params);
    }

    Ok(SimulationResult::from_world(&world))
}
