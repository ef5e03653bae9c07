pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod observables;
pub mod preset;
pub mod runtime;
pub mod trail;
pub mod vector;

pub use body::{Body, BodyId, Color};
pub use config::{ConfigError, SimulationConfig, StepParams};
pub use engine::World;
pub use error::SimError;
pub use preset::Preset;
pub use runtime::{run_preset, BodyState, SimulationResult};
pub use trail::Trail;
pub use vector::Vector2;
