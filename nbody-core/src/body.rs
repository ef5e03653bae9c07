use crate::trail::Trail;
use crate::vector::Vector2;
use std::fmt;

/// Stable handle for a body owned by a `World`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque 0xRRGGBB color token for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

/// A point mass in the simulation
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) id: Option<BodyId>,
    pub mass: f64,
    pub position: Vector2,
    pub velocity: Vector2,
    /// Recomputed from scratch by every force pass
    pub acceleration: Vector2,
    /// Presentation only
    pub radius: f64,
    /// Presentation only
    pub color: Color,
    pub(crate) trail: Trail,
}

impl Body {
    pub fn new(mass: f64, position: Vector2, velocity: Vector2, radius: f64, color: Color) -> Self {
        Self {
            id: None,
            mass,
            position,
            velocity,
            acceleration: Vector2::ZERO,
            radius,
            color,
            trail: Trail::new(),
        }
    }

    /// Handle assigned by the owning `World`; `None` for templates
    pub fn id(&self) -> Option<BodyId> {
        self.id
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Trail contents, oldest first
    pub fn trail_positions(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.trail.iter()
    }

    /// Copy of this body with no id and an empty trail.
    ///
    /// Used when instantiating presets. `clone()` instead keeps the trail
    /// contents (in a separate buffer).
    pub fn spawn_copy(&self) -> Self {
        Self::new(self.mass, self.position, self.velocity, self.radius, self.color)
    }

    /// Replace the trail history, e.g. when seeding a template
    pub fn set_trail_positions<I>(&mut self, positions: I, capacity: usize)
    where
        I: IntoIterator<Item = Vector2>,
    {
        self.trail.clear();
        for p in positions {
            self.trail.push(p, capacity);
        }
    }

    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vector2::ZERO;
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }
}
