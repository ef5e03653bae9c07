//! Whole-system quantities for conservation checks and summaries.

use crate::body::Body;
use crate::vector::Vector2;

/// Sum of m*v
pub fn total_momentum(bodies: &[Body]) -> Vector2 {
    bodies.iter().map(Body::momentum).sum()
}

pub fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.mass).sum()
}

/// Mass-weighted mean position; `None` when the total mass is zero
pub fn center_of_mass(bodies: &[Body]) -> Option<Vector2> {
    let mass = total_mass(bodies);
    if mass <= 0.0 {
        return None;
    }
    let weighted: Vector2 = bodies.iter().map(|b| b.position * b.mass).sum();
    Some(weighted / mass)
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Pairwise potential, using the same softened distance as the force pass
pub fn potential_energy(bodies: &[Body], k: f64, softening: f64) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let d = a.position.distance(b.position) + softening;
            energy -= k * a.mass * b.mass / d;
        }
    }
    energy
}

pub fn total_energy(bodies: &[Body], k: f64, softening: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, k, softening)
}
