use crate::body::Body;
use crate::config::StepParams;
use crate::engine::compute_accelerations;

/// Advance one body by `dt` (semi-implicit Euler: v += a*dt, then x += v*dt)
/// and record the new position in its trail.
///
/// Non-finite results are not clamped.
pub fn integrate_body(body: &mut Body, dt: f64, trail_capacity: usize) {
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;
    body.trail.push(body.position, trail_capacity);
}

/// Step the bodies forward by one fixed time step
pub fn step(bodies: &mut [Body], params: &StepParams) {
    // First, compute all accelerations
    compute_accelerations(bodies, params.k(), params.softening());

    for body in bodies.iter_mut() {
        integrate_body(body, params.dt(), params.trail_capacity());
    }
}
