use itertools::izip;
use nalgebra::Vector3;
use orikata_model::Vector3F;

/// One symplectic Euler step, unit mass per node: velocity first, then
/// position from the updated velocity.
pub fn integrate(
    positions: &mut [Vector3F],
    velocities: &mut [Vector3F],
    forces: &[Vector3F],
    dt: f32,
) {
    for (position, velocity, force) in izip!(positions, velocities, forces) {
        let v = Vector3::from(*velocity) + Vector3::from(*force) * dt;
        *velocity = v.into();
        *position = (Vector3::from(*position) + v * dt).into();
    }
}
