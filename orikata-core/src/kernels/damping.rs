use nalgebra::Vector3;
use orikata_model::{Edge, Vector3F};

use super::axial::AXIAL_LENGTH_TOLERANCE;

pub struct PerEdgeDampingInput<'a> {
    pub edges: &'a [Edge],
    pub positions: &'a [Vector3F],
    pub velocities: &'a [Vector3F],
    pub axial_stiffness: f32,
    /// Fraction of critical damping; the per-edge coefficient is
    /// `2 * ratio * sqrt(EA / rest length)`.
    pub damping_ratio: f32,
}

/// Viscous damping of the relative endpoint velocity of every edge, projected
/// along the edge direction. Opposes axial oscillation without braking rigid
/// motion across the edge.
pub fn accumulate_damping_forces(input: PerEdgeDampingInput<'_>, forces: &mut [Vector3F]) {
    for edge in input.edges {
        let [i, j] = edge.vertices;
        let a: Vector3<f32> = input.positions[i as usize].into();
        let b: Vector3<f32> = input.positions[j as usize].into();

        let delta = b - a;
        let length = delta.norm();
        if length <= AXIAL_LENGTH_TOLERANCE {
            continue;
        }
        let direction = delta / length;

        let coefficient =
            2.0 * input.damping_ratio * (input.axial_stiffness / edge.nominal_length).sqrt();
        let relative: Vector3<f32> = Vector3::from(input.velocities[j as usize])
            - Vector3::from(input.velocities[i as usize]);
        let force = direction * (coefficient * relative.dot(&direction));

        let slot = &mut forces[i as usize];
        *slot = (Vector3::from(*slot) + force).into();
        let slot = &mut forces[j as usize];
        *slot = (Vector3::from(*slot) - force).into();
    }
}
