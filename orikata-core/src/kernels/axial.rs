use nalgebra::Vector3;
use orikata_model::{Edge, Vector3F};

/// Edges currently shorter than this exert no axial force.
pub const AXIAL_LENGTH_TOLERANCE: f32 = 1e-9;

pub struct PerEdgeAxialInput<'a> {
    pub edges: &'a [Edge],
    pub positions: &'a [Vector3F],
    /// EA; divided by each edge's rest length to get its spring constant.
    pub axial_stiffness: f32,
}

/// Hookean spring force of every edge, pulling its endpoints toward the rest
/// length.
pub fn accumulate_axial_forces(input: PerEdgeAxialInput<'_>, forces: &mut [Vector3F]) {
    for edge in input.edges {
        let [i, j] = edge.vertices;
        let a: Vector3<f32> = input.positions[i as usize].into();
        let b: Vector3<f32> = input.positions[j as usize].into();

        let delta = b - a;
        let length = delta.norm();
        if length <= AXIAL_LENGTH_TOLERANCE {
            continue;
        }

        let stiffness = input.axial_stiffness / edge.nominal_length;
        let force = delta * (stiffness * (length - edge.nominal_length) / length);

        let slot = &mut forces[i as usize];
        *slot = (Vector3::from(*slot) + force).into();
        let slot = &mut forces[j as usize];
        *slot = (Vector3::from(*slot) - force).into();
    }
}
