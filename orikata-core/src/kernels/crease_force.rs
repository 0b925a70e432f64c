use nalgebra::Vector3;
use orikata_model::{Crease, EdgeKind, Vector3F};

use super::crease_physics::CreasePhysics;

pub struct PerCreaseForceInput<'a> {
    pub creases: &'a [Crease],
    pub fold_angles: &'a [f32],
    pub crease_physics: &'a [CreasePhysics],
    pub face_normals: &'a [Vector3F],
    pub fold_percent: f32,
    pub fold_stiffness: f32,
    pub facet_stiffness: f32,
}

/// Angular spring torque of every crease, applied as forces on the four
/// participating vertices.
///
/// Each wing vertex is pushed along its face normal, scaled by the angular
/// error over its moment arm; the two crease endpoints receive the balancing
/// reaction, split by how far along the crease each wing's foot sits. The
/// four forces of one crease sum to zero. Creases whose hinge geometry is
/// currently degenerate are skipped.
pub fn accumulate_crease_forces(input: PerCreaseForceInput<'_>, forces: &mut [Vector3F]) {
    let mut add = |index: u32, f: Vector3<f32>| {
        let slot = &mut forces[index as usize];
        *slot = (Vector3::from(*slot) + f).into();
    };

    for (crease, (&fold_angle, physics)) in input
        .creases
        .iter()
        .zip(input.fold_angles.iter().zip(input.crease_physics))
    {
        if !physics.is_valid() {
            continue;
        }

        let stiffness = match crease.kind {
            EdgeKind::Facet => input.facet_stiffness,
            _ => input.fold_stiffness,
        };
        let target = crease.target_fold_angle * input.fold_percent;
        let angular = crease.nominal_length * stiffness * (target - fold_angle);

        let normal =
            |side: usize| -> Vector3<f32> {
                input.face_normals[crease.geometry.face_indices[side] as usize].into()
            };
        let push = [
            normal(0) * (angular / physics.height[0]),
            normal(1) * (angular / physics.height[1]),
        ];

        add(crease.geometry.complement_node_indices[0], push[0]);
        add(crease.geometry.complement_node_indices[1], push[1]);
        add(
            crease.geometry.adjacent_node_indices[0],
            -(push[0] * (1.0 - physics.coef[0]) + push[1] * (1.0 - physics.coef[1])),
        );
        add(
            crease.geometry.adjacent_node_indices[1],
            -(push[0] * physics.coef[0] + push[1] * physics.coef[1]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::crease_physics::{calculate_crease_physics, PerCreasePhysicsInput};
    use crate::kernels::fold_angle::{calculate_fold_angles, PerCreaseFoldAngleInput};
    use crate::kernels::normals::{calculate_normals, PerFaceNormalInput};
    use orikata_model::{CreaseGeometry, Face, Vector3U};

    const PI: f32 = core::f32::consts::PI;

    fn flat_square() -> ([Vector3F; 4], [Face; 2], [Crease; 1]) {
        let positions = [
            Vector3F([0.0, 0.0, 0.0]),
            Vector3F([1.0, 0.0, 0.0]),
            Vector3F([1.0, 1.0, 0.0]),
            Vector3F([0.0, 1.0, 0.0]),
        ];
        let faces = [
            Face {
                vertices: Vector3U([0, 1, 2]),
                nominal_angles: Vector3F::default(),
            },
            Face {
                vertices: Vector3U([0, 2, 3]),
                nominal_angles: Vector3F::default(),
            },
        ];
        let creases = [Crease {
            edge_index: 4,
            geometry: CreaseGeometry {
                face_indices: [0, 1],
                complement_node_indices: [1, 3],
                adjacent_node_indices: [0, 2],
            },
            kind: EdgeKind::Mountain,
            nominal_length: 2f32.sqrt(),
            target_fold_angle: -PI,
        }];
        (positions, faces, creases)
    }

    fn forces_for(positions: &[Vector3F], faces: &[Face], creases: &[Crease], percent: f32) -> Vec<Vector3F> {
        let normals: Vec<Vector3F> = calculate_normals(PerFaceNormalInput { faces, positions }).collect();
        let physics: Vec<_> =
            calculate_crease_physics(PerCreasePhysicsInput { creases, positions }).collect();
        let angles: Vec<f32> = calculate_fold_angles(PerCreaseFoldAngleInput {
            creases,
            face_normals: &normals,
            positions,
            fold_percent: percent,
        })
        .collect();

        let mut forces = vec![Vector3F::default(); positions.len()];
        accumulate_crease_forces(
            PerCreaseForceInput {
                creases,
                fold_angles: &angles,
                crease_physics: &physics,
                face_normals: &normals,
                fold_percent: percent,
                fold_stiffness: 0.7,
                facet_stiffness: 0.7,
            },
            &mut forces,
        );
        forces
    }

    #[test]
    fn flat_pattern_at_zero_percent_is_in_equilibrium() {
        let (positions, faces, creases) = flat_square();
        let forces = forces_for(&positions, &faces, &creases, 0.0);
        for f in &forces {
            assert!(Vector3::from(*f).norm() < 1e-6);
        }
    }

    #[test]
    fn mountain_target_pushes_wings_down() {
        let (positions, faces, creases) = flat_square();
        let forces = forces_for(&positions, &faces, &creases, 1.0);
        // both normals point +z on the flat sheet; a mountain target gives a
        // negative angular error, pushing the wings to negative z
        assert!(forces[1].0[2] < -1e-3);
        assert!(forces[3].0[2] < -1e-3);
        assert!(forces[0].0[2] > 1e-3);
        assert!(forces[2].0[2] > 1e-3);
    }

    #[test]
    fn crease_forces_sum_to_zero() {
        let (mut positions, faces, creases) = flat_square();
        positions[1].0[2] = -0.2;
        positions[3].0[2] = -0.1;
        let forces = forces_for(&positions, &faces, &creases, 0.65);

        let total: Vector3<f32> = forces
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + Vector3::from(*f));
        assert!(total.norm() < 1e-5, "net force {total:?}");
    }

    #[test]
    fn degenerate_crease_exerts_no_force() {
        let (mut positions, faces, creases) = flat_square();
        positions[1] = Vector3F([0.5, 0.5, 0.0]); // wing on the crease line
        let forces = forces_for(&positions, &faces, &creases, 1.0);
        for f in &forces {
            assert_eq!(*f, Vector3F::default());
        }
    }
}
