use nalgebra::Vector3;
use orikata_model::{Face, Vector3F};

/// Edges of a face shorter than this make the whole face skip its in-plane
/// constraint for the step.
pub const FACE_EDGE_TOLERANCE: f32 = 1e-7;

pub struct PerFaceForceInput<'a> {
    pub faces: &'a [Face],
    pub face_normals: &'a [Vector3F],
    pub positions: &'a [Vector3F],
    pub face_stiffness: f32,
}

/// In-plane angular springs of every triangle, restoring each interior angle
/// toward its rest value.
///
/// The gradient of corner angle `theta_ab` (at the vertex between edges to
/// `a` and `b`) with respect to a vertex moves it perpendicular to the
/// incident edge, within the face plane: `normal x edge_hat / |edge|`. The
/// three corner errors combine so that the forces of one face sum to zero.
pub fn accumulate_face_forces(input: PerFaceForceInput<'_>, forces: &mut [Vector3F]) {
    for (face, normal) in input.faces.iter().zip(input.face_normals) {
        let [ia, ib, ic] = face.vertices.0;
        let a: Vector3<f32> = input.positions[ia as usize].into();
        let b: Vector3<f32> = input.positions[ib as usize].into();
        let c: Vector3<f32> = input.positions[ic as usize].into();
        let normal: Vector3<f32> = (*normal).into();

        let ab = b - a;
        let ac = c - a;
        let bc = c - b;
        let (len_ab, len_ac, len_bc) = (ab.norm(), ac.norm(), bc.norm());
        if len_ab <= FACE_EDGE_TOLERANCE
            || len_ac <= FACE_EDGE_TOLERANCE
            || len_bc <= FACE_EDGE_TOLERANCE
        {
            continue;
        }
        let (ab, ac, bc) = (ab / len_ab, ac / len_ac, bc / len_bc);

        let angles = [
            ab.dot(&ac).clamp(-1.0, 1.0).acos(),
            (-ab).dot(&bc).clamp(-1.0, 1.0).acos(),
            ac.dot(&bc).clamp(-1.0, 1.0).acos(),
        ];
        let error = |corner: usize| {
            input.face_stiffness * (face.nominal_angles.0[corner] - angles[corner])
        };
        let (d0, d1, d2) = (error(0), error(1), error(2));

        // angle gradients, one per incident edge
        let cross_ab = normal.cross(&ab) / len_ab;
        let cross_ac = normal.cross(&ac) / len_ac;
        let cross_bc = normal.cross(&bc) / len_bc;

        let mut add = |index: u32, f: Vector3<f32>| {
            let slot = &mut forces[index as usize];
            *slot = (Vector3::from(*slot) + f).into();
        };
        add(ia, (cross_ab - cross_ac) * d0 - cross_ab * d1 + cross_ac * d2);
        add(ib, -cross_ab * d0 + (cross_ab + cross_bc) * d1 - cross_bc * d2);
        add(ic, cross_ac * d0 - cross_bc * d1 + (cross_bc - cross_ac) * d2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::normals::{calculate_normals, PerFaceNormalInput};
    use orikata_model::Vector3U;

    const PI: f32 = core::f32::consts::PI;

    fn forces_for(positions: &[Vector3F], nominal_angles: [f32; 3]) -> Vec<Vector3F> {
        let faces = [Face {
            vertices: Vector3U([0, 1, 2]),
            nominal_angles: Vector3F(nominal_angles),
        }];
        let normals: Vec<Vector3F> =
            calculate_normals(PerFaceNormalInput { faces: &faces, positions }).collect();

        let mut forces = vec![Vector3F::default(); positions.len()];
        accumulate_face_forces(
            PerFaceForceInput {
                faces: &faces,
                face_normals: &normals,
                positions,
                face_stiffness: 0.2,
            },
            &mut forces,
        );
        forces
    }

    #[test]
    fn rest_shape_is_in_equilibrium() {
        let positions = [
            Vector3F([0.0, 0.0, 0.0]),
            Vector3F([1.0, 0.0, 0.0]),
            Vector3F([0.0, 1.0, 0.0]),
        ];
        let forces = forces_for(&positions, [PI / 2.0, PI / 4.0, PI / 4.0]);
        for f in &forces {
            assert!(Vector3::from(*f).norm() < 1e-5);
        }
    }

    #[test]
    fn face_forces_sum_to_zero() {
        let positions = [
            Vector3F([0.0, 0.0, 0.0]),
            Vector3F([1.1, -0.1, 0.0]),
            Vector3F([0.2, 0.9, 0.0]),
        ];
        let forces = forces_for(&positions, [PI / 2.0, PI / 4.0, PI / 4.0]);
        let total: Vector3<f32> = forces
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + Vector3::from(*f));
        assert!(total.norm() < 1e-5, "net force {total:?}");
    }

    #[test]
    fn sheared_triangle_is_pushed_back() {
        // corner 0 opened past its right angle: vertex 2 dragged away from
        // vertex 1, so the restoring torque closes the angle at 0
        let positions = [
            Vector3F([0.0, 0.0, 0.0]),
            Vector3F([1.0, 0.0, 0.0]),
            Vector3F([-0.3, 1.0, 0.0]),
        ];
        let forces = forces_for(&positions, [PI / 2.0, PI / 4.0, PI / 4.0]);

        // angle at corner 0 is wider than nominal, so vertex 2 is pushed
        // toward positive x (closing the angle back down)
        assert!(forces[2].0[0] > 1e-4, "force on 2: {:?}", forces[2]);
    }
}
