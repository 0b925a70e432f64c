use nalgebra::Vector3;
use orikata_model::{Crease, Vector3F};

use super::crease_physics::CREASE_TOLERANCE;

pub struct PerCreaseFoldAngleInput<'a> {
    pub creases: &'a [Crease],
    pub face_normals: &'a [Vector3F],
    pub positions: &'a [Vector3F],
    /// Current fold fraction; the unwrap branch follows the scaled target.
    pub fold_percent: f32,
}

/// Signed dihedral fold angle of every crease, in radians.
///
/// Zero is flat, the sign follows the FOLD convention (mountain negative),
/// and the magnitude is pi minus the angle between the wing offsets measured
/// perpendicular to the crease line. The raw angle lives in (-pi, pi]; it is
/// then shifted by whole turns into the branch nearest the scaled target so
/// a crease driven past pi does not snap back.
pub fn calculate_fold_angles<'a>(
    input: PerCreaseFoldAngleInput<'a>,
) -> impl ExactSizeIterator<Item = f32> + 'a {
    use core::f32::consts::{PI, TAU};

    input.creases.iter().map(move |crease| {
        let pos = |v: u32| -> Vector3<f32> { input.positions[v as usize].into() };
        let normal = |f: u32| -> Vector3<f32> { input.face_normals[f as usize].into() };

        let e0 = pos(crease.geometry.adjacent_node_indices[0]);
        let e1 = pos(crease.geometry.adjacent_node_indices[1]);
        let crease_vector = e1 - e0;
        let length_squared = crease_vector.norm_squared();
        if length_squared <= CREASE_TOLERANCE {
            return 0.0;
        }
        let direction = crease_vector / length_squared.sqrt();

        // Wing offsets perpendicular to the crease line, normalized.
        let mut perpendicular = [Vector3::zeros(); 2];
        for side in 0..2 {
            let wing = pos(crease.geometry.complement_node_indices[side]) - e0;
            let offset = wing - direction * direction.dot(&wing);
            let norm = offset.norm();
            if norm * norm <= CREASE_TOLERANCE {
                return 0.0;
            }
            perpendicular[side] = offset / norm;
        }

        let magnitude = PI
            - perpendicular[0]
                .dot(&perpendicular[1])
                .clamp(-1.0, 1.0)
                .acos();

        let normal_sum = normal(crease.geometry.face_indices[0])
            + normal(crease.geometry.face_indices[1]);
        let sign = if normal_sum.dot(&(perpendicular[0] + perpendicular[1])) < 0.0 {
            -1.0
        } else {
            1.0
        };
        let mut angle = sign * magnitude;

        let target = crease.target_fold_angle * input.fold_percent;
        let difference = angle - target;
        if difference > PI {
            angle -= TAU;
        } else if difference < -PI {
            angle += TAU;
        }
        angle
    })
}
