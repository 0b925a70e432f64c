//! Picking: ray intersection against the current folded mesh, and tracking a
//! selected surface point across subsequent steps via barycentric
//! coordinates.

use nalgebra::Vector3;
use orikata_model::{Face, FaceIndex, Vector3F};

/// Same area-sum containment tolerance the triangulator uses.
const CONTAINMENT_TOLERANCE: f32 = 1e-4;

/// Rays closer to parallel with a face than this are treated as misses for
/// that face.
const PARALLEL_TOLERANCE: f32 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3F,
    /// Need not be normalized; `t` is in units of its length.
    pub direction: Vector3F,
}

/// The nearest face hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub face: FaceIndex,
    /// Distance along the ray, in units of the direction's length.
    pub t: f32,
    /// Areal coordinates of the hit within the face, in vertex order.
    pub barycentric: [f32; 3],
    pub point: Vector3F,
}

/// A surface point pinned to a face, following the mesh as it folds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPoint {
    pub face: FaceIndex,
    pub barycentric: [f32; 3],
}

impl From<RayHit> for SelectedPoint {
    fn from(hit: RayHit) -> Self {
        Self {
            face: hit.face,
            barycentric: hit.barycentric,
        }
    }
}

fn triangle_area(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> f32 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

/// Nearest intersection of `ray` with the mesh, if any. Faces the ray runs
/// parallel to, hits behind the origin and hits outside a triangle are all
/// rejected.
pub fn intersect(ray: &Ray, faces: &[Face], positions: &[Vector3F]) -> Option<RayHit> {
    let origin: Vector3<f32> = ray.origin.into();
    let direction: Vector3<f32> = ray.direction.into();

    let mut nearest: Option<RayHit> = None;
    for (face_index, face) in faces.iter().enumerate() {
        let [a, b, c]: [Vector3<f32>; 3] =
            face.vertices.0.map(|v| positions[v as usize].into());

        let plane_normal = (b - a).cross(&(c - a));
        let denominator = plane_normal.dot(&direction);
        if denominator.abs() <= PARALLEL_TOLERANCE {
            continue;
        }

        let t = plane_normal.dot(&(a - origin)) / denominator;
        if t < 0.0 {
            continue;
        }
        if let Some(best) = &nearest {
            if t >= best.t {
                continue;
            }
        }

        let point = origin + direction * t;
        let area = plane_normal.norm() * 0.5;
        if area <= f32::EPSILON {
            continue;
        }
        let sub = [
            triangle_area(point, b, c),
            triangle_area(point, c, a),
            triangle_area(point, a, b),
        ];
        if (sub.iter().sum::<f32>() - area).abs() > CONTAINMENT_TOLERANCE {
            continue;
        }

        nearest = Some(RayHit {
            face: face_index as FaceIndex,
            t,
            barycentric: sub.map(|s| s / area),
            point: point.into(),
        });
    }
    nearest
}

/// Current world position of a selected point, from the live positions.
pub fn resolve(point: &SelectedPoint, faces: &[Face], positions: &[Vector3F]) -> Vector3F {
    let [a, b, c]: [Vector3<f32>; 3] = faces[point.face as usize]
        .vertices
        .0
        .map(|v| positions[v as usize].into());
    let [wa, wb, wc] = point.barycentric;
    (a * wa + b * wb + c * wc).into()
}
