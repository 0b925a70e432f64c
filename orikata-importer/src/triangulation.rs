use nalgebra::Vector3;
use orikata_model::{NodeIndex, Vector3F};

/// Tolerance for the area-sum point-in-triangle test. A candidate vertex
/// whose sub-triangle areas sum to the ear's area within this tolerance is
/// treated as inside (or on the boundary of) the ear, invalidating it.
pub const CONTAINMENT_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriangulateError {
    #[error("polygon has {vertex_count} vertices, need at least 3")]
    DegeneratePolygon { vertex_count: usize },

    #[error("no valid ear found")]
    NoEarFound,
}

fn triangle_area(a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> f32 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

fn point_in_triangle(p: Vector3<f32>, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) -> bool {
    let area = triangle_area(a, b, c);
    let sum = triangle_area(p, a, b) + triangle_area(p, b, c) + triangle_area(p, a, c);
    (sum - area).abs() <= CONTAINMENT_TOLERANCE
}

/// Reduce one (possibly non-triangular) face polygon to triangles by ear
/// clipping.
///
/// The two callbacks are called to build the new model:
/// - `emit_face` once per produced triangle, in clipping order;
/// - `emit_edge` once per inserted diagonal (these become facet creases);
///   an n-gon produces exactly n-2 triangles and n-3 diagonals.
///
/// Candidate ears are scanned as consecutive vertex triples starting from
/// the head of the working polygon, and the first valid ear (no other
/// remaining vertex inside it, by the area-sum test) is clipped; the scan
/// then restarts. This keeps the output deterministic.
///
/// Safe for convex polygons; a non-convex polygon whose clipped diagonal
/// crosses the boundary is not detected. Known limitation for the crease
/// patterns this targets.
///
/// All indices in `face_vertex_indices` must be valid for `positions`.
pub fn triangulate<FuncFace, FuncEdge>(
    face_vertex_indices: &[NodeIndex],
    positions: &[Vector3F],
    mut emit_face: FuncFace,
    mut emit_edge: FuncEdge,
) -> Result<(), TriangulateError>
where
    FuncFace: FnMut([NodeIndex; 3]),
    FuncEdge: FnMut([NodeIndex; 2]),
{
    if face_vertex_indices.len() < 3 {
        return Err(TriangulateError::DegeneratePolygon {
            vertex_count: face_vertex_indices.len(),
        });
    }

    let pos = |index: NodeIndex| -> Vector3<f32> { positions[index as usize].into() };

    let mut polygon: Vec<NodeIndex> = face_vertex_indices.to_vec();
    while polygon.len() > 3 {
        let n = polygon.len();
        let mut clipped = false;

        for i in 0..n {
            let (v0, v1, v2) = (polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]);
            let (a, b, c) = (pos(v0), pos(v1), pos(v2));

            let is_ear = polygon
                .iter()
                .filter(|&&v| v != v0 && v != v1 && v != v2)
                .all(|&v| !point_in_triangle(pos(v), a, b, c));
            if !is_ear {
                continue;
            }

            emit_face([v0, v1, v2]);
            emit_edge([v0, v2]);
            polygon.remove((i + 1) % n);
            clipped = true;
            break;
        }

        if !clipped {
            return Err(TriangulateError::NoEarFound);
        }
    }

    emit_face([polygon[0], polygon[1], polygon[2]]);
    Ok(())
}
