//! One-time precomputation of the rest-state quantities the solver compares
//! against: per-edge nominal lengths and face adjacency, per-face nominal
//! interior angles, and the crease hinge records.

use nalgebra::Vector3;
use orikata_model::{
    Crease, CreaseGeometry, Edge, EdgeIndex, Face, FaceIndex, NodeIndex, Vector3F, NO_FACE,
};

use crate::error::TopologyError;

/// Find the (at most two) faces containing both endpoints of an edge, by
/// linear scan. O(F) per edge; fine for crease patterns.
///
/// Zero matches yields `[NO_FACE; 2]`, one match is stored self-paired, and
/// a third match is a non-manifold input.
pub fn adjacent_faces(
    edge_index: EdgeIndex,
    edge_vertices: [NodeIndex; 2],
    faces: &[Face],
) -> Result<[FaceIndex; 2], TopologyError> {
    let mut found = [NO_FACE; 2];
    let mut count = 0usize;

    for (face_index, face) in faces.iter().enumerate() {
        let contains =
            |v: NodeIndex| face.vertices.0.contains(&v);
        if !(contains(edge_vertices[0]) && contains(edge_vertices[1])) {
            continue;
        }

        if count == 2 {
            return Err(TopologyError::NonManifoldEdge {
                edge_index,
                face_count: 3,
            });
        }
        found[count] = face_index as FaceIndex;
        count += 1;
    }

    Ok(match count {
        0 => [NO_FACE; 2],
        1 => [found[0]; 2],
        _ => found,
    })
}

/// The three interior angles of a triangle, one per corner, from the current
/// edge directions.
pub fn interior_angles(vertices: [NodeIndex; 3], positions: &[Vector3F]) -> Vector3F {
    let [a, b, c]: [Vector3<f32>; 3] = vertices.map(|v| positions[v as usize].into());

    let angle = |at: Vector3<f32>, first: Vector3<f32>, second: Vector3<f32>| {
        let u = (first - at).normalize();
        let v = (second - at).normalize();
        u.dot(&v).clamp(-1.0, 1.0).acos()
    };

    Vector3F([angle(a, b, c), angle(b, c, a), angle(c, a, b)])
}

/// Build the crease (hinge) records: one per non-boundary mountain, valley or
/// facet edge that sits between two distinct faces.
///
/// `edge_targets` carries the per-edge target override (radians) where the
/// pattern specified one; edges without an override use their kind's default.
/// Mountain/valley edges with fewer than two distinct adjacent faces cannot
/// hinge and are skipped, matching how dangling edges behave in the physical
/// model.
pub fn extract_creases(
    edges: &[Edge],
    edge_targets: &[Option<f32>],
    faces: &[Face],
) -> Result<Vec<Crease>, TopologyError> {
    let mut creases = Vec::new();

    for (edge_index, edge) in edges.iter().enumerate() {
        let Some(default_target) = edge.kind.default_target_angle() else {
            continue;
        };
        if edge.is_boundary() {
            if edge.faces[0] != NO_FACE {
                tracing::debug!(edge_index, ?edge.kind, "crease edge has a single face; skipping");
            }
            continue;
        }

        let complement = |face_index: FaceIndex| -> Result<NodeIndex, TopologyError> {
            let face = &faces[face_index as usize];
            face.vertices
                .0
                .iter()
                .copied()
                .find(|&v| v != edge.vertices[0] && v != edge.vertices[1])
                .ok_or(TopologyError::MalformedFace { face_index })
        };

        let target_fold_angle = edge_targets[edge_index].unwrap_or(default_target);

        creases.push(Crease {
            edge_index: edge_index as EdgeIndex,
            geometry: CreaseGeometry {
                face_indices: edge.faces,
                complement_node_indices: [complement(edge.faces[0])?, complement(edge.faces[1])?],
                adjacent_node_indices: edge.vertices,
            },
            kind: edge.kind,
            nominal_length: edge.nominal_length,
            target_fold_angle,
        });
    }

    Ok(creases)
}

pub fn nominal_length(edge_vertices: [NodeIndex; 2], positions: &[Vector3F]) -> f32 {
    let a: Vector3<f32> = positions[edge_vertices[0] as usize].into();
    let b: Vector3<f32> = positions[edge_vertices[1] as usize].into();
    (b - a).norm()
}
