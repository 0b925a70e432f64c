//! Turns a FOLD frame into a [`PatternModel`]: the validated, triangulated,
//! normalized rest state the solver works from.
//!
//! The pipeline is load → classify edges → normalize coordinates →
//! triangulate faces (inserting facet creases) → precompute nominal lengths,
//! adjacency and angles → extract crease hinges. Any failure aborts the
//! whole import.

pub mod error;
pub mod normalize;
pub mod topology;
pub mod triangulation;

pub use error::{GeometryError, ImportError, InputError, TopologyError};

use fold::EdgeAssignment;
use itertools::izip;
use orikata_model::{
    Edge, EdgeKind, Face, FaceIndex, NodeIndex, PatternModel, Vector3F, Vector3U,
};

/// Import the key frame of the FOLD file at `path`. The model title falls
/// back to the file path when the frame carries none.
pub fn import_file(path: &std::path::Path) -> Result<PatternModel, ImportError> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    let parsed = fold::File::from_reader(std::io::BufReader::new(file)).map_err(InputError::Parse)?;

    let mut model = import(&parsed.key_frame)?;
    if model.title.is_none() {
        model.title = Some(path.display().to_string());
    }
    Ok(model)
}

#[tracing::instrument(skip_all, fields(title = frame.metadata.title.as_deref()))]
pub fn import(frame: &fold::FrameCore) -> Result<PatternModel, ImportError> {
    let coords = frame
        .vertices
        .coords
        .as_ref()
        .ok_or(InputError::MissingField {
            field: "vertices_coords",
        })?;
    let edges_vertices = frame
        .edges
        .vertices
        .as_ref()
        .ok_or(InputError::MissingField {
            field: "edges_vertices",
        })?;
    let assignments = frame
        .edges
        .assignments
        .as_ref()
        .ok_or(InputError::MissingField {
            field: "edges_assignment",
        })?;
    let faces_vertices = frame
        .faces
        .vertices
        .as_ref()
        .ok_or(InputError::MissingField {
            field: "faces_vertices",
        })?;

    if assignments.len() != edges_vertices.len() {
        return Err(InputError::LengthMismatch {
            field: "edges_assignment",
            expected: edges_vertices.len(),
            actual: assignments.len(),
        }
        .into());
    }
    if let Some(fold_angles) = &frame.edges.fold_angles {
        if fold_angles.len() != edges_vertices.len() {
            return Err(InputError::LengthMismatch {
                field: "edges_foldAngle",
                expected: edges_vertices.len(),
                actual: fold_angles.len(),
            }
            .into());
        }
    }

    let vertex_count = coords.len();
    let check_index = |index: NodeIndex| -> Result<NodeIndex, InputError> {
        if (index as usize) < vertex_count {
            Ok(index)
        } else {
            Err(InputError::VertexIndexOutOfRange {
                index,
                count: vertex_count,
            })
        }
    };

    let mut positions: Vec<Vector3F> = coords.iter().map(|v| Vector3F(v.0)).collect();
    normalize::normalize(&mut positions);

    // Classify edges; unrecognized assignments are dropped, not an error.
    // Targets are per kept edge: the file's foldAngle override where present,
    // resolved against the kind default during crease extraction.
    let mut kept_edges: Vec<([NodeIndex; 2], EdgeKind)> = Vec::with_capacity(edges_vertices.len());
    let mut edge_targets: Vec<Option<f32>> = Vec::with_capacity(edges_vertices.len());
    for (edge_index, (ev, assignment)) in izip!(edges_vertices, assignments).enumerate() {
        let kind = match *assignment {
            EdgeAssignment::B => EdgeKind::Boundary,
            EdgeAssignment::M => EdgeKind::Mountain,
            EdgeAssignment::V => EdgeKind::Valley,
            EdgeAssignment::F => EdgeKind::Facet,
            other => {
                tracing::trace!(edge_index, ?other, "dropping edge with unhandled assignment");
                continue;
            }
        };

        let vertices = [check_index(ev.0[0])?, check_index(ev.0[1])?];
        if vertices[0] == vertices[1] {
            return Err(InputError::EdgeEndpointsIdentical {
                edge_index: edge_index as u32,
            }
            .into());
        }

        kept_edges.push((vertices, kind));
        edge_targets.push(
            frame
                .edges
                .fold_angles
                .as_ref()
                .map(|angles| angles[edge_index].to_radians()),
        );
    }

    // Triangulate, appending one facet crease per inserted diagonal.
    let mut tri_faces: Vec<Vector3U> = Vec::with_capacity(faces_vertices.len());
    for (face_index, polygon) in faces_vertices.iter().enumerate() {
        for &index in &polygon.0 {
            check_index(index)?;
        }

        triangulation::triangulate(
            &polygon.0,
            &positions,
            |face| tri_faces.push(Vector3U(face)),
            |edge| {
                kept_edges.push((edge, EdgeKind::Facet));
                edge_targets.push(None);
            },
        )
        .map_err(|e| match e {
            triangulation::TriangulateError::DegeneratePolygon { vertex_count } => {
                GeometryError::DegenerateFace {
                    face_index: face_index as FaceIndex,
                    vertex_count,
                }
            }
            triangulation::TriangulateError::NoEarFound => GeometryError::NoEarFound {
                face_index: face_index as FaceIndex,
            },
        })?;
    }

    let faces: Vec<Face> = tri_faces
        .into_iter()
        .map(|vertices| Face {
            vertices,
            nominal_angles: topology::interior_angles(vertices.0, &positions),
        })
        .collect();

    let edges: Vec<Edge> = kept_edges
        .into_iter()
        .enumerate()
        .map(|(edge_index, (vertices, kind))| {
            Ok(Edge {
                vertices,
                kind,
                nominal_length: topology::nominal_length(vertices, &positions),
                faces: topology::adjacent_faces(edge_index as u32, vertices, &faces)?,
            })
        })
        .collect::<Result<_, TopologyError>>()?;

    let creases = topology::extract_creases(&edges, &edge_targets, &faces)?;

    tracing::debug!(
        vertices = positions.len(),
        edges = edges.len(),
        faces = faces.len(),
        creases = creases.len(),
        "imported pattern"
    );

    Ok(PatternModel {
        title: frame.metadata.title.clone(),
        positions,
        edges,
        faces,
        creases,
    })
}
