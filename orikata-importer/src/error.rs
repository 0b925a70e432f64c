//! Import failures, split along the three-way taxonomy: problems with the
//! input document, with the mesh topology, or with the face geometry. All of
//! them are fatal to the load; there is no recovery path.

use orikata_model::{EdgeIndex, FaceIndex};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The pattern description itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not read pattern file")]
    Io(#[from] std::io::Error),

    #[error("could not parse pattern file")]
    Parse(#[from] serde_json::Error),

    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },

    #[error("field `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("vertex index {index} out of range (vertex count: {count})")]
    VertexIndexOutOfRange { index: u32, count: usize },

    #[error("edge {edge_index} references the same vertex twice")]
    EdgeEndpointsIdentical { edge_index: EdgeIndex },
}

/// The mesh connectivity is not a manifold-with-boundary surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("edge {edge_index} touches {face_count} faces; at most 2 are allowed")]
    NonManifoldEdge {
        edge_index: EdgeIndex,
        face_count: usize,
    },

    #[error("face {face_index} does not have three distinct vertices")]
    MalformedFace { face_index: FaceIndex },
}

/// A face polygon cannot be triangulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("face {face_index} is degenerate ({vertex_count} vertices, need at least 3)")]
    DegenerateFace {
        face_index: FaceIndex,
        vertex_count: usize,
    },

    #[error("no valid ear found while triangulating face {face_index}; polygon is likely non-simple")]
    NoEarFound { face_index: FaceIndex },
}
