use crate::{CreaseIndex, EdgeIndex, FaceIndex, ModelSize, NodeIndex, Vector3F, Vector3U};

/// Sentinel face index for an edge slot with no adjacent face.
pub const NO_FACE: FaceIndex = FaceIndex::MAX;

/// Classification of an edge of the crease pattern.
///
/// `Facet` edges are synthesized by triangulation of non-triangular faces and
/// carry a flat (zero) fold target.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Boundary,
    Mountain,
    Valley,
    Facet,
}

impl EdgeKind {
    /// Default target fold angle in radians. FOLD sign convention: mountain
    /// folds are negative. Boundary edges do not hinge.
    pub const fn default_target_angle(self) -> Option<f32> {
        match self {
            EdgeKind::Boundary => None,
            EdgeKind::Mountain => Some(-core::f32::consts::PI),
            EdgeKind::Valley => Some(core::f32::consts::PI),
            EdgeKind::Facet => Some(0.0),
        }
    }
}

/// One edge of the triangulated pattern, with its precomputed rest state.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub vertices: [NodeIndex; 2],
    pub kind: EdgeKind,
    /// Rest length, captured after normalization. Never changes.
    pub nominal_length: f32,
    /// The up-to-two adjacent faces. An edge with a single adjacent face
    /// stores it in both slots (self-paired); an edge with none stores
    /// [`NO_FACE`] twice.
    pub faces: [FaceIndex; 2],
}

impl Edge {
    /// True when the edge does not sit between two distinct faces.
    pub fn is_boundary(&self) -> bool {
        self.faces[0] == self.faces[1]
    }
}

/// A triangle of the triangulated pattern.
#[derive(serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Face {
    /// Vertex indices in winding order.
    pub vertices: Vector3U,
    /// Rest interior angles (radians), one per corner, captured at load.
    pub nominal_angles: Vector3F,
}

/// The static geometry of one crease hinge: the two adjacent faces, their
/// wing (complement) vertices and the shared edge endpoints.
#[derive(serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct CreaseGeometry {
    pub face_indices: [FaceIndex; 2],
    /// Per face, the vertex opposite the crease.
    pub complement_node_indices: [NodeIndex; 2],
    /// The crease endpoints, shared by both faces.
    pub adjacent_node_indices: [NodeIndex; 2],
}

/// A foldable (non-boundary) edge together with its hinge geometry and
/// target fold angle at 100% folding.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crease {
    pub edge_index: EdgeIndex,
    pub geometry: CreaseGeometry,
    pub kind: EdgeKind,
    pub nominal_length: f32,
    /// Radians; scaled by the runtime fold percentage.
    pub target_fold_angle: f32,
}

/// A fully ingested, triangulated, normalized crease pattern: the immutable
/// output of the importer and the rest state of the solver.
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct PatternModel {
    pub title: Option<String>,
    /// Initial (flat or pre-folded) vertex positions, normalized to a unit
    /// bounding box centered on the origin.
    pub positions: Vec<Vector3F>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    pub creases: Vec<Crease>,
}

impl PatternModel {
    pub fn size(&self) -> ModelSize {
        ModelSize {
            nodes: self.positions.len() as NodeIndex,
            edges: self.edges.len() as EdgeIndex,
            creases: self.creases.len() as CreaseIndex,
            faces: self.faces.len() as FaceIndex,
        }
    }
}
