use super::indices::*;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[repr(transparent)]
pub struct EdgeVertexIndices(pub [VertexIndex; 2]);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
pub enum EdgeAssignment {
    /// Border/boundary edge
    B,

    /// Mountain crease
    M,

    /// Valley crease
    V,

    /// Facet crease (flat, introduced by triangulation)
    F,

    /// Unassigned/unknown crease
    U,

    /// Cut/slit edge
    C,

    /// Join edge
    J,

    /// Any assignment code this library does not model.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct EdgeInformation {
    /// For each edge, an array [u, v] of two vertex IDs for the two endpoints
    /// of the edge.
    #[serde(rename = "edges_vertices")]
    pub vertices: Option<Vec<EdgeVertexIndices>>,

    #[serde(rename = "edges_assignment")]
    pub assignments: Option<Vec<EdgeAssignment>>,

    /// Target fold angle in degrees, overriding the assignment default
    /// (-180 for mountain, +180 for valley).
    #[serde(rename = "edges_foldAngle")]
    pub fold_angles: Option<Vec<f32>>,
}

impl EdgeInformation {
    pub fn count(&self) -> usize {
        self.vertices.as_ref().map(|v| v.len()).unwrap_or(0)
    }
}
