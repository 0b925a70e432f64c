use super::indices::*;

/// The vertex IDs of one (possibly non-triangular) face, in winding order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[repr(transparent)]
pub struct FaceVertexIndices(pub Vec<VertexIndex>);

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct FaceInformation {
    #[serde(rename = "faces_vertices")]
    pub vertices: Option<Vec<FaceVertexIndices>>,
}

impl FaceInformation {
    pub fn count(&self) -> usize {
        self.vertices.as_ref().map(|v| v.len()).unwrap_or(0)
    }
}
