//! Plain-old-data types shared between the importer and the solver.
//!
//! Everything here is either `repr(transparent)` over a flat array or
//! `repr(C)`, so per-quantity arrays can be handed to an external renderer
//! as byte slices without copying.

mod model;
pub use model::*;

mod parameters;
pub use parameters::*;

pub type NodeIndex = u32;
pub type EdgeIndex = u32;
pub type CreaseIndex = u32;
pub type FaceIndex = u32;

#[derive(
    serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[serde(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(transparent)]
pub struct Vector3F(pub [f32; 3]);

impl From<Vector3F> for nalgebra::Vector3<f32> {
    fn from(v: Vector3F) -> Self {
        Self::new(v.0[0], v.0[1], v.0[2])
    }
}

impl From<nalgebra::Vector3<f32>> for Vector3F {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self([v.x, v.y, v.z])
    }
}

#[derive(
    serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[serde(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Vector3U(pub [u32; 3]);

#[derive(
    serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[serde(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Vector2U(pub [u32; 2]);

#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModelSize {
    pub nodes: NodeIndex,
    pub edges: EdgeIndex,
    pub creases: CreaseIndex,
    pub faces: FaceIndex,
}
