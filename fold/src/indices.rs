pub type VertexIndex = u32;
pub type EdgeIndex = u32;
pub type FaceIndex = u32;
pub type FrameIndex = u16;
