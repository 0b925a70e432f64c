//! Data model for the FOLD file format (<https://github.com/edemaine/fold>),
//! restricted to the subset an origami mechanics solver consumes: vertex
//! coordinates, edges with fold assignments and optional fold angles, and
//! polygonal faces.
//!
//! Unknown keys are ignored during deserialization, and unknown edge
//! assignment codes map to [`EdgeAssignment::Unknown`] rather than failing,
//! so files written by other tools still parse.

mod indices;
pub use indices::*;

mod vertices;
pub use vertices::*;

mod edges;
pub use edges::*;

mod faces;
pub use faces::*;

mod frame;
pub use frame::*;

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct FileMetadata {
    #[serde(rename = "file_spec")]
    pub spec: Option<f32>,
    #[serde(rename = "file_creator")]
    pub creator: Option<String>,
    #[serde(rename = "file_author")]
    pub author: Option<String>,
}

/// A whole FOLD document: the key frame plus any additional frames.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct File {
    #[serde(flatten)]
    pub file_metadata: Option<FileMetadata>,

    #[serde(rename = "file_frames")]
    pub frames: Option<Vec<NonKeyFrame>>,

    #[serde(flatten)]
    pub key_frame: FrameCore,
}

impl File {
    /// Frame 0 is the key frame; further indices address `file_frames`.
    pub fn frame(&self, index: FrameIndex) -> Option<Frame<'_>> {
        match index {
            0 => Some(Frame::Key(&self.key_frame)),
            other => self
                .frames
                .as_ref()
                .and_then(|frame_vec| frame_vec.get(usize::from(other - 1)))
                .map(Frame::NonKey),
        }
    }

    pub fn from_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
