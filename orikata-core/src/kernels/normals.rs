use nalgebra::Vector3;
use orikata_model::{Face, Vector3F};

/// Tolerance under which a face is considered degenerate and its normal is
/// reported as zero rather than normalized.
pub const DEGENERATE_AREA_TOLERANCE: f32 = 1e-12;

pub struct PerFaceNormalInput<'a> {
    pub faces: &'a [Face],
    pub positions: &'a [Vector3F],
}

/// Unit normal of every face from the current positions, following the
/// winding order of the face's vertices.
pub fn calculate_normals<'a>(
    input: PerFaceNormalInput<'a>,
) -> impl ExactSizeIterator<Item = Vector3F> + 'a {
    input.faces.iter().map(move |face| {
        let [a, b, c]: [Vector3<f32>; 3] =
            face.vertices.0.map(|v| input.positions[v as usize].into());

        let cross = (b - a).cross(&(c - a));
        let norm = cross.norm();
        if norm > DEGENERATE_AREA_TOLERANCE {
            (cross / norm).into()
        } else {
            Vector3F::default()
        }
    })
}
