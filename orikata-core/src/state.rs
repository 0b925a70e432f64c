use orikata_model::{PatternModel, Vector3F};

use crate::kernels::crease_physics::CreasePhysics;

/// Per-constraint force contributions of the last computation, plus their
/// sum. Kept separately so an embedding UI can draw force glyphs per
/// constraint family.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceBuffers {
    pub axial: Vec<Vector3F>,
    pub crease: Vec<Vector3F>,
    pub face: Vec<Vector3F>,
    pub damping: Vec<Vector3F>,
    pub total: Vec<Vector3F>,
}

impl ForceBuffers {
    fn zeroed(nodes: usize) -> Self {
        Self {
            axial: vec![Vector3F::default(); nodes],
            crease: vec![Vector3F::default(); nodes],
            face: vec![Vector3F::default(); nodes],
            damping: vec![Vector3F::default(); nodes],
            total: vec![Vector3F::default(); nodes],
        }
    }

    pub(crate) fn clear(&mut self) {
        for buffer in [
            &mut self.axial,
            &mut self.crease,
            &mut self.face,
            &mut self.damping,
            &mut self.total,
        ] {
            buffer.fill(Vector3F::default());
        }
    }
}

/// All mutable per-step quantities of the solver, sized once from the model.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolverState {
    pub positions: Vec<Vector3F>,
    pub velocities: Vec<Vector3F>,
    pub face_normals: Vec<Vector3F>,
    pub fold_angles: Vec<f32>,
    pub crease_physics: Vec<CreasePhysics>,
    pub forces: ForceBuffers,
}

impl SolverState {
    pub(crate) fn from_model(model: &PatternModel) -> Self {
        Self {
            positions: model.positions.clone(),
            velocities: vec![Vector3F::default(); model.positions.len()],
            face_normals: vec![Vector3F::default(); model.faces.len()],
            fold_angles: vec![0.0; model.creases.len()],
            crease_physics: vec![CreasePhysics::INVALID; model.creases.len()],
            forces: ForceBuffers::zeroed(model.positions.len()),
        }
    }

    /// Back to the rest state: model positions, zero velocity.
    pub(crate) fn reset(&mut self, model: &PatternModel) {
        self.positions.copy_from_slice(&model.positions);
        self.velocities.fill(Vector3F::default());
        self.forces.clear();
    }
}
