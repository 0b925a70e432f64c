use nalgebra::Vector3;
use orikata_model::{NodeIndex, PatternModel, SimulationParameters, Vector3F};

use crate::kernels::crease_physics::CreasePhysics;
use crate::process;
use crate::query::{self, Ray, RayHit, SelectedPoint};
use crate::state::{ForceBuffers, SolverState};

/// The folding simulation: owns the immutable [`PatternModel`], the mutable
/// per-node state and the tunable parameters, and advances them one explicit
/// step at a time.
///
/// Forces are computed lazily: a step reuses force buffers that are still
/// fresh (because a caller just queried them), and querying after a step
/// recomputes them from the post-step positions.
pub struct Solver {
    model: PatternModel,
    parameters: SimulationParameters,
    state: SolverState,
    dt: f32,
    forces_fresh: bool,
}

impl Solver {
    pub fn new(model: PatternModel, parameters: SimulationParameters) -> Self {
        let dt = crate::dt::stable_dt(&model.edges, parameters.axial_stiffness);
        let state = SolverState::from_model(&model);
        tracing::debug!(
            nodes = state.positions.len(),
            creases = model.creases.len(),
            dt,
            "solver ready"
        );
        Self {
            model,
            parameters,
            state,
            dt,
            forces_fresh: false,
        }
    }

    pub fn model(&self) -> &PatternModel {
        &self.model
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Replace the parameters wholesale. The stable time step follows the
    /// axial stiffness.
    pub fn set_parameters(&mut self, parameters: SimulationParameters) {
        if parameters.axial_stiffness != self.parameters.axial_stiffness {
            self.dt = crate::dt::stable_dt(&self.model.edges, parameters.axial_stiffness);
        }
        self.parameters = parameters;
        self.forces_fresh = false;
    }

    /// Set the fold fraction, clamped to `[0, 1]`.
    pub fn set_fold_percent(&mut self, fold_percent: f32) {
        self.parameters.fold_percent = fold_percent.clamp(0.0, 1.0);
        self.forces_fresh = false;
    }

    /// Advance one time step.
    pub fn step(&mut self) {
        process::step_once(
            &self.model,
            &mut self.state,
            &self.parameters,
            self.dt,
            self.forces_fresh,
        );
        self.forces_fresh = false;
    }

    /// Advance `count` time steps.
    pub fn step_n(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Displace one node, as when the user drags a picked vertex.
    pub fn displace_node(&mut self, node: NodeIndex, delta: Vector3F) {
        let position = &mut self.state.positions[node as usize];
        *position = (Vector3::from(*position) + Vector3::from(delta)).into();
        self.forces_fresh = false;
    }

    /// Back to the rest state, keeping the current parameters.
    pub fn reset(&mut self) {
        self.state.reset(&self.model);
        self.forces_fresh = false;
    }

    fn ensure_forces(&mut self) {
        if !self.forces_fresh {
            process::refresh_geometry(&self.model, &mut self.state, &self.parameters);
            process::accumulate_forces(&self.model, &mut self.state, &self.parameters);
            self.forces_fresh = true;
        }
    }

    /// Net force on every node at the current positions.
    pub fn total_force(&mut self) -> &[Vector3F] {
        self.ensure_forces();
        &self.state.forces.total
    }

    /// The per-constraint force breakdown at the current positions.
    pub fn forces(&mut self) -> &ForceBuffers {
        self.ensure_forces();
        &self.state.forces
    }

    pub fn positions(&self) -> &[Vector3F] {
        &self.state.positions
    }

    pub fn velocities(&self) -> &[Vector3F] {
        &self.state.velocities
    }

    /// Unit face normals at the current positions.
    pub fn face_normals(&mut self) -> &[Vector3F] {
        self.ensure_forces();
        &self.state.face_normals
    }

    /// Signed fold angle of every crease at the current positions, radians.
    pub fn fold_angles(&mut self) -> &[f32] {
        self.ensure_forces();
        &self.state.fold_angles
    }

    /// Per-crease hinge geometry at the current positions.
    pub fn crease_physics(&mut self) -> &[CreasePhysics] {
        self.ensure_forces();
        &self.state.crease_physics
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Total kinetic energy, unit mass per node.
    pub fn kinetic_energy(&self) -> f32 {
        self.state
            .velocities
            .iter()
            .map(|v| Vector3::from(*v).norm_squared())
            .sum::<f32>()
            * 0.5
    }

    /// Nearest face hit by `ray` on the current folded mesh.
    pub fn pick(&self, ray: &Ray) -> Option<RayHit> {
        query::intersect(ray, &self.model.faces, &self.state.positions)
    }

    /// Current world position of a previously picked point.
    pub fn resolve(&self, point: &SelectedPoint) -> Vector3F {
        query::resolve(point, &self.model.faces, &self.state.positions)
    }
}
