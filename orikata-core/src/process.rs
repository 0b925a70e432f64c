//! Orchestration of one solver step over the kernels.

use itertools::izip;
use nalgebra::Vector3;
use orikata_model::{ConstraintFlags, PatternModel, SimulationParameters, Vector3F};

use crate::kernels;
use crate::state::SolverState;

/// Recompute the derived geometry (face normals, crease hinge physics, fold
/// angles) from the current positions.
pub(crate) fn refresh_geometry(
    model: &PatternModel,
    state: &mut SolverState,
    parameters: &SimulationParameters,
) {
    for (slot, normal) in state.face_normals.iter_mut().zip(kernels::normals::calculate_normals(
        kernels::normals::PerFaceNormalInput {
            faces: &model.faces,
            positions: &state.positions,
        },
    )) {
        *slot = normal;
    }

    for (slot, physics) in state.crease_physics.iter_mut().zip(
        kernels::crease_physics::calculate_crease_physics(
            kernels::crease_physics::PerCreasePhysicsInput {
                creases: &model.creases,
                positions: &state.positions,
            },
        ),
    ) {
        *slot = physics;
    }

    for (slot, angle) in state.fold_angles.iter_mut().zip(
        kernels::fold_angle::calculate_fold_angles(kernels::fold_angle::PerCreaseFoldAngleInput {
            creases: &model.creases,
            face_normals: &state.face_normals,
            positions: &state.positions,
            fold_percent: parameters.fold_percent,
        }),
    ) {
        *slot = angle;
    }
}

/// Recompute the per-constraint force buffers and their total from the
/// current geometry. Assumes [`refresh_geometry`] ran for these positions.
pub(crate) fn accumulate_forces(
    model: &PatternModel,
    state: &mut SolverState,
    parameters: &SimulationParameters,
) {
    state.forces.clear();

    if parameters.enabled.contains(ConstraintFlags::AXIAL) {
        kernels::axial::accumulate_axial_forces(
            kernels::axial::PerEdgeAxialInput {
                edges: &model.edges,
                positions: &state.positions,
                axial_stiffness: parameters.axial_stiffness,
            },
            &mut state.forces.axial,
        );
    }
    if parameters.enabled.contains(ConstraintFlags::CREASE) {
        kernels::crease_force::accumulate_crease_forces(
            kernels::crease_force::PerCreaseForceInput {
                creases: &model.creases,
                fold_angles: &state.fold_angles,
                crease_physics: &state.crease_physics,
                face_normals: &state.face_normals,
                fold_percent: parameters.fold_percent,
                fold_stiffness: parameters.fold_stiffness,
                facet_stiffness: parameters.facet_stiffness,
            },
            &mut state.forces.crease,
        );
    }
    if parameters.enabled.contains(ConstraintFlags::FACE) {
        kernels::face::accumulate_face_forces(
            kernels::face::PerFaceForceInput {
                faces: &model.faces,
                face_normals: &state.face_normals,
                positions: &state.positions,
                face_stiffness: parameters.face_stiffness,
            },
            &mut state.forces.face,
        );
    }
    if parameters.enabled.contains(ConstraintFlags::DAMPING) {
        kernels::damping::accumulate_damping_forces(
            kernels::damping::PerEdgeDampingInput {
                edges: &model.edges,
                positions: &state.positions,
                velocities: &state.velocities,
                axial_stiffness: parameters.axial_stiffness,
                damping_ratio: parameters.damping_ratio,
            },
            &mut state.forces.damping,
        );
    }

    let forces = &mut state.forces;
    for (total, axial, crease, face, damping) in izip!(
        forces.total.iter_mut(),
        &forces.axial,
        &forces.crease,
        &forces.face,
        &forces.damping,
    ) {
        *total = (Vector3::from(*axial)
            + Vector3::from(*crease)
            + Vector3::from(*face)
            + Vector3::from(*damping))
        .into();
    }
}

/// Advance the state by `dt`, reusing already-fresh forces when the caller
/// says so.
#[tracing::instrument(skip(model, state, parameters))]
pub(crate) fn step_once(
    model: &PatternModel,
    state: &mut SolverState,
    parameters: &SimulationParameters,
    dt: f32,
    forces_fresh: bool,
) {
    if !forces_fresh {
        refresh_geometry(model, state, parameters);
        accumulate_forces(model, state, parameters);
    }
    kernels::integrate::integrate(
        &mut state.positions,
        &mut state.velocities,
        &state.forces.total,
        dt,
    );
}
