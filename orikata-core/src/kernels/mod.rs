//! The per-quantity compute kernels of one solver step.
//!
//! Each kernel takes an `*Input` struct of borrowed slices and either yields
//! its outputs as an iterator (geometry kernels) or accumulates into a force
//! buffer (force kernels). They are deliberately free functions over plain
//! slices so they can be exercised in isolation.
//!
//! Step order matters: normals, then fold angles and crease physics (which
//! read the normals), then the four force kernels, then integration.

pub mod axial;
pub mod crease_force;
pub mod crease_physics;
pub mod damping;
pub mod face;
pub mod fold_angle;
pub mod integrate;
pub mod normals;
