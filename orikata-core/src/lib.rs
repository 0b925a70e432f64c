//! A mass-spring solver for folding crease patterns.
//!
//! The [`Solver`] takes the [`PatternModel`](orikata_model::PatternModel)
//! produced by the importer and relaxes it toward a target fold fraction
//! under four constraint families: axial edge springs, crease hinge springs,
//! in-plane face angle springs and per-edge damping. Integration is
//! symplectic Euler with a time step derived from the stiffest axial spring.

pub mod dt;
pub mod kernels;
pub mod query;

mod process;
mod solver;
mod state;

pub use solver::Solver;
pub use state::ForceBuffers;

pub use orikata_model as model;
