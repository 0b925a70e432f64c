//! Stable time step for the explicit integrator.

use orikata_model::Edge;

/// Highest axial natural frequency over all edges, `sqrt(k)` with unit mass
/// and `k = EA / rest length`.
pub fn max_natural_frequency(edges: &[Edge], axial_stiffness: f32) -> f32 {
    edges
        .iter()
        .map(|edge| (axial_stiffness / edge.nominal_length).sqrt())
        .fold(0.0f32, f32::max)
}

/// Time step safely below the stability limit of symplectic Euler for the
/// stiffest axial spring: `1 / (2 pi f_max)`.
pub fn stable_dt(edges: &[Edge], axial_stiffness: f32) -> f32 {
    use core::f32::consts::TAU;

    let frequency = max_natural_frequency(edges, axial_stiffness);
    if frequency > 0.0 {
        1.0 / (TAU * frequency)
    } else {
        // no edges: any step works, pick the one a unit-stiffness,
        // unit-length edge would get
        1.0 / TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orikata_model::{EdgeKind, NO_FACE};

    fn edge(nominal_length: f32) -> Edge {
        Edge {
            vertices: [0, 1],
            kind: EdgeKind::Boundary,
            nominal_length,
            faces: [NO_FACE; 2],
        }
    }

    #[test]
    fn shortest_edge_dominates() {
        let edges = [edge(1.0), edge(0.01), edge(0.5)];
        let f = max_natural_frequency(&edges, 20.0);
        assert!((f - (20.0f32 / 0.01).sqrt()).abs() < 1e-3);
    }

    #[test]
    fn dt_is_inverse_angular_frequency() {
        let edges = [edge(1.0)];
        let dt = stable_dt(&edges, 20.0);
        let expected = 1.0 / (core::f32::consts::TAU * 20.0f32.sqrt());
        assert!((dt - expected).abs() < 1e-9);
    }

    #[test]
    fn stiffer_material_means_smaller_steps() {
        let edges = [edge(1.0)];
        assert!(stable_dt(&edges, 80.0) < stable_dt(&edges, 20.0));
    }
}
