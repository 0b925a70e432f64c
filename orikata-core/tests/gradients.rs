//! Checks each conservative force kernel against the central finite
//! difference of an independently written (f64) energy function: for every
//! node and axis, F = -dE/dx.

use nalgebra::Vector3;
use orikata_core::kernels;
use orikata_model::{
    Crease, CreaseGeometry, Edge, EdgeKind, Face, Vector3F, Vector3U, NO_FACE,
};

const PI: f64 = core::f64::consts::PI;
const STEP: f32 = 1e-3;
const ABSOLUTE_TOLERANCE: f64 = 2e-3;
const RELATIVE_TOLERANCE: f64 = 2e-2;

fn promote(positions: &[Vector3F]) -> Vec<Vector3<f64>> {
    positions
        .iter()
        .map(|p| Vector3::new(p.0[0] as f64, p.0[1] as f64, p.0[2] as f64))
        .collect()
}

fn check_gradient<E, F>(positions: &[Vector3F], energy: E, forces: F)
where
    E: Fn(&[Vector3<f64>]) -> f64,
    F: Fn(&[Vector3F]) -> Vec<Vector3F>,
{
    let analytic = forces(positions);

    for node in 0..positions.len() {
        for axis in 0..3 {
            let mut plus = positions.to_vec();
            plus[node].0[axis] += STEP;
            let mut minus = positions.to_vec();
            minus[node].0[axis] -= STEP;

            let numeric = -(energy(&promote(&plus)) - energy(&promote(&minus)))
                / (2.0 * STEP as f64);
            let actual = analytic[node].0[axis] as f64;

            let tolerance = ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * numeric.abs();
            assert!(
                (actual - numeric).abs() < tolerance,
                "node {node} axis {axis}: force {actual} vs -dE/dx {numeric}"
            );
        }
    }
}

// ---- axial ----

#[test]
fn axial_force_is_the_energy_gradient() {
    let stiffness = 20.0f32;
    let edges = [
        Edge {
            vertices: [0, 1],
            kind: EdgeKind::Boundary,
            nominal_length: 1.0,
            faces: [NO_FACE; 2],
        },
        Edge {
            vertices: [1, 2],
            kind: EdgeKind::Boundary,
            nominal_length: 0.8,
            faces: [NO_FACE; 2],
        },
    ];
    let positions = [
        Vector3F([0.0, 0.0, 0.0]),
        Vector3F([1.2, 0.1, -0.1]),
        Vector3F([1.4, 0.9, 0.2]),
    ];

    let energy = |p: &[Vector3<f64>]| -> f64 {
        edges
            .iter()
            .map(|e| {
                let length = (p[e.vertices[1] as usize] - p[e.vertices[0] as usize]).norm();
                let rest = e.nominal_length as f64;
                0.5 * (stiffness as f64 / rest) * (length - rest).powi(2)
            })
            .sum()
    };
    check_gradient(&positions, energy, |p| {
        let mut forces = vec![Vector3F::default(); p.len()];
        kernels::axial::accumulate_axial_forces(
            kernels::axial::PerEdgeAxialInput {
                edges: &edges,
                positions: p,
                axial_stiffness: stiffness,
            },
            &mut forces,
        );
        forces
    });
}

// ---- face ----

#[test]
fn face_force_is_the_energy_gradient() {
    let stiffness = 0.2f32;
    let nominal = [PI / 2.0, PI / 4.0, PI / 4.0];
    let faces = [Face {
        vertices: Vector3U([0, 1, 2]),
        nominal_angles: Vector3F(nominal.map(|a| a as f32)),
    }];
    // sheared and lifted out of plane
    let positions = [
        Vector3F([0.0, 0.0, 0.0]),
        Vector3F([1.1, -0.15, 0.1]),
        Vector3F([0.2, 0.95, -0.05]),
    ];

    let energy = move |p: &[Vector3<f64>]| -> f64 {
        let (a, b, c) = (p[0], p[1], p[2]);
        let angle = |u: Vector3<f64>, v: Vector3<f64>| {
            u.normalize().dot(&v.normalize()).clamp(-1.0, 1.0).acos()
        };
        let angles = [
            angle(b - a, c - a),
            angle(a - b, c - b),
            angle(a - c, b - c),
        ];
        angles
            .iter()
            .zip(&nominal)
            .map(|(theta, rest)| 0.5 * stiffness as f64 * (theta - rest).powi(2))
            .sum()
    };
    check_gradient(&positions, energy, |p| {
        let normals: Vec<Vector3F> = kernels::normals::calculate_normals(
            kernels::normals::PerFaceNormalInput {
                faces: &faces,
                positions: p,
            },
        )
        .collect();
        let mut forces = vec![Vector3F::default(); p.len()];
        kernels::face::accumulate_face_forces(
            kernels::face::PerFaceForceInput {
                faces: &faces,
                face_normals: &normals,
                positions: p,
                face_stiffness: stiffness,
            },
            &mut forces,
        );
        forces
    });
}

// ---- crease ----

/// f64 dihedral angle of the test hinge, same sign convention as the solver:
/// positive when the wings fold toward the side the face normals lean to.
fn dihedral(p: &[Vector3<f64>], adjacent: [usize; 2], wings: [usize; 2]) -> f64 {
    let e0 = p[adjacent[0]];
    let direction = (p[adjacent[1]] - e0).normalize();

    let offset = |wing: usize| {
        let w = p[wing] - e0;
        (w - direction * direction.dot(&w)).normalize()
    };
    let (pa, pb) = (offset(wings[0]), offset(wings[1]));
    let magnitude = PI - pa.dot(&pb).clamp(-1.0, 1.0).acos();

    let normal = |a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>| {
        (b - a).cross(&(c - a)).normalize()
    };
    // faces [e0, wing_a, e1] and [e0, e1, wing_b], consistent winding
    let normal_sum = normal(e0, p[wings[0]], p[adjacent[1]])
        + normal(e0, p[adjacent[1]], p[wings[1]]);
    if normal_sum.dot(&(pa + pb)) < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

#[test]
fn crease_force_is_the_energy_gradient() {
    let fold_stiffness = 0.7f32;
    let fold_percent = 0.8f32;
    let nominal_length = 2f32.sqrt();
    let target = -PI as f32;

    let faces = [
        Face {
            vertices: Vector3U([0, 1, 2]),
            nominal_angles: Vector3F::default(),
        },
        Face {
            vertices: Vector3U([0, 2, 3]),
            nominal_angles: Vector3F::default(),
        },
    ];
    let creases = [Crease {
        edge_index: 4,
        geometry: CreaseGeometry {
            face_indices: [0, 1],
            complement_node_indices: [1, 3],
            adjacent_node_indices: [0, 2],
        },
        kind: EdgeKind::Mountain,
        nominal_length,
        target_fold_angle: target,
    }];
    // partly folded, slightly asymmetric so no term vanishes
    let positions = [
        Vector3F([0.0, 0.0, 0.0]),
        Vector3F([0.9, 0.1, -0.35]),
        Vector3F([1.0, 1.0, 0.05]),
        Vector3F([0.1, 0.95, -0.3]),
    ];

    let energy = move |p: &[Vector3<f64>]| -> f64 {
        let angle = dihedral(p, [0, 2], [1, 3]);
        let scaled_target = target as f64 * fold_percent as f64;
        let stiffness = nominal_length as f64 * fold_stiffness as f64;
        0.5 * stiffness * (angle - scaled_target).powi(2)
    };
    check_gradient(&positions, energy, |p| {
        let normals: Vec<Vector3F> = kernels::normals::calculate_normals(
            kernels::normals::PerFaceNormalInput {
                faces: &faces,
                positions: p,
            },
        )
        .collect();
        let physics: Vec<_> = kernels::crease_physics::calculate_crease_physics(
            kernels::crease_physics::PerCreasePhysicsInput {
                creases: &creases,
                positions: p,
            },
        )
        .collect();
        let angles: Vec<f32> = kernels::fold_angle::calculate_fold_angles(
            kernels::fold_angle::PerCreaseFoldAngleInput {
                creases: &creases,
                face_normals: &normals,
                positions: p,
                fold_percent,
            },
        )
        .collect();

        let mut forces = vec![Vector3F::default(); p.len()];
        kernels::crease_force::accumulate_crease_forces(
            kernels::crease_force::PerCreaseForceInput {
                creases: &creases,
                fold_angles: &angles,
                crease_physics: &physics,
                face_normals: &normals,
                fold_percent,
                fold_stiffness,
                facet_stiffness: fold_stiffness,
            },
            &mut forces,
        );
        forces
    });
}
