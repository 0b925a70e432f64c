use nalgebra::Vector3;
use orikata_model::{Crease, Vector3F};

/// Squared-distance tolerance under which a wing vertex is considered to lie
/// on its crease line and the crease stops exerting force for the step.
pub const CREASE_TOLERANCE: f32 = 1e-6;

/// Per-step hinge geometry of one crease: the perpendicular distance of each
/// wing vertex to the crease line and the normalized projection of its foot
/// along the crease.
///
/// A crease that is currently degenerate (crease too short, or a wing vertex
/// on the line) is marked invalid and skipped by the force kernel until
/// geometry recovers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreasePhysics {
    /// Moment arm of each wing vertex, one per adjacent face.
    pub height: [f32; 2],
    /// Position of each wing's foot along the crease, as a fraction of the
    /// crease length measured from the first endpoint.
    pub coef: [f32; 2],
}

impl CreasePhysics {
    pub const INVALID: Self = Self {
        height: [-1.0; 2],
        coef: [-1.0; 2],
    };

    pub fn is_valid(&self) -> bool {
        self.height[0] > 0.0 && self.height[1] > 0.0
    }
}

pub struct PerCreasePhysicsInput<'a> {
    pub creases: &'a [Crease],
    pub positions: &'a [Vector3F],
}

pub fn calculate_crease_physics<'a>(
    input: PerCreasePhysicsInput<'a>,
) -> impl ExactSizeIterator<Item = CreasePhysics> + 'a {
    input.creases.iter().map(move |crease| {
        let pos = |v: u32| -> Vector3<f32> { input.positions[v as usize].into() };

        let e0 = pos(crease.geometry.adjacent_node_indices[0]);
        let e1 = pos(crease.geometry.adjacent_node_indices[1]);
        let crease_vector = e1 - e0;
        let length_squared = crease_vector.norm_squared();
        if length_squared <= CREASE_TOLERANCE {
            return CreasePhysics::INVALID;
        }
        let length = length_squared.sqrt();
        let direction = crease_vector / length;

        let mut physics = CreasePhysics {
            height: [0.0; 2],
            coef: [0.0; 2],
        };
        for side in 0..2 {
            let wing = pos(crease.geometry.complement_node_indices[side]) - e0;
            let projection = direction.dot(&wing);
            let height_squared = wing.norm_squared() - projection * projection;
            if height_squared <= CREASE_TOLERANCE {
                return CreasePhysics::INVALID;
            }
            physics.height[side] = height_squared.sqrt();
            physics.coef[side] = projection / length;
        }
        physics
    })
}
