use orikata_model::Vector3F;

/// Uniformly rescale the pattern so its bounding box's longest axis spans one
/// unit, and re-center it on the origin. Keeps time-step and force magnitudes
/// independent of the units the input file happens to use.
///
/// A pattern whose points all coincide is only re-centered.
pub fn normalize(positions: &mut [Vector3F]) {
    let Some(first) = positions.first() else {
        return;
    };

    let (min, max) = positions.iter().fold((first.0, first.0), |(min, max), p| {
        (
            [
                min[0].min(p.0[0]),
                min[1].min(p.0[1]),
                min[2].min(p.0[2]),
            ],
            [
                max[0].max(p.0[0]),
                max[1].max(p.0[1]),
                max[2].max(p.0[2]),
            ],
        )
    });

    let extent = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
    let longest = extent[0].max(extent[1]).max(extent[2]);
    let scale = if longest > f32::EPSILON {
        1.0 / longest
    } else {
        1.0
    };
    let center = [
        (min[0] + max[0]) * 0.5,
        (min[1] + max[1]) * 0.5,
        (min[2] + max[2]) * 0.5,
    ];

    tracing::debug!(scale, ?center, "normalizing pattern coordinates");

    for p in positions {
        for axis in 0..3 {
            p.0[axis] = (p.0[axis] - center[axis]) * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescales_longest_axis_to_unit() {
        let mut positions = vec![
            Vector3F([0.0, 0.0, 0.0]),
            Vector3F([4.0, 2.0, 0.0]),
            Vector3F([2.0, 1.0, 0.0]),
        ];
        normalize(&mut positions);

        assert_eq!(positions[0].0, [-0.5, -0.25, 0.0]);
        assert_eq!(positions[1].0, [0.5, 0.25, 0.0]);
        assert_eq!(positions[2].0, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn coincident_points_only_recenter() {
        let mut positions = vec![Vector3F([3.0, 3.0, 3.0]), Vector3F([3.0, 3.0, 3.0])];
        normalize(&mut positions);
        assert_eq!(positions[0].0, [0.0, 0.0, 0.0]);
    }
}
