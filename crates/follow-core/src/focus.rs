//! Focus aggregation: reduce follow targets to a point and a radius.

use followcam_scene::{ObjectId, SceneAccess};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where the camera should look and how spread out its subjects are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    /// Mean position of all live targets.
    pub pos: Vec3,
    /// Maximum distance from `pos` to any live target.
    pub radius: f32,
    /// Number of targets that contributed.
    pub count: usize,
}

impl Focus {
    /// Aggregate a set of positions. `None` when there are no positions,
    /// in which case the camera should hold still.
    pub fn from_positions(positions: &[Vec3]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        let n = positions.len() as f32;
        let pos = positions.iter().copied().sum::<Vec3>() / n;

        // A lone target sits exactly on the mean; skip the float noise.
        let radius = if positions.len() == 1 {
            0.0
        } else {
            positions
                .iter()
                .map(|p| p.distance(pos))
                .fold(0.0_f32, f32::max)
        };

        Some(Self {
            pos,
            radius,
            count: positions.len(),
        })
    }
}

/// Drop targets that no longer resolve. Returns how many were removed.
pub fn prune_targets<S: SceneAccess + ?Sized>(targets: &mut Vec<ObjectId>, scene: &S) -> usize {
    let before = targets.len();
    targets.retain(|id| scene.is_alive(*id));
    let pruned = before - targets.len();
    if pruned > 0 {
        tracing::debug!(pruned, remaining = targets.len(), "pruned dead follow targets");
    }
    pruned
}

/// Positions of every target that resolves.
pub fn target_positions<S: SceneAccess + ?Sized>(targets: &[ObjectId], scene: &S) -> Vec<Vec3> {
    targets.iter().filter_map(|id| scene.position(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use followcam_scene::{Scene, Transform};
    use proptest::prelude::*;

    #[test]
    fn test_empty_has_no_focus() {
        assert!(Focus::from_positions(&[]).is_none());
    }

    #[test]
    fn test_single_target() {
        let focus = Focus::from_positions(&[Vec3::new(100.0, 0.0, 0.0)]).unwrap();
        assert_eq!(focus.pos, Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(focus.radius, 0.0);
        assert_eq!(focus.count, 1);
    }

    #[test]
    fn test_mean_and_radius() {
        let focus = Focus::from_positions(&[
            Vec3::new(-100.0, 0.0, 0.0),
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::new(0.0, 300.0, 0.0),
        ])
        .unwrap();
        assert!((focus.pos - Vec3::new(0.0, 100.0, 0.0)).length() < 1e-4);
        // Farthest is the top target, 200 units above the mean.
        assert!((focus.radius - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_prune_removes_disposed_and_unknown() {
        let mut scene = Scene::new();
        let a = scene.spawn("a", Transform::IDENTITY);
        let b = scene.spawn("b", Transform::IDENTITY);
        scene.dispose(b);

        let mut targets = vec![a, b, ObjectId(42)];
        assert_eq!(prune_targets(&mut targets, &scene), 2);
        assert_eq!(targets, vec![a]);
        assert_eq!(prune_targets(&mut targets, &scene), 0);
    }

    fn arb_position() -> impl Strategy<Value = Vec3> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn radius_is_max_distance_to_mean(positions in prop::collection::vec(arb_position(), 1..16)) {
            let focus = Focus::from_positions(&positions).unwrap();
            prop_assert!(focus.radius >= 0.0);

            let max = positions.iter().map(|p| p.distance(focus.pos)).fold(0.0_f32, f32::max);
            if positions.len() > 1 {
                prop_assert!((focus.radius - max).abs() <= 1e-3 * max.max(1.0));
            }
            for p in &positions {
                prop_assert!(p.distance(focus.pos) <= focus.radius + 1e-3 * max.max(1.0));
            }
        }

        #[test]
        fn order_does_not_matter(mut positions in prop::collection::vec(arb_position(), 2..10)) {
            let forward = Focus::from_positions(&positions).unwrap();
            positions.reverse();
            let reversed = Focus::from_positions(&positions).unwrap();
            prop_assert!((forward.pos - reversed.pos).length() < 1e-2);
            prop_assert!((forward.radius - reversed.radius).abs() < 1e-2);
        }
    }
}
