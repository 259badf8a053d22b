//! Audio listener sync.

use followcam_scene::{ObjectId, SceneAccess};
use glam::Vec3;

/// Place the listener over the camera: camera x/y, listener's own z.
///
/// Uses an absolute move so rounding never accumulates. Returns the new
/// listener position, or `None` if the listener no longer resolves.
pub fn sync_listener<S: SceneAccess + ?Sized>(
    scene: &mut S,
    listener: ObjectId,
    camera_pos: Vec3,
) -> Option<Vec3> {
    let transform = scene.transform_mut(listener)?;
    let pos = Vec3::new(camera_pos.x, camera_pos.y, transform.pos.z);
    transform.move_to(pos);
    Some(pos)
}
