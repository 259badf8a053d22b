//! Scene object types: IDs, transforms, and the camera component.
//!
//! Positions are world-space 3-vectors. The camera looks down +Z, so
//! "backing away" from a subject means moving toward -Z.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Handle to an object owned by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position and rotation of an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// World-space position.
    pub pos: Vec3,
    /// Rotation around the view axis, in radians.
    pub angle: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        pos: Vec3::ZERO,
        angle: 0.0,
    };

    pub fn new(pos: Vec3, angle: f32) -> Self {
        Self { pos, angle }
    }

    pub fn from_pos(pos: Vec3) -> Self {
        Self { pos, angle: 0.0 }
    }

    /// Set the absolute position.
    pub fn move_to(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    /// Move by a world-space delta.
    pub fn move_by(&mut self, delta: Vec3) {
        self.pos += delta;
    }

    /// Set the absolute angle.
    pub fn turn_to(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Rotate by a delta angle.
    pub fn turn_by(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Euclidean distance between the two positions.
    pub fn distance_to(&self, other: &Transform) -> f32 {
        self.pos.distance(other.pos)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Camera component attached to a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Distance from the camera to its focal plane. The follow controller
    /// keeps at least this much standoff from the focus point.
    pub focus_distance: f32,
}

impl Camera {
    pub const DEFAULT_FOCUS_DISTANCE: f32 = 500.0;

    pub fn new(focus_distance: f32) -> Self {
        Self { focus_distance }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FOCUS_DISTANCE)
    }
}

/// An object in the host scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,

    /// Human-readable name, used in logs and the CLI.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub transform: Transform,

    /// Present when the object carries a camera.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,

    /// Set once the host destroys the object. Disposed objects stay
    /// addressable until purged but no longer resolve through `SceneAccess`.
    #[serde(default)]
    pub disposed: bool,
}

impl SceneObject {
    pub fn new(id: ObjectId, name: impl Into<String>, transform: Transform) -> Self {
        Self {
            id,
            name: name.into(),
            transform,
            camera: None,
            disposed: false,
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_relative_moves() {
        let mut t = Transform::from_pos(Vec3::new(1.0, 2.0, 3.0));
        t.move_by(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(t.pos, Vec3::new(2.0, 3.0, 4.0));
        t.move_to(Vec3::ZERO);
        assert_eq!(t.pos, Vec3::ZERO);

        t.turn_by(0.5);
        t.turn_by(0.25);
        assert!((t.angle - 0.75).abs() < 1e-6);
        t.turn_to(-1.0);
        assert_eq!(t.angle, -1.0);
    }

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId(12).to_string(), "#12");
    }

    #[test]
    fn test_scene_object_deserialization_defaults() {
        let obj: SceneObject = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(obj.id, ObjectId(3));
        assert_eq!(obj.transform, Transform::IDENTITY);
        assert!(obj.camera.is_none());
        assert!(!obj.disposed);
    }

    #[test]
    fn test_transform_serializes_vec_as_array() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
        let json = serde_json::to_value(t).unwrap();
        assert_eq!(json["pos"], serde_json::json!([1.0, 2.0, 3.0]));
        assert_eq!(json["angle"], serde_json::json!(0.5));
    }
}
