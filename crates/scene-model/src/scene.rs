//! Object store and the lookup trait the controller resolves handles through.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::object::{Camera, ObjectId, SceneObject, Transform};

/// Resolves object handles to live transforms.
///
/// Hosts implement this over whatever object storage they use. Every
/// method treats a missing object and a disposed object the same way:
/// it does not resolve.
pub trait SceneAccess {
    /// Whether `id` refers to an object that exists and is not disposed.
    fn is_alive(&self, id: ObjectId) -> bool;

    /// Current transform of a live object.
    fn transform(&self, id: ObjectId) -> Option<Transform>;

    /// Mutable transform of a live object.
    fn transform_mut(&mut self, id: ObjectId) -> Option<&mut Transform>;

    /// Camera component of a live object, if it has one.
    fn camera(&self, id: ObjectId) -> Option<Camera>;

    /// Position of a live object.
    fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.transform(id).map(|t| t.pos)
    }
}

/// A simple in-memory scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object with the next free ID.
    pub fn spawn(&mut self, name: impl Into<String>, transform: Transform) -> ObjectId {
        let id = self.next_id();
        self.objects.push(SceneObject::new(id, name, transform));
        id
    }

    /// Add an object carrying a camera component.
    pub fn spawn_camera(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
        camera: Camera,
    ) -> ObjectId {
        let id = self.next_id();
        self.objects
            .push(SceneObject::new(id, name, transform).with_camera(camera));
        id
    }

    /// Insert a fully built object. Replaces any object with the same ID.
    pub fn insert(&mut self, object: SceneObject) {
        match self.objects.iter_mut().find(|o| o.id == object.id) {
            Some(existing) => *existing = object,
            None => self.objects.push(object),
        }
    }

    /// Mark an object as destroyed. Returns false if it was unknown.
    pub fn dispose(&mut self, id: ObjectId) -> bool {
        match self.get_mut(id) {
            Some(obj) => {
                obj.disposed = true;
                tracing::debug!(object = %id, name = %obj.name, "object disposed");
                true
            }
            None => false,
        }
    }

    /// Drop disposed objects entirely. Returns how many were removed.
    pub fn purge_disposed(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !o.disposed);
        before - self.objects.len()
    }

    /// Look up an object, disposed or not.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// One past the highest ID, or the lowest free ID once `u32::MAX` is taken.
    fn next_id(&self) -> ObjectId {
        let highest = self.objects.iter().map(|o| o.id.0).max().unwrap_or(0);
        if let Some(next) = highest.checked_add(1) {
            return ObjectId(next);
        }

        let mut used: Vec<u32> = self.objects.iter().map(|o| o.id.0).collect();
        used.sort_unstable();
        let mut candidate = 1_u32;
        for id in used {
            if id == candidate {
                candidate = candidate.saturating_add(1);
            } else if id > candidate {
                break;
            }
        }
        ObjectId(candidate)
    }

    fn live(&self, id: ObjectId) -> Option<&SceneObject> {
        self.get(id).filter(|o| !o.disposed)
    }
}

impl SceneAccess for Scene {
    fn is_alive(&self, id: ObjectId) -> bool {
        self.live(id).is_some()
    }

    fn transform(&self, id: ObjectId) -> Option<Transform> {
        self.live(id).map(|o| o.transform)
    }

    fn transform_mut(&mut self, id: ObjectId) -> Option<&mut Transform> {
        self.get_mut(id)
            .filter(|o| !o.disposed)
            .map(|o| &mut o.transform)
    }

    fn camera(&self, id: ObjectId) -> Option<Camera> {
        self.live(id).and_then(|o| o.camera)
    }
}
