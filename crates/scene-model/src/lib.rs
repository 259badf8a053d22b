//! FollowCam Scene Model
//!
//! Defines the data contracts the camera controller works against:
//! - **Objects:** IDs, transforms, camera components
//! - **Scene:** an ID-addressed object store and the `SceneAccess` lookup trait
//! - **Settings:** tunables for following, zooming, and shaking
//! - **Scenario:** a saved scene plus wiring and scripted events, used for
//!   deterministic simulation
//!
//! The controller never owns scene objects. It holds `ObjectId`s and
//! resolves them through `SceneAccess` every tick, so objects may vanish
//! between ticks.

pub mod error;
pub mod object;
pub mod scenario;
pub mod scene;
pub mod settings;

pub use error::*;
pub use object::*;
pub use scenario::*;
pub use scene::*;
pub use settings::*;
