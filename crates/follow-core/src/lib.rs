//! FollowCam Core: the follow camera controller
//!
//! Runs once per simulation tick and keeps a camera framed on a set of
//! moving targets:
//! - **Focus:** reduce live targets to a focus point and framing radius
//! - **Zoom:** pull the camera back as the targets spread out
//! - **Smoothing:** exponential approach toward the desired position
//! - **Shake:** decaying random perturbation layered on top
//! - **Listener:** keep the audio listener over the camera
//!
//! This crate is pure computation. Scene objects are reached through
//! `followcam_scene::SceneAccess` and randomness through `ShakeSampler`,
//! both injected by the caller.

pub mod controller;
pub mod focus;
pub mod listener;
pub mod sampler;
pub mod shake;
pub mod simulation;
pub mod smoothing;
pub mod zoom;

pub use controller::{CameraController, SkipReason, TickReport};
pub use focus::Focus;
pub use sampler::{RngSampler, ShakeSampler, ZeroSampler};
pub use simulation::{Frame, Simulation, Trajectory};
