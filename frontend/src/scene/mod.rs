//! Particle field scene.
//!
//! - [`point_cloud`] - uniform-in-ball sampling of the particle positions
//! - [`rotation`] - per-frame tumble state
//! - [`graph`] - immutable scene tree rebuilt each frame
//! - [`camera`] - perspective projection to canvas pixels
//! - [`surface`] - canvas 2D renderer

pub mod camera;
pub mod graph;
pub mod point_cloud;
pub mod rotation;
pub mod surface;

pub use camera::{Camera, ProjectedPoint, Viewport};
pub use graph::{particle_field_scene, PointMaterial, PointsView, SceneNode, Transform};
pub use point_cloud::{sample_in_sphere, PointCloud};
pub use rotation::RotationState;
pub use surface::{backing_size, CanvasSurface, ViewportCache};
