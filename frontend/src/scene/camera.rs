//! Perspective camera and point projection.

use glam::Vec3;

use super::graph::{PointMaterial, PointsView};
use crate::config::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};

/// Drawing area in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_drawable(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}

/// A point mapped to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Dot diameter in pixels.
    pub size: f64,
}

/// Perspective camera looking down -Z with no roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            fov_y: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Project a world-space point. Returns `None` when the point lies
    /// outside the view volume.
    pub fn project(
        &self,
        world: Vec3,
        viewport: Viewport,
        material: &PointMaterial,
    ) -> Option<ProjectedPoint> {
        if !viewport.is_drawable() {
            return None;
        }

        let view = world - self.position;
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let focal = 1.0 / (self.fov_y as f64 * 0.5).tan();
        let aspect = viewport.width / viewport.height;
        let depth = depth as f64;
        let ndc_x = view.x as f64 * focal / aspect / depth;
        let ndc_y = view.y as f64 * focal / depth;
        if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
            return None;
        }

        let size = if material.size_attenuation {
            material.size as f64 * (viewport.height * 0.5) / depth
        } else {
            material.size as f64
        };

        Some(ProjectedPoint {
            x: (ndc_x + 1.0) * 0.5 * viewport.width,
            y: (1.0 - ndc_y) * 0.5 * viewport.height,
            size,
        })
    }

    /// Whether any part of a ball could be in front of the camera.
    pub fn may_see_ball(&self, center: Vec3, radius: f32) -> bool {
        let depth = -(center - self.position).z;
        depth + radius >= self.near && depth - radius <= self.far
    }

    /// Whole-node visibility test. Nodes with frustum culling disabled are
    /// always drawn.
    pub fn should_draw(&self, view: &PointsView<'_>) -> bool {
        !view.frustum_culled || self.may_see_ball(Vec3::ZERO, view.cloud.radius())
    }
}
