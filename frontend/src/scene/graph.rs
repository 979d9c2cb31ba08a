//! Scene graph for the particle field.
//!
//! The scene is a small tree of immutable value nodes. It is rebuilt every
//! frame from the shared [`PointCloud`] handle and the current
//! [`RotationState`]; rebuilding only clones an `Rc`, never the points.
//!
//! ```text
//! Group (tilt 45° about Z)
//! └── Points (rotation x/y from RotationState, frustum culling off)
//! ```

use std::rc::Rc;

use glam::{EulerRot, Mat3};

use super::point_cloud::PointCloud;
use super::rotation::RotationState;
use crate::config::{PARTICLE_COLOR, PARTICLE_SIZE, PARTICLE_TILT_Z};

/// Local transform of a node. Only rotation is needed here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: [f32; 3],
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self { rotation: [x, y, z] }
    }

    pub fn matrix(&self) -> Mat3 {
        let [x, y, z] = self.rotation;
        Mat3::from_euler(EulerRot::XYZ, x, y, z)
    }
}

/// How points are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMaterial {
    /// CSS colour string.
    pub color: &'static str,
    /// Point size in scene units.
    pub size: f32,
    pub opacity: f32,
    pub transparent: bool,
    /// Scale point size by inverse camera distance.
    pub size_attenuation: bool,
    pub depth_write: bool,
}

impl PointMaterial {
    /// Material used by the hero's particle cloud.
    pub fn particle() -> Self {
        Self {
            color: PARTICLE_COLOR,
            size: PARTICLE_SIZE,
            opacity: 1.0,
            transparent: true,
            size_attenuation: true,
            depth_write: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Group {
        transform: Transform,
        children: Vec<SceneNode>,
    },
    Points {
        transform: Transform,
        cloud: Rc<PointCloud>,
        material: PointMaterial,
        /// When false the renderer never skips the node as a whole, even if
        /// its bounds leave the view.
        frustum_culled: bool,
    },
}

/// A points node resolved to world space, as handed to renderers.
#[derive(Clone, Copy, Debug)]
pub struct PointsView<'a> {
    pub world: Mat3,
    pub cloud: &'a PointCloud,
    pub material: &'a PointMaterial,
    pub frustum_culled: bool,
}

impl SceneNode {
    /// Walk every points node depth-first, composing parent transforms.
    pub fn visit_points<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(PointsView<'a>),
    {
        self.visit_with(Mat3::IDENTITY, f);
    }

    fn visit_with<'a, F>(&'a self, parent: Mat3, f: &mut F)
    where
        F: FnMut(PointsView<'a>),
    {
        match self {
            SceneNode::Group { transform, children } => {
                let world = parent * transform.matrix();
                for child in children {
                    child.visit_with(world, f);
                }
            }
            SceneNode::Points {
                transform,
                cloud,
                material,
                frustum_culled,
            } => f(PointsView {
                world: parent * transform.matrix(),
                cloud,
                material,
                frustum_culled: *frustum_culled,
            }),
        }
    }

    /// Total number of points reachable from this node.
    pub fn point_count(&self) -> usize {
        let mut total = 0;
        self.visit_points(&mut |view| total += view.cloud.len());
        total
    }
}

/// Build the particle field scene for one frame.
pub fn particle_field_scene(cloud: Rc<PointCloud>, rotation: RotationState) -> SceneNode {
    SceneNode::Group {
        transform: Transform::from_euler(0.0, 0.0, PARTICLE_TILT_Z),
        children: vec![SceneNode::Points {
            transform: Transform::from_euler(rotation.x as f32, rotation.y as f32, 0.0),
            cloud,
            material: PointMaterial::particle(),
            frustum_culled: false,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_1_SQRT_2;

    fn small_cloud() -> Rc<PointCloud> {
        Rc::new(PointCloud::from_rng(&mut StdRng::seed_from_u64(9), 16, 1.5))
    }

    fn single_view(scene: &SceneNode) -> (Mat3, PointMaterial, bool) {
        let mut found = None;
        scene.visit_points(&mut |view| {
            found = Some((view.world, *view.material, view.frustum_culled));
        });
        found.expect("scene has a points node")
    }

    #[test]
    fn test_scene_shape_and_material() {
        let scene = particle_field_scene(small_cloud(), RotationState::default());
        assert_eq!(scene.point_count(), 16);

        let (_, material, frustum_culled) = single_view(&scene);
        assert!(!frustum_culled);
        assert_eq!(material.color, "#00F2FF");
        assert_eq!(material.size, 0.002);
        assert!(material.transparent);
        assert!(material.size_attenuation);
        assert!(!material.depth_write);
    }

    #[test]
    fn test_static_tilt_at_rest() {
        let scene = particle_field_scene(small_cloud(), RotationState::default());
        let (world, _, _) = single_view(&scene);

        let p = world * Vec3::X;
        assert!((p - Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotation_applies_inside_tilt() {
        let rotation = RotationState {
            x: 0.0,
            y: std::f64::consts::FRAC_PI_2,
        };
        let scene = particle_field_scene(small_cloud(), rotation);
        let (world, _, _) = single_view(&scene);

        // +90° about Y sends X to -Z; the Z tilt leaves -Z alone.
        let p = world * Vec3::X;
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_rebuild_shares_the_cloud() {
        let cloud = small_cloud();
        let _a = particle_field_scene(Rc::clone(&cloud), RotationState::default());
        let _b = particle_field_scene(Rc::clone(&cloud), RotationState::default());
        assert_eq!(Rc::strong_count(&cloud), 3);
    }

    #[test]
    fn test_world_rotation_preserves_radius() {
        let cloud = small_cloud();
        let mut rotation = RotationState::default();
        rotation.advance(12.5);
        let scene = particle_field_scene(Rc::clone(&cloud), rotation);
        scene.visit_points(&mut |view| {
            for p in view.cloud.iter() {
                let moved = view.world * *p;
                assert!((moved.length() - p.length()).abs() < 1e-5);
            }
        });
    }
}
