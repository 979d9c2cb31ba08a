//! Uniform-in-ball point sampling.

use glam::Vec3;
use rand::Rng;

use crate::config::{PARTICLE_COUNT, PARTICLE_RADIUS};

/// Draw `count` points uniformly distributed inside a ball of `radius`
/// centred on the origin.
///
/// Rejection sampling: candidates come from the enclosing cube and are kept
/// only when they fall inside the ball. About 52% of candidates survive,
/// so the expected cost is under two draws per point.
pub fn sample_in_sphere<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Vec<Vec3> {
    if !(radius.is_finite() && radius > 0.0) {
        return vec![Vec3::ZERO; count];
    }

    let limit = radius * radius;
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let candidate = Vec3::new(
            rng.gen_range(-radius..=radius),
            rng.gen_range(-radius..=radius),
            rng.gen_range(-radius..=radius),
        );
        if candidate.length_squared() <= limit {
            points.push(candidate);
        }
    }
    points
}

/// Fixed-size cloud of particle positions.
///
/// Built once per mounted particle field and never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
    radius: f32,
}

impl PointCloud {
    /// The hero's cloud: [`PARTICLE_COUNT`] points within [`PARTICLE_RADIUS`].
    pub fn generate() -> Self {
        Self::from_rng(&mut rand::thread_rng(), PARTICLE_COUNT, PARTICLE_RADIUS)
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Self {
        Self {
            points: sample_in_sphere(rng, count, radius),
            radius,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampling radius the cloud was built with.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hero_cloud_size_and_bounds() {
        let cloud = PointCloud::generate();
        assert_eq!(cloud.len(), 5000);
        assert_eq!(cloud.radius(), 1.5);
        assert!(cloud.iter().all(|p| p.length() <= 1.5 + 1e-6));
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let a = PointCloud::from_rng(&mut StdRng::seed_from_u64(7), 100, 1.5);
        let b = PointCloud::from_rng(&mut StdRng::seed_from_u64(7), 100, 1.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sampling_is_uniform_in_volume() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = sample_in_sphere(&mut rng, 20_000, 1.5);

        // A ball of half the radius holds 1/8 of the volume.
        let inner = points.iter().filter(|p| p.length() <= 0.75).count();
        let fraction = inner as f64 / points.len() as f64;
        assert!((fraction - 0.125).abs() < 0.02, "inner fraction {}", fraction);

        let mean = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p) / points.len() as f32;
        assert!(mean.length() < 0.05, "mean {:?}", mean);
    }

    #[test]
    fn test_points_fill_the_ball() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample_in_sphere(&mut rng, 5000, 1.5);
        let max = points.iter().map(|p| p.length()).fold(0.0_f32, f32::max);
        assert!(max > 1.4, "no samples near the surface, max {}", max);
    }

    #[test]
    fn test_degenerate_radius_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = sample_in_sphere(&mut rng, 10, 0.0);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| *p == Vec3::ZERO));

        let points = sample_in_sphere(&mut rng, 3, f32::NAN);
        assert_eq!(points.len(), 3);
    }
}
