use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized when the ray is built and the fields are
/// private, so a `Ray` can never carry a non-unit direction. The one
/// exception is the zero vector, which is kept as-is: such a ray is
/// *degenerate* and consumers are expected to check [`Ray::is_degenerate`]
/// instead of dividing by its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the (unit or zero) direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Replace the direction, re-normalizing it.
    #[inline]
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }

    /// True when the direction collapsed to zero on construction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + direction * t, for any t (including negative).
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));

        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        assert!((ray.direction() - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);

        assert!(ray.is_degenerate());
        assert_eq!(ray.direction(), Vec3::ZERO);
        assert_eq!(ray.at(10.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_set_direction_renormalizes() {
        let mut ray = Ray::new(Vec3::ZERO, Vec3::X);
        ray.set_direction(Vec3::new(0.0, 0.0, -5.0));

        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));
        assert!(!ray.is_degenerate());
    }
}
