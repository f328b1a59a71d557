//! Sphere primitive for ray tracing.

use crate::error::{SceneError, SceneResult};
use crate::hittable::{HitRecord, Hittable};
use crate::Material;
use lumen_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// The radius is signed: a negative radius flips the normal to point
/// inward, which is how hollow shells (e.g. a glass bubble) are modelled.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Zero and non-finite radii are rejected.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> SceneResult<Self> {
        if !radius.is_finite() {
            return Err(SceneError::NonFiniteRadius(radius));
        }
        if radius == 0.0 {
            return Err(SceneError::ZeroRadius);
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        if a == 0.0 {
            // Degenerate ray
            return None;
        }
        let b = oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first, then the far one
        let mut root = (-b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};

    fn gray() -> Arc<Material> {
        Arc::new(Lambertian::new(Color::splat(0.5)).into())
    }

    const WINDOW: Interval = Interval::new(0.001, f32::INFINITY);

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, WINDOW).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.point - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-6);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_sphere_hit_matches_closed_form() {
        // Off-axis ray through a sphere at (1, 2, -6), radius 2
        let center = Vec3::new(1.0, 2.0, -6.0);
        let sphere = Sphere::new(center, 2.0, gray()).unwrap();
        let origin = Vec3::new(0.5, 1.0, 0.0);
        let ray = Ray::new(origin, center + Vec3::new(0.3, 0.4, 0.0) - origin);

        let d = ray.direction();
        let oc = origin - center;
        let b = oc.dot(d);
        let expected = -b - (b * b - (oc.dot(oc) - 4.0)).sqrt();

        let rec = sphere.hit(&ray, WINDOW).unwrap();
        assert!((rec.t - expected).abs() < 1e-4);
        assert!((rec.normal.length() - 1.0).abs() < 1e-5);
        // Outward for a positive radius
        assert!(rec.normal.dot(rec.point - center) > 0.0);
    }

    #[test]
    fn test_negative_radius_flips_normal() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), -0.5, gray()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, WINDOW).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-6);
        assert!((rec.normal + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_inside_hit_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, gray()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, WINDOW).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_root_on_window_boundary_is_excluded() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Near root is exactly t_max: falls through to the far root, also outside
        assert!(sphere.hit(&ray, Interval::new(0.001, 0.5)).is_none());
        // Near root is exactly t_min: the far root at 1.5 is taken
        let rec = sphere.hit(&ray, Interval::new(0.5, 10.0)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray()).unwrap();

        let away = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&away, WINDOW).is_none());

        // Tangent ray: zero discriminant counts as a miss
        let tangent = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&tangent, WINDOW).is_none());

        let degenerate = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.hit(&degenerate, WINDOW).is_none());
    }

    #[test]
    fn test_invalid_radius_rejected() {
        assert_eq!(Sphere::new(Vec3::ZERO, 0.0, gray()).unwrap_err(), SceneError::ZeroRadius);
        assert!(matches!(
            Sphere::new(Vec3::ZERO, f32::NAN, gray()),
            Err(SceneError::NonFiniteRadius(_))
        ));
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY, gray()).is_err());
    }
}
