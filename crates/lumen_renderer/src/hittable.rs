//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Sphere};
use lumen_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Returned by value from every hit query, so concurrent traces never share
/// scratch state.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal; for spheres it follows the sign of the radius
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// One entry of a scene: a primitive or a nested aggregate.
pub enum Object {
    Sphere(Sphere),
    List(HittableList),
}

impl Hittable for Object {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t),
            Object::List(list) => list.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<HittableList> for Object {
    fn from(list: HittableList) -> Self {
        Object::List(list)
    }
}

/// A list of hittable objects, searched linearly for the closest hit.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Object>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T: Into<Object>> FromIterator<T> for HittableList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut window = ray_t;

        // Each accepted hit narrows the window, so later objects can only
        // replace it with something strictly closer
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, window) {
                window = window.with_max(rec.t);
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Lambertian};
    use std::sync::Arc;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        let material = Arc::new(Material::from(Lambertian::new(Color::splat(0.5))));
        Sphere::new(center, radius, material).unwrap()
    }

    const WINDOW: Interval = Interval::new(0.001, 1.0e6);

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(list.is_empty());
        assert!(list.hit(&ray, WINDOW).is_none());
    }

    #[test]
    fn test_closest_hit_is_order_independent() {
        let centers = [
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(0.0, 0.0, -9.0),
        ];
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        // Every permutation of three members
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let list: HittableList = order.iter().map(|&i| sphere(centers[i], 0.5)).collect();
            let rec = list.hit(&ray, WINDOW).unwrap();

            assert!((rec.t - 1.5).abs() < 1e-5, "order {:?} gave t = {}", order, rec.t);
            assert!((rec.normal - Vec3::Z).length() < 1e-5);
        }
    }

    #[test]
    fn test_window_upper_bound_excludes_far_hits() {
        let list: HittableList = [sphere(Vec3::new(0.0, 0.0, -5.0), 0.5)].into_iter().collect();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        assert!(list.hit(&ray, Interval::new(0.001, 4.0)).is_none());
        assert!(list.hit(&ray, Interval::new(0.001, 4.6)).is_some());
    }

    #[test]
    fn test_nested_lists() {
        let mut inner = HittableList::new();
        inner.add(sphere(Vec3::new(0.0, 0.0, -3.0), 0.5));

        let mut outer = HittableList::new();
        outer.add(sphere(Vec3::new(0.0, 0.0, -8.0), 0.5));
        outer.add(inner);
        assert_eq!(outer.len(), 2);

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let rec = outer.hit(&ray, WINDOW).unwrap();
        assert!((rec.t - 2.5).abs() < 1e-5);

        outer.clear();
        assert!(outer.hit(&ray, WINDOW).is_none());
    }
}
