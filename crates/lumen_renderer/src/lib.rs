//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over spheres with diffuse, metal and glass
//! materials. For every pixel it averages many jittered camera rays, each
//! traced recursively through the scene until it escapes to the sky, is
//! absorbed, or hits the bounce limit.
//!
//! # Example
//!
//! ```ignore
//! use lumen_renderer::*;
//! use std::sync::Arc;
//!
//! let mut world = HittableList::new();
//! let gray = Arc::new(Material::from(Lambertian::new(Color::splat(0.5))));
//! world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, gray)?);
//!
//! let config = RenderConfig::default();
//! let camera = CameraSettings::default().build()?;
//! let image = render_parallel(&camera, &world, &config)?;
//! image.to_rgb_image().save("out.png")?;
//! ```

mod bucket;
mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod sampling;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraSettings};
pub use error::{SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable, HittableList, Object};
pub use material::{reflect, refract, schlick, Color, Dielectric, Lambertian, Material, Scatter, ScatterResult, Specular};
pub use renderer::{
    color_to_rgb, linear_to_gamma, radiance, render, render_pixel, render_with_rng, sky_gradient, ImageBuffer,
    RenderConfig, HIT_EPSILON, MAX_DISTANCE,
};
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
