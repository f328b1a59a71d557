//! Materials describe how a surface scatters an incoming ray.
//!
//! The set of materials is closed, so [`Material`] is an enum over the three
//! concrete models and dispatches with a `match` instead of a vtable.

use crate::error::{SceneError, SceneResult};
use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_in_unit_sphere};
use lumen_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Outcome of a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Fraction of light carried along the scattered ray
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Anything that can scatter light at a hit point.
pub trait Scatter {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult>;
}

/// Surface material, shared by reference between any number of primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Specular(Specular),
    Dielectric(Dielectric),
}

impl Scatter for Material {
    #[inline]
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Specular(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Specular> for Material {
    fn from(m: Specular) -> Self {
        Material::Specular(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Scatter for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let target = rec.point + rec.normal + random_in_unit_sphere(rng);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.point, target - rec.point),
        })
    }
}

/// Specular (metal) material with optional fuzzy reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct Specular {
    albedo: Color,
    fuzz: f32,
}

impl Specular {
    /// Create a new Specular material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough.
    ///   Values outside [0, 1] are clamped and NaN becomes 1.0.
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        let clamped = if fuzz.is_nan() { 1.0 } else { fuzz.clamp(0.0, 1.0) };
        if clamped != fuzz {
            log::warn!("Specular fuzz {} outside [0, 1], using {}", fuzz, clamped);
        }
        Self {
            albedo,
            fuzz: clamped,
        }
    }

    /// A perfect mirror.
    pub fn mirror(albedo: Color) -> Self {
        Self::new(albedo, 0.0)
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Scatter for Specular {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize_or_zero(), rec.normal);
        let scattered = Ray::new(rec.point, reflected + self.fuzz * random_in_unit_sphere(rng));

        // Fuzz can push the reflection below the surface; that ray is absorbed
        if scattered.direction().dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered,
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    refractive_index: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond.
    ///   Must be finite and strictly positive.
    pub fn new(refractive_index: f32) -> SceneResult<Self> {
        if !(refractive_index.is_finite() && refractive_index > 0.0) {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        Ok(Self { refractive_index })
    }

    pub fn refractive_index(&self) -> f32 {
        self.refractive_index
    }
}

impl Scatter for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        let direction = ray_in.direction();
        let reflected = reflect(direction, rec.normal);
        let d_dot_n = direction.dot(rec.normal);

        // Ray directions are unit length, so no division by |d| here
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            // Leaving the medium
            (-rec.normal, self.refractive_index, self.refractive_index * d_dot_n)
        } else {
            (rec.normal, 1.0 / self.refractive_index, -d_dot_n)
        };

        // Total internal reflection always reflects
        let (reflect_prob, refracted) = match refract(direction, outward_normal, ni_over_nt) {
            Some(refracted) => (schlick(cosine, self.refractive_index), refracted),
            None => (1.0, reflected),
        };

        let out = if gen_f32(rng) < reflect_prob { reflected } else { refracted };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.point, out),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect `v` about the unit normal `n`. `v` need not be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

/// Refract `v` through a surface with unit normal `n` using Snell's law.
///
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize_or_zero();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some((uv - n * dt) * ni_over_nt - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for the Fresnel reflectance.
#[inline]
pub fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
