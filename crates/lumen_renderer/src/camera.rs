//! Camera for ray generation.

use crate::error::{SceneError, SceneResult};
use crate::sampling::random_in_unit_disk;
use lumen_math::{Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// User-facing camera parameters. Build a [`Camera`] from them with
/// [`CameraSettings::build`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    // Camera positioning
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,

    // Lens settings
    pub vfov: f32,       // Vertical field of view in degrees
    pub aspect_ratio: f32,
    pub aperture: f32,   // Lens diameter, 0 = pinhole
    pub focus_dist: f32, // Distance from camera to plane of perfect focus
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(-2.0, 2.0, 1.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 2.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the image aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Validate the settings and compute the camera.
    pub fn build(&self) -> SceneResult<Camera> {
        Camera::new(self)
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built; `get_ray` only reads it, so one camera can be
/// shared by every render worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Compute the viewport and lens from `settings`.
    pub fn new(settings: &CameraSettings) -> SceneResult<Self> {
        if !(settings.vfov > 0.0 && settings.vfov < 180.0) {
            return Err(SceneError::DegenerateCamera("vertical FOV must be in (0, 180) degrees"));
        }
        if !(settings.aspect_ratio.is_finite() && settings.aspect_ratio > 0.0) {
            return Err(SceneError::DegenerateCamera("aspect ratio must be positive"));
        }
        if !(settings.focus_dist.is_finite() && settings.focus_dist > 0.0) {
            return Err(SceneError::DegenerateCamera("focus distance must be positive"));
        }
        if !(settings.aperture.is_finite() && settings.aperture >= 0.0) {
            return Err(SceneError::DegenerateCamera("aperture must be non-negative"));
        }

        let view = settings.look_from - settings.look_at;
        if view.length_squared() == 0.0 {
            return Err(SceneError::DegenerateCamera("look_from and look_at coincide"));
        }
        let side = settings.vup.cross(view);
        if side.length_squared() <= f32::EPSILON * view.length_squared() {
            return Err(SceneError::DegenerateCamera("up vector is parallel to the view direction"));
        }

        let theta = settings.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = settings.aspect_ratio * half_height;

        // Orthonormal camera basis
        let w = view.normalize();
        let u = side.normalize();
        let v = w.cross(u);

        // Viewport lives on the focus plane
        let fd = settings.focus_dist;
        let eye = settings.look_from;
        let lower_left = eye - u * (half_width * fd) - v * (half_height * fd) - w * fd;

        Ok(Self {
            eye,
            lower_left,
            horizontal: u * (2.0 * half_width * fd),
            vertical: v * (2.0 * half_height * fd),
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        })
    }

    /// A pinhole camera: no lens, viewport one unit in front of the eye.
    pub fn pinhole(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect_ratio: f32) -> SceneResult<Self> {
        CameraSettings::default()
            .with_position(look_from, look_at, vup)
            .with_lens(vfov, 0.0, 1.0)
            .with_aspect_ratio(aspect_ratio)
            .build()
    }

    /// Generate a ray through normalized viewport coordinates `(a, b)`,
    /// with (0, 0) at the lower-left corner.
    ///
    /// With a zero aperture no lens sample is drawn, so `rng` is untouched.
    pub fn get_ray(&self, a: f32, b: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.eye + offset,
            self.lower_left + self.horizontal * a + self.vertical * b - self.eye - offset,
        )
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }

    /// The camera basis `(u, v, w)`; `w` points backwards, away from the view.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}
