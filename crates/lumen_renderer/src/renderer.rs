//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard depth limit
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization

use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable, Scatter, SceneError, SceneResult};
use lumen_math::{Interval, Ray};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Far end of every hit query.
pub const MAX_DISTANCE: f32 = 1.0e6;

/// Near end of every hit query. Non-zero so a scattered ray does not
/// re-hit the surface it just left through floating-point error.
pub const HIT_EPSILON: f32 = 0.001;

const HIT_RANGE: Interval = Interval::new(HIT_EPSILON, MAX_DISTANCE);

/// Channel range before quantizing to 8 bits.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Master seed; the whole render is a function of it
    pub seed: u64,
    /// Tile edge length for the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 200,
            image_height: 100,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> SceneResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(SceneError::InvalidConfig(format!(
                "resolution {}x{} has no pixels",
                self.image_width, self.image_height
            )));
        }
        // RGB bytes must stay addressable with u32 image coordinates
        if self.image_width.checked_mul(self.image_height).and_then(|n| n.checked_mul(3)).is_none() {
            return Err(SceneError::InvalidConfig(format!(
                "resolution {}x{} is too large",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(SceneError::InvalidConfig("samples_per_pixel must be at least 1".into()));
        }
        if self.bucket_size == 0 {
            return Err(SceneError::InvalidConfig("bucket_size must be at least 1".into()));
        }
        Ok(())
    }
}

/// Compute the radiance carried back along a ray.
///
/// `depth` counts bounces taken so far; the path is cut off (black) once it
/// reaches `config.max_depth`, or when a material absorbs the ray.
pub fn radiance(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // A zero direction cannot hit anything meaningfully
    if ray.is_degenerate() {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, HIT_RANGE) else {
        return sky_gradient(ray);
    };

    if depth < config.max_depth {
        if let Some(result) = rec.material.scatter(ray, &rec, rng) {
            return result.attenuation * radiance(&result.scattered, world, depth + 1, config, rng);
        }
    }

    Color::ZERO
}

/// Background: white at the horizon blending to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    // Ray directions are already unit length
    let t = 0.5 * (ray.direction().y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - t) + blue * t
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(x, y)` are sample-space coordinates: `y = 0` is the bottom row.
/// Returns the averaged linear color.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width as f32;
    let height = config.image_height as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let a = (x as f32 + gen_f32(rng)) / width;
        let b = (y as f32 + gen_f32(rng)) / height;
        let ray = camera.get_ray(a, b, rng);
        pixel_color += radiance(&ray, world, 0, config, rng);
    }

    pixel_color / config.samples_per_pixel.max(1) as f32
}

/// Image buffer holding averaged linear colors, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), y = 0 at the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y = 0 at the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Set the pixel for sample-space row `y` (y = 0 at the bottom).
    pub fn set_sample(&mut self, x: u32, y: u32, color: Color) {
        let row = self.height - 1 - y;
        self.set(x, row, color);
    }

    /// Gamma-corrected 8-bit RGB bytes, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Convert for the `image` crate's encoders.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(x, y)))
        })
    }
}

/// Render the entire scene single-threaded, seeding from `config.seed`.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> SceneResult<ImageBuffer> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    render_with_rng(camera, world, config, &mut rng)
}

/// Render the entire scene single-threaded, drawing from `rng`.
///
/// Pixels are visited row by row from the bottom of sample space.
pub fn render_with_rng(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> SceneResult<ImageBuffer> {
    config.validate()?;
    log::info!(
        "Rendering {}x{} @ {} spp (max depth {})",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    for y in 0..config.image_height {
        for x in 0..config.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set_sample(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
