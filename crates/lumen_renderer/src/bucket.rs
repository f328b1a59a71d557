//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each bucket owns its pixels and its own
//! random generator, so no state is shared between workers and the result
//! does not depend on scheduling.

use crate::renderer::render_pixel;
use crate::{Camera, Color, Hittable, ImageBuffer, RenderConfig, SceneResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image to render, in sample space
/// (`y = 0` is the bottom row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's corner
    pub x: u32,
    /// Y coordinate of bucket's corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Generator for this bucket, derived from the master seed.
    pub fn rng(&self, seed: u64) -> StdRng {
        // Spread indices so neighbouring seeds do not share streams
        let stream = (self.index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(seed ^ stream)
    }
}

/// Generate buckets for an image, sorted in spiral order from center.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    // Generate grid of buckets
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center. The sort is stable, so the
/// order (and with it every bucket's seed) is fixed for a given image size.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_center_x = a.x as f32 + a.width as f32 / 2.0;
        let a_center_y = a.y as f32 + a.height as f32 / 2.0;
        let b_center_x = b.x as f32 + b.width as f32 / 2.0;
        let b_center_y = b.y as f32 + b.height as f32 / 2.0;

        let a_dist = (a_center_x - center_x).powi(2) + (a_center_y - center_y).powi(2);
        let b_dist = (b_center_x - center_x).powi(2) + (b_center_y - center_y).powi(2);

        a_dist.partial_cmp(&b_dist).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket, bottom row first.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> Vec<Color> {
    let mut rng = bucket.rng(config.seed);
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(camera, world, bucket.x + local_x, bucket.y + local_y, config, &mut rng);
            pixels.push(color);
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their (flipped) rows of `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let bucket = &self.bucket;
        for (i, color) in self.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            image.set_sample(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }
}

/// Render the entire scene on the rayon thread pool, one task per bucket.
pub fn render_parallel(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> SceneResult<ImageBuffer> {
    config.validate()?;
    let buckets = generate_buckets(config.image_width, config.image_height, config.bucket_size);
    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets on {} threads",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, world, config);
            log::debug!("Bucket {} done ({} px)", bucket.index, bucket.pixel_count());
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.image_width, config.image_height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
