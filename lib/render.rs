//! Path tracing core: recursive diffuse color accumulation, per-pixel sampling and the parallel scanline loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color::{to_rgb8, Image};
use crate::error::{Result, TracerError};
use crate::ray::Ray;
use crate::surface::Surface;
use crate::util::{random_unit_vector, unit_vector, Color};

/// Lower bound on hit distance so bounced rays do not re-hit the surface they left.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;
/// Fraction of light kept per diffuse bounce.
pub const DIFFUSE_ATTENUATION: f64 = 0.5;

const SKY_BOTTOM: Color = Color::new(1.0, 1.0, 1.0);
const SKY_TOP: Color = Color::new(0.5, 0.7, 1.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub image_width: usize,
    pub image_height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// `None` picks a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl RenderSettings {
    pub fn from_aspect_ratio(image_width: usize, aspect_ratio: f64) -> RenderSettings {
        RenderSettings {
            image_width,
            image_height: (image_width as f64 / aspect_ratio) as usize,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        // u and v are divided by (n - 1)
        if self.image_width < 2 || self.image_height < 2 {
            return Err(TracerError::InvalidSettings(format!(
                "image must be at least 2x2, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(TracerError::InvalidSettings("samples per pixel must be at least 1".to_string()));
        }

        return Ok(());
    }
}

/// Sky gradient for rays that escape the scene: white looking down, light blue looking up.
pub fn background(ray: &Ray) -> Color {
    let ray_dir_normalized = unit_vector(ray.direction);

    let t = 0.5 * (ray_dir_normalized.y + 1.0);

    return (1.0 - t) * SKY_BOTTOM + t * SKY_TOP;
}

pub fn ray_color<R: Rng + ?Sized>(ray: &Ray, world: &dyn Surface, depth: u32, rng: &mut R) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    return if let Some(intersection) = world.raycast(ray, SHADOW_ACNE_EPSILON, f64::INFINITY) {
        let target = intersection.p + intersection.normal + random_unit_vector(rng);
        let scattered = Ray::new(intersection.p, target - intersection.p);

        DIFFUSE_ATTENUATION * ray_color(&scattered, world, depth - 1, rng)
    } else {
        background(ray)
    };
}

/// Sums `samples_per_pixel` jittered traces through pixel `(x, y)`, with `y = 0` the bottom row.
pub fn sample_pixel<R: Rng + ?Sized>(
    world: &dyn Surface,
    camera: &Camera,
    settings: &RenderSettings,
    x: usize,
    y: usize,
    rng: &mut R,
) -> Color {
    let mut c = Color::ZERO;

    for _ in 0..settings.samples_per_pixel {
        let rand_u: f64 = rng.gen();
        let rand_v: f64 = rng.gen();

        let u = (x as f64 + rand_u) / (settings.image_width - 1) as f64;
        let v = (y as f64 + rand_v) / (settings.image_height - 1) as f64;
        let ray = camera.create_ray(u, v);

        c += ray_color(&ray, world, settings.max_depth, rng);
    }

    return c;
}

/// Renders every pixel, scanlines in parallel.
///
/// Each scanline draws from its own ChaCha stream keyed by the seed and the scanline index,
/// so a fixed seed gives identical output for any thread count. `cancel` is polled before
/// each scanline starts.
pub fn render(
    world: &dyn Surface,
    camera: &Camera,
    settings: &RenderSettings,
    progress: &ProgressBar,
    cancel: Option<&AtomicBool>,
) -> Result<Image> {
    settings.validate()?;

    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let width = settings.image_width;
    let height = settings.image_height;

    info!(
        "rendering {}x{} at {} samples per pixel, depth {}, on {} threads",
        width,
        height,
        settings.samples_per_pixel,
        settings.max_depth,
        rayon::current_num_threads()
    );
    debug!("render seed {}", seed);

    progress.set_length(height as u64);
    let start = Instant::now();

    let rows = (0..height)
        .into_par_iter()
        .map(|row| {
            if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
                return Err(TracerError::Cancelled);
            }

            // output runs top-down, v runs bottom-up
            let y = height - 1 - row;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(y as u64);

            let scanline: Vec<[u8; 3]> = (0..width)
                .map(|x| to_rgb8(sample_pixel(world, camera, settings, x, y, &mut rng), settings.samples_per_pixel))
                .collect();

            progress.inc(1);
            Ok(scanline)
        })
        .collect::<Result<Vec<_>>>();

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            progress.abandon();
            info!("render stopped after {:.2?}: {}", start.elapsed(), e);
            return Err(e);
        }
    };

    progress.finish();
    info!("rendered in {:.2?}", start.elapsed());

    return Ok(Image::new(width, height, rows.into_iter().flatten().collect()));
}
