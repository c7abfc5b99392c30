use glam::*;
use log::debug;

use crate::error::{Result, TracerError};
use crate::ray::Ray;
use crate::util::Point3;

pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 2.0;
pub const DEFAULT_FOCAL_LENGTH: f64 = 1.0;

/// Fixed pinhole camera looking down `-z`, viewport spanning `u, v` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    llc: Point3,
    horizontal: DVec3,
    vertical: DVec3,
}

impl Camera {
    pub fn new(origin: Point3, aspect_ratio: f64, viewport_height: f64, focal_length: f64) -> Result<Camera> {
        for (name, value) in [
            ("aspect ratio", aspect_ratio),
            ("viewport height", viewport_height),
            ("focal length", focal_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TracerError::InvalidCamera(format!("{} must be finite and positive, got {}", name, value)));
            }
        }

        let viewport_w = aspect_ratio * viewport_height;

        let h = DVec3::new(viewport_w, 0.0, 0.0);
        let v = DVec3::new(0.0, viewport_height, 0.0);

        let llc = origin - (h * 0.5) - (v * 0.5) - DVec3::new(0.0, 0.0, focal_length);

        debug!("camera at {} with {}x{} viewport, focal length {}", origin, viewport_w, viewport_height, focal_length);

        return Ok(Camera { origin, llc, horizontal: h, vertical: v });
    }

    pub fn create_ray(&self, u: f64, v: f64) -> Ray {
        return Ray::new(self.origin, self.llc + u * self.horizontal + v * self.vertical - self.origin);
    }
}

impl Default for Camera {
    fn default() -> Camera {
        let viewport_w = DEFAULT_ASPECT_RATIO * DEFAULT_VIEWPORT_HEIGHT;
        let horizontal = DVec3::new(viewport_w, 0.0, 0.0);
        let vertical = DVec3::new(0.0, DEFAULT_VIEWPORT_HEIGHT, 0.0);

        Camera {
            origin: DVec3::ZERO,
            llc: -(horizontal * 0.5) - (vertical * 0.5) - DVec3::new(0.0, 0.0, DEFAULT_FOCAL_LENGTH),
            horizontal,
            vertical,
        }
    }
}
