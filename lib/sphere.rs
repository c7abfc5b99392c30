use crate::error::{Result, TracerError};
use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};
use crate::util::Point3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Result<Sphere> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TracerError::InvalidRadius(radius));
        }

        return Ok(Sphere { center, radius });
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let mut root = (-half_b - discriminant_sqrt) / a;

        if root < t_min || t_max < root {
            root = (-half_b + discriminant_sqrt) / a;
            if root < t_min || t_max < root {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;

        return Some(SurfaceIntersection::new(r, root, outward_normal));
    }
}
