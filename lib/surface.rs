use crate::ray::Ray;
use crate::util::{Point3, Vec3};

pub trait Surface: Send + Sync {
    /// Nearest intersection with `t_min <= t <= t_max`, or `None` on a miss.
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceIntersection {
    pub p: Point3,
    /// Always points against the incoming ray.
    pub normal: Vec3,
    /// True when the ray arrived from the side the outward normal points to.
    pub facing: bool,
    pub t: f64,
}

impl SurfaceIntersection {
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3) -> SurfaceIntersection {
        let facing = r.direction.dot(outward_normal) < 0.0;
        let normal = if facing { outward_normal } else { -outward_normal };

        return SurfaceIntersection { p: r.at(t), normal, facing, t };
    }
}
