use log::debug;

use crate::error::Result;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::surface::{Surface, SurfaceIntersection};
use crate::util::Vec3;

/// Ordered scene aggregate; a raycast returns the nearest hit over all members.
pub struct World {
    pub surfaces: Vec<Box<dyn Surface>>,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new() }
    }

    pub fn with_surfaces(surfaces: Vec<Box<dyn Surface>>) -> World {
        World { surfaces }
    }

    pub fn push<S: Surface + 'static>(&mut self, surface: S) {
        self.surfaces.push(Box::new(surface));
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn clear(&mut self) {
        self.surfaces.clear();
    }
}

impl Default for World {
    fn default() -> World {
        World::new()
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, t_min: f64, t_max: f64) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        // a later member only wins when strictly closer, since it is tested against the current best t
        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}

/// A small sphere resting on a large ground sphere.
pub fn default_scene() -> Result<World> {
    let mut world = World::new();

    world.push(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)?);
    world.push(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0)?);

    debug!("built default scene with {} spheres", world.len());

    return Ok(world);
}
