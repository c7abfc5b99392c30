//! Monte-Carlo diffuse ray tracer for scenes of spheres.

pub mod camera;
pub mod color;
pub mod error;
pub mod ray;
pub mod render;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;

pub use camera::Camera;
pub use color::{write_ppm, Image};
pub use error::{Result, TracerError};
pub use render::{render, RenderSettings};
pub use sphere::Sphere;
pub use world::{default_scene, World};
