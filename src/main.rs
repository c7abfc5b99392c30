use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use sphere_tracer::camera::{DEFAULT_FOCAL_LENGTH, DEFAULT_VIEWPORT_HEIGHT};
use sphere_tracer::util::Point3;
use sphere_tracer::{default_scene, render, write_ppm, Camera, RenderSettings};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.into());

    let mut settings = RenderSettings::from_aspect_ratio(args.width, args.aspect_ratio);
    if let Some(height) = args.height {
        settings.image_height = height;
    }
    settings.samples_per_pixel = args.samples;
    settings.max_depth = args.max_depth;
    settings.seed = args.seed;

    let world = default_scene()?;
    let camera = Camera::new(Point3::ZERO, args.aspect_ratio, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_FOCAL_LENGTH)?;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(settings.image_height as u64);
        pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} scanlines ETA: {eta}")?);
        pb
    };

    let image = render(&world, &camera, &settings, &progress, None)?;

    let file = File::create(&args.output).with_context(|| format!("creating {}", args.output.display()))?;
    let mut w = BufWriter::new(file);
    write_ppm(&mut w, &image).with_context(|| format!("writing {}", args.output.display()))?;

    info!("wrote {}", args.output.display());

    Ok(())
}
