use log::trace;
use rayon::prelude::*;

use crate::{
    camera::Camera,
    canvas::{to_byte, Canvas, CHANNELS},
    config::RenderConfig,
    error::CanvasError,
    ray::Ray,
    shader::{sample, shade},
    world::World,
};

/// Sample returned for rays that hit nothing.
pub const BACKGROUND: f64 = 0.0;

/// Closest hit along `ray`, shaded; [`BACKGROUND`] on a miss.
pub fn trace_ray(world: &World, ray: &Ray<f64>) -> f64 {
    world
        .closest_hit(ray)
        .hit()
        .map(|i| {
            let intensity = shade(&i, world, &ray.origin());
            sample(&i, intensity)
        })
        .unwrap_or(BACKGROUND)
}

pub struct Renderer<'a> {
    world: &'a World,
    camera: Camera,
    width: u32,
    height: u32,
    t_min: f64,
    t_max: f64,
}

impl<'a> Renderer<'a> {
    pub fn new(world: &'a World, config: &RenderConfig) -> Self {
        Self {
            world,
            camera: Camera::new(config),
            width: config.width,
            height: config.height,
            t_min: config.t_min,
            t_max: config.t_max,
        }
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> f64 {
        let ray = self.camera.ray(x, y, self.t_min, self.t_max);
        trace_ray(self.world, &ray)
    }

    /// Casts one ray per pixel, row by row from the top.
    pub fn render(&self) -> Result<Canvas, CanvasError> {
        let mut canvas = Canvas::new(self.width, self.height)?;

        for y in 0..self.height {
            for x in 0..self.width {
                canvas.put_pixel(x, y, self.sample(x, y));
            }
            trace!("Row {}/{} done", y + 1, self.height);
        }

        Ok(canvas)
    }

    /// Same image as [`Renderer::render`], with pixels spread over the rayon
    /// thread pool. Each task owns one pixel's bytes, so no locking is needed.
    pub fn render_par(&self) -> Result<Canvas, CanvasError> {
        let mut canvas = Canvas::new(self.width, self.height)?;
        let width = self.width as usize;

        canvas
            .pixels_mut()
            .par_chunks_mut(CHANNELS)
            .enumerate()
            .for_each(|(n, c)| {
                let x = (n % width) as u32;
                let y = (n / width) as u32;

                let value = to_byte(self.sample(x, y));
                c[0] = value;
                c[1] = value;
                c[2] = value;
            });

        Ok(canvas)
    }
}
