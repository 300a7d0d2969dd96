use crate::{config::RenderConfig, ray::Ray, vec3::Vec3};

/// Pinhole camera looking down `-z`.
///
/// Pixel `(0, 0)` is the top-left corner of the image and maps onto the
/// top-left corner of the viewport; rows grow downwards while the viewport's
/// vertical axis grows upwards.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    origin: Vec3<f64>,
    lower_left: Vec3<f64>,
    horizontal: Vec3<f64>,
    vertical: Vec3<f64>,
    last_column: f64,
    last_row: f64,
}

impl Camera {
    pub fn new(config: &RenderConfig) -> Self {
        let viewport = config.viewport;
        let lower_left = config.origin
            + Vec3::new(-viewport.width / 2.0, -viewport.height / 2.0, -config.focal_length);

        Self {
            origin: config.origin,
            lower_left,
            horizontal: Vec3::new(viewport.width, 0.0, 0.0),
            vertical: Vec3::new(0.0, viewport.height, 0.0),
            // A single-pixel axis maps onto the viewport's first edge.
            last_column: config.width.saturating_sub(1).max(1) as f64,
            last_row: config.height.saturating_sub(1).max(1) as f64,
        }
    }

    /// Point on the viewport plane that pixel `(x, y)` looks through.
    pub fn project(&self, x: u32, y: u32) -> Vec3<f64> {
        let u = x as f64 / self.last_column;
        let v = 1.0 - y as f64 / self.last_row;

        self.lower_left + self.horizontal.scale(u) + self.vertical.scale(v)
    }

    /// Ray from the camera through pixel `(x, y)`, with a unit direction.
    pub fn ray(&self, x: u32, y: u32, t_min: f64, t_max: f64) -> Ray<f64> {
        Ray::toward(self.origin, self.project(x, y), t_min, t_max)
    }
}
