use std::path::PathBuf;

use crate::vec3::Vec3;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;
pub const DEFAULT_OUTPUT: &str = "out.bmp";

/// Size of the rectangle rays are projected through, in camera units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Everything a render pass needs besides the world itself.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub viewport: Viewport,
    pub focal_length: f64,
    pub origin: Vec3<f64>,
    pub t_min: f64,
    pub t_max: f64,
    pub output: PathBuf,
}

impl RenderConfig {
    /// A viewport two units tall whose width follows the image aspect ratio.
    pub fn with_resolution(width: u32, height: u32) -> Self {
        let mut config = Self {
            width,
            height,
            viewport: Viewport {
                width: 0.0,
                height: 2.0,
            },
            focal_length: 1.0,
            origin: Vec3::default(),
            t_min: 1.0,
            t_max: f64::INFINITY,
            output: PathBuf::from(DEFAULT_OUTPUT),
        };
        config.viewport.width = config.aspect_ratio() * config.viewport.height;

        config
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::with_resolution(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[test]
fn default_matches_hd() {
    let config = RenderConfig::default();

    assert_eq!((1280, 720), (config.width, config.height));
    assert_eq!(2.0, config.viewport.height);
    assert_eq!(config.aspect_ratio() * 2.0, config.viewport.width);
    assert_eq!(1.0, config.t_min);
    assert_eq!(PathBuf::from("out.bmp"), config.output);
}
