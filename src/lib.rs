//! Ray caster for a fixed scene of spheres and planes under point lights.
//!
//! One ray per pixel, closest hit, Phong-style local lighting, no bounces and
//! no shadows. The output is a greyscale BMP.

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shader;
pub mod vec3;
pub mod world;

pub use crate::intersection::Intersection;
