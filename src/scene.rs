//! Scene construction.
//!
//! The scene rendered by the binary is compiled into it from
//! `scenes/default.json`; nothing is read from disk at runtime.

use crate::{
    error::SceneError,
    geometry::{Plane, Sphere},
    light::{AmbientLight, PointLight},
    world::World,
};

const DEFAULT_SCENE: &str = include_str!("../scenes/default.json");

#[derive(Debug, Deserialize)]
struct SceneDocument {
    #[serde(default)]
    spheres: Vec<Sphere>,
    #[serde(default)]
    planes: Vec<Plane>,
    #[serde(default)]
    ambient: AmbientLight,
    #[serde(default)]
    lights: Vec<PointLight>,
}

/// Parses a scene document and validates it into a [`World`].
///
/// Primitives and lights keep the order they are listed in, which decides
/// which primitive wins when two are hit at the same distance.
pub fn from_str(json: &str) -> Result<World, SceneError> {
    let document: SceneDocument = serde_json::from_str(json)?;

    let mut builder = World::builder().ambient(document.ambient.intensity);
    for sphere in document.spheres {
        builder = builder.sphere(sphere);
    }
    for plane in document.planes {
        builder = builder.plane(plane);
    }
    for light in document.lights {
        builder = builder.light(light);
    }

    builder.build()
}

/// A red-tinted glossy ball above the camera axis, lit from the upper right.
pub fn default_world() -> Result<World, SceneError> {
    from_str(DEFAULT_SCENE)
}
