use crate::{ray::Ray, Intersection};

mod plane;
mod sphere;

pub use self::plane::Plane;
pub use self::sphere::Sphere;

/// Surface that a ray can be tested against.
pub trait Geometry {
    /// Returns the nearest hit strictly inside the ray's window, or
    /// [`Intersection::miss`].
    fn intersection(&self, ray: &Ray<f64>) -> Intersection;
}
