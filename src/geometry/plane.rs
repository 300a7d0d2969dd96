use crate::{
    geometry::Geometry,
    material::Material,
    ray::Ray,
    vec3::{deserialize_vec3, Vec3},
    Intersection,
};

/// The set of points `P` with `dot(normal, P) + distance = 0`.
///
/// `distance` is the signed distance of the plane from the world origin along
/// `-normal`, so `normal = (0, 1, 0), distance = 1` is the plane `y = -1`.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Plane {
    #[serde(deserialize_with = "deserialize_vec3")]
    normal: Vec3<f64>,
    #[serde(rename = "d")]
    distance: f64,
    material: Material,
}

impl Plane {
    pub fn new(normal: Vec3<f64>, distance: f64, material: Material) -> Self {
        Self {
            normal,
            distance,
            material,
        }
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray<f64>) -> Intersection {
        let denominator = self.normal.dot(ray.direction());

        // Parallel rays never meet the plane, even when they lie in it.
        if denominator == 0.0 {
            return Intersection::miss();
        }

        let t = -(self.distance + self.normal.dot(&ray.origin())) / denominator;
        if !ray.contains(t) {
            return Intersection::miss();
        }

        Intersection::new(t, ray.offset(t), self.normal, self.material)
    }
}
