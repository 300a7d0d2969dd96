use crate::{
    error::SceneError,
    geometry::{Geometry, Plane, Sphere},
    light::{AmbientLight, PointLight},
    ray::Ray,
    Intersection,
};

/// Unit-length tolerance for plane normals.
const NORMAL_EPSILON: f64 = 1e-9;

/// Every primitive and light taking part in a render.
///
/// Built once through [`WorldBuilder`] and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct World {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    ambient: AmbientLight,
    lights: Vec<PointLight>,
}

impl World {
    pub fn builder() -> WorldBuilder {
        WorldBuilder::default()
    }

    #[inline]
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    #[inline]
    pub fn ambient(&self) -> &AmbientLight {
        &self.ambient
    }

    #[inline]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.planes.is_empty()
    }

    /// Nearest hit over all spheres, then all planes.
    ///
    /// Only a strictly smaller `t` replaces the current best, so on ties the
    /// primitive inserted first wins.
    pub fn closest_hit(&self, ray: &Ray<f64>) -> Intersection {
        let spheres = self.spheres.iter().map(|s| s as &dyn Geometry);
        let planes = self.planes.iter().map(|p| p as &dyn Geometry);

        let mut closest = Intersection::miss();
        for geometry in spheres.chain(planes) {
            let intersection = geometry.intersection(ray);
            if intersection.t < closest.t {
                closest = intersection;
            }
        }

        closest
    }
}

#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    ambient: AmbientLight,
    lights: Vec<PointLight>,
}

impl WorldBuilder {
    pub fn sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    pub fn plane(mut self, plane: Plane) -> Self {
        self.planes.push(plane);
        self
    }

    pub fn ambient(mut self, intensity: f64) -> Self {
        self.ambient = AmbientLight::new(intensity);
        self
    }

    pub fn light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    pub fn build(self) -> Result<World, SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            let radius = sphere.radius();
            // NaN fails this check as well.
            if !(radius > 0.0) {
                return Err(SceneError::InvalidRadius { index, radius });
            }
        }

        for (index, plane) in self.planes.iter().enumerate() {
            let length = plane.normal().len();
            if !((length - 1.0).abs() <= NORMAL_EPSILON) {
                return Err(SceneError::NonUnitNormal { index, length });
            }
        }

        if !(self.ambient.intensity >= 0.0) {
            return Err(SceneError::NegativeAmbient(self.ambient.intensity));
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity >= 0.0) {
                return Err(SceneError::NegativeIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(World {
            spheres: self.spheres,
            planes: self.planes,
            ambient: self.ambient,
            lights: self.lights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Material, vec3::Vec3};

    fn tinted(r: f64) -> Material {
        Material::new(Vec3::new(r, 0.0, 0.0), -1.0, 0.0)
    }

    fn forward() -> Ray<f64> {
        Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, -1.0), 0.0, f64::INFINITY)
    }

    #[test]
    fn empty_world_misses() {
        let world = World::builder().build().unwrap();

        assert!(world.is_empty());
        assert!(!world.closest_hit(&forward()).is_hit());
    }

    #[test]
    fn nearest_sphere_wins() {
        let world = World::builder()
            .sphere(Sphere::new(Vec3::new(0.0, 0.0, -8.0), 1.0, tinted(0.7)))
            .sphere(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, tinted(0.2)))
            .build()
            .unwrap();

        let hit = world.closest_hit(&forward());

        assert_eq!(2.0, hit.t);
        assert_eq!(0.2, hit.material.color.x);
    }

    #[test]
    fn first_inserted_wins_ties() {
        let world = World::builder()
            .sphere(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, tinted(0.1)))
            .sphere(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, tinted(0.9)))
            .build()
            .unwrap();

        assert_eq!(0.1, world.closest_hit(&forward()).material.color.x);
    }

    #[test]
    fn plane_in_front_of_sphere() {
        let world = World::builder()
            .sphere(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, tinted(0.3)))
            .plane(Plane::new(Vec3::new(0.0, 0.0, 1.0), 5.0, tinted(0.6)))
            .build()
            .unwrap();

        let hit = world.closest_hit(&forward());

        assert_eq!(5.0, hit.t);
        assert_eq!(0.6, hit.material.color.x);
    }

    #[test]
    fn rejects_bad_primitives() {
        let flat = World::builder()
            .sphere(Sphere::new(Vec3::default(), 0.0, tinted(1.0)))
            .build();
        assert!(matches!(flat, Err(SceneError::InvalidRadius { index: 0, .. })));

        let skewed = World::builder()
            .plane(Plane::new(Vec3::new(0.0, 2.0, 0.0), 0.0, tinted(1.0)))
            .build();
        assert!(matches!(skewed, Err(SceneError::NonUnitNormal { index: 0, .. })));

        let dark = World::builder()
            .light(PointLight::new(0.5, Vec3::default()))
            .light(PointLight::new(-0.5, Vec3::default()))
            .build();
        assert!(matches!(dark, Err(SceneError::NegativeIntensity { index: 1, .. })));

        let ambient = World::builder().ambient(-0.1).build();
        assert!(matches!(ambient, Err(SceneError::NegativeAmbient(_))));
    }
}
