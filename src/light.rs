use crate::{
    vec3::{deserialize_vec3, Vec3},
    Intersection,
};

/// Light source contributing to the local illumination at a hit point.
pub trait Light {
    /// Lambertian term; zero when the light is behind the surface.
    fn diffuse(&self, intersection: &Intersection) -> f64;

    /// Phong highlight as seen along `view`, the vector from the hit point
    /// back to the ray origin. Zero for materials without a specular exponent.
    fn specular(&self, intersection: &Intersection, view: &Vec3<f64>) -> f64;
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct PointLight {
    pub intensity: f64,
    #[serde(deserialize_with = "deserialize_vec3")]
    pub position: Vec3<f64>,
}

impl PointLight {
    pub fn new(intensity: f64, position: Vec3<f64>) -> Self {
        Self {
            intensity,
            position,
        }
    }
}

impl Light for PointLight {
    fn diffuse(&self, intersection: &Intersection) -> f64 {
        let l = self.position - intersection.point;
        let r = intersection.normal.dot(&l);
        if r > 0.0 {
            self.intensity * r / (intersection.normal.len() * l.len())
        } else {
            0.0
        }
    }

    fn specular(&self, intersection: &Intersection, view: &Vec3<f64>) -> f64 {
        let material = &intersection.material;
        if !material.has_specular() {
            return 0.0;
        }

        let l = self.position - intersection.point;
        let reflected = l.reflect(&intersection.normal);
        let r = reflected.dot(view);
        if r > 0.0 {
            self.intensity * (r / (reflected.len() * view.len())).powf(material.specular)
        } else {
            0.0
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AmbientLight {
    pub intensity: f64,
}

impl AmbientLight {
    pub fn new(intensity: f64) -> Self {
        Self { intensity }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::material::{Material, NO_SPECULAR};

    fn hit_on_floor(specular: f64) -> Intersection {
        Intersection::new(
            1.0,
            Vec3::default(),
            Vec3::new(0.0, 1.0, 0.0),
            Material::new(Vec3::new(1.0, 1.0, 1.0), specular, 0.0),
        )
    }

    #[test]
    fn diffuse_overhead_is_full() {
        let light = PointLight::new(0.6, Vec3::new(0.0, 4.0, 0.0));

        assert_relative_eq!(0.6, light.diffuse(&hit_on_floor(NO_SPECULAR)));
    }

    #[test]
    fn diffuse_at_45_degrees() {
        let light = PointLight::new(1.0, Vec3::new(3.0, 3.0, 0.0));

        assert_relative_eq!(0.5f64.sqrt(), light.diffuse(&hit_on_floor(NO_SPECULAR)), epsilon = 1e-12);
    }

    #[test]
    fn diffuse_from_below_is_zero() {
        let light = PointLight::new(1.0, Vec3::new(0.0, -2.0, 0.0));

        assert_eq!(0.0, light.diffuse(&hit_on_floor(NO_SPECULAR)));
    }

    #[test]
    fn specular_disabled_by_sentinel() {
        let light = PointLight::new(1.0, Vec3::new(0.0, 4.0, 0.0));
        let view = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(0.0, light.specular(&hit_on_floor(NO_SPECULAR), &view));
    }

    #[test]
    fn specular_mirror_direction() {
        let light = PointLight::new(0.5, Vec3::new(-1.0, 1.0, 0.0));
        let mirror = Vec3::new(2.0, 2.0, 0.0);
        let away = Vec3::new(-2.0, 2.0, 0.0);

        assert_relative_eq!(0.5, light.specular(&hit_on_floor(10.0), &mirror), epsilon = 1e-12);
        assert_eq!(0.0, light.specular(&hit_on_floor(10.0), &away));
    }

    #[test]
    fn specular_falls_off_with_exponent() {
        let light = PointLight::new(1.0, Vec3::new(-1.0, 1.0, 0.0));
        let view = Vec3::new(0.0, 1.0, 0.0);

        // cos(45°)^n
        let cos = 0.5f64.sqrt();
        assert_relative_eq!(cos.powf(2.0), light.specular(&hit_on_floor(2.0), &view), epsilon = 1e-12);
        assert_relative_eq!(cos.powf(500.0), light.specular(&hit_on_floor(500.0), &view), epsilon = 1e-12);
    }
}
