use crate::{light::Light, vec3::Vec3, world::World, Intersection};

#[inline]
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    if n < lo {
        return lo;
    }
    if n > hi {
        return hi;
    }
    n
}

/// Total light arriving at `intersection` for a ray cast from `origin`,
/// clamped to `[0, 1]`.
///
/// Ambient, then for every point light its diffuse and specular terms, are
/// summed in that order. No shadow rays are cast.
pub fn shade(intersection: &Intersection, world: &World, origin: &Vec3<f64>) -> f64 {
    let view = *origin - intersection.point;

    let mut intensity = world.ambient().intensity;
    for light in world.lights() {
        intensity += light.diffuse(intersection);
        intensity += light.specular(intersection, &view);
    }

    clamp(intensity, 0.0, 1.0)
}

/// Modulates the surface colour by `intensity`.
///
/// Only the red channel of the material is read, so the result is a single
/// grey level.
#[inline]
pub fn sample(intersection: &Intersection, intensity: f64) -> f64 {
    intersection.material.color.x * intensity
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        light::PointLight,
        material::{Material, NO_SPECULAR},
    };

    fn floor_hit(color: Vec3<f64>, specular: f64) -> Intersection {
        Intersection::new(
            1.0,
            Vec3::default(),
            Vec3::new(0.0, 1.0, 0.0),
            Material::new(color, specular, 0.5),
        )
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(0.0, clamp(-0.5, 0.0, 1.0));
        assert_eq!(1.0, clamp(1.5, 0.0, 1.0));
        assert_eq!(0.25, clamp(0.25, 0.0, 1.0));
        assert_eq!(0.0, clamp(0.0, 0.0, 1.0));
        assert_eq!(1.0, clamp(1.0, 0.0, 1.0));
    }

    #[test]
    fn ambient_only() {
        let world = World::builder().ambient(0.09).build().unwrap();
        let hit = floor_hit(Vec3::new(1.0, 1.0, 1.0), NO_SPECULAR);

        assert_eq!(0.09, shade(&hit, &world, &Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn ambient_plus_diffuse() {
        let world = World::builder()
            .ambient(0.1)
            .light(PointLight::new(0.6, Vec3::new(0.0, 3.0, 0.0)))
            .build()
            .unwrap();
        let hit = floor_hit(Vec3::new(1.0, 1.0, 1.0), NO_SPECULAR);

        assert_relative_eq!(0.7, shade(&hit, &world, &Vec3::new(1.0, 1.0, 0.0)), epsilon = 1e-12);
    }

    #[test]
    fn saturates_at_one() {
        let world = World::builder()
            .ambient(0.5)
            .light(PointLight::new(0.6, Vec3::new(0.0, 3.0, 0.0)))
            .light(PointLight::new(0.6, Vec3::new(0.0, 9.0, 0.0)))
            .build()
            .unwrap();
        let hit = floor_hit(Vec3::new(1.0, 1.0, 1.0), 10.0);

        assert_eq!(1.0, shade(&hit, &world, &Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn specular_adds_highlight() {
        let world = World::builder()
            .light(PointLight::new(0.5, Vec3::new(-1.0, 1.0, 0.0)))
            .build()
            .unwrap();
        let dull = floor_hit(Vec3::new(1.0, 1.0, 1.0), NO_SPECULAR);
        let shiny = floor_hit(Vec3::new(1.0, 1.0, 1.0), 10.0);
        let origin = Vec3::new(2.0, 2.0, 0.0);

        let diffuse = shade(&dull, &world, &origin);
        assert_relative_eq!(0.5 * 0.5f64.sqrt(), diffuse, epsilon = 1e-12);
        assert_relative_eq!(diffuse + 0.5, shade(&shiny, &world, &origin), epsilon = 1e-12);
    }

    #[test]
    fn sample_reads_red_channel_only() {
        let hit = floor_hit(Vec3::new(0.8, 0.5, 0.5), NO_SPECULAR);

        assert_eq!(0.4, sample(&hit, 0.5));
    }
}
