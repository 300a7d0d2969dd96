use crate::{material::Material, vec3::Vec3};

/// Hit record of a single ray evaluation.
///
/// A `t` of `+∞` means "nothing was hit"; the other fields are then
/// meaningless. Normals are unit length.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub t: f64,
    pub point: Vec3<f64>,
    pub normal: Vec3<f64>,
    pub material: Material,
}

impl Intersection {
    pub fn new(t: f64, point: Vec3<f64>, normal: Vec3<f64>, material: Material) -> Self {
        Self {
            t,
            point,
            normal,
            material,
        }
    }

    pub fn miss() -> Self {
        Self::new(f64::INFINITY, Vec3::default(), Vec3::default(), Material::default())
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.t != f64::INFINITY
    }

    #[inline]
    pub fn hit(self) -> Option<Self> {
        if self.is_hit() {
            Some(self)
        } else {
            None
        }
    }
}

#[test]
fn miss_is_infinite() {
    let miss = Intersection::miss();

    assert!(!miss.is_hit());
    assert!(miss.hit().is_none());
}
