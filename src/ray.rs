use crate::vec3::Vec3;

/// A half-line `origin + t * direction`, valid for `t` strictly between
/// `t_min` and `t_max`.
#[derive(Copy, Clone, Debug)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
    t_min: T,
    t_max: T,
}

impl Ray<f64> {
    /// The direction is kept as given; intersection maths reads its length.
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>, t_min: f64, t_max: f64) -> Self {
        Self {
            origin,
            direction,
            t_min,
            t_max,
        }
    }

    /// Builds a ray from `origin` through `target` with a unit direction.
    pub fn toward(origin: Vec3<f64>, target: Vec3<f64>, t_min: f64, t_max: f64) -> Self {
        Self::new(origin, (target - origin).unit(), t_min, t_max)
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}

impl<T: PartialOrd> Ray<T> {
    /// Open interval test; both bounds are excluded.
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        t > self.t_min && t < self.t_max
    }
}

#[test]
fn window_is_open() {
    let ray = Ray::new(Vec3::default(), Vec3::new(0.0, 0.0, -1.0), 1.0, 10.0);

    assert!(!ray.contains(1.0));
    assert!(ray.contains(1.0 + 1e-9));
    assert!(ray.contains(9.5));
    assert!(!ray.contains(10.0));
}

#[test]
fn toward_normalizes() {
    let ray = Ray::toward(Vec3::default(), Vec3::new(0.0, 0.0, -5.0), 0.0, f64::INFINITY);

    assert_eq!(Vec3::new(0.0, 0.0, -1.0), *ray.direction());
    assert_eq!(Vec3::new(0.0, 0.0, -2.0), ray.offset(2.0));
}
