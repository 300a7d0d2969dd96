use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Deserializer};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Vec3<f64> {
    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero-length vector has no direction and is returned unchanged.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();
        if len == 0.0 {
            return *self;
        }

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    /// Mirrors `self` about `normal`: `2n(n·v) - v`.
    ///
    /// The result points away from the surface when `self` does, so a light
    /// vector reflects into the direction a highlight is seen from.
    #[inline]
    pub fn reflect(&self, normal: &Vec3<f64>) -> Vec3<f64> {
        normal.scale(2.0 * self.dot(normal)) - *self
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Reads a vector written as a `[x, y, z]` triple.
pub fn deserialize_vec3<'de, D>(de: D) -> Result<Vec3<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let (x, y, z) = Deserialize::deserialize(de)?;

    Ok(Vec3::new(x, y, z))
}

#[test]
fn dot_and_len() {
    let v = Vec3::new(1.0, 2.0, 2.0);

    assert_eq!(9.0, v.dot(&v));
    assert_eq!(3.0, v.len());
}

#[test]
fn unit_has_length_one() {
    let v = Vec3::new(0.0, 3.0, -4.0).unit();

    assert_eq!(Vec3::new(0.0, 0.6, -0.8), v);
}

#[test]
fn unit_of_zero_is_noop() {
    let zero = Vec3::new(0.0, 0.0, 0.0);

    assert_eq!(zero, zero.unit());
}

#[test]
fn reflect_about_normal() {
    let n = Vec3::new(0.0, 1.0, 0.0);
    let l = Vec3::new(1.0, 1.0, 0.0);

    assert_eq!(Vec3::new(-1.0, 1.0, 0.0), l.reflect(&n));
}

#[test]
fn triple_deserializes() {
    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_vec3")]
        v: Vec3<f64>,
    }

    let w: Wrapper = serde_json::from_str(r#"{ "v": [1.5, -2, 0] }"#).unwrap();
    assert_eq!(Vec3::new(1.5, -2.0, 0.0), w.v);
}
