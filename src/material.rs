use crate::vec3::{deserialize_vec3, Vec3};

/// Specular exponent that switches the highlight term off.
pub const NO_SPECULAR: f64 = -1.0;

fn no_specular() -> f64 {
    NO_SPECULAR
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct Material {
    #[serde(deserialize_with = "deserialize_vec3")]
    pub color: Vec3<f64>,
    #[serde(default = "no_specular")]
    pub specular: f64,
    /// Carried with the surface but not read by the local lighting model.
    #[serde(default)]
    pub reflective: f64,
}

impl Material {
    pub fn new(color: Vec3<f64>, specular: f64, reflective: f64) -> Self {
        Self {
            color,
            specular,
            reflective,
        }
    }

    #[inline]
    pub fn has_specular(&self) -> bool {
        self.specular != NO_SPECULAR
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec3::default(), NO_SPECULAR, 0.0)
    }
}

#[test]
fn specular_defaults_to_disabled() {
    let m: Material = serde_json::from_str(r#"{ "color": [0.5, 0.25, 0.25] }"#).unwrap();

    assert!(!m.has_specular());
    assert_eq!(0.0, m.reflective);
    assert_eq!(Vec3::new(0.5, 0.25, 0.25), m.color);
}
