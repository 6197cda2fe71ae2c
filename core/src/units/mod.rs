use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => to_radians(value),
            Self::Radians => value,
        }
    }

    pub fn from_radians(&self, rad: f64) -> f64 {
        match self {
            Self::Degrees => rad * (180.0 / PI),
            Self::Radians => rad,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Radians => write!(f, "rad"),
        }
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}
