//! The four measurement fields and their admissible ranges

use serde::{Deserialize, Serialize};

/// One of the four environmental measurements the model consumes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Temperature in Celsius
    Temp,
    /// Relative humidity percentage
    Rh,
    /// Wind speed in km/h
    Ws,
    /// Rainfall in mm
    Rain,
}

/// Admissible interval and display label for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

impl FieldRange {
    /// Inclusive on both bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Field {
    /// All fields in wire order
    pub const ALL: [Field; 4] = [Field::Temp, Field::Rh, Field::Ws, Field::Rain];

    /// Wire name used in the prediction payload and form markup
    pub fn name(&self) -> &'static str {
        match self {
            Field::Temp => "temp",
            Field::Rh => "rh",
            Field::Ws => "ws",
            Field::Rain => "rain",
        }
    }

    /// Parse a wire name back into a field
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "temp" => Some(Field::Temp),
            "rh" => Some(Field::Rh),
            "ws" => Some(Field::Ws),
            "rain" => Some(Field::Rain),
            _ => None,
        }
    }

    /// Static admissible range for this field
    pub fn range(&self) -> FieldRange {
        match self {
            Field::Temp => FieldRange {
                min: -20.0,
                max: 60.0,
                label: "Temperature",
            },
            Field::Rh => FieldRange {
                min: 0.0,
                max: 100.0,
                label: "Humidity",
            },
            Field::Ws => FieldRange {
                min: 0.0,
                max: 150.0,
                label: "Wind Speed",
            },
            Field::Rain => FieldRange {
                min: 0.0,
                max: 500.0,
                label: "Rain",
            },
        }
    }
}
