//! The closed set of measurement categories

use std::fmt;
use serde::{Serialize, Deserialize};

/// A class of commensurable quantities. Conversions are only valid
/// between units of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
    Time,
    Data,
    Energy,
    Power,
    Pressure,
    Force,
    Density,
    Angle,
    Fuel,
}

impl Category {
    /// All categories in their fixed display order. Consumers rely on
    /// this order being stable across releases.
    pub const ALL: [Category; 15] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
        Category::Time,
        Category::Data,
        Category::Energy,
        Category::Power,
        Category::Pressure,
        Category::Force,
        Category::Density,
        Category::Angle,
        Category::Fuel,
    ];

    /// Lowercase label, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Speed => "speed",
            Category::Time => "time",
            Category::Data => "data",
            Category::Energy => "energy",
            Category::Power => "power",
            Category::Pressure => "pressure",
            Category::Force => "force",
            Category::Density => "density",
            Category::Angle => "angle",
            Category::Fuel => "fuel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
