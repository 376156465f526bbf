//! Unit representation with conversion formulas

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// Conversion formula between a unit and its category's base unit.
///
/// Every category has exactly one unit whose formula is the identity
/// (`Linear { factor: 1.0 }`); all other units in the category are
/// defined relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conversion {
    /// Proportional: `base = value * factor`
    Linear { factor: f64 },
    /// Proportional with offset (temperature): `base = value * factor + offset`
    Affine { factor: f64, offset: f64 },
    /// Reciprocal (fuel economy): `base = numerator / value`, self-inverse
    Inverse { numerator: f64 },
}

impl Conversion {
    /// The identity formula, marking a category's base unit
    pub const IDENTITY: Conversion = Conversion::Linear { factor: 1.0 };

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset } => value * factor + offset,
            Conversion::Inverse { numerator } => numerator / value,
        }
    }

    /// Convert a base-unit value back to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => base / factor,
            Conversion::Affine { factor, offset } => (base - offset) / factor,
            Conversion::Inverse { numerator } => numerator / base,
        }
    }

    /// Whether this is the identity formula
    pub fn is_identity(&self) -> bool {
        matches!(*self, Conversion::Linear { factor } if factor == 1.0)
    }
}

/// One numeric component of a composite unit (e.g. the feet part of
/// feet-and-inches). Components are declared coarsest first; `factor`
/// converts one of this component into the category's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeComponent {
    pub name: String,
    pub symbol: String,
    /// Input hint for the consuming UI
    pub placeholder: String,
    /// Base-unit value of one of this component
    pub factor: f64,
    /// Suffix appended when composing the display string (e.g. `'`, `"`)
    pub suffix: String,
}

impl CompositeComponent {
    pub fn new(name: &str, symbol: &str, placeholder: &str, factor: f64, suffix: &str) -> Self {
        CompositeComponent {
            name: name.to_string(),
            symbol: symbol.to_string(),
            placeholder: placeholder.to_string(),
            factor,
            suffix: suffix.to_string(),
        }
    }
}

/// A unit definition within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable identifier used as the external reference key
    pub id: String,
    /// Display name (e.g. "Kilometer")
    pub name: String,
    /// Display symbol (e.g. "km")
    pub symbol: String,
    pub category: Category,
    /// Formula relative to the category's base unit
    pub conversion: Conversion,
    /// Present only for units entered/displayed as multiple numbers.
    /// The unit's own `conversion` is kept for interface completeness
    /// but composite conversion goes through these components instead.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub composite: Option<Vec<CompositeComponent>>,
}

impl Unit {
    pub fn new(id: &str, name: &str, symbol: &str, category: Category, conversion: Conversion) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            category,
            conversion,
            composite: None,
        }
    }

    /// Create a composite unit from its ordered component list
    pub fn with_components(
        id: &str,
        name: &str,
        symbol: &str,
        category: Category,
        conversion: Conversion,
        components: Vec<CompositeComponent>,
    ) -> Self {
        debug_assert!(!components.is_empty());
        debug_assert!(components.windows(2).all(|w| w[0].factor > w[1].factor));
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            category,
            conversion,
            composite: Some(components),
        }
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    /// Convert a base-unit value to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        self.conversion.from_base(base)
    }

    /// Whether this is the category's base unit
    pub fn is_base(&self) -> bool {
        self.conversion.is_identity()
    }

    pub fn is_composite(&self) -> bool {
        self.composite.is_some()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn meter() -> Unit {
        Unit::new("m", "Meter", "m", Category::Length, Conversion::IDENTITY)
    }

    fn kilometer() -> Unit {
        Unit::new("km", "Kilometer", "km", Category::Length, Conversion::Linear { factor: 1000.0 })
    }

    fn fahrenheit() -> Unit {
        Unit::new("f", "Fahrenheit", "°F", Category::Temperature,
            Conversion::Affine { factor: 5.0 / 9.0, offset: -160.0 / 9.0 })
    }

    #[test]
    fn test_base_unit_is_identity() {
        let m = meter();
        assert!(m.is_base());
        assert_eq!(m.to_base(42.0), 42.0);
        assert_eq!(m.from_base(42.0), 42.0);

        assert!(!kilometer().is_base());
    }

    #[test]
    fn test_linear_round_trip() {
        let km = kilometer();
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
        assert!((km.from_base(km.to_base(3.7)) - 3.7).abs() < EPS);
    }

    #[test]
    fn test_affine_temperature() {
        let f = fahrenheit();
        // 32 F = 0 C, 212 F = 100 C
        assert!(f.to_base(32.0).abs() < EPS);
        assert!((f.to_base(212.0) - 100.0).abs() < EPS);
        assert!((f.from_base(0.0) - 32.0).abs() < EPS);
        assert!((f.from_base(f.to_base(-40.0)) - -40.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_is_self_inverse() {
        // mpg (US) relative to L/100km
        let c = Conversion::Inverse { numerator: 235.215 };
        let base = c.to_base(30.0);
        assert!((base - 7.8405).abs() < 1e-4);
        assert!((c.from_base(base) - 30.0).abs() < EPS);
    }

    #[test]
    fn test_composite_components_ordered() {
        let ft_in = Unit::with_components(
            "ft_in", "Feet & Inches", "ft in", Category::Length,
            Conversion::Linear { factor: 0.3048 },
            vec![
                CompositeComponent::new("feet", "ft", "Feet", 0.3048, "'"),
                CompositeComponent::new("inches", "in", "Inches", 0.0254, "\""),
            ],
        );
        assert!(ft_in.is_composite());
        let components = ft_in.composite.as_ref().unwrap();
        assert_eq!(components[0].name, "feet");
        assert!(components[0].factor > components[1].factor);
    }
}
