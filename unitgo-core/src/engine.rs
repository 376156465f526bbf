//! The conversion engine: pairwise, composite, and batch conversion

use serde::{Serialize, Deserialize};
use crate::{Category, Unit};
use crate::format::format_number;
use crate::registry::{DataSizeMode, UnitRegistry};

/// Display precision bounds, in decimal digits
pub const MIN_PRECISION: u32 = 1;
pub const MAX_PRECISION: u32 = 15;
pub const DEFAULT_PRECISION: u32 = 6;

/// Tolerance for the integer split in composite decomposition
const DECOMPOSE_EPS: f64 = 1e-9;

/// Component ladders are integral by construction (12 inches to the
/// foot), but the stored base factors are not exact in binary, so
/// their ratio lands a few ulps off the integer. Snap it back so the
/// split uses the exact divisor.
fn integral_step(ratio: f64) -> f64 {
    let rounded = ratio.round();
    if rounded >= 1.0 && (ratio - rounded).abs() < DECOMPOSE_EPS * rounded {
        rounded
    } else {
        ratio
    }
}

/// The outcome of a single conversion. Produced fresh per call and
/// never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value. For conversions into a composite unit this is
    /// the combined total in the finest component's unit (e.g. total
    /// inches), so callers can feed it back into further conversions.
    pub value: f64,
    /// The target unit definition
    pub unit: Unit,
    /// Display rendering at the engine's current precision
    pub formatted: String,
}

/// Registry plus display configuration. Construct one at startup and
/// pass it by reference; conversions only need `&self`, configuration
/// changes need `&mut self`.
pub struct ConversionEngine {
    registry: UnitRegistry,
    precision: u32,
    data_size_mode: DataSizeMode,
}

impl ConversionEngine {
    /// Engine with default settings (precision 6, SI data sizes)
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_PRECISION, DataSizeMode::Si)
    }

    /// Engine configured from persisted preferences
    pub fn with_settings(precision: u32, data_size_mode: DataSizeMode) -> Self {
        ConversionEngine {
            registry: UnitRegistry::new(data_size_mode),
            precision: precision.clamp(MIN_PRECISION, MAX_PRECISION),
            data_size_mode,
        }
    }

    /// Set display precision, clamped to 1..=15
    pub fn set_precision(&mut self, precision: u32) {
        self.precision = precision.clamp(MIN_PRECISION, MAX_PRECISION);
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Switch the data-size radix and regenerate the data category.
    /// Units in other categories are unaffected.
    pub fn set_data_size_mode(&mut self, mode: DataSizeMode) {
        self.data_size_mode = mode;
        self.registry.set_data_size_mode(mode);
    }

    pub fn data_size_mode(&self) -> DataSizeMode {
        self.data_size_mode
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    pub fn get_unit(&self, id: &str) -> Option<&Unit> {
        self.registry.get(id)
    }

    pub fn units_by_category(&self, category: Category) -> Vec<&Unit> {
        self.registry.by_category(category)
    }

    pub fn all_categories(&self) -> &'static [Category] {
        self.registry.categories()
    }

    pub fn search_units(&self, query: &str) -> Vec<&Unit> {
        self.registry.search(query)
    }

    /// Render a value at the engine's current precision
    pub fn format_number(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    /// Convert `value` from one unit to another within the same
    /// category, routing through the category's base unit.
    ///
    /// Returns `None` for unknown ids, category mismatches, and
    /// non-finite input.
    pub fn convert(&self, value: f64, from_id: &str, to_id: &str) -> Option<ConversionResult> {
        let from = self.registry.get(from_id)?;
        let to = self.registry.get(to_id)?;

        if from.category != to.category {
            return None;
        }
        if !value.is_finite() {
            return None;
        }

        let base = from.to_base(value);
        let converted = to.from_base(base);

        Some(ConversionResult {
            value: converted,
            unit: to.clone(),
            formatted: self.format_number(converted),
        })
    }

    /// Convert to or from a composite unit.
    ///
    /// From a composite source, `values` supplies one number per
    /// declared component (missing entries default to 0) and the base
    /// value is the weighted sum of components. Into a composite
    /// target, exactly one value is accepted; the base value is
    /// decomposed over the components with an integer split on every
    /// component but the finest, and `formatted` is the joined
    /// component string.
    ///
    /// Composite-to-composite conversion is unsupported and returns
    /// `None`.
    pub fn convert_composite(&self, values: &[f64], from_id: &str, to_id: &str) -> Option<ConversionResult> {
        let from = self.registry.get(from_id)?;
        let to = self.registry.get(to_id)?;

        if from.category != to.category {
            return None;
        }

        match (&from.composite, &to.composite) {
            (Some(components), None) => {
                let mut base = 0.0;
                for (i, component) in components.iter().enumerate() {
                    let v = values.get(i).copied().unwrap_or(0.0);
                    if !v.is_finite() {
                        return None;
                    }
                    base += v * component.factor;
                }

                let converted = to.from_base(base);
                Some(ConversionResult {
                    value: converted,
                    unit: to.clone(),
                    formatted: self.format_number(converted),
                })
            }
            (None, Some(components)) => {
                if values.len() != 1 {
                    return None;
                }
                let value = values[0];
                if !value.is_finite() {
                    return None;
                }

                let base = from.to_base(value);
                let finest = components.last()?;
                let total = base / finest.factor;

                // Integer count for every component except the finest,
                // which keeps the fractional remainder. The epsilon
                // before flooring keeps an exact boundary (72 total
                // inches) from splitting as 5' 12" when the quotient
                // sits a few ulps under the integer.
                let mut remaining = total;
                let mut parts = Vec::with_capacity(components.len());
                for component in &components[..components.len() - 1] {
                    let step = integral_step(component.factor / finest.factor);
                    let count = (remaining / step + DECOMPOSE_EPS).floor();
                    remaining = (remaining - count * step).max(0.0);
                    parts.push(format!("{}{}", count as i64, component.suffix));
                }
                if remaining < DECOMPOSE_EPS {
                    remaining = 0.0;
                }
                parts.push(format!("{}{}", self.format_number(remaining), finest.suffix));

                Some(ConversionResult {
                    value: total,
                    unit: to.clone(),
                    formatted: parts.join(" "),
                })
            }
            // Composite-to-composite has no defined semantics; plain
            // pairs belong in `convert`
            _ => None,
        }
    }

    /// Convert one source value into many targets, keeping the caller's
    /// order. Targets that fail to convert are silently omitted.
    pub fn convert_to_multiple(&self, value: f64, from_id: &str, to_ids: &[&str]) -> Vec<ConversionResult> {
        to_ids.iter()
            .filter_map(|to_id| self.convert(value, from_id, to_id))
            .collect()
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}
