//! Unit registry with order-preserving category queries

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::{Category, Unit};

/// Multiplier scheme for data-size unit steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSizeMode {
    /// Decimal steps (1 KB = 1000 B)
    Si,
    /// Binary steps (1 KB = 1024 B)
    Binary,
}

impl DataSizeMode {
    /// The step multiplier between adjacent data-size units
    pub fn multiplier(&self) -> f64 {
        match self {
            DataSizeMode::Si => 1000.0,
            DataSizeMode::Binary => 1024.0,
        }
    }
}

impl Default for DataSizeMode {
    fn default() -> Self {
        DataSizeMode::Si
    }
}

/// Registry of all known units, keyed by id.
///
/// Units are kept in registration order: category queries return units
/// in the order they were registered, which consumers use for default
/// unit selection.
pub struct UnitRegistry {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    /// Build the registry with the full catalog, using `mode` for the
    /// data category
    pub fn new(mode: DataSizeMode) -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            index: HashMap::new(),
        };
        registry.register_all_units(mode);
        registry
    }

    /// Exact lookup by id
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.index.get(id).map(|&i| &self.units[i])
    }

    /// All units in a category, in registration order
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// The closed category enumeration in its fixed order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Case-insensitive substring search over name, symbol, and
    /// category label
    pub fn search(&self, query: &str) -> Vec<&Unit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.units.iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&query)
                    || u.symbol.to_lowercase().contains(&query)
                    || u.category.name().contains(&query)
            })
            .collect()
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Discard and re-register the data category with the new
    /// multiplier. Other categories are untouched; replaced units keep
    /// their registry position.
    pub fn set_data_size_mode(&mut self, mode: DataSizeMode) {
        self.register_data_units(mode);
    }

    /// Register a unit. An existing unit with the same id is replaced
    /// in place, keeping its registration order.
    pub(crate) fn register(&mut self, unit: Unit) {
        if let Some(&i) = self.index.get(&unit.id) {
            self.units[i] = unit;
        } else {
            self.index.insert(unit.id.clone(), self.units.len());
            self.units.push(unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let reg = UnitRegistry::new(DataSizeMode::Si);
        assert!(reg.get("m").is_some());
        assert!(reg.get("kg").is_some());
        assert!(reg.get("unknown_xyz").is_none());
    }

    #[test]
    fn test_by_category_preserves_registration_order() {
        let reg = UnitRegistry::new(DataSizeMode::Si);
        let lengths = reg.by_category(Category::Length);
        // The first two units drive default selection downstream
        assert_eq!(lengths[0].id, "mm");
        assert_eq!(lengths[1].id, "cm");
    }

    #[test]
    fn test_every_category_has_exactly_one_base_unit() {
        let reg = UnitRegistry::new(DataSizeMode::Si);
        for &category in reg.categories() {
            let bases: Vec<_> = reg.by_category(category)
                .into_iter()
                .filter(|u| u.is_base())
                .collect();
            assert_eq!(bases.len(), 1, "category {} has {} base units", category, bases.len());
        }
    }

    #[test]
    fn test_data_mode_switch_replaces_in_place() {
        let mut reg = UnitRegistry::new(DataSizeMode::Si);
        let before: Vec<String> = reg.by_category(Category::Data)
            .iter().map(|u| u.id.clone()).collect();
        let total = reg.len();

        reg.set_data_size_mode(DataSizeMode::Binary);

        let after: Vec<String> = reg.by_category(Category::Data)
            .iter().map(|u| u.id.clone()).collect();
        assert_eq!(before, after, "ids and order must survive the switch");
        assert_eq!(reg.len(), total, "no duplicates after re-registration");

        let kb = reg.get("kb").unwrap();
        assert_eq!(kb.to_base(1.0), 1024.0);
    }

    #[test]
    fn test_data_mode_switch_leaves_other_categories_alone() {
        let mut reg = UnitRegistry::new(DataSizeMode::Si);
        let km_before = reg.get("km").unwrap().clone();
        reg.set_data_size_mode(DataSizeMode::Binary);
        assert_eq!(reg.get("km").unwrap(), &km_before);
    }

    #[test]
    fn test_search() {
        let reg = UnitRegistry::new(DataSizeMode::Si);
        let hits = reg.search("meter");
        assert!(hits.iter().any(|u| u.id == "m"));
        assert!(hits.iter().any(|u| u.id == "km"));
        assert!(reg.search("").is_empty());
        assert!(reg.search("zzzz").is_empty());
    }
}
