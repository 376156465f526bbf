//! UnitGo Core - Measurement Unit Conversion Engine
//!
//! Holds the unit catalog and converts values between units of the
//! same category by routing through each category's implicit base
//! unit. Results are formatted for display at a configurable decimal
//! precision.
//!
//! Categories:
//! - Length (mm, cm, m, km, in, ft, ft_in, etc.)
//! - Weight (mg, g, kg, oz, lb, etc.)
//! - Temperature (C, F, K)
//! - Volume (ml, L, cup, gal, etc.)
//! - Area (m², ft², acre, etc.)
//! - Speed (m/s, km/h, mph, etc.)
//! - Time (s, min, h, d, etc.)
//! - Data (B, KB, MB, GB, TB - SI or binary steps)
//! - Energy, Power, Pressure, Force, Density, Angle, Fuel
//!
//! The `ft_in` unit is composite: its value is entered as feet plus
//! inches and converted through `ConversionEngine::convert_composite`.

mod category;
mod unit;
mod registry;
mod units;
mod format;
mod engine;

pub use category::Category;
pub use unit::{Unit, Conversion, CompositeComponent};
pub use registry::{UnitRegistry, DataSizeMode};
pub use format::format_number;
pub use engine::{
    ConversionEngine, ConversionResult,
    DEFAULT_PRECISION, MIN_PRECISION, MAX_PRECISION,
};
