//! Unit catalog - ~90 units organized by category
//!
//! Per category, exactly one unit carries the identity conversion and
//! serves as the implicit base unit everything else routes through.

use std::f64::consts::PI;
use crate::{Category, CompositeComponent, Conversion, Unit};
use crate::registry::{DataSizeMode, UnitRegistry};

fn linear(factor: f64) -> Conversion {
    Conversion::Linear { factor }
}

impl UnitRegistry {
    pub(crate) fn register_all_units(&mut self, mode: DataSizeMode) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_volume_units();
        self.register_time_units();
        self.register_area_units();
        self.register_speed_units();
        self.register_data_units(mode);
        self.register_pressure_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_force_units();
        self.register_density_units();
        self.register_angle_units();
        self.register_fuel_units();
    }

    fn register_length_units(&mut self) {
        // Base: meter
        self.register(Unit::new("mm", "Millimeter", "mm", Category::Length, linear(0.001)));
        self.register(Unit::new("cm", "Centimeter", "cm", Category::Length, linear(0.01)));
        self.register(Unit::new("m", "Meter", "m", Category::Length, Conversion::IDENTITY));
        self.register(Unit::new("km", "Kilometer", "km", Category::Length, linear(1000.0)));
        self.register(Unit::new("in", "Inch", "in", Category::Length, linear(0.0254)));
        self.register(Unit::new("ft", "Foot", "ft", Category::Length, linear(0.3048)));
        self.register(Unit::with_components(
            "ft_in", "Feet & Inches", "ft in", Category::Length,
            // Placeholder formula; composite conversion goes through the components
            linear(0.3048),
            vec![
                CompositeComponent::new("feet", "ft", "Feet", 0.3048, "'"),
                CompositeComponent::new("inches", "in", "Inches", 0.0254, "\""),
            ],
        ));
        self.register(Unit::new("yd", "Yard", "yd", Category::Length, linear(0.9144)));
        self.register(Unit::new("mi", "Mile", "mi", Category::Length, linear(1609.344)));
        self.register(Unit::new("μm", "Micrometer", "μm", Category::Length, linear(0.000001)));
        self.register(Unit::new("nm", "Nanometer", "nm", Category::Length, linear(0.000000001)));
        self.register(Unit::new("nmi", "Nautical Mile", "nmi", Category::Length, linear(1852.0)));
        self.register(Unit::new("dm", "Decimeter", "dm", Category::Length, linear(0.1)));
    }

    fn register_weight_units(&mut self) {
        // Base: kilogram
        self.register(Unit::new("mg", "Milligram", "mg", Category::Weight, linear(0.000001)));
        self.register(Unit::new("g", "Gram", "g", Category::Weight, linear(0.001)));
        self.register(Unit::new("kg", "Kilogram", "kg", Category::Weight, Conversion::IDENTITY));
        self.register(Unit::new("oz", "Ounce", "oz", Category::Weight, linear(0.0283495)));
        self.register(Unit::new("lb", "Pound", "lb", Category::Weight, linear(0.453592)));
        self.register(Unit::new("ton", "Metric Ton", "t", Category::Weight, linear(1000.0)));
        self.register(Unit::new("stone", "Stone", "st", Category::Weight, linear(6.35029)));
        self.register(Unit::new("grain", "Grain", "gr", Category::Weight, linear(0.0000647989)));
        self.register(Unit::new("carat", "Carat", "ct", Category::Weight, linear(0.0002)));
        self.register(Unit::new("troy_oz", "Troy Ounce", "oz t", Category::Weight, linear(0.0311035)));
    }

    fn register_temperature_units(&mut self) {
        // Base: Celsius
        self.register(Unit::new("c", "Celsius", "°C", Category::Temperature, Conversion::IDENTITY));
        // C = (F - 32) * 5/9
        self.register(Unit::new("f", "Fahrenheit", "°F", Category::Temperature,
            Conversion::Affine { factor: 5.0 / 9.0, offset: -160.0 / 9.0 }));
        // C = K - 273.15
        self.register(Unit::new("k", "Kelvin", "K", Category::Temperature,
            Conversion::Affine { factor: 1.0, offset: -273.15 }));
    }

    fn register_volume_units(&mut self) {
        // Base: liter
        self.register(Unit::new("ml", "Milliliter", "ml", Category::Volume, linear(0.001)));
        self.register(Unit::new("l", "Liter", "L", Category::Volume, Conversion::IDENTITY));
        self.register(Unit::new("cup", "Cup (US)", "cup", Category::Volume, linear(0.236588)));
        self.register(Unit::new("pint", "Pint (US)", "pt", Category::Volume, linear(0.473176)));
        self.register(Unit::new("quart", "Quart (US)", "qt", Category::Volume, linear(0.946353)));
        self.register(Unit::new("gallon", "Gallon (US)", "gal", Category::Volume, linear(3.78541)));
        self.register(Unit::new("floz", "Fluid Ounce (US)", "fl oz", Category::Volume, linear(0.0295735)));
        self.register(Unit::new("tbsp", "Tablespoon", "tbsp", Category::Volume, linear(0.0147868)));
        self.register(Unit::new("tsp", "Teaspoon", "tsp", Category::Volume, linear(0.00492892)));
        self.register(Unit::new("m3", "Cubic Meter", "m³", Category::Volume, linear(1000.0)));
        self.register(Unit::new("cm3", "Cubic Centimeter", "cm³", Category::Volume, linear(0.001)));
        self.register(Unit::new("ft3", "Cubic Foot", "ft³", Category::Volume, linear(28.3168)));
        self.register(Unit::new("in3", "Cubic Inch", "in³", Category::Volume, linear(0.0163871)));
        self.register(Unit::new("barrel", "Barrel (US)", "bbl", Category::Volume, linear(158.987)));
    }

    fn register_time_units(&mut self) {
        // Base: second
        self.register(Unit::new("s", "Second", "s", Category::Time, Conversion::IDENTITY));
        self.register(Unit::new("min", "Minute", "min", Category::Time, linear(60.0)));
        self.register(Unit::new("h", "Hour", "h", Category::Time, linear(3600.0)));
        self.register(Unit::new("d", "Day", "d", Category::Time, linear(86400.0)));
        self.register(Unit::new("wk", "Week", "wk", Category::Time, linear(604800.0)));
        self.register(Unit::new("mo", "Month (30d)", "mo", Category::Time, linear(2592000.0)));
        self.register(Unit::new("yr", "Year (365d)", "yr", Category::Time, linear(31536000.0)));
    }

    fn register_area_units(&mut self) {
        // Base: square meter
        self.register(Unit::new("m2", "Square Meter", "m²", Category::Area, Conversion::IDENTITY));
        self.register(Unit::new("cm2", "Square Centimeter", "cm²", Category::Area, linear(0.0001)));
        self.register(Unit::new("km2", "Square Kilometer", "km²", Category::Area, linear(1_000_000.0)));
        self.register(Unit::new("in2", "Square Inch", "in²", Category::Area, linear(0.00064516)));
        self.register(Unit::new("ft2", "Square Foot", "ft²", Category::Area, linear(0.092903)));
        self.register(Unit::new("yd2", "Square Yard", "yd²", Category::Area, linear(0.836127)));
        self.register(Unit::new("acre", "Acre", "ac", Category::Area, linear(4046.86)));
        self.register(Unit::new("hectare", "Hectare", "ha", Category::Area, linear(10000.0)));
    }

    fn register_speed_units(&mut self) {
        // Base: meter per second
        self.register(Unit::new("mps", "Meter per Second", "m/s", Category::Speed, Conversion::IDENTITY));
        self.register(Unit::new("kmh", "Kilometer per Hour", "km/h", Category::Speed, linear(1.0 / 3.6)));
        self.register(Unit::new("mph", "Mile per Hour", "mph", Category::Speed, linear(0.44704)));
        self.register(Unit::new("fps", "Foot per Second", "ft/s", Category::Speed, linear(0.3048)));
        self.register(Unit::new("knot", "Knot", "kn", Category::Speed, linear(0.514444)));
    }

    pub(crate) fn register_data_units(&mut self, mode: DataSizeMode) {
        let multiplier = mode.multiplier();

        // Base: byte
        self.register(Unit::new("b", "Byte", "B", Category::Data, Conversion::IDENTITY));
        self.register(Unit::new("kb", "Kilobyte", "KB", Category::Data, linear(multiplier)));
        self.register(Unit::new("mb", "Megabyte", "MB", Category::Data, linear(multiplier.powi(2))));
        self.register(Unit::new("gb", "Gigabyte", "GB", Category::Data, linear(multiplier.powi(3))));
        self.register(Unit::new("tb", "Terabyte", "TB", Category::Data, linear(multiplier.powi(4))));
    }

    fn register_pressure_units(&mut self) {
        // Base: Pascal
        self.register(Unit::new("pa", "Pascal", "Pa", Category::Pressure, Conversion::IDENTITY));
        self.register(Unit::new("bar", "Bar", "bar", Category::Pressure, linear(100000.0)));
        self.register(Unit::new("psi", "PSI", "psi", Category::Pressure, linear(6894.76)));
        self.register(Unit::new("atm", "Atmosphere", "atm", Category::Pressure, linear(101325.0)));
    }

    fn register_energy_units(&mut self) {
        // Base: Joule
        self.register(Unit::new("j", "Joule", "J", Category::Energy, Conversion::IDENTITY));
        self.register(Unit::new("cal", "Calorie", "cal", Category::Energy, linear(4.184)));
        self.register(Unit::new("kwh", "Kilowatt Hour", "kWh", Category::Energy, linear(3_600_000.0)));
        self.register(Unit::new("btu", "BTU", "BTU", Category::Energy, linear(1055.06)));
    }

    fn register_power_units(&mut self) {
        // Base: Watt
        self.register(Unit::new("w", "Watt", "W", Category::Power, Conversion::IDENTITY));
        self.register(Unit::new("kw", "Kilowatt", "kW", Category::Power, linear(1000.0)));
        self.register(Unit::new("hp", "Horsepower", "hp", Category::Power, linear(745.7)));
    }

    fn register_force_units(&mut self) {
        // Base: Newton
        self.register(Unit::new("n", "Newton", "N", Category::Force, Conversion::IDENTITY));
        self.register(Unit::new("lbf", "Pound-force", "lbf", Category::Force, linear(4.44822)));
        self.register(Unit::new("kgf", "Kilogram-force", "kgf", Category::Force, linear(9.80665)));
    }

    fn register_density_units(&mut self) {
        // Base: kilogram per cubic meter
        self.register(Unit::new("kg_m3", "Kilogram per Cubic Meter", "kg/m³", Category::Density, Conversion::IDENTITY));
        self.register(Unit::new("g_cm3", "Gram per Cubic Centimeter", "g/cm³", Category::Density, linear(1000.0)));
        self.register(Unit::new("lb_ft3", "Pound per Cubic Foot", "lb/ft³", Category::Density, linear(16.0185)));
    }

    fn register_angle_units(&mut self) {
        // Base: radian
        self.register(Unit::new("rad", "Radian", "rad", Category::Angle, Conversion::IDENTITY));
        self.register(Unit::new("deg", "Degree", "°", Category::Angle, linear(PI / 180.0)));
        self.register(Unit::new("grad", "Gradian", "grad", Category::Angle, linear(PI / 200.0)));
    }

    fn register_fuel_units(&mut self) {
        // Base: liter per 100 kilometers. The imperial units are
        // reciprocal to the base, not proportional.
        self.register(Unit::new("l_100km", "Liter per 100 km", "L/100km", Category::Fuel, Conversion::IDENTITY));
        self.register(Unit::new("mpg_us", "Miles per Gallon (US)", "mpg", Category::Fuel,
            Conversion::Inverse { numerator: 235.215 }));
        self.register(Unit::new("mpg_uk", "Miles per Gallon (UK)", "mpg", Category::Fuel,
            Conversion::Inverse { numerator: 282.481 }));
        self.register(Unit::new("km_l", "Kilometer per Liter", "km/L", Category::Fuel,
            Conversion::Inverse { numerator: 100.0 }));
    }
}
