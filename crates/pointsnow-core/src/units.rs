//! Unit conversions between raw forcing units and the kernel's units.

/// Offset between Celsius and the kernel's absolute temperature scale.
///
/// The kernel uses 273.16 (the triple point), not 273.15. Both the forcing
/// adapter and the output aggregator must use this exact constant so a
/// Celsius value survives the round trip through the kernel's scale.
pub const FREEZE: f64 = 273.16;

/// Transform applied to a raw forcing value on its way into the kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitTransform {
    /// Value is already in kernel units.
    Identity,
    /// Celsius in, absolute (Kelvin-equivalent) out.
    CelsiusToKelvin,
}

impl UnitTransform {
    /// Convert a raw value into kernel units.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::CelsiusToKelvin => value + FREEZE,
        }
    }

    /// Convert a kernel-unit value back into raw units.
    pub fn invert(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::CelsiusToKelvin => value - FREEZE,
        }
    }
}

/// Convert an absolute kernel temperature back to Celsius.
pub fn kelvin_to_celsius(value: f64) -> f64 {
    UnitTransform::CelsiusToKelvin.invert(value)
}
