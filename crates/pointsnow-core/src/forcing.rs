//! Forcing fields and the adapted per-timestep [`ForcingRecord`].

use std::fmt;

use crate::units::UnitTransform;

/// A meteorological forcing variable understood by the kernel.
///
/// Each variant carries the explicit mapping from the raw forcing column
/// name to the kernel's variable name and the unit transform applied on
/// the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ForcingField {
    /// Air temperature (`air_temp` → `T_a`), Celsius in.
    AirTemp,
    /// Net solar radiation (`net_solar` → `S_n`).
    NetSolar,
    /// Incoming thermal (longwave) radiation (`thermal` → `I_lw`).
    Thermal,
    /// Vapor pressure (`vapor_pressure` → `e_a`).
    VaporPressure,
    /// Wind speed (`wind_speed` → `u`).
    WindSpeed,
    /// Soil/ground temperature (`soil_temp` → `T_g`), Celsius in.
    SoilTemp,
    /// Precipitation mass (`precip` → `m_pp`).
    Precip,
    /// Fraction of precipitation falling as snow (`percent_snow`).
    PercentSnow,
    /// New-snow density (`snow_density` → `rho_snow`).
    SnowDensity,
    /// Precipitation temperature (`precip_temp` → `T_pp`), Celsius in.
    PrecipTemp,
}

impl ForcingField {
    /// Every forcing field, in kernel argument order.
    pub const ALL: [ForcingField; 10] = [
        Self::AirTemp,
        Self::NetSolar,
        Self::Thermal,
        Self::VaporPressure,
        Self::WindSpeed,
        Self::SoilTemp,
        Self::Precip,
        Self::PercentSnow,
        Self::SnowDensity,
        Self::PrecipTemp,
    ];

    /// Column name in a raw forcing table.
    pub fn source_name(self) -> &'static str {
        match self {
            Self::AirTemp => "air_temp",
            Self::NetSolar => "net_solar",
            Self::Thermal => "thermal",
            Self::VaporPressure => "vapor_pressure",
            Self::WindSpeed => "wind_speed",
            Self::SoilTemp => "soil_temp",
            Self::Precip => "precip",
            Self::PercentSnow => "percent_snow",
            Self::SnowDensity => "snow_density",
            Self::PrecipTemp => "precip_temp",
        }
    }

    /// Variable name the kernel expects.
    pub fn kernel_name(self) -> &'static str {
        match self {
            Self::AirTemp => "T_a",
            Self::NetSolar => "S_n",
            Self::Thermal => "I_lw",
            Self::VaporPressure => "e_a",
            Self::WindSpeed => "u",
            Self::SoilTemp => "T_g",
            Self::Precip => "m_pp",
            Self::PercentSnow => "percent_snow",
            Self::SnowDensity => "rho_snow",
            Self::PrecipTemp => "T_pp",
        }
    }

    /// Unit transform from raw to kernel units.
    pub fn transform(self) -> UnitTransform {
        match self {
            Self::AirTemp | Self::SoilTemp | Self::PrecipTemp => UnitTransform::CelsiusToKelvin,
            _ => UnitTransform::Identity,
        }
    }

    /// Look up a field by its raw column name.
    ///
    /// Returns `None` for columns the kernel does not consume.
    pub fn from_source_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.source_name() == name)
    }
}

impl fmt::Display for ForcingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

/// One timestep of forcing, in kernel units and under kernel names.
///
/// Temperatures are absolute (Kelvin-equivalent). Records are plain
/// values: the driver keeps two of them (bracket start and end) and hands
/// the end record over as the next start by copy, never by alias.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForcingRecord {
    /// `T_a`: air temperature (K).
    pub air_temp: f64,
    /// `S_n`: net solar radiation (W/m²).
    pub net_solar: f64,
    /// `I_lw`: incoming longwave radiation (W/m²).
    pub thermal: f64,
    /// `e_a`: vapor pressure (Pa).
    pub vapor_pressure: f64,
    /// `u`: wind speed (m/s).
    pub wind_speed: f64,
    /// `T_g`: soil temperature at the ground depth (K).
    pub soil_temp: f64,
    /// `m_pp`: precipitation mass (kg/m², mm).
    pub precip_mass: f64,
    /// Fraction of precipitation mass that is snow, `0..=1`.
    pub percent_snow: f64,
    /// `rho_snow`: density of new snow (kg/m³).
    pub snow_density: f64,
    /// `T_pp`: precipitation temperature (K).
    pub precip_temp: f64,
}

impl ForcingRecord {
    /// Read one field.
    pub fn get(&self, field: ForcingField) -> f64 {
        match field {
            ForcingField::AirTemp => self.air_temp,
            ForcingField::NetSolar => self.net_solar,
            ForcingField::Thermal => self.thermal,
            ForcingField::VaporPressure => self.vapor_pressure,
            ForcingField::WindSpeed => self.wind_speed,
            ForcingField::SoilTemp => self.soil_temp,
            ForcingField::Precip => self.precip_mass,
            ForcingField::PercentSnow => self.percent_snow,
            ForcingField::SnowDensity => self.snow_density,
            ForcingField::PrecipTemp => self.precip_temp,
        }
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, field: ForcingField) -> &mut f64 {
        match field {
            ForcingField::AirTemp => &mut self.air_temp,
            ForcingField::NetSolar => &mut self.net_solar,
            ForcingField::Thermal => &mut self.thermal,
            ForcingField::VaporPressure => &mut self.vapor_pressure,
            ForcingField::WindSpeed => &mut self.wind_speed,
            ForcingField::SoilTemp => &mut self.soil_temp,
            ForcingField::Precip => &mut self.precip_mass,
            ForcingField::PercentSnow => &mut self.percent_snow,
            ForcingField::SnowDensity => &mut self.snow_density,
            ForcingField::PrecipTemp => &mut self.precip_temp,
        }
    }

    /// Convert back to raw units, keyed by raw column name.
    ///
    /// Inverse of the forcing adapter for every field.
    pub fn to_raw_row(&self) -> [(&'static str, f64); 10] {
        ForcingField::ALL.map(|f| (f.source_name(), f.transform().invert(self.get(f))))
    }
}
