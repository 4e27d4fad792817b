//! Reportable output records and the ordered output table.

use std::fmt;

use indexmap::IndexMap;

use crate::time::Timestamp;

// ── OutputField ───────────────────────────────────────────────────

/// A column of the output schema.
///
/// The first ten are energy-balance terms, the rest describe the pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputField {
    /// Average net allwave radiation (W/m²).
    NetRad,
    /// Average sensible heat transfer (W/m²).
    SensibleHeat,
    /// Average latent heat exchange (W/m²).
    LatentHeat,
    /// Average snow/soil conduction (W/m²).
    SnowSoil,
    /// Average precipitation-advected energy (W/m²).
    PrecipAdvected,
    /// Average net energy into the snowcover (W/m²).
    SumEb,
    /// Summed evaporation (kg/m²).
    Evaporation,
    /// Summed melt (kg/m²).
    Snowmelt,
    /// Summed snow-water input (kg/m²).
    Swi,
    /// Snowcover cold content (J/m²).
    ColdContent,
    /// Snowcover thickness (m).
    Thickness,
    /// Average snow density (kg/m³).
    SnowDensity,
    /// Snowcover specific mass (kg/m²).
    SpecificMass,
    /// Liquid water content (kg/m²).
    LiquidWater,
    /// Surface layer temperature (°C).
    TempSurf,
    /// Lower layer temperature (°C).
    TempLower,
    /// Average snowcover temperature (°C).
    TempSnowcover,
    /// Lower layer thickness (m).
    ThicknessLower,
    /// Fraction of liquid water holding capacity filled.
    WaterSaturation,
}

impl OutputField {
    /// Every column, in schema order.
    pub const ALL: [OutputField; 19] = [
        Self::NetRad,
        Self::SensibleHeat,
        Self::LatentHeat,
        Self::SnowSoil,
        Self::PrecipAdvected,
        Self::SumEb,
        Self::Evaporation,
        Self::Snowmelt,
        Self::Swi,
        Self::ColdContent,
        Self::Thickness,
        Self::SnowDensity,
        Self::SpecificMass,
        Self::LiquidWater,
        Self::TempSurf,
        Self::TempLower,
        Self::TempSnowcover,
        Self::ThicknessLower,
        Self::WaterSaturation,
    ];

    /// Public column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NetRad => "net_rad",
            Self::SensibleHeat => "sensible_heat",
            Self::LatentHeat => "latent_heat",
            Self::SnowSoil => "snow_soil",
            Self::PrecipAdvected => "precip_advected",
            Self::SumEb => "sum_EB",
            Self::Evaporation => "evaporation",
            Self::Snowmelt => "snowmelt",
            Self::Swi => "SWI",
            Self::ColdContent => "cold_content",
            Self::Thickness => "thickness",
            Self::SnowDensity => "snow_density",
            Self::SpecificMass => "specific_mass",
            Self::LiquidWater => "liquid_water",
            Self::TempSurf => "temp_surf",
            Self::TempLower => "temp_lower",
            Self::TempSnowcover => "temp_snowcover",
            Self::ThicknessLower => "thickness_lower",
            Self::WaterSaturation => "water_saturation",
        }
    }

    /// Look up a column by public name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── OutputRecord ──────────────────────────────────────────────────

/// One reporting period.
///
/// A plain value copied out of the live state at capture time; later
/// mutation of the state cannot reach it. Temperatures are Celsius, all
/// other fields are in kernel units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputRecord {
    /// Start of the averaging window.
    #[cfg_attr(feature = "serde", serde(rename = "datetime"))]
    pub timestamp: Timestamp,
    /// Average net allwave radiation (W/m²).
    pub net_rad: f64,
    /// Average sensible heat transfer (W/m²).
    pub sensible_heat: f64,
    /// Average latent heat exchange (W/m²).
    pub latent_heat: f64,
    /// Average snow/soil conduction (W/m²).
    pub snow_soil: f64,
    /// Average precipitation-advected energy (W/m²).
    pub precip_advected: f64,
    /// Average net energy into the snowcover (W/m²).
    #[cfg_attr(feature = "serde", serde(rename = "sum_EB"))]
    pub sum_eb: f64,
    /// Summed evaporation (kg/m²).
    pub evaporation: f64,
    /// Summed melt (kg/m²).
    pub snowmelt: f64,
    /// Summed snow-water input (kg/m²).
    #[cfg_attr(feature = "serde", serde(rename = "SWI"))]
    pub swi: f64,
    /// Snowcover cold content (J/m²).
    pub cold_content: f64,
    /// Snowcover thickness (m).
    pub thickness: f64,
    /// Average snow density (kg/m³).
    pub snow_density: f64,
    /// Snowcover specific mass (kg/m²).
    pub specific_mass: f64,
    /// Liquid water content (kg/m²).
    pub liquid_water: f64,
    /// Surface layer temperature (°C).
    pub temp_surf: f64,
    /// Lower layer temperature (°C).
    pub temp_lower: f64,
    /// Average snowcover temperature (°C).
    pub temp_snowcover: f64,
    /// Lower layer thickness (m).
    pub thickness_lower: f64,
    /// Fraction of liquid water holding capacity filled.
    pub water_saturation: f64,
}

impl OutputRecord {
    /// Read one column.
    pub fn get(&self, field: OutputField) -> f64 {
        match field {
            OutputField::NetRad => self.net_rad,
            OutputField::SensibleHeat => self.sensible_heat,
            OutputField::LatentHeat => self.latent_heat,
            OutputField::SnowSoil => self.snow_soil,
            OutputField::PrecipAdvected => self.precip_advected,
            OutputField::SumEb => self.sum_eb,
            OutputField::Evaporation => self.evaporation,
            OutputField::Snowmelt => self.snowmelt,
            OutputField::Swi => self.swi,
            OutputField::ColdContent => self.cold_content,
            OutputField::Thickness => self.thickness,
            OutputField::SnowDensity => self.snow_density,
            OutputField::SpecificMass => self.specific_mass,
            OutputField::LiquidWater => self.liquid_water,
            OutputField::TempSurf => self.temp_surf,
            OutputField::TempLower => self.temp_lower,
            OutputField::TempSnowcover => self.temp_snowcover,
            OutputField::ThicknessLower => self.thickness_lower,
            OutputField::WaterSaturation => self.water_saturation,
        }
    }
}

// ── OutputTable ───────────────────────────────────────────────────

/// Chronologically ordered output records keyed by window start.
///
/// Insertion order is significant and always chronological: [`push`]
/// refuses a record that does not come strictly after the last one.
///
/// [`push`]: OutputTable::push
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputTable {
    records: IndexMap<Timestamp, OutputRecord>,
}

impl OutputTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// Returns the record back as `Err` if its timestamp is not strictly
    /// after the last record's.
    pub fn push(&mut self, record: OutputRecord) -> Result<(), OutputRecord> {
        if let Some((&last, _)) = self.records.last() {
            if record.timestamp <= last {
                return Err(record);
            }
        }
        self.records.insert(record.timestamp, record);
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record whose window starts at `timestamp`.
    pub fn get(&self, timestamp: &Timestamp) -> Option<&OutputRecord> {
        self.records.get(timestamp)
    }

    /// Record at position `index` in chronological order.
    pub fn get_index(&self, index: usize) -> Option<&OutputRecord> {
        self.records.get_index(index).map(|(_, r)| r)
    }

    /// First record.
    pub fn first(&self) -> Option<&OutputRecord> {
        self.records.first().map(|(_, r)| r)
    }

    /// Last record.
    pub fn last(&self) -> Option<&OutputRecord> {
        self.records.last().map(|(_, r)| r)
    }

    /// Records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &OutputRecord> + '_ {
        self.records.values()
    }

    /// Window-start timestamps in chronological order.
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.records.keys().copied()
    }

    /// One column across all records.
    pub fn column(&self, field: OutputField) -> Vec<f64> {
        self.iter().map(|r| r.get(field)).collect()
    }

    /// One column by public name, or `None` for an unknown name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        OutputField::from_name(name).map(|f| self.column(f))
    }

    /// Consume the table, yielding records in chronological order.
    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a OutputTable {
    type Item = &'a OutputRecord;
    type IntoIter = indexmap::map::Values<'a, Timestamp, OutputRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OutputTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.values())
    }
}
