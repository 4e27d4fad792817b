//! Output capture: live state to reportable record.

use chrono::TimeDelta;
use pointsnow_core::units::kelvin_to_celsius;
use pointsnow_core::{OutputRecord, SnowState, Timestamp};

/// Copy one reportable record out of `state`.
///
/// Every field is copied by value, so later mutation of `state` cannot
/// reach the record. Temperatures come back to Celsius. The record is
/// stamped with the start of its last data interval, `window_end -
/// interval`. `state` is not modified.
pub fn capture(state: &SnowState, window_end: Timestamp, interval: TimeDelta) -> OutputRecord {
    OutputRecord {
        timestamp: window_end - interval,
        net_rad: state.net_rad,
        sensible_heat: state.sensible_heat,
        latent_heat: state.latent_heat,
        snow_soil: state.snow_soil,
        precip_advected: state.precip_advected,
        sum_eb: state.sum_eb,
        evaporation: state.evaporation,
        snowmelt: state.snowmelt,
        swi: state.swi,
        cold_content: state.cold_content,
        thickness: state.thickness,
        snow_density: state.density,
        specific_mass: state.specific_mass,
        liquid_water: state.liquid_water,
        temp_surf: kelvin_to_celsius(state.temp_surface),
        temp_lower: kelvin_to_celsius(state.temp_lower),
        temp_snowcover: kelvin_to_celsius(state.temp_snowcover),
        thickness_lower: state.thickness_lower,
        water_saturation: state.water_saturation,
    }
}
