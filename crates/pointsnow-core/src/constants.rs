//! Immutable per-run site configuration passed to the kernel.

/// Site geometry, density limits, and integration-mode flags.
///
/// Created once per run and never mutated. The kernel receives it twice
/// per call, once as its parameter block and once as its constant block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConstants {
    /// Forcing interval in minutes.
    pub time_step_minutes: f64,
    /// Maximum liquid water content as a volume ratio.
    pub max_h2o_vol: f64,
    /// Keep integrating when the ground is snow-free (kernel flag `c`).
    pub continue_no_snow: bool,
    /// Forcing temperatures arrive in Kelvin (kernel flag `K`).
    pub kelvin_inputs: bool,
    /// Mass change (kg/m²) above which the kernel refines a step.
    pub mass_threshold: f64,
    /// Time at which measurement heights are referenced (`time_z`).
    pub time_z: f64,
    /// Maximum active (surface) layer thickness (m).
    pub max_z_s_0: f64,
    /// Wind measurement height (m).
    pub z_u: f64,
    /// Air temperature and vapor pressure measurement height (m).
    pub z_t: f64,
    /// Depth of the soil temperature measurement (m).
    pub z_g: f64,
    /// Measurement heights are relative to the snow surface.
    pub relative_heights: bool,
    /// Maximum snow density (kg/m³).
    pub max_density: f64,
    /// Maximum density reachable by compaction (kg/m³).
    pub max_compact_density: f64,
    /// Maximum density reachable by liquid water (kg/m³).
    pub max_liquid_density: f64,
}

impl SiteConstants {
    /// Constants for forcing sampled every `minutes` minutes.
    pub fn for_interval_minutes(minutes: f64) -> Self {
        Self {
            time_step_minutes: minutes,
            max_h2o_vol: 0.01,
            continue_no_snow: true,
            kelvin_inputs: true,
            mass_threshold: 60.0,
            time_z: 0.0,
            max_z_s_0: 0.25,
            z_u: 5.0,
            z_t: 2.0,
            z_g: 0.3,
            relative_heights: true,
            max_density: 550.0,
            max_compact_density: 500.0,
            max_liquid_density: 500.0,
        }
    }

    /// Forcing interval in seconds.
    pub fn time_step_secs(&self) -> f64 {
        self.time_step_minutes * 60.0
    }
}

impl Default for SiteConstants {
    /// Hourly forcing.
    fn default() -> Self {
        Self::for_interval_minutes(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_defaults() {
        let c = SiteConstants::default();
        assert_eq!(c.time_step_minutes, 60.0);
        assert_eq!(c.time_step_secs(), 3600.0);
        assert_eq!(c.mass_threshold, 60.0);
        assert_eq!((c.z_u, c.z_t, c.z_g), (5.0, 2.0, 0.3));
        assert!(c.relative_heights);
        assert!(c.max_density > c.max_compact_density);
    }

    #[test]
    fn interval_only_changes_time_step() {
        let quarter = SiteConstants::for_interval_minutes(15.0);
        let hourly = SiteConstants::default();
        assert_eq!(quarter.time_step_secs(), 900.0);
        assert_eq!(
            SiteConstants {
                time_step_minutes: 60.0,
                ..quarter
            },
            hourly
        );
    }
}
