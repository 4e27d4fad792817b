//! The live snowpack state for a single point.

/// Surface roughness length assigned to a fresh point (m).
pub const DEFAULT_ROUGHNESS: f64 = 0.005;

/// Snowpack and energy-balance state for one point (a 1×1 grid).
///
/// Every field describes the same instant. The driver owns exactly one
/// `SnowState` per run and lends it to the kernel by exclusive reference
/// for each step; the kernel mutates it in place and must leave it
/// consistent when it reports success. After a failed step the state is
/// discarded, never read.
///
/// Temperatures are absolute (Kelvin-equivalent). Energy terms are the
/// kernel's running averages (`*_bar`) or sums (`*_sum`) since the last
/// output.
///
/// Not `Copy`; duplicating the live state takes an explicit `clone()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnowState {
    /// Spatial mask; `1.0` marks the point as active.
    pub mask: f64,
    /// Site elevation (m).
    pub elevation: f64,
    /// `z_0`: surface roughness length (m).
    pub roughness: f64,

    /// `rho`: average snow density (kg/m³).
    pub density: f64,
    /// `T_s_0`: active (surface) layer temperature (K).
    pub temp_surface: f64,
    /// `T_s_l`: lower layer temperature (K).
    pub temp_lower: f64,
    /// `T_s`: average snowcover temperature (K).
    pub temp_snowcover: f64,

    /// `cc_s_0`: surface layer cold content (J/m²).
    pub cold_content_surface: f64,
    /// `cc_s_l`: lower layer cold content (J/m²).
    pub cold_content_lower: f64,
    /// `cc_s`: snowcover cold content (J/m²).
    pub cold_content: f64,

    /// `m_s`: specific mass of the snowcover (kg/m²).
    pub specific_mass: f64,
    /// `m_s_0`: specific mass of the surface layer (kg/m²).
    pub specific_mass_surface: f64,
    /// `m_s_l`: specific mass of the lower layer (kg/m²).
    pub specific_mass_lower: f64,

    /// `z_s`: snowcover thickness (m).
    pub thickness: f64,
    /// `z_s_0`: surface layer thickness (m).
    pub thickness_surface: f64,
    /// `z_s_l`: lower layer thickness (m).
    pub thickness_lower: f64,
    /// Number of snow layers currently present (0, 1 or 2).
    pub layer_count: u32,

    /// `h2o`: liquid water content (kg/m²).
    pub liquid_water: f64,
    /// `h2o_max`: liquid water holding capacity (kg/m²).
    pub liquid_water_max: f64,
    /// `h2o_vol`: liquid water volume ratio.
    pub liquid_water_vol: f64,
    /// `h2o_total`: total liquid water (kg/m²).
    pub liquid_water_total: f64,
    /// `h2o_sat`: fraction of the holding capacity that is filled.
    pub water_saturation: f64,

    /// `R_n_bar`: average net allwave radiation (W/m²).
    pub net_rad: f64,
    /// `H_bar`: average sensible heat transfer (W/m²).
    pub sensible_heat: f64,
    /// `L_v_E_bar`: average latent heat exchange (W/m²).
    pub latent_heat: f64,
    /// `G_bar`: average snow/soil conduction (W/m²).
    pub snow_soil: f64,
    /// `G_0_bar`: average conduction into the surface layer (W/m²).
    pub snow_soil_surface: f64,
    /// `M_bar`: average precipitation-advected energy (W/m²).
    pub precip_advected: f64,
    /// `delta_Q_bar`: average net energy into the snowcover (W/m²).
    pub sum_eb: f64,
    /// `delta_Q_0_bar`: average net energy into the surface layer (W/m²).
    pub sum_eb_surface: f64,
    /// `E_s_sum`: summed evaporation/sublimation mass (kg/m²).
    pub evaporation: f64,
    /// `melt_sum`: summed melt (kg/m²).
    pub snowmelt: f64,
    /// `ro_pred_sum`: summed snow-water input / runoff (kg/m²).
    pub swi: f64,

    /// Simulated seconds elapsed since the start of the run.
    pub current_time: f64,
    /// Simulated seconds elapsed since the last output capture.
    pub time_since_out: f64,
}

impl SnowState {
    /// Bare ground, no snowpack, at the given elevation.
    ///
    /// Every physical quantity is zero except the elevation, the surface
    /// roughness, and the mask. A non-zero initial pack must be written
    /// into the returned value before the first step.
    pub fn bare_ground(elevation: f64) -> Self {
        Self {
            mask: 1.0,
            elevation,
            roughness: DEFAULT_ROUGHNESS,
            ..Self::default()
        }
    }
}
