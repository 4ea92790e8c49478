/// Physical constants used by the psychrometric correlations.
///
/// Units are kJ/kg·K for specific heats and kJ/kg for the latent heat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    /// Specific heat of dry air.
    pub cp_air: f64,

    /// Specific heat of water vapour.
    pub cp_vapor: f64,

    /// Specific heat of liquid water.
    pub cp_water: f64,

    /// Latent heat of vaporization at 0 °C.
    pub latent_heat: f64,

    /// Ratio of the molecular weights of water vapour and dry air.
    pub molecular_weight_ratio: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            cp_air: 1.006,
            cp_vapor: 1.805,
            cp_water: 4.186,
            latent_heat: 2501.0,
            molecular_weight_ratio: 0.62198,
        }
    }
}
