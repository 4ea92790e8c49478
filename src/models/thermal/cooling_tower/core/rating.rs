use super::FlowConfiguration;

/// Default design liquid-to-gas ratio.
pub const DEFAULT_LIQUID_GAS_RATIO: f64 = 1.8488;

/// Constants that convert between circulating flow and rated capacity.
///
/// One cooling ton (RT) is the duty of `slope` m³/h of water cooled through
/// a 5 °C range. At the design L/G the capacity is
/// `flow / slope · efficiency`; off design it scales with `c / N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingConstants {
    /// Design liquid-to-gas ratio `c`, also the starting trial of the
    /// liquid-to-gas search.
    pub design_liquid_gas_ratio: f64,

    /// Water flow per cooling ton, m³/h.
    pub slope: f64,

    /// Rating efficiency.
    pub efficiency: f64,
}

impl Default for RatingConstants {
    fn default() -> Self {
        Self {
            design_liquid_gas_ratio: DEFAULT_LIQUID_GAS_RATIO,
            slope: 0.78,
            efficiency: 0.98,
        }
    }
}

impl RatingConstants {
    /// Capacity in RT for `flow_m3h` at liquid-to-gas ratio `n`.
    #[must_use]
    pub fn capacity_rt(&self, flow_m3h: f64, n: f64) -> f64 {
        flow_m3h / (n / self.design_liquid_gas_ratio) / self.slope * self.efficiency
    }

    /// Flow in m³/h for `capacity_rt` at liquid-to-gas ratio `n`.
    #[must_use]
    pub fn flow_rate_m3h(&self, capacity_rt: f64, n: f64) -> f64 {
        capacity_rt * self.slope / self.efficiency * (n / self.design_liquid_gas_ratio)
    }
}

/// Rating constants for both flow configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingTable {
    pub counterflow: RatingConstants,
    pub crossflow: RatingConstants,
}

impl RatingTable {
    /// Returns the constants for `config`.
    #[must_use]
    pub const fn get(&self, config: FlowConfiguration) -> &RatingConstants {
        match config {
            FlowConfiguration::Counterflow => &self.counterflow,
            FlowConfiguration::Crossflow => &self.crossflow,
        }
    }
}
