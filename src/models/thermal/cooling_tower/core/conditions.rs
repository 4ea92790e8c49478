/// Water and air temperatures at the tower's design point, in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConditions {
    /// Hot water temperature entering the fill.
    pub hot_water_c: f64,

    /// Cold water temperature leaving the basin.
    pub cold_water_c: f64,

    /// Ambient wet-bulb temperature.
    pub wet_bulb_c: f64,
}

impl DesignConditions {
    #[must_use]
    pub const fn new(hot_water_c: f64, cold_water_c: f64, wet_bulb_c: f64) -> Self {
        Self {
            hot_water_c,
            cold_water_c,
            wet_bulb_c,
        }
    }

    /// Hot minus cold water temperature.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.hot_water_c - self.cold_water_c
    }

    /// Cold water minus wet-bulb temperature.
    #[must_use]
    pub fn approach(&self) -> f64 {
        self.cold_water_c - self.wet_bulb_c
    }

    /// Returns `true` if `hot > cold > wet bulb`.
    ///
    /// `NaN` in any field fails the check.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.hot_water_c > self.cold_water_c && self.cold_water_c > self.wet_bulb_c
    }

    /// Same conditions at a different wet bulb.
    #[must_use]
    pub const fn with_wet_bulb(self, wet_bulb_c: f64) -> Self {
        Self { wet_bulb_c, ..self }
    }

    /// Conditions with the hot water at `hot_water_c` and the range unchanged.
    #[must_use]
    pub fn shifted_to(self, hot_water_c: f64) -> Self {
        Self {
            hot_water_c,
            cold_water_c: hot_water_c - self.range(),
            ..self
        }
    }
}
