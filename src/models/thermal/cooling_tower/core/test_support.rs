use super::{DesignConditions, FillCorrelation, FormulaKind};

/// 37 °C hot water, 32 °C cold water, 27 °C wet bulb.
pub(super) const DESIGN: DesignConditions = DesignConditions::new(37.0, 32.0, 27.0);

/// Design liquid-to-gas ratio.
pub(super) const DESIGN_N: f64 = 1.8488;

/// Counterflow fill that balances the simplified integral near `DESIGN_N`.
pub(super) const COUNTER_FILL: FillCorrelation =
    FillCorrelation::new(0.85, -0.6, FormulaKind::Double);

/// Crossflow fill that balances the simplified integral near L/G 2.06.
pub(super) const CROSS_FILL: FillCorrelation =
    FillCorrelation::new(-0.1, 0.0, FormulaKind::Single);

/// Counterflow fill that balances the full integral at `DESIGN` and `DESIGN_N`.
pub(super) const MATCHED_FILL: FillCorrelation =
    FillCorrelation::new(1.393, -0.6, FormulaKind::Double);
