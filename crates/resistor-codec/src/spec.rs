use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::units::OhmUnit;

const ONE_HUNDRED: Decimal = dec!(100);

/// Electrical value read from (or printed as) a set of bands.
///
/// `tolerance` and `temp_co` are `None` when the band is absent, which is
/// not the same as a 0% tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResistorSpec {
    /// Nominal resistance in ohms.
    #[serde(with = "rust_decimal::serde::str")]
    pub resistance: Decimal,
    /// Tolerance as a fraction (0.05 for ±5%).
    #[serde(with = "rust_decimal::serde::str_option")]
    pub tolerance: Option<Decimal>,
    /// Temperature coefficient in ppm/°C.
    pub temp_co: Option<u32>,
}

impl ResistorSpec {
    pub fn new(resistance: Decimal) -> Self {
        Self {
            resistance,
            tolerance: None,
            temp_co: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_temp_co(mut self, ppm: u32) -> Self {
        self.temp_co = Some(ppm);
        self
    }

    pub fn tolerance_percent(&self) -> Option<Decimal> {
        self.tolerance.map(|t| (t * ONE_HUNDRED).normalize())
    }

    pub fn min_value(&self) -> Option<Decimal> {
        self.tolerance
            .map(|t| (self.resistance * (Decimal::ONE - t)).normalize())
    }

    pub fn max_value(&self) -> Option<Decimal> {
        self.tolerance
            .map(|t| (self.resistance * (Decimal::ONE + t)).normalize())
    }

    /// `[nominal * (1 - tol), nominal * (1 + tol)]`, if a tolerance is known.
    pub fn bounds(&self) -> Option<(Decimal, Decimal)> {
        self.min_value().zip(self.max_value())
    }

    /// Unit the nominal value is best shown in.
    pub fn unit(&self) -> OhmUnit {
        OhmUnit::for_value(self.resistance)
    }

    /// The nominal value in every unit it reaches, smallest unit first.
    pub fn unit_forms(&self) -> Vec<(Decimal, OhmUnit)> {
        OhmUnit::ALL
            .into_iter()
            .filter(|unit| *unit == OhmUnit::Ohm || self.resistance >= unit.factor())
            .map(|unit| (unit.scale(self.resistance), unit))
            .collect()
    }
}

impl fmt::Display for ResistorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(f, "{}{}", unit.scale(self.resistance), unit)?;
        if let Some(percent) = self.tolerance_percent() {
            write!(f, " ±{percent}%")?;
        }
        if let Some(ppm) = self.temp_co {
            write!(f, " {ppm}ppm/°C")?;
        }
        Ok(())
    }
}
