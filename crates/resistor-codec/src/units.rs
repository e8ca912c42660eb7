use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OhmUnit {
    Ohm,
    KiloOhm,
    MegaOhm,
    GigaOhm,
}

impl OhmUnit {
    pub const ALL: [OhmUnit; 4] = [
        OhmUnit::Ohm,
        OhmUnit::KiloOhm,
        OhmUnit::MegaOhm,
        OhmUnit::GigaOhm,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            OhmUnit::Ohm => "Ω",
            OhmUnit::KiloOhm => "kΩ",
            OhmUnit::MegaOhm => "MΩ",
            OhmUnit::GigaOhm => "GΩ",
        }
    }

    pub const fn exponent(&self) -> i32 {
        match self {
            OhmUnit::Ohm => 0,
            OhmUnit::KiloOhm => 3,
            OhmUnit::MegaOhm => 6,
            OhmUnit::GigaOhm => 9,
        }
    }

    pub fn factor(&self) -> Decimal {
        pow10(self.exponent())
    }

    /// Express a value given in ohms in this unit.
    pub fn scale(&self, ohms: Decimal) -> Decimal {
        (ohms / self.factor()).normalize()
    }

    /// Largest unit whose lower bound `ohms` reaches; Ω below 1000.
    pub fn for_value(ohms: Decimal) -> OhmUnit {
        OhmUnit::ALL
            .into_iter()
            .rev()
            .find(|unit| ohms >= unit.factor())
            .unwrap_or(OhmUnit::Ohm)
    }
}

impl fmt::Display for OhmUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for OhmUnit {
    type Err = CodecError;

    /// Accepts a prefix alone ("k") or followed by Ω, R, "Ohm" or "Ohms".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let prefix = ["Ω", "Ohms", "ohms", "Ohm", "ohm", "R", "r"]
            .iter()
            .find_map(|suffix| trimmed.strip_suffix(suffix))
            .unwrap_or(trimmed);
        match prefix {
            "" => Ok(OhmUnit::Ohm),
            "k" | "K" => Ok(OhmUnit::KiloOhm),
            "M" => Ok(OhmUnit::MegaOhm),
            "G" => Ok(OhmUnit::GigaOhm),
            _ => Err(CodecError::InvalidNumber {
                input: s.to_string(),
            }),
        }
    }
}

#[inline]
pub(crate) fn pow10(exp: i32) -> Decimal {
    if exp >= 0 {
        Decimal::from_i128_with_scale(10i128.pow(exp as u32), 0)
    } else {
        Decimal::new(1, (-exp) as u32)
    }
}

/// Scale a resistance to the largest of Ω, kΩ, MΩ, GΩ that keeps it >= 1.
///
/// Thresholds are inclusive: 1000 is "1 kΩ", 999 stays "999 Ω".
pub fn format_scaled(ohms: Decimal) -> Result<(Decimal, OhmUnit), CodecError> {
    if ohms < Decimal::ZERO {
        return Err(CodecError::InvalidResistance { value: ohms });
    }
    let unit = OhmUnit::for_value(ohms);
    Ok((unit.scale(ohms), unit))
}
