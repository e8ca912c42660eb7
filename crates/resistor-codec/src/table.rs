//! The color code table.
//!
//! Each role keeps its own mapping so a color can mean different things in
//! different positions (Gold is multiplier 10^-1 but tolerance 5%). Lookups
//! are total only over the colors valid for that role.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CodecError;

pub const MIN_MULTIPLIER: i8 = -2;
pub const MAX_MULTIPLIER: i8 = 9;

const ONE_HUNDRED: Decimal = dec!(100);

const DIGITS: [(Color, u8); 10] = [
    (Color::Black, 0),
    (Color::Brown, 1),
    (Color::Red, 2),
    (Color::Orange, 3),
    (Color::Yellow, 4),
    (Color::Green, 5),
    (Color::Blue, 6),
    (Color::Violet, 7),
    (Color::Grey, 8),
    (Color::White, 9),
];

const MULTIPLIERS: [(Color, i8); 12] = [
    (Color::Black, 0),
    (Color::Brown, 1),
    (Color::Red, 2),
    (Color::Orange, 3),
    (Color::Yellow, 4),
    (Color::Green, 5),
    (Color::Blue, 6),
    (Color::Violet, 7),
    (Color::Grey, 8),
    (Color::White, 9),
    (Color::Gold, -1),
    (Color::Silver, -2),
];

// Fractions, not percentages
const TOLERANCES: [(Color, Decimal); 10] = [
    (Color::Brown, dec!(0.01)),
    (Color::Red, dec!(0.02)),
    (Color::Orange, dec!(0.03)),
    (Color::Yellow, dec!(0.04)),
    (Color::Green, dec!(0.005)),
    (Color::Blue, dec!(0.0025)),
    (Color::Violet, dec!(0.001)),
    (Color::Grey, dec!(0.0005)),
    (Color::Gold, dec!(0.05)),
    (Color::Silver, dec!(0.1)),
];

// ppm/°C
const TEMP_COEFFICIENTS: [(Color, u32); 6] = [
    (Color::Brown, 100),
    (Color::Red, 50),
    (Color::Orange, 15),
    (Color::Yellow, 25),
    (Color::Blue, 10),
    (Color::Violet, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandRole {
    Digit,
    Multiplier,
    Tolerance,
    TempCo,
}

impl BandRole {
    pub const ALL: [BandRole; 4] = [
        BandRole::Digit,
        BandRole::Multiplier,
        BandRole::Tolerance,
        BandRole::TempCo,
    ];

    /// Digit and multiplier bands are always printed; the rest may be left off.
    pub const fn is_required(&self) -> bool {
        matches!(self, BandRole::Digit | BandRole::Multiplier)
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandRole::Digit => write!(f, "digit"),
            BandRole::Multiplier => write!(f, "multiplier"),
            BandRole::Tolerance => write!(f, "tolerance"),
            BandRole::TempCo => write!(f, "temperature coefficient"),
        }
    }
}

/// The numeric meaning of a color in a particular role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "value", rename_all = "snake_case")]
pub enum BandValue {
    Digit(u8),
    Multiplier(i8),
    Tolerance(#[serde(with = "rust_decimal::serde::str")] Decimal),
    TempCo(u32),
}

impl BandValue {
    pub fn role(&self) -> BandRole {
        match self {
            BandValue::Digit(_) => BandRole::Digit,
            BandValue::Multiplier(_) => BandRole::Multiplier,
            BandValue::Tolerance(_) => BandRole::Tolerance,
            BandValue::TempCo(_) => BandRole::TempCo,
        }
    }
}

impl fmt::Display for BandValue {
    /// Tolerances print as percentages, matching how they are read off a part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandValue::Digit(d) => write!(f, "{d}"),
            BandValue::Multiplier(m) => write!(f, "{m}"),
            BandValue::Tolerance(t) => write!(f, "{}", (*t * ONE_HUNDRED).normalize()),
            BandValue::TempCo(ppm) => write!(f, "{ppm}"),
        }
    }
}

/// All entries for a role, in table order.
pub fn entries(role: BandRole) -> Vec<(Color, BandValue)> {
    match role {
        BandRole::Digit => DIGITS
            .iter()
            .map(|&(c, d)| (c, BandValue::Digit(d)))
            .collect(),
        BandRole::Multiplier => MULTIPLIERS
            .iter()
            .map(|&(c, m)| (c, BandValue::Multiplier(m)))
            .collect(),
        BandRole::Tolerance => TOLERANCES
            .iter()
            .map(|&(c, t)| (c, BandValue::Tolerance(t)))
            .collect(),
        BandRole::TempCo => TEMP_COEFFICIENTS
            .iter()
            .map(|&(c, ppm)| (c, BandValue::TempCo(ppm)))
            .collect(),
    }
}

/// Colors selectable for a role, in table order.
pub fn colors(role: BandRole) -> Vec<Color> {
    entries(role).into_iter().map(|(color, _)| color).collect()
}

pub fn lookup(role: BandRole, color: Color) -> Result<BandValue, CodecError> {
    match role {
        BandRole::Digit => digit(color).map(BandValue::Digit),
        BandRole::Multiplier => multiplier(color).map(BandValue::Multiplier),
        BandRole::Tolerance => tolerance(color).map(BandValue::Tolerance),
        BandRole::TempCo => temp_co(color).map(BandValue::TempCo),
    }
}

/// Label shown in a selection list, e.g. "-1 Gold" or "0.5 Green".
pub fn label(role: BandRole, color: Color) -> Result<String, CodecError> {
    Ok(format!("{} {}", lookup(role, color)?, color))
}

fn find<T: Copy>(table: &[(Color, T)], color: Color, role: BandRole) -> Result<T, CodecError> {
    table
        .iter()
        .find(|(c, _)| *c == color)
        .map(|&(_, value)| value)
        .ok_or(CodecError::UnknownColorForRole { color, role })
}

pub fn digit(color: Color) -> Result<u8, CodecError> {
    find(&DIGITS, color, BandRole::Digit)
}

pub fn multiplier(color: Color) -> Result<i8, CodecError> {
    find(&MULTIPLIERS, color, BandRole::Multiplier)
}

pub fn tolerance(color: Color) -> Result<Decimal, CodecError> {
    find(&TOLERANCES, color, BandRole::Tolerance)
}

pub fn temp_co(color: Color) -> Result<u32, CodecError> {
    find(&TEMP_COEFFICIENTS, color, BandRole::TempCo)
}

pub fn digit_color(code: u8) -> Result<Color, CodecError> {
    DIGITS
        .iter()
        .find(|&&(_, d)| d == code)
        .map(|&(c, _)| c)
        .ok_or(CodecError::InvalidDigit { code })
}

pub fn multiplier_color(exponent: i64) -> Result<Color, CodecError> {
    MULTIPLIERS
        .iter()
        .find(|&&(_, m)| i64::from(m) == exponent)
        .map(|&(c, _)| c)
        .ok_or(CodecError::OutOfRange { exponent })
}

/// Exact match on the fraction; 0.05 and 0.050 are the same value.
pub fn tolerance_color(fraction: Decimal) -> Result<Color, CodecError> {
    TOLERANCES
        .iter()
        .find(|&&(_, t)| t == fraction)
        .map(|&(c, _)| c)
        .ok_or(CodecError::UnknownToleranceValue { value: fraction })
}

pub fn temp_co_color(ppm: u32) -> Result<Color, CodecError> {
    TEMP_COEFFICIENTS
        .iter()
        .find(|&&(_, p)| p == ppm)
        .map(|&(c, _)| c)
        .ok_or(CodecError::UnknownTempCoValue { value: ppm })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn roles_are_bijections() {
        for role in BandRole::ALL {
            let entries = entries(role);
            let colors: HashSet<_> = entries.iter().map(|(c, _)| *c).collect();
            let values: HashSet<_> = entries.iter().map(|(_, v)| v.to_string()).collect();
            assert_eq!(colors.len(), entries.len(), "duplicate color in {role}");
            assert_eq!(values.len(), entries.len(), "duplicate code in {role}");
            for (color, value) in entries {
                assert_eq!(value.role(), role);
                assert_eq!(lookup(role, color).unwrap(), value);
            }
        }
    }

    #[test]
    fn metallic_colors_only_in_multiplier_and_tolerance() {
        for color in [Color::Gold, Color::Silver] {
            assert!(digit(color).is_err());
            assert!(temp_co(color).is_err());
            assert!(multiplier(color).is_ok());
            assert!(tolerance(color).is_ok());
        }
        assert_eq!(multiplier(Color::Gold).unwrap(), -1);
        assert_eq!(multiplier(Color::Silver).unwrap(), -2);
        assert_eq!(tolerance(Color::Gold).unwrap(), dec!(0.05));
        assert_eq!(tolerance(Color::Silver).unwrap(), dec!(0.1));
    }

    #[test]
    fn temp_co_reads_its_own_table() {
        assert_eq!(temp_co(Color::Brown).unwrap(), 100);
        assert_eq!(temp_co(Color::Violet).unwrap(), 5);
        assert_eq!(
            temp_co(Color::Green),
            Err(CodecError::UnknownColorForRole {
                color: Color::Green,
                role: BandRole::TempCo,
            })
        );
    }

    #[test]
    fn spectrum_order() {
        assert_eq!(colors(BandRole::Digit), Color::ALL[..10].to_vec());
        assert_eq!(colors(BandRole::Multiplier), Color::ALL.to_vec());
    }

    #[test]
    fn inverse_lookups() {
        assert_eq!(digit_color(7).unwrap(), Color::Violet);
        assert_eq!(digit_color(10), Err(CodecError::InvalidDigit { code: 10 }));
        assert_eq!(multiplier_color(-2).unwrap(), Color::Silver);
        assert_eq!(
            multiplier_color(10),
            Err(CodecError::OutOfRange { exponent: 10 })
        );
        assert_eq!(tolerance_color(dec!(0.050)).unwrap(), Color::Gold);
        assert!(tolerance_color(dec!(0.2)).is_err());
        assert_eq!(temp_co_color(25).unwrap(), Color::Yellow);
        assert_eq!(
            temp_co_color(1),
            Err(CodecError::UnknownTempCoValue { value: 1 })
        );
    }

    #[test]
    fn labels() {
        assert_eq!(label(BandRole::Digit, Color::Yellow).unwrap(), "4 Yellow");
        assert_eq!(label(BandRole::Multiplier, Color::Gold).unwrap(), "-1 Gold");
        assert_eq!(label(BandRole::Tolerance, Color::Green).unwrap(), "0.5 Green");
        assert_eq!(label(BandRole::Tolerance, Color::Blue).unwrap(), "0.25 Blue");
        assert_eq!(label(BandRole::TempCo, Color::Brown).unwrap(), "100 Brown");
        assert!(label(BandRole::Digit, Color::Silver).is_err());
    }
}
