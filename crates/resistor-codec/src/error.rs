use rust_decimal::Decimal;

use crate::color::Color;
use crate::layout::BandLayout;
use crate::table::BandRole;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("{layout} layout expects {expected} bands, got {actual}")]
    LayoutMismatch {
        layout: BandLayout,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid digit code {code}: digit bands hold 0-9")]
    InvalidDigit { code: u8 },
    #[error("{count} digit codes do not fit in a mantissa")]
    MantissaOverflow { count: usize },
    #[error("{color} is not a valid {role} band")]
    UnknownColorForRole { color: Color, role: BandRole },
    #[error("Band {position} ({role}) must be set")]
    MissingBand { position: usize, role: BandRole },
    #[error("Invalid resistance {value}: must be positive")]
    InvalidResistance { value: Decimal },
    #[error("Multiplier 10^{exponent} is outside the supported range 10^-2..10^9")]
    OutOfRange { exponent: i64 },
    #[error("{value}Ω needs {digits} significant digits; the {layout} layout has {available}")]
    UnrepresentableValue {
        value: Decimal,
        layout: BandLayout,
        digits: u32,
        available: usize,
    },
    #[error("No tolerance band for {value}")]
    UnknownToleranceValue { value: Decimal },
    #[error("No temperature coefficient band for {value}ppm/°C")]
    UnknownTempCoValue { value: u32 },
    #[error("The {layout} layout has no {role} band")]
    FieldNotInLayout { layout: BandLayout, role: BandRole },
    #[error("Unknown color '{input}'")]
    UnknownColor { input: String },
    #[error("Unsupported band count {count}: expected 3, 4, 5 or 6")]
    InvalidBandCount { count: usize },
    #[error("Invalid number '{input}'")]
    InvalidNumber { input: String },
}
