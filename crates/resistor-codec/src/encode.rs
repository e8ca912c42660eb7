use rust_decimal::Decimal;

use crate::color::Color;
use crate::error::CodecError;
use crate::layout::BandLayout;
use crate::spec::ResistorSpec;
use crate::table::{self, BandRole};
use crate::units::pow10;

/// Combine digit codes, most significant first: [4, 7] -> 47, [1, 0, 0] -> 100.
pub fn mantissa(digits: &[u8]) -> Result<u32, CodecError> {
    digits.iter().try_fold(0u32, |acc, &code| {
        if code > 9 {
            return Err(CodecError::InvalidDigit { code });
        }
        acc.checked_mul(10)
            .and_then(|shifted| shifted.checked_add(u32::from(code)))
            .ok_or(CodecError::MantissaOverflow {
                count: digits.len(),
            })
    })
}

/// Read the value printed by `bands` under `layout`.
///
/// Digit and multiplier bands must be set; tolerance and temperature
/// coefficient bands may be `None`, which leaves the field absent.
pub fn encode(layout: BandLayout, bands: &[Option<Color>]) -> Result<ResistorSpec, CodecError> {
    if bands.len() != layout.band_count() {
        return Err(CodecError::LayoutMismatch {
            layout,
            expected: layout.band_count(),
            actual: bands.len(),
        });
    }

    let mut digits = Vec::with_capacity(layout.digit_count());
    let mut exponent = 0i8;
    let mut tolerance = None;
    let mut temp_co = None;

    for (position, (&role, band)) in layout.roles().iter().zip(bands).enumerate() {
        let color = match band {
            Some(color) => *color,
            None if role.is_required() => {
                return Err(CodecError::MissingBand {
                    position: position + 1,
                    role,
                });
            }
            None => continue,
        };
        match role {
            BandRole::Digit => digits.push(table::digit(color)?),
            BandRole::Multiplier => exponent = table::multiplier(color)?,
            BandRole::Tolerance => tolerance = Some(table::tolerance(color)?),
            BandRole::TempCo => temp_co = Some(table::temp_co(color)?),
        }
    }

    let resistance = Decimal::from(mantissa(&digits)?) * pow10(i32::from(exponent));
    Ok(ResistorSpec {
        resistance,
        tolerance,
        temp_co,
    })
}
