use rust_decimal::Decimal;

use crate::bands::Bands;
use crate::error::CodecError;
use crate::layout::BandLayout;
use crate::table::{self, BandRole, MAX_MULTIPLIER, MIN_MULTIPLIER};

/// Significant digits of `value` and the power of ten they are scaled by,
/// with trailing zeros moved into the exponent: 4700 -> ("47", 2).
fn significand(value: Decimal) -> (String, i64) {
    let normalized = value.normalize();
    let mut digits = normalized.mantissa().unsigned_abs().to_string();
    let mut exponent = -i64::from(normalized.scale());
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
        exponent += 1;
    }
    (digits, exponent)
}

/// Find the bands that print `resistance` exactly under `layout`.
///
/// The value is never rounded: a value needing more significant digits than
/// the layout has fails with `UnrepresentableValue`. Tolerance and
/// temperature coefficient bands are left unset unless a value is given.
pub fn decode(
    resistance: Decimal,
    layout: BandLayout,
    tolerance: Option<Decimal>,
    temp_co: Option<u32>,
) -> Result<Bands, CodecError> {
    if resistance <= Decimal::ZERO {
        return Err(CodecError::InvalidResistance { value: resistance });
    }

    let (mut digits, mut exponent) = significand(resistance);
    let width = layout.digit_count();
    if digits.len() > width {
        return Err(CodecError::UnrepresentableValue {
            value: resistance.normalize(),
            layout,
            digits: digits.len() as u32,
            available: width,
        });
    }
    while digits.len() < width {
        digits.push('0');
        exponent -= 1;
    }
    if exponent < i64::from(MIN_MULTIPLIER) || exponent > i64::from(MAX_MULTIPLIER) {
        return Err(CodecError::OutOfRange { exponent });
    }

    let mut bands = Vec::with_capacity(layout.band_count());
    for ch in digits.chars() {
        let code = ch.to_digit(10).unwrap_or_default() as u8;
        bands.push(Some(table::digit_color(code)?));
    }
    bands.push(Some(table::multiplier_color(exponent)?));

    if layout.has(BandRole::Tolerance) {
        bands.push(tolerance.map(table::tolerance_color).transpose()?);
    } else if tolerance.is_some() {
        return Err(CodecError::FieldNotInLayout {
            layout,
            role: BandRole::Tolerance,
        });
    }

    if layout.has(BandRole::TempCo) {
        bands.push(temp_co.map(table::temp_co_color).transpose()?);
    } else if temp_co.is_some() {
        return Err(CodecError::FieldNotInLayout {
            layout,
            role: BandRole::TempCo,
        });
    }

    Ok(Bands::new(bands))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::color::Color::*;

    #[test]
    fn significand_strips_trailing_zeros() {
        assert_eq!(significand(dec!(4700)), ("47".to_string(), 2));
        assert_eq!(significand(dec!(10.0)), ("1".to_string(), 1));
        assert_eq!(significand(dec!(4.7)), ("47".to_string(), -1));
        assert_eq!(significand(dec!(0.22)), ("22".to_string(), -2));
    }

    #[test]
    fn pads_to_layout_width() {
        let bands = decode(dec!(10), BandLayout::Five, None, None).unwrap();
        assert_eq!(*bands, [Some(Brown), Some(Black), Some(Black), Some(Gold), None]);

        let bands = decode(dec!(4700), BandLayout::Three, None, None).unwrap();
        assert_eq!(*bands, [Some(Yellow), Some(Violet), Some(Red)]);
    }

    #[test]
    fn sub_ten_ohm_values_use_metallic_multipliers() {
        let bands = decode(dec!(4.7), BandLayout::Four, Some(dec!(0.05)), None).unwrap();
        assert_eq!(*bands, [Some(Yellow), Some(Violet), Some(Gold), Some(Gold)]);

        let bands = decode(dec!(0.47), BandLayout::Four, None, None).unwrap();
        assert_eq!(*bands, [Some(Yellow), Some(Violet), Some(Silver), None]);
    }

    #[test]
    fn six_band_with_temp_co() {
        let bands = decode(dec!(47500), BandLayout::Six, Some(dec!(0.001)), Some(25)).unwrap();
        assert_eq!(bands.to_string(), "Yellow Violet Green Red Violet Yellow");
    }

    #[test]
    fn refuses_to_round() {
        assert_eq!(
            decode(dec!(123), BandLayout::Three, None, None),
            Err(CodecError::UnrepresentableValue {
                value: dec!(123),
                layout: BandLayout::Three,
                digits: 3,
                available: 2,
            })
        );
        assert!(decode(dec!(123), BandLayout::Five, None, None).is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            decode(dec!(-5), BandLayout::Four, None, None),
            Err(CodecError::InvalidResistance { value: dec!(-5) })
        );
        assert!(matches!(
            decode(Decimal::ZERO, BandLayout::Six, None, None),
            Err(CodecError::InvalidResistance { .. })
        ));
    }

    #[test]
    fn multiplier_range() {
        assert_eq!(
            decode(dec!(0.01), BandLayout::Three, None, None),
            Err(CodecError::OutOfRange { exponent: -3 })
        );
        assert_eq!(
            decode(dec!(100000000000), BandLayout::Three, None, None),
            Err(CodecError::OutOfRange { exponent: 10 })
        );
        assert!(decode(dec!(99000000000), BandLayout::Three, None, None).is_ok());
    }

    #[test]
    fn unknown_tolerance_and_temp_co() {
        assert_eq!(
            decode(dec!(470), BandLayout::Four, Some(dec!(0.2)), None),
            Err(CodecError::UnknownToleranceValue { value: dec!(0.2) })
        );
        assert_eq!(
            decode(dec!(470), BandLayout::Six, None, Some(20)),
            Err(CodecError::UnknownTempCoValue { value: 20 })
        );
    }

    #[test]
    fn fields_outside_layout() {
        assert_eq!(
            decode(dec!(470), BandLayout::Three, Some(dec!(0.05)), None),
            Err(CodecError::FieldNotInLayout {
                layout: BandLayout::Three,
                role: BandRole::Tolerance,
            })
        );
        assert_eq!(
            decode(dec!(470), BandLayout::Five, None, Some(100)),
            Err(CodecError::FieldNotInLayout {
                layout: BandLayout::Five,
                role: BandRole::TempCo,
            })
        );
    }
}
