use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CodecError;
use crate::units::OhmUnit;

const ONE_HUNDRED: Decimal = dec!(100);

fn invalid(s: &str) -> CodecError {
    CodecError::InvalidNumber {
        input: s.to_string(),
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-' || c == '+'
}

/// "4k7" -> 4700, "4R7" -> 4.7, "2M2" -> 2200000
fn parse_infix_notation(s: &str) -> Option<Decimal> {
    let pos = s.find(['R', 'r', 'k', 'K', 'M', 'G'])?;
    let (before, rest) = s.split_at(pos);
    let marker = rest.chars().next()?;
    let after = &rest[marker.len_utf8()..];

    if before.is_empty()
        || after.is_empty()
        || !before.chars().all(|c| c.is_ascii_digit())
        || !after.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let unit = marker.to_string().parse::<OhmUnit>().ok()?;
    let value: Decimal = format!("{before}.{after}").parse().ok()?;
    Some(value * unit.factor())
}

/// Parse a resistance written the way it is on schematics and part lists:
/// "470", "470R", "4.7k", "4.7 kΩ", "4k7", "2M2", "1 GOhm".
pub fn parse_resistance(s: &str) -> Result<Decimal, CodecError> {
    let compact: String = s.split_whitespace().collect();
    if compact.is_empty() {
        return Err(invalid(s));
    }

    if let Some(value) = parse_infix_notation(&compact) {
        return Ok(value);
    }

    let split_pos = compact
        .find(|c: char| !is_number_char(c))
        .unwrap_or(compact.len());
    if split_pos == 0 {
        return Err(invalid(s));
    }

    let (number, unit) = compact.split_at(split_pos);
    let number: Decimal = number.parse().map_err(|_| invalid(s))?;
    let unit: OhmUnit = unit.parse().map_err(|_| invalid(s))?;
    Ok(number * unit.factor())
}

/// Tolerance as a fraction, from "5%" or "0.05".
pub fn parse_tolerance(s: &str) -> Result<Decimal, CodecError> {
    let s = s.trim();
    if let Some(percent) = s.strip_suffix('%') {
        let percent: Decimal = percent.trim().parse().map_err(|_| invalid(s))?;
        Ok(percent / ONE_HUNDRED)
    } else {
        s.parse().map_err(|_| invalid(s))
    }
}

/// Temperature coefficient in ppm/°C, from "50" or "50ppm".
pub fn parse_temp_co(s: &str) -> Result<u32, CodecError> {
    let s = s.trim();
    let number = s
        .strip_suffix("ppm/°C")
        .or_else(|| s.strip_suffix("ppm"))
        .unwrap_or(s);
    number.trim().parse().map_err(|_| invalid(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_prefixed_values() {
        assert_eq!(parse_resistance("470").unwrap(), dec!(470));
        assert_eq!(parse_resistance("470R").unwrap(), dec!(470));
        assert_eq!(parse_resistance("470Ω").unwrap(), dec!(470));
        assert_eq!(parse_resistance("4.7k").unwrap(), dec!(4700));
        assert_eq!(parse_resistance("4.7 kΩ").unwrap(), dec!(4700));
        assert_eq!(parse_resistance("1 GOhm").unwrap(), dec!(1000000000));
        assert_eq!(parse_resistance("0.22").unwrap(), dec!(0.22));
        assert_eq!(parse_resistance("-5").unwrap(), dec!(-5));
    }

    #[test]
    fn infix_notation() {
        assert_eq!(parse_resistance("4k7").unwrap(), dec!(4700));
        assert_eq!(parse_resistance("4R7").unwrap(), dec!(4.7));
        assert_eq!(parse_resistance("2M2").unwrap(), dec!(2200000));
        assert_eq!(parse_resistance("1K05").unwrap(), dec!(1050));
    }

    #[test]
    fn malformed_values() {
        for input in ["", "k", "4.7x", "4..7k", "kΩ", "4k7k"] {
            assert!(
                parse_resistance(input).is_err(),
                "Expected error for '{}'",
                input
            );
        }
    }

    #[test]
    fn tolerances() {
        assert_eq!(parse_tolerance("5%").unwrap(), dec!(0.05));
        assert_eq!(parse_tolerance("0.25 %").unwrap(), dec!(0.0025));
        assert_eq!(parse_tolerance("0.1").unwrap(), dec!(0.1));
        assert!(parse_tolerance("five").is_err());
    }

    #[test]
    fn temp_coefficients() {
        assert_eq!(parse_temp_co("50").unwrap(), 50);
        assert_eq!(parse_temp_co("100ppm").unwrap(), 100);
        assert_eq!(parse_temp_co("15 ppm/°C").unwrap(), 15);
        assert!(parse_temp_co("-5").is_err());
    }
}
