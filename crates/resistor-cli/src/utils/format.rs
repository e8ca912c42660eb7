use anyhow::Result;
use resistor_codec::{ResistorSpec, format_scaled};
use rust_decimal::Decimal;

/// "4.7 kΩ"
pub fn format_ohms(ohms: Decimal) -> Result<String> {
    let (value, unit) = format_scaled(ohms)?;
    Ok(format!("{value} {unit}"))
}

/// Tolerance interval in the nominal value's unit, e.g. "4.465 – 4.935 kΩ"
pub fn format_range(spec: &ResistorSpec) -> Option<String> {
    let (min, max) = spec.bounds()?;
    let unit = spec.unit();
    Some(format!("{} – {} {}", unit.scale(min), unit.scale(max), unit))
}

pub fn format_tolerance(spec: &ResistorSpec) -> Option<String> {
    spec.tolerance_percent().map(|percent| format!("±{percent}%"))
}

pub fn format_temp_co(spec: &ResistorSpec) -> Option<String> {
    spec.temp_co.map(|ppm| format!("{ppm} ppm/°C"))
}

/// Every unit the nominal value reaches, one per line
pub fn format_unit_forms(spec: &ResistorSpec) -> String {
    spec.unit_forms()
        .into_iter()
        .map(|(value, unit)| format!("{value} {unit}"))
        .collect::<Vec<_>>()
        .join("\n")
}
