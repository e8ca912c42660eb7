use anyhow::{Context, Result};
use log::debug;
use resistor_codec::{BandLayout, decode, encode, parse_resistance, parse_temp_co, parse_tolerance};

use crate::OutputFormat;

pub fn execute(
    value: &str,
    layout: BandLayout,
    tolerance: Option<&str>,
    temp_co: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let resistance =
        parse_resistance(value).with_context(|| format!("Failed to parse resistance '{value}'"))?;
    let tolerance = tolerance
        .map(|t| parse_tolerance(t).with_context(|| format!("Failed to parse tolerance '{t}'")))
        .transpose()?;
    let temp_co = temp_co
        .map(|t| {
            parse_temp_co(t)
                .with_context(|| format!("Failed to parse temperature coefficient '{t}'"))
        })
        .transpose()?;
    debug!("Decoding {resistance}Ω as {layout} (tolerance {tolerance:?}, temp_co {temp_co:?})");

    let bands = decode(resistance, layout, tolerance, temp_co)
        .with_context(|| format!("No {layout} color code for '{value}'"))?;

    // Read the bands back so the output shows exactly what they print
    let spec = encode(layout, &bands)?;
    debug!("Decoded {value} as {bands}");

    super::print_spec(layout, &bands, &spec, output)
}
