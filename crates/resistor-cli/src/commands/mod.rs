pub mod decode;
pub mod encode;
pub mod table;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, Table};
use resistor_codec::{BandLayout, Bands, ResistorSpec};
use serde_json::{Value, json};

use crate::utils::{color::format_band, format};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

fn add_row(table: &mut Table, label: &str, value: impl Into<String>) {
    table.add_row(vec![
        Cell::new(label).fg(Color::Cyan),
        Cell::new(value.into()),
    ]);
}

/// Summary table shared by `encode` and `decode`
fn spec_table(layout: BandLayout, bands: &Bands, spec: &ResistorSpec) -> Result<Table> {
    let mut table = new_table();

    let swatches: Vec<String> = bands.iter().map(|band| format_band(*band)).collect();
    add_row(&mut table, "Layout", layout.to_string());
    add_row(&mut table, "Bands", swatches.join("  "));
    add_row(&mut table, "Resistance", format::format_ohms(spec.resistance)?);
    add_row(&mut table, "Units", format::format_unit_forms(spec));

    if let Some(tolerance) = format::format_tolerance(spec) {
        add_row(&mut table, "Tolerance", tolerance);
    }
    if let Some(range) = format::format_range(spec) {
        add_row(&mut table, "Range", range);
    }
    if let Some(temp_co) = format::format_temp_co(spec) {
        add_row(&mut table, "Temp. Coefficient", temp_co);
    }

    Ok(table)
}

/// JSON document shared by `encode` and `decode`
fn spec_json(layout: BandLayout, bands: &Bands, spec: &ResistorSpec) -> Result<Value> {
    let (scaled, unit) = resistor_codec::format_scaled(spec.resistance)?;
    Ok(json!({
        "layout": layout,
        "bands": bands,
        "resistance": spec.resistance.to_string(),
        "scaled": {
            "value": scaled.to_string(),
            "unit": unit.symbol(),
        },
        "tolerance": spec.tolerance.map(|t| t.to_string()),
        "min": spec.min_value().map(|v| v.to_string()),
        "max": spec.max_value().map(|v| v.to_string()),
        "temp_co": spec.temp_co,
    }))
}

fn print_spec(
    layout: BandLayout,
    bands: &Bands,
    spec: &ResistorSpec,
    output: crate::OutputFormat,
) -> Result<()> {
    match output {
        crate::OutputFormat::Text => println!("{}", spec_table(layout, bands, spec)?),
        crate::OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&spec_json(layout, bands, spec)?)?
            )
        }
    }
    Ok(())
}
