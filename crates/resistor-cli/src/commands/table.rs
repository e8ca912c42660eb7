use anyhow::Result;
use colored::Colorize;
use comfy_table::Cell;
use resistor_codec::{BandRole, Color, table};
use serde_json::{Map, Value, json};

use crate::utils::color::format_band;
use crate::OutputFormat;

pub fn execute(role: Option<BandRole>, output: OutputFormat) -> Result<()> {
    let roles: Vec<BandRole> = match role {
        Some(role) => vec![role],
        None => BandRole::ALL.to_vec(),
    };

    match output {
        OutputFormat::Text => output_text(&roles),
        OutputFormat::Json => output_json(&roles),
    }
}

fn role_header(role: BandRole) -> &'static str {
    match role {
        BandRole::Digit => "Digit",
        BandRole::Multiplier => "Multiplier",
        BandRole::Tolerance => "Tolerance (%)",
        BandRole::TempCo => "Temp. Coefficient (ppm/°C)",
    }
}

fn role_key(role: BandRole) -> &'static str {
    match role {
        BandRole::Digit => "digit",
        BandRole::Multiplier => "multiplier",
        BandRole::Tolerance => "tolerance",
        BandRole::TempCo => "temp_co",
    }
}

fn output_text(roles: &[BandRole]) -> Result<()> {
    println!("{}", "Color Code".bold());

    let mut output = super::new_table();
    let mut header = vec![Cell::new("Color")];
    header.extend(roles.iter().map(|role| Cell::new(role_header(*role))));
    output.set_header(header);

    for color in Color::ALL {
        let cells: Vec<String> = roles
            .iter()
            .map(|role| {
                table::lookup(*role, color)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .collect();
        // Skip colors that mean nothing in any listed role
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let mut row = vec![Cell::new(format_band(Some(color)))];
        row.extend(cells.into_iter().map(Cell::new));
        output.add_row(row);
    }

    println!("{output}");
    Ok(())
}

fn output_json(roles: &[BandRole]) -> Result<()> {
    let mut doc = Map::new();
    for role in roles {
        let entries: Vec<Value> = table::entries(*role)
            .into_iter()
            .map(|(color, value)| -> Result<Value> {
                Ok(json!({
                    "color": color,
                    "value": value.to_string(),
                    "label": table::label(*role, color)?,
                }))
            })
            .collect::<Result<_>>()?;
        doc.insert(role_key(*role).to_string(), Value::Array(entries));
    }
    println!("{}", serde_json::to_string_pretty(&Value::Object(doc))?);
    Ok(())
}
