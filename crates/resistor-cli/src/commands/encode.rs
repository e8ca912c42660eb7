use anyhow::{Context, Result};
use log::debug;
use resistor_codec::{BandLayout, Bands, encode};

use crate::OutputFormat;

/// Pick the layout: explicit, or from the number of bands given.
/// With an explicit layout, missing trailing bands are left unset.
fn resolve_layout(mut bands: Bands, layout: Option<BandLayout>) -> Result<(BandLayout, Bands)> {
    let layout = match layout {
        Some(layout) => layout,
        None => BandLayout::try_from(bands.len())
            .context("Pass --bands to choose a layout, or give 3 to 6 bands")?,
    };
    if bands.len() < layout.band_count() {
        let mut padded = bands.into_inner();
        padded.resize(layout.band_count(), None);
        bands = Bands::new(padded);
    }
    Ok((layout, bands))
}

pub fn execute(bands: &[String], layout: Option<BandLayout>, output: OutputFormat) -> Result<()> {
    let bands = Bands::parse_each(bands)?;
    let (layout, bands) = resolve_layout(bands, layout)?;
    debug!("Encoding {layout} bands: {bands}");

    let spec = encode(layout, &bands).with_context(|| format!("Cannot read bands '{bands}'"))?;
    debug!("Encoded {bands} as {spec}");

    super::print_spec(layout, &bands, &spec, output)
}
