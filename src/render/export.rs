use std::io::Write;

use anyhow::Result;

use crate::grid::PriceGrid;

/// Write `grid` as CSV.
///
/// The header row holds the spot midpoints; each following row starts with a
/// volatility midpoint followed by the prices of that volatility bin.
pub fn write_grid_csv<W: Write>(grid: &PriceGrid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["vol\\spot".to_string()];
    header.extend(grid.spot_midpoints().iter().map(|s| s.to_string()));
    wtr.write_record(&header)?;

    for (vol, row) in grid.vol_midpoints().iter().zip(&grid.matrix) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(vol.to_string());
        record.extend(row.iter().map(|p| p.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
