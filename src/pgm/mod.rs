//! ASCII PGM (P2) raster output.
//!
//! Each coordinate map is written as a plain-text grayscale raster with a
//! fixed maximum sample value of 65535, one file per axis. The format is the
//! one ffmpeg's `remap` filter reads its map inputs from.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use ndarray::Array2;

use crate::{RemapError, Result};

/// Largest map height the writer accepts
pub const MAX_ROWS: usize = 4500;
/// Largest map width the writer accepts
pub const MAX_COLS: usize = 4500;
/// Fixed maximum sample value declared in the PGM header
pub const MAX_SAMPLE: u16 = 65535;

/// Writes one coordinate map as an ASCII PGM file.
///
/// The `label` lands in the header comment line. Returns the number of
/// samples written, which on success always equals `rows * cols`. Maps
/// larger than [`MAX_ROWS`] x [`MAX_COLS`] are refused before the file is
/// created, so a failed call leaves nothing on disk; an error writing a
/// sibling map does not retract a file this call already produced.
pub fn write_ascii<P: AsRef<Path>>(path: P, map: &Array2<i32>, label: &str) -> Result<usize> {
    let (rows, cols) = map.dim();
    if rows > MAX_ROWS || cols > MAX_COLS {
        return Err(RemapError::MapTooLarge { rows, cols });
    }

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P2")?;
    writeln!(writer, "# {}", label)?;
    writeln!(writer, "{} {}", cols, rows)?;
    writeln!(writer, "{}", MAX_SAMPLE)?;

    let mut written = 0usize;
    for row in map.rows() {
        for value in row {
            write!(writer, "{} ", value)?;
            written += 1;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    debug!(
        "wrote {} of {} samples to {}",
        written,
        rows * cols,
        path.as_ref().display()
    );

    Ok(written)
}
