//! Two-port S-parameter conversion: `.s2p` text in, two dB tables out.
//!
//! Everything runs in memory on one pass over the input; the caller decides
//! where (or whether) the resulting tables land on disk.

mod parse;
mod render;

pub use parse::parse_s2p;

use thiserror::Error;

/// One frequency point with its derived magnitudes, kept in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SParameterSample {
    pub frequency_hz: f64,
    pub s11_db: f64,
    pub s21_db: f64,
}

/// Conversion failure. Individual malformed lines are never errors; only a
/// file with no usable data at all is.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no valid data found in input")]
    NoData,
}

/// The two derived tables, ready to be written or offered for download.
#[derive(Debug)]
pub struct Conversion {
    pub s11_filename: String,
    pub s11_table: String,
    pub s21_filename: String,
    pub s21_table: String,
    /// Number of data rows in each table.
    pub rows: usize,
}

/// Converts `.s2p` text into the S11 and S21 dB tables.
///
/// `stem` is the input file's base name without extension; the output names
/// are `<stem>_S11.dat` and `<stem>_S21.dat`. `floor` replaces the dB value
/// for zero-magnitude pairs. Zero valid rows is a distinguishable error, not
/// a pair of empty tables.
pub fn convert(stem: &str, text: &str, floor: f64) -> Result<Conversion, ConvertError> {
    let samples = parse_s2p(text, floor);
    if samples.is_empty() {
        return Err(ConvertError::NoData);
    }

    Ok(Conversion {
        s11_filename: format!("{}_S11.dat", stem),
        s11_table: render::render_table("S11(dB)", &samples, |s| s.s11_db),
        s21_filename: format!("{}_S21.dat", stem),
        s21_table: render::render_table("S21(dB)", &samples, |s| s.s21_db),
        rows: samples.len(),
    })
}
