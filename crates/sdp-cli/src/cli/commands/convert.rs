//! `sdp convert` – turn a .s2p file into S11/S21 dB tables on disk.

use anyhow::{bail, Context, Result};
use sdp_core::config::SdpConfig;
use sdp_core::convert::{convert, ConvertError};
use std::fs;
use std::path::Path;

pub fn run_convert(cfg: &SdpConfig, path: &Path, out_dir: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("converted");

    let conversion = match convert(stem, &text, cfg.db_floor) {
        Ok(c) => c,
        Err(ConvertError::NoData) => {
            // Deliberately no output files in this case.
            bail!("no valid data found in {}", path.display());
        }
    };

    let dir = match out_dir {
        Some(d) => {
            fs::create_dir_all(d).with_context(|| format!("creating {}", d.display()))?;
            d
        }
        None => path.parent().unwrap_or(Path::new(".")),
    };

    let s11_path = dir.join(&conversion.s11_filename);
    let s21_path = dir.join(&conversion.s21_filename);
    fs::write(&s11_path, &conversion.s11_table)
        .with_context(|| format!("writing {}", s11_path.display()))?;
    fs::write(&s21_path, &conversion.s21_table)
        .with_context(|| format!("writing {}", s21_path.display()))?;

    tracing::info!(rows = conversion.rows, input = %path.display(), "converted s2p file");
    println!("{} rows converted", conversion.rows);
    println!("  S11: {}", s11_path.display());
    println!("  S21: {}", s21_path.display());
    Ok(())
}
