//! `sdp link` – print the download href for one record.

use anyhow::{bail, Result};
use sdp_core::catalog::{download_link, DownloadRecord};
use sdp_core::config::SdpConfig;
use sdp_core::matcher::{find_record, QueryKind};

pub fn run_link(
    records: &[DownloadRecord],
    cfg: &SdpConfig,
    query: &str,
    kind: QueryKind,
) -> Result<()> {
    let record = match find_record(query, kind, records) {
        Some(r) => r,
        None => bail!("no record matches \"{}\"", query),
    };
    let link = download_link(record, &cfg.files_prefix);
    println!("{}", link.href);
    Ok(())
}
