//! `sdp list` – render the catalog as categorized cards.

use anyhow::Result;
use sdp_core::catalog::{download_link, filter, group, DownloadRecord};
use sdp_core::config::SdpConfig;

pub fn run_list(
    records: &[DownloadRecord],
    cfg: &SdpConfig,
    filter_query: Option<&str>,
) -> Result<()> {
    let filtered = filter(filter_query.unwrap_or(""), records);
    if filtered.is_empty() {
        println!("No records match \"{}\".", filter_query.unwrap_or(""));
        return Ok(());
    }

    let grouped = group(filtered);

    for (category, bucket) in grouped.sections() {
        if bucket.is_empty() {
            continue;
        }
        println!("== {} ==", category.heading());
        for r in bucket.iter().copied() {
            print_card(r, cfg);
        }
        println!();
    }
    Ok(())
}

fn print_card(r: &DownloadRecord, cfg: &SdpConfig) {
    let link = download_link(r, &cfg.files_prefix);
    println!("  {}", r.title);
    let mut meta = Vec::new();
    if !r.version.is_empty() {
        meta.push(format!("v{}", r.version));
    }
    if !r.date.is_empty() {
        meta.push(r.date.clone());
    }
    if let Some(bytes) = r.size_bytes {
        meta.push(format_size(bytes));
    }
    if !meta.is_empty() {
        println!("    {}", meta.join("  "));
    }
    if !r.description.is_empty() {
        println!("    {}", r.description);
    }
    println!("    download: {} ({})", link.href, link.display_name);
    if let Some(url) = r.web_version_url.as_deref().filter(|u| !u.is_empty()) {
        println!("    web version: {}", url);
    }
    if let Some(url) = r.external_link.as_deref().filter(|u| !u.is_empty()) {
        println!("    external: {}", url);
    }
}

/// Human-readable size, decimal units.
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(20_480), "20.5 kB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(3_500_000_000), "3.5 GB");
    }
}
