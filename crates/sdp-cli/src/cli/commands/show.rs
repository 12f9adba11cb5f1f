//! `sdp show` – the viewer page: redirect, panes, or a recovery listing.

use anyhow::{bail, Context, Result};
use sdp_core::catalog::DownloadRecord;
use sdp_core::matcher::QueryKind;
use sdp_core::viewer::{resolve, Pane, ViewerOutcome, ViewerPage};
use std::io::Write;

use crate::cli::RawPane;

pub fn run_show(
    records: &[DownloadRecord],
    query: &str,
    kind: QueryKind,
    raw: Option<RawPane>,
) -> Result<()> {
    match resolve(query, kind, records) {
        ViewerOutcome::Redirect { record, target } => {
            if raw.is_some() {
                bail!("\"{}\" redirects to {}; no panes to emit", record.title, target);
            }
            // Redirect policy: navigate, render nothing.
            println!("redirect: {}", target);
            Ok(())
        }
        ViewerOutcome::Page(page) => match raw {
            Some(pane) => emit_raw(&page, pane),
            None => {
                print_page(&page);
                Ok(())
            }
        },
        ViewerOutcome::NoMatch { available } => {
            println!("No record matches \"{}\". Available entries:", query);
            for (title, filename) in &available {
                println!("  {}  ({})", title, filename);
            }
            bail!("no record matched the query");
        }
    }
}

/// Writes one embedded pane verbatim to stdout, so it can be piped to a
/// clipboard tool or a file. A write failure is a visible error, nothing more.
fn emit_raw(page: &ViewerPage<'_>, pane: RawPane) -> Result<()> {
    let (label, selected) = match pane {
        RawPane::Py => ("source", &page.source),
        RawPane::Yaml => ("config", &page.config),
    };
    let text = match selected.embedded_text() {
        Some(t) => t,
        None => bail!("\"{}\" has no embedded {} pane", page.record.title, label),
    };
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .context("writing pane to stdout")?;
    Ok(())
}

fn print_page(page: &ViewerPage<'_>) {
    let r = page.record;
    println!("{}", r.title);
    if !r.description.is_empty() {
        println!("{}", r.description);
    }
    if let Some(url) = r.web_version_url.as_deref().filter(|u| !u.is_empty()) {
        println!("web version: {}", url);
    }
    print_pane("source", &page.source, "No source code is available for this entry.");
    print_pane("config", &page.config, "No configuration is available for this entry.");
}

fn print_pane(label: &str, pane: &Pane<'_>, placeholder: &str) {
    println!();
    println!("--- {} ---", label);
    match pane {
        Pane::Embedded(text) => println!("{}", text),
        Pane::External(path) => println!("(see {})", path),
        Pane::Missing => println!("{}", placeholder),
    }
}
