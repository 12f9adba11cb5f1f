//! End-to-end: catalog JSON on disk → grouping, links, viewer resolution.

use std::fs;

use sdp_core::catalog::{self, download_link};
use sdp_core::matcher::QueryKind;
use sdp_core::viewer::{self, Pane, ViewerOutcome};

const CATALOG_JSON: &str = r#"[
    {
        "filename": "s2p_to_dat.zip",
        "title": "S2P to DAT converter",
        "category": "algorithme",
        "version": "1.0",
        "description": "Converts two-port measurements to dB tables",
        "code_py": "import numpy as np",
        "yaml_path": "code/s2p_to_dat/config.yaml"
    },
    {
        "filename": "rf handbook.pdf",
        "title": "RF handbook",
        "category": "biblio",
        "size_bytes": 1048576
    },
    {
        "filename": "mirror.zip",
        "title": "Mirrored tool",
        "category": "algo",
        "liens": "https://example.com/mirror"
    }
]"#;

fn load_catalog() -> Vec<catalog::DownloadRecord> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();
    catalog::load_from_path(&path).unwrap()
}

#[test]
fn loads_groups_and_links() {
    let records = load_catalog();
    assert_eq!(records.len(), 3);

    let grouped = catalog::group(&records);
    assert_eq!(grouped.algorithms.len(), 2);
    assert_eq!(grouped.bibliography.len(), 1);
    assert!(grouped.other.is_empty());

    let link = download_link(grouped.bibliography[0], "files");
    assert_eq!(link.href, "files/rf%20handbook.pdf");
    assert_eq!(link.display_name, "rf handbook.pdf");
}

#[test]
fn viewer_page_from_loaded_catalog() {
    let records = load_catalog();
    match viewer::resolve("s2p%20to%20dat%20converter", QueryKind::Title, &records) {
        ViewerOutcome::Page(page) => {
            assert_eq!(page.record.filename, "s2p_to_dat.zip");
            assert_eq!(page.source, Pane::Embedded("import numpy as np"));
            assert_eq!(page.config, Pane::External("code/s2p_to_dat/config.yaml"));
        }
        other => panic!("expected page, got {:?}", other),
    }
}

#[test]
fn viewer_redirect_from_loaded_catalog() {
    let records = load_catalog();
    match viewer::resolve("mirror.zip", QueryKind::File, &records) {
        ViewerOutcome::Redirect { target, .. } => {
            assert_eq!(target.as_str(), "https://example.com/mirror");
        }
        other => panic!("expected redirect, got {:?}", other),
    }
}

#[test]
fn viewer_no_match_enumerates_catalog() {
    let records = load_catalog();
    match viewer::resolve("doesnotexist.zip", QueryKind::File, &records) {
        ViewerOutcome::NoMatch { available } => {
            assert_eq!(available.len(), 3);
            assert_eq!(available[0].0, "S2P to DAT converter");
            assert_eq!(available[2].1, "mirror.zip");
        }
        other => panic!("expected no-match, got {:?}", other),
    }
}
