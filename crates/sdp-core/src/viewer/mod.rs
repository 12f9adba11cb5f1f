//! Viewer resolution: query → redirect, rendered panes, or a recovery listing.

use url::Url;

use crate::catalog::DownloadRecord;
use crate::matcher::{find_record, QueryKind};

/// Content of one viewer pane.
///
/// Absent fields degrade to `External` (a reference path) or `Missing`
/// (placeholder text at render time); they never block the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pane<'a> {
    /// Embedded blob shown verbatim.
    Embedded(&'a str),
    /// No embedded blob, but the record points at an external path.
    External(&'a str),
    Missing,
}

impl<'a> Pane<'a> {
    fn from_fields(blob: Option<&'a str>, path: Option<&'a str>) -> Self {
        match (blob, path) {
            (Some(text), _) if !text.is_empty() => Pane::Embedded(text),
            (_, Some(p)) if !p.is_empty() => Pane::External(p),
            _ => Pane::Missing,
        }
    }

    /// Verbatim text for copy-style output, if any is embedded.
    pub fn embedded_text(&self) -> Option<&'a str> {
        match self {
            Pane::Embedded(text) => Some(text),
            Pane::External(_) | Pane::Missing => None,
        }
    }
}

/// A fully resolved viewer page for one matched record.
#[derive(Debug)]
pub struct ViewerPage<'a> {
    pub record: &'a DownloadRecord,
    pub source: Pane<'a>,
    pub config: Pane<'a>,
}

/// Result of resolving a viewer query against the record table.
#[derive(Debug)]
pub enum ViewerOutcome<'a> {
    /// Matched record carries an external link: navigate there, render nothing.
    Redirect { record: &'a DownloadRecord, target: Url },
    Page(ViewerPage<'a>),
    /// No record matched; the listing enumerates every record once, in order,
    /// as a recovery aid.
    NoMatch { available: Vec<(&'a str, &'a str)> },
}

/// Resolves a viewer query.
///
/// Redirect takes precedence over pane rendering: a matched record with a
/// non-empty, parseable external link short-circuits before any pane is
/// built. An unparseable link is treated like any other malformed optional
/// field: logged, then the page renders normally.
pub fn resolve<'a>(
    query: &str,
    kind: QueryKind,
    records: &'a [DownloadRecord],
) -> ViewerOutcome<'a> {
    let record = match find_record(query, kind, records) {
        Some(r) => r,
        None => {
            tracing::warn!(kind = ?kind, query, "viewer lookup found no record");
            return ViewerOutcome::NoMatch {
                available: records
                    .iter()
                    .map(|r| (r.title.as_str(), r.filename.as_str()))
                    .collect(),
            };
        }
    };

    if let Some(link) = record.external_link.as_deref().filter(|l| !l.is_empty()) {
        match Url::parse(link) {
            Ok(target) => return ViewerOutcome::Redirect { record, target },
            Err(err) => {
                tracing::warn!(title = %record.title, link, %err, "ignoring unparseable external link");
            }
        }
    }

    ViewerOutcome::Page(ViewerPage {
        record,
        source: Pane::from_fields(record.code_py.as_deref(), record.code_path.as_deref()),
        config: Pane::from_fields(record.code_yaml.as_deref(), record.yaml_path.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;

    fn table() -> Vec<DownloadRecord> {
        let mut a = record("Converter", "converter.zip");
        a.code_py = Some("import numpy".to_string());
        a.yaml_path = Some("code/converter/config.yaml".to_string());
        let mut b = record("External tool", "external.zip");
        b.external_link = Some("https://example.com/tool".to_string());
        b.code_py = Some("never shown".to_string());
        let c = record("Bare entry", "bare.pdf");
        vec![a, b, c]
    }

    #[test]
    fn matched_record_renders_panes_with_fallbacks() {
        let records = table();
        match resolve("Converter", QueryKind::Title, &records) {
            ViewerOutcome::Page(page) => {
                assert_eq!(page.source, Pane::Embedded("import numpy"));
                assert_eq!(page.config, Pane::External("code/converter/config.yaml"));
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[test]
    fn absent_fields_become_missing_panes() {
        let records = table();
        match resolve("bare.pdf", QueryKind::File, &records) {
            ViewerOutcome::Page(page) => {
                assert_eq!(page.source, Pane::Missing);
                assert_eq!(page.config, Pane::Missing);
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[test]
    fn external_link_redirects_and_suppresses_panes() {
        let records = table();
        match resolve("External tool", QueryKind::Title, &records) {
            ViewerOutcome::Redirect { record, target } => {
                assert_eq!(record.filename, "external.zip");
                assert_eq!(target.as_str(), "https://example.com/tool");
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_external_link_falls_back_to_page() {
        let mut records = table();
        records[1].external_link = Some("not a url".to_string());
        match resolve("External tool", QueryKind::Title, &records) {
            ViewerOutcome::Page(page) => {
                assert_eq!(page.source, Pane::Embedded("never shown"));
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[test]
    fn no_match_lists_every_record_exactly_once() {
        let records = table();
        match resolve("doesnotexist.zip", QueryKind::File, &records) {
            ViewerOutcome::NoMatch { available } => {
                assert_eq!(available.len(), records.len());
                for (r, (title, filename)) in records.iter().zip(available.iter()) {
                    assert_eq!(r.title, *title);
                    assert_eq!(r.filename, *filename);
                }
            }
            other => panic!("expected no-match, got {:?}", other),
        }
    }

    #[test]
    fn empty_external_link_does_not_redirect() {
        let mut records = table();
        records[1].external_link = Some(String::new());
        match resolve("External tool", QueryKind::Title, &records) {
            ViewerOutcome::Page(_) => {}
            other => panic!("expected page, got {:?}", other),
        }
    }
}
