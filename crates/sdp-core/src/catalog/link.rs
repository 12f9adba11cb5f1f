//! Download href derivation for catalog records.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::DownloadRecord;

/// Bytes that must be escaped inside a relative asset path segment.
const ASSET_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A ready-to-render download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Relative href: `<prefix>/<percent-encoded filename>`.
    pub href: String,
    /// Name shown to the user: the final path segment of the filename.
    pub display_name: String,
}

/// Builds the download link for a record under the given assets prefix.
///
/// The record's filename may contain subdirectories; each segment is
/// percent-encoded separately so `/` separators survive.
pub fn download_link(record: &DownloadRecord, files_prefix: &str) -> DownloadLink {
    let encoded: Vec<String> = record
        .filename
        .split('/')
        .map(|seg| utf8_percent_encode(seg, ASSET_SEGMENT).to_string())
        .collect();
    let href = format!("{}/{}", files_prefix.trim_end_matches('/'), encoded.join("/"));

    let display_name = record
        .filename
        .rsplit('/')
        .next()
        .unwrap_or(record.filename.as_str())
        .to_string();

    DownloadLink { href, display_name }
}
