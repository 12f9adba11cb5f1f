//! Record lookup: cascading fallback tiers over the catalog table.
//!
//! Each tier is a predicate tried against every record in list order; the
//! first record satisfying the earliest-succeeding tier wins. Malformed
//! input never fails a lookup, it only skips tiers.

mod normalize;

pub use normalize::normalize;

use percent_encoding::percent_decode_str;

use crate::catalog::DownloadRecord;

/// Which record field the query addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Title,
    File,
}

/// Pre-computed forms of the raw query, shared by all tiers.
struct QueryForms {
    raw: String,
    /// Percent-decoded form; None when the query is not valid UTF-8 once
    /// decoded (that tier is then skipped).
    decoded: Option<String>,
    normalized: String,
}

impl QueryForms {
    fn new(raw: &str) -> Self {
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .ok()
            .map(|c| c.into_owned());
        Self {
            raw: raw.to_string(),
            decoded,
            normalized: normalize(raw),
        }
    }

    /// Normalized form of the decoded query when decoding changed anything,
    /// otherwise the normalized raw query.
    fn normalized_best(&self) -> String {
        match &self.decoded {
            Some(d) if d != &self.raw => normalize(d),
            _ => self.normalized.clone(),
        }
    }
}

type Tier = fn(&QueryForms, &DownloadRecord) -> bool;

/// Title tiers, in precedence order.
const TITLE_TIERS: &[Tier] = &[
    |q, r| r.title == q.raw,
    |q, r| q.decoded.as_deref() == Some(r.title.as_str()),
    |q, r| normalize(&r.title) == q.normalized_best(),
    |q, r| {
        let needle = q.normalized_best();
        !needle.is_empty() && normalize(&r.title).contains(&needle)
    },
];

/// Filename tiers, in precedence order. The last tier falls back to the
/// auxiliary path fields carried by the record.
const FILE_TIERS: &[Tier] = &[
    |q, r| r.filename == q.raw || q.decoded.as_deref() == Some(r.filename.as_str()),
    |q, r| {
        let needle = q.normalized_best();
        let haystack = normalize(&r.filename);
        haystack == needle || (!needle.is_empty() && haystack.contains(&needle))
    },
    |q, r| {
        let needle = q.decoded.as_deref().unwrap_or(q.raw.as_str());
        !needle.is_empty()
            && [r.code_path.as_deref(), r.yaml_path.as_deref()]
                .into_iter()
                .flatten()
                .any(|path| path.contains(needle))
    },
];

/// Finds at most one record for the query.
///
/// Deterministic: returns the first record (in list order) satisfying the
/// earliest-succeeding tier. `None` is not an error; callers should offer
/// the full list of titles/filenames as a recovery aid.
pub fn find_record<'a>(
    query: &str,
    kind: QueryKind,
    records: &'a [DownloadRecord],
) -> Option<&'a DownloadRecord> {
    let forms = QueryForms::new(query);
    let tiers = match kind {
        QueryKind::Title => TITLE_TIERS,
        QueryKind::File => FILE_TIERS,
    };

    for (i, tier) in tiers.iter().enumerate() {
        if let Some(hit) = records.iter().find(|&r| tier(&forms, r)) {
            tracing::debug!(tier = i + 1, kind = ?kind, query, title = %hit.title, "matched record");
            return Some(hit);
        }
    }
    tracing::debug!(kind = ?kind, query, "no matching record");
    None
}
