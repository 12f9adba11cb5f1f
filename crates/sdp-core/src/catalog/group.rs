//! Category grouping and substring filtering over the record table.

use super::DownloadRecord;

/// The three fixed catalog buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Algorithm,
    Bibliography,
    Other,
}

impl Category {
    /// Folds the free-text category of a record into a bucket.
    ///
    /// Known alternate spellings fold into the primary buckets
    /// (`algorithme`/`algo` → Algorithm, `biblio` → Bibliography);
    /// anything unrecognized lands in Other.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "algorithm" | "algorithme" | "algo" => Category::Algorithm,
            "bibliography" | "biblio" => Category::Bibliography,
            _ => Category::Other,
        }
    }

    /// Section heading used when rendering the bucket.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Algorithm => "Algorithms",
            Category::Bibliography => "Bibliography",
            Category::Other => "Other downloads",
        }
    }
}

/// The record table partitioned into the three buckets, source order
/// preserved within each bucket.
#[derive(Debug, Default)]
pub struct GroupedCatalog<'a> {
    pub algorithms: Vec<&'a DownloadRecord>,
    pub bibliography: Vec<&'a DownloadRecord>,
    pub other: Vec<&'a DownloadRecord>,
}

impl<'a> GroupedCatalog<'a> {
    /// Buckets in fixed display order, with their headings.
    pub fn sections(&self) -> [(Category, &[&'a DownloadRecord]); 3] {
        [
            (Category::Algorithm, self.algorithms.as_slice()),
            (Category::Bibliography, self.bibliography.as_slice()),
            (Category::Other, self.other.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.algorithms.len() + self.bibliography.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions records into the three category buckets.
///
/// Accepts either the full table or a filtered view of it.
pub fn group<'a, I>(records: I) -> GroupedCatalog<'a>
where
    I: IntoIterator<Item = &'a DownloadRecord>,
{
    let mut grouped = GroupedCatalog::default();
    for r in records {
        match Category::from_label(&r.category) {
            Category::Algorithm => grouped.algorithms.push(r),
            Category::Bibliography => grouped.bibliography.push(r),
            Category::Other => grouped.other.push(r),
        }
    }
    grouped
}

/// Case-insensitive substring filter over title, filename and description.
///
/// An empty query returns every record; order always follows the source list.
pub fn filter<'a>(query: &str, records: &'a [DownloadRecord]) -> Vec<&'a DownloadRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| {
            let haystack =
                format!("{} {} {}", r.title, r.filename, r.description).to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}
