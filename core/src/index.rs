use crate::merge::insert_last_occurrence;
use crate::DocumentId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A keyword appeared `frequency` times in `document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: DocumentId,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<DocumentId>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Keyword -> occurrences, each list kept in descending order of frequency.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>, // postings sorted by frequency, descending
}

impl KeywordIndex {
    pub fn new() -> Self { Self::default() }

    /// Fold one document's keyword table into the index. Each occurrence is
    /// appended to its keyword's list and moved into place by binary search.
    pub fn merge_keywords(&mut self, table: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in table {
            let postings = self.keywords.entry(keyword).or_default();
            postings.push(occurrence);
            let trace = insert_last_occurrence(postings);
            tracing::trace!(len = postings.len(), ?trace, "merged occurrence");
        }
    }

    /// Posting list for `keyword`; a keyword never seen has an empty list.
    pub fn postings(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
