use crate::index::{KeywordIndex, Occurrence};
use crate::DocumentId;

/// Maximum number of documents a query returns.
pub const RESULT_LIMIT: usize = 5;

/// Documents containing `kw1` or `kw2`, highest frequency first, at most
/// [`RESULT_LIMIT`] of them.
///
/// Both posting lists are already sorted, so this is a merge walk. On equal
/// frequencies `kw1` goes first. A document matching both keywords is listed
/// once, at its higher position. Unknown keywords simply contribute nothing.
pub fn top5_search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<DocumentId> {
    let l1 = index.postings(kw1);
    let l2 = index.postings(kw2);
    let mut results: Vec<DocumentId> = Vec::with_capacity(RESULT_LIMIT);
    let (mut i1, mut i2) = (0, 0);

    while results.len() < RESULT_LIMIT && i1 < l1.len() && i2 < l2.len() {
        if l1[i1].frequency >= l2[i2].frequency {
            push_unique(&mut results, &l1[i1]);
            i1 += 1;
        } else {
            push_unique(&mut results, &l2[i2]);
            i2 += 1;
        }
    }

    // At most one list has entries left.
    let rest = if i1 < l1.len() { &l1[i1..] } else { &l2[i2..] };
    for occ in rest {
        if results.len() >= RESULT_LIMIT { break; }
        push_unique(&mut results, occ);
    }
    results
}

fn push_unique(results: &mut Vec<DocumentId>, occ: &Occurrence) {
    if !results.iter().any(|d| *d == occ.document) {
        results.push(occ.document.clone());
    }
}
