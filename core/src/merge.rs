use crate::index::Occurrence;
use std::cmp::Ordering;

/// Move the last occurrence of `occs` into its place by descending frequency.
///
/// `occs[..len - 1]` must already be in descending order. The slot is found
/// by binary search over that prefix; the returned vector holds the midpoint
/// indexes probed, in order, and is empty when the list has at most one
/// element. A new occurrence that ties with existing ones lands after them.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut trace = Vec::new();
    if occs.len() <= 1 { return trace; }
    let Some(last) = occs.pop() else { return trace };
    let target = last.frequency;

    let mut left = 0;
    let mut right = occs.len() - 1;
    let mut mid = (left + right) / 2;
    while mid != left {
        trace.push(mid);
        match occs[mid].frequency.cmp(&target) {
            Ordering::Equal => break,
            Ordering::Less => right = mid,
            Ordering::Greater => left = mid,
        }
        mid = (left + right) / 2;
    }

    // Everything after `right` is lower than `target`, so ties end inside [mid, right].
    let pos = match occs[mid].frequency.cmp(&target) {
        Ordering::Less => mid,
        Ordering::Equal => mid + occs[mid..=right].partition_point(|o| o.frequency >= target),
        Ordering::Greater if occs[right].frequency < target => right,
        Ordering::Greater => right + 1,
    };
    occs.insert(pos, last);
    trace
}
