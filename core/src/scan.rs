use crate::index::Occurrence;
use crate::keyword::{normalize, NoiseWords};
use std::collections::HashMap;

/// Count keywords in one document's raw tokens.
///
/// Rejected tokens are skipped. The returned frequencies are local to this
/// document; they are compared against other documents only when merged.
pub fn scan_document<I, S>(document: &str, tokens: I, noise: &NoiseWords) -> HashMap<String, Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table: HashMap<String, Occurrence> = HashMap::new();
    for token in tokens {
        let Some(keyword) = normalize(token.as_ref(), noise) else { continue };
        table
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_keywords() {
        let noise = NoiseWords::new();
        let table = scan_document("d2", "dog dog cat Cat cat.".split_whitespace(), &noise);
        assert_eq!(table.len(), 2);
        assert_eq!(table["cat"], Occurrence::new("d2", 3));
        assert_eq!(table["dog"], Occurrence::new("d2", 2));
    }

    #[test]
    fn skips_rejected_and_noise_tokens() {
        let noise: NoiseWords = ["a"].into_iter().collect();
        let table = scan_document("d", ["a", "A!", "r2d2", "--", "ship"], &noise);
        assert_eq!(table.len(), 1);
        assert_eq!(table["ship"].frequency, 1);
    }

    #[test]
    fn empty_document() {
        let table = scan_document("d", Vec::<String>::new(), &NoiseWords::new());
        assert!(table.is_empty());
    }
}
