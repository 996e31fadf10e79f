use crate::error::Result;
use crate::index::KeywordIndex;
use crate::keyword::{normalize, NoiseWords};
use crate::scan::scan_document;
use crate::search::top5_search;
use crate::source::{DocumentSource, NoiseWordSource};
use crate::DocumentId;

/// A frozen keyword index plus the noise words it was built with.
///
/// Built once by [`SearchEngine::build`]; read-only afterwards, so it can be
/// shared between threads for querying.
#[derive(Debug, Default)]
pub struct SearchEngine {
    index: KeywordIndex,
    noise_words: NoiseWords,
    num_docs: usize,
}

impl SearchEngine {
    /// Load noise words, then scan and merge every document in provider order.
    ///
    /// Any provider error aborts the build and is returned as is.
    pub fn build<D, N>(documents: &D, noise: &N) -> Result<Self>
    where
        D: DocumentSource + ?Sized,
        N: NoiseWordSource + ?Sized,
    {
        let mut engine = SearchEngine::default();
        engine.noise_words.extend(noise.noise_words()?);
        tracing::debug!(noise_words = engine.noise_words.len(), "loaded noise words");

        for document in documents.document_ids()? {
            let tokens = documents.tokens(&document)?;
            let table = scan_document(&document, &tokens, &engine.noise_words);
            tracing::debug!(%document, tokens = tokens.len(), keywords = table.len(), "scanned document");
            engine.index.merge_keywords(table);
            engine.num_docs += 1;
        }

        tracing::info!(num_docs = engine.num_docs, num_keywords = engine.index.len(), "index built");
        Ok(engine)
    }

    /// Up to five documents containing `kw1` or `kw2`; keywords are looked up as given.
    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Vec<DocumentId> {
        top5_search(&self.index, kw1, kw2)
    }

    /// Like [`top5_search`](Self::top5_search) but normalizes raw words first.
    /// A word that is not a keyword matches nothing.
    pub fn search_words(&self, word1: &str, word2: &str) -> Vec<DocumentId> {
        let kw1 = normalize(word1, &self.noise_words).unwrap_or_default();
        let kw2 = normalize(word2, &self.noise_words).unwrap_or_default();
        top5_search(&self.index, &kw1, &kw2)
    }

    pub fn index(&self) -> &KeywordIndex { &self.index }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    /// Number of documents indexed.
    pub fn num_docs(&self) -> usize { self.num_docs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryCorpus;
    use crate::{Error, Occurrence};

    #[test]
    fn cat_and_dog() {
        let corpus = MemoryCorpus::new()
            .with_document("D1", "cat dog cat")
            .with_document("D2", "dog dog cat cat cat");
        let engine = SearchEngine::build(&corpus, &corpus).unwrap();

        assert_eq!(engine.index().postings("cat"), &[Occurrence::new("D2", 3), Occurrence::new("D1", 2)]);
        assert_eq!(engine.index().postings("dog"), &[Occurrence::new("D2", 2), Occurrence::new("D1", 1)]);
        assert_eq!(engine.top5_search("cat", "dog"), vec!["D2", "D1"]);
        assert_eq!(engine.num_docs(), 2);
    }

    #[test]
    fn empty_corpus() {
        let corpus = MemoryCorpus::new();
        let engine = SearchEngine::build(&corpus, &corpus).unwrap();
        assert!(engine.index().is_empty());
        assert!(engine.top5_search("any", "thing").is_empty());
    }

    #[test]
    fn noise_words_are_not_indexed() {
        let corpus = MemoryCorpus::new()
            .with_document("D1", "the cat and the hat")
            .with_noise_words(["the", "and"]);
        let engine = SearchEngine::build(&corpus, &corpus).unwrap();
        assert!(!engine.index().contains("the"));
        assert!(!engine.index().contains("and"));
        assert_eq!(engine.index().len(), 2);
    }

    #[test]
    fn search_words_normalizes_query() {
        let corpus = MemoryCorpus::new()
            .with_document("D1", "Cat!")
            .with_noise_words(["the"]);
        let engine = SearchEngine::build(&corpus, &corpus).unwrap();
        assert_eq!(engine.search_words("CAT?", "the"), vec!["D1"]);
        assert!(engine.top5_search("CAT?", "the").is_empty());
        assert!(engine.search_words("c4t", "").is_empty());
    }

    struct MissingDocument;

    impl DocumentSource for MissingDocument {
        fn document_ids(&self) -> Result<Vec<DocumentId>> { Ok(vec!["gone.txt".into()]) }
        fn tokens(&self, document: &str) -> Result<Vec<String>> {
            Err(Error::SourceNotFound(document.to_string()))
        }
    }

    #[test]
    fn provider_failure_aborts_build() {
        let err = SearchEngine::build(&MissingDocument, &MemoryCorpus::new()).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(name) if name == "gone.txt"));
    }
}
