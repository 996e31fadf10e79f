//! Providers that hand the builder its inputs: which documents to index,
//! each document's raw tokens, and the noise words.
//!
//! Tokens are whitespace-delimited; no other splitting happens here.

use crate::error::{Error, Result};
use crate::DocumentId;
use std::fs;
use std::path::{Path, PathBuf};

pub trait DocumentSource {
    /// Documents to index, in indexing order.
    fn document_ids(&self) -> Result<Vec<DocumentId>>;
    /// Raw tokens of one document, in document order.
    fn tokens(&self, document: &str) -> Result<Vec<String>>;
}

pub trait NoiseWordSource {
    fn noise_words(&self) -> Result<Vec<String>>;
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// A text file naming the documents to index, separated by whitespace.
/// Relative document names resolve against the list file's directory.
#[derive(Debug, Clone)]
pub struct DocumentListFile {
    path: PathBuf,
}

impl DocumentListFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn resolve(&self, document: &str) -> PathBuf {
        let doc = Path::new(document);
        match self.path.parent() {
            Some(dir) if doc.is_relative() => dir.join(doc),
            _ => doc.to_path_buf(),
        }
    }
}

impl DocumentSource for DocumentListFile {
    fn document_ids(&self) -> Result<Vec<DocumentId>> { read_words(&self.path) }

    fn tokens(&self, document: &str) -> Result<Vec<String>> { read_words(&self.resolve(document)) }
}

/// An explicit list of document files; each path doubles as the document id.
#[derive(Debug, Clone, Default)]
pub struct DocumentFiles {
    paths: Vec<PathBuf>,
}

impl DocumentFiles {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize { self.paths.len() }

    pub fn is_empty(&self) -> bool { self.paths.is_empty() }
}

impl DocumentSource for DocumentFiles {
    fn document_ids(&self) -> Result<Vec<DocumentId>> {
        Ok(self.paths.iter().map(|p| p.display().to_string()).collect())
    }

    fn tokens(&self, document: &str) -> Result<Vec<String>> { read_words(Path::new(document)) }
}

/// A text file of whitespace-separated noise words, taken as written.
#[derive(Debug, Clone)]
pub struct NoiseWordFile {
    path: PathBuf,
}

impl NoiseWordFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl NoiseWordSource for NoiseWordFile {
    fn noise_words(&self) -> Result<Vec<String>> { read_words(&self.path) }
}

/// Documents and noise words held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    documents: Vec<(DocumentId, String)>,
    noise_words: Vec<String>,
}

impl MemoryCorpus {
    pub fn new() -> Self { Self::default() }

    pub fn with_document(mut self, id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        self.documents.push((id.into(), text.into()));
        self
    }

    pub fn with_noise_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_words.extend(words.into_iter().map(Into::into));
        self
    }
}

impl DocumentSource for MemoryCorpus {
    fn document_ids(&self) -> Result<Vec<DocumentId>> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        self.documents
            .iter()
            .find(|(id, _)| id == document)
            .map(|(_, text)| text.split_whitespace().map(str::to_string).collect())
            .ok_or_else(|| Error::SourceNotFound(document.to_string()))
    }
}

impl NoiseWordSource for MemoryCorpus {
    fn noise_words(&self) -> Result<Vec<String>> { Ok(self.noise_words.clone()) }
}
