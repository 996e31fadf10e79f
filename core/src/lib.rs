pub mod engine;
pub mod error;
pub mod index;
pub mod keyword;
pub mod merge;
pub mod scan;
pub mod search;
pub mod source;

pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use index::{KeywordIndex, Occurrence};
pub use keyword::{normalize, NoiseWords};
pub use source::{DocumentFiles, DocumentListFile, DocumentSource, MemoryCorpus, NoiseWordFile, NoiseWordSource};

/// Document identifier as handed out by a [`DocumentSource`], usually a file name.
pub type DocumentId = String;
