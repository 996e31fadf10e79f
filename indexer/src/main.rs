use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lse_core::{DocumentFiles, DocumentListFile, MemoryCorpus, NoiseWordFile, SearchEngine};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lse")]
#[command(about = "Index a set of documents and run two-keyword searches", long_about = None)]
struct Cli {
    /// File listing the documents to index, one name per line
    #[arg(long, conflicts_with = "docs_dir")]
    docs: Option<PathBuf>,
    /// Directory to index instead: every *.txt file below it
    #[arg(long)]
    docs_dir: Option<PathBuf>,
    /// File of noise words, one per line
    #[arg(long)]
    noise: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top five documents containing either keyword
    Search {
        kw1: String,
        #[arg(default_value = "")]
        kw2: String,
    },
    /// Document and keyword counts
    Stats,
    /// Posting list of one keyword
    Postings { keyword: String },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    match cli.command {
        Commands::Search { kw1, kw2 } => {
            let results = engine.search_words(&kw1, &kw2);
            if results.is_empty() {
                println!("no matches");
            }
            for (rank, doc) in results.iter().enumerate() {
                println!("{}. {doc}", rank + 1);
            }
        }
        Commands::Stats => print_stats(&engine),
        Commands::Postings { keyword } => {
            let keyword = keyword.to_lowercase();
            if !engine.index().contains(&keyword) {
                bail!("keyword not indexed: {keyword}");
            }
            for occ in engine.index().postings(&keyword) {
                println!("{} {}", occ.document, occ.frequency);
            }
        }
    }
    Ok(())
}

fn build_engine(cli: &Cli) -> Result<SearchEngine> {
    let engine = match (&cli.docs, &cli.docs_dir, &cli.noise) {
        (Some(list), _, Some(noise)) => SearchEngine::build(&DocumentListFile::new(list), &NoiseWordFile::new(noise)),
        (Some(list), _, None) => SearchEngine::build(&DocumentListFile::new(list), &MemoryCorpus::new()),
        (None, Some(dir), noise) => {
            let files = collect_documents(dir)?;
            tracing::info!(dir = %dir.display(), files = files.len(), "collected documents");
            match noise {
                Some(noise) => SearchEngine::build(&files, &NoiseWordFile::new(noise)),
                None => SearchEngine::build(&files, &MemoryCorpus::new()),
            }
        }
        (None, None, _) => bail!("one of --docs or --docs-dir is required"),
    };
    engine.context("index build failed")
}

/// Every `*.txt` file under `dir`, in sorted path order.
fn collect_documents(dir: &Path) -> Result<DocumentFiles> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(p.to_path_buf());
        }
    }
    Ok(DocumentFiles::new(files))
}

fn print_stats(engine: &SearchEngine) {
    println!("documents: {}", engine.num_docs());
    println!("keywords: {}", engine.index().len());
    println!("noise words: {}", engine.noise_words().len());

    let mut lists: Vec<(&str, usize)> = engine.index().iter().map(|(k, p)| (k, p.len())).collect();
    lists.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (keyword, len) in lists.into_iter().take(10) {
        println!("  {keyword}: {len}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_txt_files_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("sub/c.txt"), "gamma beta").unwrap();
        fs::write(dir.path().join("skip.md"), "beta").unwrap();

        let files = collect_documents(dir.path()).unwrap();
        assert_eq!(files.len(), 3);

        let engine = SearchEngine::build(&files, &MemoryCorpus::new()).unwrap();
        assert_eq!(engine.num_docs(), 3);
        assert_eq!(engine.index().postings("beta").len(), 2);
        assert!(!engine.index().contains("skip"));
    }

    #[test]
    fn requires_a_document_source() {
        let cli = Cli::parse_from(["lse", "stats"]);
        assert!(build_engine(&cli).is_err());
    }

    #[test]
    fn docs_and_docs_dir_conflict() {
        assert!(Cli::try_parse_from(["lse", "--docs", "a", "--docs-dir", "b", "stats"]).is_err());
    }
}
