pub mod chat;
pub mod list;
pub mod render;
pub mod search;
pub mod show;
pub mod tokenize;
pub mod version;

use anyhow::Context as _;
use docsift_core::{Corpus, EngineConfig, SearchEngine};
use docsift_corpus::{load_corpus, resolve_source, Paths};
use std::path::{Path, PathBuf};

/// Where the current invocation gets its corpus and config from
pub struct Context {
    corpus_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(corpus_path: Option<&Path>, config_path: Option<&Path>) -> Self {
        Self {
            corpus_path: corpus_path.map(Path::to_path_buf),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Explicit `--config`, else the default config file when present
    pub fn config(&self) -> anyhow::Result<EngineConfig> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => {
                let Ok(paths) = Paths::new() else {
                    return Ok(EngineConfig::default());
                };
                let default = paths.config_file();
                if !default.exists() {
                    return Ok(EngineConfig::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = EngineConfig::from_json(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn corpus(&self) -> anyhow::Result<Corpus> {
        let paths = match (Paths::new(), &self.corpus_path) {
            (Ok(paths), _) => paths,
            // An explicit corpus never consults the data directory
            (Err(_), Some(_)) => Paths::with_home("."),
            (Err(err), None) => return Err(err).context("resolving data directory"),
        };
        let source = resolve_source(self.corpus_path.as_deref(), &paths);
        let corpus = load_corpus(source.as_ref())?;
        Ok(corpus)
    }

    pub fn engine(&self) -> anyhow::Result<SearchEngine> {
        Ok(SearchEngine::new(&self.config()?))
    }
}
