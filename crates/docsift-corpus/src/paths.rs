//! Path resolution for corpus and config files

use std::path::PathBuf;

/// Overrides the data directory when set
pub const HOME_ENV: &str = "DOCSIFT_HOME";

/// Resolves standard docsift paths
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// `$DOCSIFT_HOME`, else `<data dir>/docsift`
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                home: PathBuf::from(home),
            });
        }

        let data = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found")
        })?;

        Ok(Self {
            home: data.join("docsift"),
        })
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Default corpus location (JSON array)
    pub fn corpus_file(&self) -> PathBuf {
        self.home.join("corpus.json")
    }

    /// Engine config location
    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.json")
    }
}
