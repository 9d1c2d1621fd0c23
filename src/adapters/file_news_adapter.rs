//! Headline files news adapter.
//!
//! One text file per symbol (`<base>/<SYMBOL>.txt`), one headline per line.
//! A missing file means the provider has nothing for that symbol.

use crate::domain::error::StocklensError;
use crate::ports::news_port::NewsPort;
use std::fs;
use std::path::PathBuf;

pub struct FileNewsAdapter {
    base_path: PathBuf,
}

impl FileNewsAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn news_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.txt", symbol))
    }
}

impl NewsPort for FileNewsAdapter {
    fn fetch_headlines(&self, symbol: &str) -> Result<Vec<String>, StocklensError> {
        let path = self.news_path(symbol);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| StocklensError::Provider {
            provider: "news".into(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let adapter = FileNewsAdapter::new(PathBuf::from("/nonexistent"));
        assert!(adapter.fetch_headlines("ONON").unwrap().is_empty());
    }

    #[test]
    fn path_scheme() {
        let adapter = FileNewsAdapter::new(PathBuf::from("/news"));
        assert_eq!(adapter.news_path("ONON"), PathBuf::from("/news/ONON.txt"));
    }
}
