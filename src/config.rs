use crate::errors::Result;
use crate::screener::ScreenerConfig;
use crate::sources::{FileSource, HttpSource, StockSource};
use std::sync::Arc;

pub struct Config {
    pub data_path: String,
    pub data_url: Option<String>,
    pub result_limit: Option<usize>,
    pub min_score: u8,
    pub use_mock_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            data_path: "data/stocks.json".to_string(),
            data_url: None,
            result_limit: None,
            min_score: 0,
            use_mock_fallback: true,
        }
    }

    pub fn with_data_path(mut self, path: &str) -> Self {
        self.data_path = path.to_string();
        self
    }

    pub fn with_data_url(mut self, url: &str) -> Self {
        self.data_url = Some(url.to_string());
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = Some(limit);
        self
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.use_mock_fallback = enabled;
        self
    }

    /// 排名参数
    pub fn screener_config(&self) -> ScreenerConfig {
        ScreenerConfig {
            limit: self.result_limit,
            min_score: self.min_score,
        }
    }

    /// 按优先级构建数据源：先 URL，再本地文件
    pub fn sources(&self) -> Result<Vec<Arc<dyn StockSource + Send + Sync>>> {
        let mut sources: Vec<Arc<dyn StockSource + Send + Sync>> = Vec::new();
        if let Some(url) = &self.data_url {
            sources.push(Arc::new(HttpSource::new(url)?));
        }
        sources.push(Arc::new(FileSource::new(&self.data_path)));
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.data_path, "data/stocks.json");
        assert!(config.data_url.is_none());
        assert!(config.use_mock_fallback);
        assert_eq!(config.sources().unwrap().len(), 1);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_data_url("http://localhost:8080/data/stocks.json")
            .with_result_limit(5)
            .with_min_score(60);
        let screener_config = config.screener_config();
        assert_eq!(screener_config.limit, Some(5));
        assert_eq!(screener_config.min_score, 60);

        let sources = config.sources().unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name(), "http://localhost:8080/data/stocks.json");
    }
}
