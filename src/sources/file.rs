use crate::models::stock::StockRecord;
use crate::errors::Result;
use crate::sources::base::{parse_stock_document, StockSource};
use async_trait::async_trait;
use log::info;
use std::path::PathBuf;

/// 从本地 JSON 文件读取股票数据
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

#[async_trait]
impl StockSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<StockRecord>> {
        info!("Reading stock data from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        parse_stock_document(&text)
    }
}
