use crate::models::stock::StockRecord;
use crate::errors::{Result, ScreenerError};
use crate::sources::base::{parse_stock_document, StockSource};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use std::time::Duration;

/// 通过 HTTP 获取股票数据文档
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl StockSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<Vec<StockRecord>> {
        info!("Fetching stock data from {}", self.url);

        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(ScreenerError::DataError(format!(
                "Failed to fetch stock data: HTTP status {}",
                resp.status()
            )));
        }

        let text = resp.text().await?;
        parse_stock_document(&text)
    }
}
