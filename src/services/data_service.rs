use crate::models::stock::StockRecord;
use crate::sources::base::StockSource;
use crate::sources::mock::bundled_stocks;
use crate::config::Config;
use crate::data_provider::StockDataProvider;
use log::{info, warn};
use std::sync::Arc;

/// 数据服务，按顺序尝试各数据源，全部失败时回退到内置数据
pub struct DataService {
    config: Config,
    sources: Vec<Arc<dyn StockSource + Send + Sync>>,
}

impl DataService {
    /// 创建新的数据服务实例
    pub fn new(config: Config, sources: Vec<Arc<dyn StockSource + Send + Sync>>) -> Self {
        Self { config, sources }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 加载股票数据，不会失败
    pub async fn load_records(&self) -> Vec<StockRecord> {
        for source in &self.sources {
            match source.load().await {
                Ok(stocks) if !stocks.is_empty() => {
                    info!("Loaded {} stocks from {}", stocks.len(), source.name());
                    return stocks;
                }
                Ok(_) => {
                    warn!("No stocks found in {}", source.name());
                }
                Err(e) => {
                    warn!("Failed to load stocks from {}: {}", source.name(), e);
                }
            }
        }

        if self.config.use_mock_fallback {
            info!("Using local mock data");
            bundled_stocks()
        } else {
            warn!("No data source succeeded and mock fallback is disabled");
            Vec::new()
        }
    }

    /// 加载数据提供者
    pub async fn load_provider(&self) -> StockDataProvider {
        StockDataProvider::new_with_data(self.load_records().await)
    }
}
